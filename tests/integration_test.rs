use quizify_client::config::Config;
use quizify_client::workflow::{QuizSession, SessionState};
use quizify_client::{logger, CatalogClient, Transport, UploadClient};
use std::path::Path;

#[tokio::test]
#[ignore] // 默认忽略，需要本地运行后端后手动执行：cargo test -- --ignored
async fn test_list_resources() {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    let transport = Transport::new(&config);
    let catalog = CatalogClient::new(transport);

    let resources = catalog.list_resources().await.expect("加载资源列表失败");

    println!("找到 {} 个资源", resources.len());
    for resource in &resources {
        println!("  {} ({} 题)", resource.file_name, resource.question_count);
    }
}

#[tokio::test]
#[ignore]
async fn test_upload_pdf() {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    let transport = Transport::new(&config);
    let uploader = UploadClient::new(transport);

    // 注意：请根据实际情况修改文件路径
    let pdf_path = Path::new("lecture.pdf");

    let outcome = uploader.upload_pdf(pdf_path).await.expect("上传 PDF 失败");

    println!("提取出 {} 道题目", outcome.questions_extracted);
    assert!(outcome.questions_extracted > 0, "上传后应该提取出题目");
}

#[tokio::test]
#[ignore]
async fn test_full_quiz_session() {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    let transport = Transport::new(&config);
    let catalog = CatalogClient::new(transport.clone());

    // 取列表第一个资源来答题
    let resources = catalog.list_resources().await.expect("加载资源列表失败");
    let resource = resources.first().expect("服务端没有任何资源");

    let mut session = QuizSession::new(transport, resource.file_name.clone());
    let questions = session.open().await.expect("加载题目失败").to_vec();
    assert!(!questions.is_empty(), "题目列表不应为空");

    // 每道题都选第一个选项
    for question in &questions {
        let first_choice = question.choices.first().expect("题目应该有选项").clone();
        session
            .set_answer(question.id, first_choice)
            .expect("记录作答失败");
    }

    let outcome = session.submit().await.expect("提交答案失败").clone();

    println!("得分 {}/{}", outcome.score, outcome.total_questions);
    assert_eq!(*session.state(), SessionState::Completed);

    // 判分结果与题目按下标对齐
    let feedback = session.feedback();
    assert_eq!(feedback.len(), questions.len().min(outcome.results.len()));
}
