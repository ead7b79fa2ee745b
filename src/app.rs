use crate::clients::{CatalogClient, Transport, UploadClient};
use crate::config::Config;
use crate::models::Resource;
use crate::workflow::QuizSession;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::{error, info, warn};

/// 应用主结构
///
/// 终端界面只是会话管理器的一个驱动方，所有业务状态都在会话内部
pub struct App {
    config: Config,
    transport: Transport,
    catalog: CatalogClient,
    uploader: UploadClient,
}

impl App {
    /// 初始化应用
    ///
    /// 整个进程只创建一个 Transport，各客户端共享
    pub fn initialize(config: Config) -> Self {
        let transport = Transport::new(&config);

        Self {
            catalog: CatalogClient::new(transport.clone()),
            uploader: UploadClient::new(transport.clone()),
            transport,
            config,
        }
    }

    /// 运行应用主逻辑
    ///
    /// 每个用户动作的错误都在此层捕获并转成提示信息，不中断进程
    pub async fn run(&self) -> Result<()> {
        log_startup(&self.config);

        // 加载资源列表
        let mut resources = match self.catalog.list_resources().await {
            Ok(resources) => {
                log_resources(&resources);
                resources
            }
            Err(e) => {
                error!("❌ 加载资源列表失败: {}", e);
                Vec::new()
            }
        };

        // 可选：上传新的 PDF，成功后刷新资源列表
        if let Some(path) = &self.config.upload_pdf {
            self.upload_and_refresh(path, &mut resources).await;
        }

        // 选择要答题的资源
        let file_name = match self.pick_quiz_file(&resources) {
            Some(name) => name,
            None => {
                warn!("⚠️ 没有可用的资源，程序结束");
                return Ok(());
            }
        };

        // 答题会话
        if let Err(e) = self.run_quiz(&file_name).await {
            error!("❌ 答题会话异常结束: {}", e);
        }

        Ok(())
    }

    /// 上传 PDF 并刷新资源列表
    ///
    /// 刷新失败时保留原列表，不做部分覆盖
    async fn upload_and_refresh(&self, path: &str, resources: &mut Vec<Resource>) {
        match self.uploader.upload_pdf(Path::new(path)).await {
            Ok(outcome) => {
                info!("📄 {} 提取出 {} 道题目", path, outcome.questions_extracted);

                match self.catalog.list_resources().await {
                    Ok(refreshed) => {
                        *resources = refreshed;
                        log_resources(resources);
                    }
                    Err(e) => {
                        warn!("⚠️ 刷新资源列表失败，保留原列表: {}", e);
                    }
                }
            }
            Err(e) => {
                error!("❌ 上传失败: {}", e);
            }
        }
    }

    /// 决定本次答题的资源文件名
    fn pick_quiz_file(&self, resources: &[Resource]) -> Option<String> {
        if let Some(name) = &self.config.quiz_file {
            return Some(name.clone());
        }
        resources.first().map(|r| r.file_name.clone())
    }

    /// 运行一次完整的答题会话
    async fn run_quiz(&self, file_name: &str) -> Result<()> {
        let mut session = QuizSession::new(self.transport.clone(), file_name);
        session.open().await?;

        // 逐题读取作答（直接回车跳过，提交时记为未作答）
        let questions = session.questions().to_vec();
        for (idx, question) in questions.iter().enumerate() {
            if let Some(choice) = prompt_choice(idx + 1, questions.len(), question) {
                session.set_answer(question.id, choice)?;
            }
        }

        // 详细日志（如果启用）
        if self.config.verbose_logging {
            for question in &questions {
                let answered = session.answer_for(question.id).unwrap_or("未作答");
                info!("  题目 {}: {}", question.id, answered);
            }
        }

        let outcome = session.submit().await?.clone();

        // 按题目顺序展示逐题反馈
        println!();
        for (idx, entry) in session.feedback().iter().enumerate() {
            if entry.result.is_correct {
                println!("{}. ✅ 正确!", idx + 1);
            } else {
                println!(
                    "{}. ❌ 错误。正确答案是: {}",
                    idx + 1,
                    entry.result.correct_answer
                );
            }
        }

        print_final_stats(file_name, outcome.score, outcome.total_questions);

        Ok(())
    }
}

/// 展示一道题并读取用户选择
///
/// 输入为 1 开始的选项编号，空行或非法输入视为跳过
fn prompt_choice(
    number: usize,
    total: usize,
    question: &crate::models::Question,
) -> Option<String> {
    println!("\n[{}/{}] {}", number, total, question.question_text);
    for (i, choice) in question.choices.iter().enumerate() {
        println!("  {}. {}", i + 1, choice);
    }
    print!("请选择 (1-{}，回车跳过): ", question.choices.len());
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return None;
    }

    let selected: usize = match line.trim().parse() {
        Ok(n) => n,
        Err(_) => return None,
    };

    if selected == 0 || selected > question.choices.len() {
        warn!("⚠️ 编号 {} 超出范围，此题记为未作答", selected);
        return None;
    }

    Some(question.choices[selected - 1].clone())
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 终端答题模式");
    info!("🌐 服务地址: {}", config.server_base_url);
    info!("{}", "=".repeat(60));
}

fn log_resources(resources: &[Resource]) {
    if resources.is_empty() {
        info!("📋 尚无已上传的资源");
        return;
    }

    info!("📋 已上传资源 (共 {} 个):", resources.len());
    for (i, resource) in resources.iter().enumerate() {
        info!("  {}. {} ({} 题)", i + 1, resource.file_name, resource.question_count);
    }
}

fn print_final_stats(file_name: &str, score: u32, total_questions: u32) {
    info!("\n{}", "=".repeat(60));
    info!("📊 答题完成统计");
    info!("📄 资源: {}", file_name);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 得分: {}/{}", score, total_questions);
    info!("{}", "=".repeat(60));
}
