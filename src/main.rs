use anyhow::Result;
use quizify_client::config::Config;
use quizify_client::{logger, App};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config).run().await?;

    Ok(())
}
