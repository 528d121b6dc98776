use anyhow::Result;
use ask_question_export::config::Config;
use ask_question_export::orchestrator::App;
use ask_question_export::{server, utils::logging};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 静态页面服务模式（装饰性端点，与批处理流程互不耦合）
    if config.serve_ui {
        return server::run(&config).await;
    }

    // 初始化并运行批处理流程
    App::initialize(config)?.run().await?;

    Ok(())
}
