use anyhow::Result;
use periodic_quiz::config::Config;
use periodic_quiz::orchestrator::App;
use periodic_quiz::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env()?;

    // 初始化并运行应用
    let mut app = App::initialize(config)?;
    app.run().await?;

    Ok(())
}
