use anyhow::Result;
use clap::Parser;
use sketch_extract::utils::logging;
use sketch_extract::{App, Cli};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    // 解析参数
    let config = Cli::parse().into_config()?;

    // 初始化日志
    logging::init(config.verbose);

    // 运行应用
    if let Err(e) = App::new(config).run().await {
        error!("❌ 提取失败: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
