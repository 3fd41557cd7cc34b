/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 设置了 `RUST_LOG` 时以环境变量为准，否则详细模式为 debug，默认 info。
/// 重复调用不会报错（测试中会多次初始化）。
///
/// # 参数
/// - `verbose`: 是否输出调试日志
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 提取统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractStats {
    pub archives: usize,
    pub pages: usize,
    pub texts: usize,
}

/// 记录程序启动信息
///
/// # 参数
/// - `files`: 输入文件
/// - `delimiter`: 层级名称分隔符
pub fn log_startup(files: &[PathBuf], delimiter: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 Sketch Extract {}", env!("CARGO_PKG_VERSION"));
    info!("📊 输入文件: {} 个", files.len());
    for file in files {
        debug!("  - {}", file.display());
    }
    info!("🔗 图层名分隔符: {:?}", delimiter);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 提取统计
/// - `output_path`: 输出目录
pub fn print_final_stats(stats: &ExtractStats, output_path: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📦 文件: {}", stats.archives);
    info!("📄 页面: {}", stats.pages);
    info!("✏️ 文本: {}", stats.texts);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_path.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
