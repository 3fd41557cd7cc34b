//! 批量文件处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量 sketch 文件的处理和结果输出。
//!
//! ## 核心功能
//!
//! 1. **参数检查**：没有输入文件时在任何 I/O 之前报错
//! 2. **并发读取**：每个压缩包在独立的阻塞任务中处理
//! 3. **顺序汇总**：结果按输入顺序、再按条目顺序汇总，与完成先后无关
//! 4. **快速失败**：任一页面出错则整个运行失败，丢弃已完成的部分结果
//! 5. **结果输出**：委托 `OutputWriter` 每页写一个 JSON 文件
//!
//! ## 设计特点
//!
//! - **无共享可变状态**：每个任务只返回自己的结果
//! - **向下委托**：委托 archive_processor 处理单个压缩包

use crate::config::Config;
use crate::error::AppResult;
use crate::models::extracted::PageResult;
use crate::orchestrator::archive_processor;
use crate::services::OutputWriter;
use crate::utils::logging;
use crate::workflow::PageFlow;
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{info, warn};

/// 提取所有输入文件中的页面文本
///
/// # 参数
/// - `config`: 配置（输入文件、分隔符）
///
/// # 返回
/// 按输入文件顺序、再按条目顺序排列的页面结果
pub async fn extract_pages(config: &Config) -> AppResult<Vec<PageResult>> {
    config.validate()?;

    let flow = Arc::new(PageFlow::new(config));

    let handles = config
        .sketch_files
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, archive_path)| {
            let flow = Arc::clone(&flow);
            tokio::task::spawn_blocking(move || {
                archive_processor::process_archive(&flow, &archive_path, idx + 1)
            })
        });

    // try_join_all 按输入顺序返回，遇到第一个错误立即失败
    let per_archive = try_join_all(handles.map(|handle| async move { handle.await? })).await?;

    Ok(per_archive.into_iter().flatten().collect())
}

/// 应用主结构
pub struct App {
    config: Config,
    writer: OutputWriter,
}

impl App {
    pub fn new(config: Config) -> Self {
        let writer = OutputWriter::new(config.output_path.clone());
        Self { config, writer }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<()> {
        self.config.validate()?;

        logging::log_startup(&self.config.sketch_files, &self.config.layer_name_delimiter);

        self.writer.prepare().await?;

        let pages = extract_pages(&self.config).await?;

        if pages.is_empty() {
            warn!("⚠️ 没有找到任何页面");
        }

        let stats = self.write_all(&pages).await?;

        logging::print_final_stats(&stats, self.writer.output_path());

        Ok(())
    }

    /// 写出所有页面
    async fn write_all(&self, pages: &[PageResult]) -> AppResult<logging::ExtractStats> {
        let mut stats = logging::ExtractStats {
            archives: self.config.sketch_files.len(),
            ..Default::default()
        };

        for page in pages {
            self.writer.write_page(page).await?;
            stats.pages += 1;
            stats.texts += page.data.len();
        }

        info!("COMPLETE!");
        Ok(stats)
    }
}
