//! 单个压缩包处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责处理单个 sketch 文件中的所有页面，是压缩包级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **打开压缩包**：持有 `ArchiveReader`，处理完毕（无论成功失败）随 drop 关闭
//! 2. **筛选页面**：按枚举顺序遍历 `pages/` 条目，跳过目录
//! 3. **流程调度**：逐页读取字节并交给 `PageFlow`
//! 4. **快速失败**：任何一页出错立即返回，不保留本压缩包的部分结果

use crate::error::AppResult;
use crate::infrastructure::ArchiveReader;
use crate::models::extracted::PageResult;
use crate::workflow::{PageCtx, PageFlow};
use std::path::Path;
use tracing::{debug, info};

/// 处理单个压缩包
///
/// # 参数
/// - `flow`: 页面处理流程
/// - `archive_path`: 压缩包路径
/// - `archive_index`: 压缩包索引（用于日志）
///
/// # 返回
/// 按条目枚举顺序返回该压缩包的所有页面结果
pub fn process_archive(
    flow: &PageFlow,
    archive_path: &Path,
    archive_index: usize,
) -> AppResult<Vec<PageResult>> {
    log_archive_start(archive_index, archive_path);

    let mut reader = ArchiveReader::open(archive_path)?;
    let entries = reader.entries()?;
    debug!("{} 共 {} 个条目", reader.path().display(), entries.len());

    let mut pages = Vec::new();
    for entry in entries.iter().filter(|e| e.is_page()) {
        debug!("Entry {}: {}", entry.name, entry.describe());

        if entry.is_dir {
            continue;
        }

        let ctx = PageCtx::new(archive_index, entry.name.as_str());
        let bytes = reader.read_entry(&entry.name)?;
        let page = flow.run(&bytes, &ctx)?;

        info!(
            "[文件 {}] ✓ 页面 {}: {} 条文本",
            archive_index,
            page.name,
            page.data.len()
        );
        pages.push(page);
    }

    log_archive_complete(archive_index, pages.len());
    Ok(pages)
}

// ========== 日志辅助函数 ==========

fn log_archive_start(archive_index: usize, archive_path: &Path) {
    info!("[文件 {}] 开始处理: {}", archive_index, archive_path.display());
}

fn log_archive_complete(archive_index: usize, page_count: usize) {
    info!("[文件 {}] ✅ 处理完成，共 {} 个页面", archive_index, page_count);
}
