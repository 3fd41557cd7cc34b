//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文件处理器
//! - 检查配置、准备输出目录
//! - 并发处理多个压缩包，按输入顺序汇总
//! - 写出结果并输出统计信息
//!
//! ### `archive_processor` - 单个压缩包处理器
//! - 打开压缩包并遍历 `pages/` 条目
//! - 逐页调用 PageFlow
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<sketch 文件>)
//!     ↓
//! archive_processor (处理 Vec<页面条目>)
//!     ↓
//! workflow::PageFlow (处理单个页面)
//!     ↓
//! services (能力层：flatten / project / write)
//!     ↓
//! infrastructure (基础设施：ArchiveReader)
//! ```

pub mod archive_processor;
pub mod batch_processor;

pub use archive_processor::process_archive;
pub use batch_processor::{extract_pages, App};
