//! # Sketch Extract
//!
//! 从 sketch 文件（zip 压缩的 JSON 设计文档）中提取各页面的文本
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（压缩包句柄），只暴露能力
//! - `ArchiveReader` - 列出条目、按块读取条目内容
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `LayerFlattener` - 展平图层树并拼接层级名称
//! - `TextProjector` - 过滤文本图层并投影为输出记录
//! - `OutputWriter` - 每个页面写一个 JSON 文件
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个页面"的完整处理流程
//! - `PageCtx` - 上下文封装（文件索引 + 条目名称）
//! - `PageFlow` - 流程编排（decode → flatten → project）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文件处理器，管理并发和输出
//! - `orchestrator/archive_processor` - 单个压缩包处理器，遍历页面条目
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use cli::Cli;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::ArchiveReader;
pub use models::{PageResult, TextEntry};
pub use orchestrator::{extract_pages, App};
pub use workflow::{PageCtx, PageFlow};
