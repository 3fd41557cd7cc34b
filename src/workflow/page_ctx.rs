//! 页面处理上下文
//!
//! 封装"我正在处理哪个压缩包的哪个条目"这一信息

use std::fmt::Display;

/// 页面处理上下文
#[derive(Debug, Clone)]
pub struct PageCtx {
    /// 压缩包索引（从1开始，仅用于日志显示）
    pub archive_index: usize,

    /// 条目名称，例如 `pages/xxx.json`
    pub entry_name: String,
}

impl PageCtx {
    pub fn new(archive_index: usize, entry_name: impl Into<String>) -> Self {
        Self {
            archive_index,
            entry_name: entry_name.into(),
        }
    }
}

impl Display for PageCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文件 #{} 条目 {}]", self.archive_index, self.entry_name)
    }
}
