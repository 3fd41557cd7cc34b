//! 页面处理流程 - 流程层
//!
//! 核心职责：定义"一个页面"的完整处理流程
//!
//! 流程顺序：
//! 1. 字节 → JSON 解码
//! 2. 以页面名称为根展平图层
//! 3. 过滤并投影文本图层

use tracing::debug;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::extracted::PageResult;
use crate::models::loaders::decode_page;
use crate::services::{LayerFlattener, TextProjector};
use crate::workflow::page_ctx::PageCtx;

/// 页面处理流程
///
/// - 不持有任何资源（压缩包句柄）
/// - 只依赖业务能力（services）
/// - 每次调用的结果只属于当前页面
#[derive(Debug, Clone)]
pub struct PageFlow {
    flattener: LayerFlattener,
    projector: TextProjector,
}

impl PageFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            flattener: LayerFlattener::new(config.layer_name_delimiter.clone()),
            projector: TextProjector::new(),
        }
    }

    pub fn run(&self, bytes: &[u8], ctx: &PageCtx) -> AppResult<PageResult> {
        let page = decode_page(bytes, &ctx.entry_name)?;
        let page_name = page.name;

        let layers = self.flattener.flatten(page.layers, &page_name);
        debug!("{} 页面 {} 展平后共 {} 个图层", ctx, page_name, layers.len());

        let data = self.projector.project(layers)?;
        debug!("{} 页面 {} 提取到 {} 条文本", ctx, page_name, data.len());

        Ok(PageResult {
            name: page_name,
            data,
        })
    }
}
