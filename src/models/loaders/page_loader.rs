use crate::error::{AppError, AppResult};
use crate::models::page::PageDocument;
use serde::Deserialize;

/// 将条目字节解码为 PageDocument
///
/// # 参数
/// - `bytes`: 条目的完整内容
/// - `entry_name`: 条目名称（仅用于错误信息）
///
/// 图层树不限制深度：关闭 serde_json 的递归上限，并在栈不足时按需扩栈
pub fn decode_page(bytes: &[u8], entry_name: &str) -> AppResult<PageDocument> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();

    let page = PageDocument::deserialize(serde_stacker::Deserializer::new(&mut de))
        .map_err(|e| AppError::invalid_json(entry_name, e))?;
    de.end().map_err(|e| AppError::invalid_json(entry_name, e))?;

    Ok(page)
}
