use serde::{Deserialize, Serialize};

/// 提取出的单条文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntry {
    /// 图层原始名称
    #[serde(rename = "layerName")]
    pub layer_name: String,
    /// 层级名称
    pub name: String,
    /// 文本内容
    pub value: String,
}

/// 单个页面的提取结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub name: String,
    pub data: Vec<TextEntry>,
}

impl PageResult {
    /// 输出文件名：页面名中的 `/` 和 `\` 替换为 `-`
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name.replace(['/', '\\'], "-"))
    }
}
