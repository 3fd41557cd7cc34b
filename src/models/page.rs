use serde::Deserialize;

/// 图层类型：文本
pub const TEXT_CLASS: &str = "text";

/// 页面文档（`pages/*.json` 解码后的内容）
#[derive(Debug, Clone, Deserialize)]
pub struct PageDocument {
    pub name: String,
    pub layers: Vec<Layer>,
}

/// 原始图层节点，可任意嵌套
#[derive(Debug, Clone, Deserialize)]
pub struct Layer {
    pub name: String,
    #[serde(rename = "_class")]
    pub class: String,
    #[serde(rename = "attributedString", default)]
    pub attributed_string: Option<AttributedString>,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// 富文本内容，只保留文字本身
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttributedString {
    #[serde(default)]
    pub string: Option<String>,
}

/// 展平后的图层记录
///
/// 只保留投影需要的四个字段，子图层以独立记录表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatLayer {
    /// 图层自身的原始名称
    pub raw_name: String,
    /// 拼接后的层级名称
    pub name: String,
    pub class: String,
    pub attributed_string: Option<AttributedString>,
}

impl FlatLayer {
    pub fn is_text(&self) -> bool {
        self.class == TEXT_CLASS
    }
}
