//! 文本投影服务 - 业务能力层
//!
//! 只负责"从展平图层中取出文本"能力

use crate::error::DecodeError;
use crate::models::extracted::TextEntry;
use crate::models::page::FlatLayer;
use crate::utils::logging::truncate_text;
use tracing::debug;

/// 调试日志中文本的最大显示长度
const MAX_LOG_TEXT_LEN: usize = 80;

/// 文本投影服务
///
/// 只保留文本图层；文本图层缺少 `attributedString.string` 时整页失败
#[derive(Debug, Clone, Copy, Default)]
pub struct TextProjector;

impl TextProjector {
    pub fn new() -> Self {
        Self
    }

    /// 过滤并投影文本图层，保持原有顺序
    pub fn project(&self, layers: Vec<FlatLayer>) -> Result<Vec<TextEntry>, DecodeError> {
        layers
            .into_iter()
            .filter(FlatLayer::is_text)
            .map(|layer| self.project_one(layer))
            .collect()
    }

    fn project_one(&self, layer: FlatLayer) -> Result<TextEntry, DecodeError> {
        let value = layer
            .attributed_string
            .and_then(|s| s.string)
            .ok_or_else(|| DecodeError::MissingText {
                layer: layer.name.clone(),
            })?;

        debug!("TEXT: {}", truncate_text(&value, MAX_LOG_TEXT_LEN));

        Ok(TextEntry {
            layer_name: layer.raw_name,
            name: layer.name,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttributedString;

    fn flat(raw: &str, class: &str, text: Option<&str>) -> FlatLayer {
        FlatLayer {
            raw_name: raw.to_string(),
            name: format!("Home::{raw}"),
            class: class.to_string(),
            attributed_string: text.map(|t| AttributedString {
                string: Some(t.to_string()),
            }),
        }
    }

    #[test]
    fn test_keeps_only_text_layers_in_order() {
        let layers = vec![
            flat("Title", "text", Some("Hello")),
            flat("Group", "group", None),
            flat("Body", "text", Some("World")),
            flat("Shape", "rectangle", None),
        ];

        let entries = TextProjector::new().project(layers).unwrap();
        assert_eq!(
            entries,
            vec![
                TextEntry {
                    layer_name: "Title".to_string(),
                    name: "Home::Title".to_string(),
                    value: "Hello".to_string(),
                },
                TextEntry {
                    layer_name: "Body".to_string(),
                    name: "Home::Body".to_string(),
                    value: "World".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_no_text_layers_is_empty() {
        let layers = vec![flat("Group", "group", None), flat("Oval", "oval", None)];
        assert!(TextProjector::new().project(layers).unwrap().is_empty());
    }

    #[test]
    fn test_text_layer_without_attributed_string_fails() {
        let err = TextProjector::new()
            .project(vec![flat("Broken", "text", None)])
            .unwrap_err();
        assert!(matches!(err, DecodeError::MissingText { ref layer } if layer == "Home::Broken"));
    }

    #[test]
    fn test_text_layer_without_string_field_fails() {
        let mut layer = flat("Broken", "text", None);
        layer.attributed_string = Some(AttributedString { string: None });
        assert!(TextProjector::new().project(vec![layer]).is_err());
    }

    #[test]
    fn test_non_text_layer_without_payload_is_ignored() {
        let layers = vec![flat("Image", "bitmap", None)];
        assert!(TextProjector::new().project(layers).is_ok());
    }

    #[test]
    fn test_empty_string_is_kept() {
        let entries = TextProjector::new()
            .project(vec![flat("Blank", "text", Some(""))])
            .unwrap();
        assert_eq!(entries[0].value, "");
    }
}
