//! 图层展平服务 - 业务能力层
//!
//! 只负责"把嵌套图层树展平"能力，不关心页面来自哪里

use crate::config::DEFAULT_LAYER_NAME_DELIMITER;
use crate::models::page::{FlatLayer, Layer};

/// 图层展平服务
///
/// 职责：
/// - 深度优先前序遍历，父图层紧挨在子图层之前
/// - 拼接层级名称 `父名称 + 分隔符 + 图层名称`
/// - 保留图层原始名称
#[derive(Debug, Clone)]
pub struct LayerFlattener {
    delimiter: String,
}

impl LayerFlattener {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// 展平一组兄弟图层
    ///
    /// # 参数
    /// - `layers`: 兄弟图层（按原顺序）
    /// - `parent_name`: 父级层级名称，顶层传入页面名称
    pub fn flatten(&self, layers: Vec<Layer>, parent_name: &str) -> Vec<FlatLayer> {
        let mut flattened = Vec::with_capacity(layers.len());
        self.flatten_into(layers, parent_name, &mut flattened);
        flattened
    }

    fn flatten_into(&self, layers: Vec<Layer>, parent_name: &str, out: &mut Vec<FlatLayer>) {
        for layer in layers {
            let Layer {
                name,
                class,
                attributed_string,
                layers: children,
            } = layer;

            let recursive_name = format!("{}{}{}", parent_name, self.delimiter, name);

            out.push(FlatLayer {
                raw_name: name,
                name: recursive_name.clone(),
                class,
                attributed_string,
            });

            if !children.is_empty() {
                self.flatten_into(children, &recursive_name, out);
            }
        }
    }
}

impl Default for LayerFlattener {
    fn default() -> Self {
        Self::new(DEFAULT_LAYER_NAME_DELIMITER)
    }
}
