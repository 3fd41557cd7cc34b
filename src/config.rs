use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 默认图层名分隔符
pub const DEFAULT_LAYER_NAME_DELIMITER: &str = "::";

/// 默认输出目录
pub const DEFAULT_OUTPUT_PATH: &str = "./output/";

/// 程序配置
///
/// 构造完成后以只读方式传给编排层，运行期间不再修改
#[derive(Clone, Debug)]
pub struct Config {
    /// 待处理的 sketch 文件
    pub sketch_files: Vec<PathBuf>,
    /// 层级名称分隔符
    pub layer_name_delimiter: String,
    /// 是否显示详细日志
    pub verbose: bool,
    /// 输出目录
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sketch_files: Vec::new(),
            layer_name_delimiter: DEFAULT_LAYER_NAME_DELIMITER.to_string(),
            verbose: false,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// 配置文件内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    delimiter: Option<String>,
    verbose: Option<bool>,
    output: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            sketch_files: default.sketch_files,
            layer_name_delimiter: std::env::var("SKETCH_EXTRACT_DELIMITER").unwrap_or(default.layer_name_delimiter),
            verbose: std::env::var("SKETCH_EXTRACT_VERBOSE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose),
            output_path: std::env::var("SKETCH_EXTRACT_OUTPUT").map(PathBuf::from).unwrap_or(default.output_path),
        }
    }

    /// 用 TOML 配置文件覆盖当前配置，文件中没有的键保持不变
    pub fn merge_toml_file(mut self, path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(delimiter) = file.delimiter {
            self.layer_name_delimiter = delimiter;
        }
        if let Some(verbose) = file.verbose {
            self.verbose = verbose;
        }
        if let Some(output) = file.output {
            self.output_path = output;
        }
        Ok(self)
    }

    /// 添加一个待处理的 sketch 文件
    pub fn add_file(&mut self, sketch_file: impl Into<PathBuf>) {
        let sketch_file = sketch_file.into();
        debug!("ADD FILE: {}", sketch_file.display());
        self.sketch_files.push(sketch_file);
    }

    /// 检查是否满足最少参数要求
    pub fn validate(&self) -> AppResult<()> {
        if self.sketch_files.is_empty() {
            return Err(ConfigError::NoInputFiles.into());
        }
        Ok(())
    }
}
