//! 命令行参数
//!
//! 只负责把参数转换成 Config，不做任何提取工作

use crate::config::Config;
use crate::error::AppResult;
use clap::Parser;
use std::path::PathBuf;

/// 从 sketch 文件中提取各页面的文本
#[derive(Parser, Debug)]
#[command(
    name = "sketch_extract",
    version,
    about = "Extract text layers from .sketch files into one JSON file per page."
)]
pub struct Cli {
    /// 待处理的 sketch 文件
    pub files: Vec<PathBuf>,

    /// 输出目录 [默认: ./output/]
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// 图层名分隔符 [默认: ::]
    #[arg(short = 'd', long = "delimiter")]
    pub delimiter: Option<String>,

    /// 输出详细日志
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// TOML 配置文件
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// 合并配置：默认值 < 环境变量 < 配置文件 < 命令行
    pub fn into_config(self) -> AppResult<Config> {
        let mut config = Config::from_env();

        if let Some(path) = &self.config {
            config = config.merge_toml_file(path)?;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(delimiter) = self.delimiter {
            config.layer_name_delimiter = delimiter;
        }
        if self.verbose {
            config.verbose = true;
        }

        for file in self.files {
            config.add_file(file);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "sketch_extract",
            "a.sketch",
            "b.sketch",
            "-o",
            "out/",
            "-d",
            "_",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.files, vec![PathBuf::from("a.sketch"), PathBuf::from("b.sketch")]);
        assert_eq!(cli.output, Some(PathBuf::from("out/")));
        assert_eq!(cli.delimiter.as_deref(), Some("_"));
        assert!(cli.verbose);

        let config = cli.into_config().unwrap();
        assert_eq!(config.layer_name_delimiter, "_");
        assert_eq!(config.output_path, PathBuf::from("out/"));
        assert!(config.verbose);
        assert_eq!(config.sketch_files.len(), 2);
    }

    #[test]
    fn test_no_files_parses_but_fails_validation() {
        let cli = Cli::try_parse_from(["sketch_extract", "-v"]).unwrap();
        let config = cli.into_config().unwrap();
        assert!(config.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("extract.toml");
        std::fs::write(&config_path, "delimiter = \"_\"\noutput = \"from_file\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "sketch_extract",
            "a.sketch",
            "-c",
            config_path.to_str().unwrap(),
            "-d",
            "/",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.layer_name_delimiter, "/");
        assert_eq!(config.output_path, PathBuf::from("from_file"));
    }
}
