//! 结果写入服务 - 业务能力层
//!
//! 只负责"把页面结果写成 JSON 文件"能力，不关心结果怎么来的

use crate::error::{AppResult, FileError};
use crate::models::extracted::PageResult;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// 结果写入服务
///
/// 每个页面一个文件，内容为该页的文本数组，制表符缩进
pub struct OutputWriter {
    output_path: PathBuf,
}

impl OutputWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// 确保输出目录存在
    ///
    /// 路径已存在但不是目录时报错，不存在时递归创建
    pub async fn prepare(&self) -> AppResult<()> {
        match fs::metadata(&self.output_path).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(FileError::NotADirectory {
                path: self.output_path.clone(),
            }
            .into()),
            Err(_) => {
                info!("📁 创建输出目录: {}", self.output_path.display());
                fs::create_dir_all(&self.output_path)
                    .await
                    .map_err(|source| FileError::CreateDirFailed {
                        path: self.output_path.clone(),
                        source,
                    })?;
                Ok(())
            }
        }
    }

    /// 写入单个页面，返回文件路径
    pub async fn write_page(&self, page: &PageResult) -> AppResult<PathBuf> {
        let file_path = self.output_path.join(page.file_name());
        let content = to_tab_indented_json(&page.data).map_err(|source| FileError::SerializeFailed {
            name: page.name.clone(),
            source,
        })?;

        debug!("写入文件: {} ({} 条文本)", file_path.display(), page.data.len());

        fs::write(&file_path, content)
            .await
            .map_err(|source| FileError::WriteFailed {
                path: file_path.clone(),
                source,
            })?;

        info!("✓ 已写入: {}", file_path.display());
        Ok(file_path)
    }
}

fn to_tab_indented_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextEntry;
    use tempfile::TempDir;

    fn sample_page(name: &str) -> PageResult {
        PageResult {
            name: name.to_string(),
            data: vec![TextEntry {
                layer_name: "Title".to_string(),
                name: format!("{name}::Title"),
                value: "Hello".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_write_page_tab_indented() {
        let dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(dir.path());

        let path = writer.write_page(&sample_page("Home")).await.unwrap();
        assert_eq!(path, dir.path().join("Home.json"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "[\n\t{\n\t\t\"layerName\": \"Title\",\n\t\t\"name\": \"Home::Title\",\n\t\t\"value\": \"Hello\"\n\t}\n]"
        );
    }

    #[tokio::test]
    async fn test_write_page_sanitizes_name() {
        let dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(dir.path());

        let path = writer.write_page(&sample_page("Mobile/Home")).await.unwrap();
        assert_eq!(path, dir.path().join("Mobile-Home.json"));
        assert!(path.exists());
    }

    #[test]
    fn test_prepare_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("output");
        let writer = OutputWriter::new(&target);

        tokio_test::block_on(writer.prepare()).unwrap();
        assert!(target.is_dir());

        // 已存在的目录再次准备不报错
        tokio_test::block_on(writer.prepare()).unwrap();
    }

    #[tokio::test]
    async fn test_prepare_rejects_file_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not_a_dir");
        std::fs::write(&file, b"").unwrap();

        let err = OutputWriter::new(&file).prepare().await.unwrap_err();
        assert!(matches!(
            err,
            crate::AppError::File(FileError::NotADirectory { .. })
        ));
    }
}
