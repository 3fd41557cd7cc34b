//! 压缩包读取器 - 基础设施层
//!
//! 持有打开的压缩包句柄，只暴露"列出条目"和"读取条目"两种能力

use crate::error::{AppError, AppResult, ArchiveError};
use regex::Regex;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;
use zip::ZipArchive;

/// 单次从数据流读取的块大小
const CHUNK_SIZE: usize = 8 * 1024;

/// 预分配缓冲区的上限，声明大小超过时按实际读取增长
const MAX_PREALLOC: usize = 64 * 1024 * 1024;

/// 页面条目：`pages/` 开头（区分大小写）
static PAGE_ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^pages/").expect("valid page entry pattern")
});

/// 判断条目是否属于页面
pub fn is_page_entry(name: &str) -> bool {
    PAGE_ENTRY_PATTERN.is_match(name)
}

/// 压缩包条目信息（不含内容）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    /// 解压后的字节数
    pub size: u64,
    pub is_dir: bool,
}

impl EntryInfo {
    pub fn is_page(&self) -> bool {
        is_page_entry(&self.name)
    }

    /// 调试日志中的描述
    pub fn describe(&self) -> String {
        if self.is_dir {
            "directory".to_string()
        } else {
            format!("{} bytes", self.size)
        }
    }
}

/// 压缩包读取器
///
/// 职责：
/// - 持有唯一的压缩包句柄，drop 时关闭
/// - 不认识页面 / 图层
pub struct ArchiveReader {
    path: PathBuf,
    archive: ZipArchive<BufReader<File>>,
}

impl ArchiveReader {
    /// 打开压缩包
    pub fn open(path: &Path) -> AppResult<Self> {
        let file = File::open(path).map_err(|e| AppError::archive_open_failed(path, e))?;
        let archive =
            ZipArchive::new(BufReader::new(file)).map_err(|e| AppError::archive_invalid(path, e))?;

        debug!("打开压缩包: {} ({} 个条目)", path.display(), archive.len());

        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 按压缩包内顺序列出所有条目（包括目录）
    pub fn entries(&mut self) -> AppResult<Vec<EntryInfo>> {
        let mut entries = Vec::with_capacity(self.archive.len());
        for i in 0..self.archive.len() {
            let file = self
                .archive
                .by_index(i)
                .map_err(|e| AppError::archive_invalid(&self.path, e))?;
            entries.push(EntryInfo {
                name: file.name().to_string(),
                size: file.size(),
                is_dir: file.is_dir(),
            });
        }
        Ok(entries)
    }

    /// 读取条目的完整解压内容
    ///
    /// 按块读取数据流，依次追加到按声明大小预分配的缓冲区，读到流结束才返回
    pub fn read_entry(&mut self, name: &str) -> AppResult<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(name)
            .map_err(|source| ArchiveError::EntryOpenFailed {
                path: self.path.clone(),
                entry: name.to_string(),
                source,
            })?;

        if file.is_dir() {
            return Err(ArchiveError::IsDirectory {
                path: self.path.clone(),
                entry: name.to_string(),
            }
            .into());
        }

        let mut buf = Vec::with_capacity(initial_capacity(file.size()));
        let mut chunk = [0u8; CHUNK_SIZE];

        loop {
            match file.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(ArchiveError::EntryReadFailed {
                        path: self.path.clone(),
                        entry: name.to_string(),
                        source,
                    }
                    .into())
                }
            }
        }

        Ok(buf)
    }
}

/// 按条目声明的解压大小预分配，但不超过 MAX_PREALLOC
fn initial_capacity(declared: u64) -> usize {
    usize::try_from(declared).map_or(MAX_PREALLOC, |size| size.min(MAX_PREALLOC))
}

impl Drop for ArchiveReader {
    fn drop(&mut self) {
        debug!("关闭压缩包: {}", self.path.display());
    }
}
