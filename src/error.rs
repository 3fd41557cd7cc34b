use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 压缩包读取错误
    #[error("压缩包错误: {0}")]
    Archive(#[from] ArchiveError),
    /// 页面解析错误
    #[error("解析错误: {0}")]
    Decode(#[from] DecodeError),
    /// 输出文件错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 后台任务异常退出（panic 或被取消）
    #[error("任务执行失败: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 没有指定任何输入文件
    #[error("至少需要指定一个 sketch 文件")]
    NoInputFiles,
    /// 读取配置文件失败
    #[error("无法读取配置文件 {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 配置文件格式错误
    #[error("配置文件解析失败 {}: {source}", path.display())]
    ParseFailed {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// 压缩包读取错误
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// 无法打开压缩包文件
    #[error("无法打开压缩包 {}: {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 压缩包格式无效或已损坏
    #[error("无效的压缩包 {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: zip::result::ZipError,
    },
    /// 条目不存在或无法打开
    #[error("无法打开条目 {entry} ({}): {source}", path.display())]
    EntryOpenFailed {
        path: PathBuf,
        entry: String,
        source: zip::result::ZipError,
    },
    /// 条目数据流读取失败
    #[error("读取条目 {entry} 失败 ({}): {source}", path.display())]
    EntryReadFailed {
        path: PathBuf,
        entry: String,
        source: std::io::Error,
    },
    /// 目录条目没有内容可读
    #[error("条目 {entry} 是目录 ({})", path.display())]
    IsDirectory { path: PathBuf, entry: String },
}

/// 页面解析错误
#[derive(Debug, Error)]
pub enum DecodeError {
    /// 条目内容不是合法的页面 JSON
    #[error("页面 JSON 解析失败 ({entry}): {source}")]
    InvalidJson {
        entry: String,
        source: serde_json::Error,
    },
    /// 文本图层缺少 attributedString.string
    #[error("文本图层 {layer} 缺少 attributedString.string")]
    MissingText { layer: String },
}

/// 输出文件错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 输出路径存在但不是目录
    #[error("输出路径不是目录: {}", path.display())]
    NotADirectory { path: PathBuf },
    /// 创建目录失败
    #[error("创建目录失败 {}: {source}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 序列化失败
    #[error("JSON 序列化失败 ({name}): {source}")]
    SerializeFailed {
        name: String,
        source: serde_json::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建压缩包打开失败错误
    pub fn archive_open_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Archive(ArchiveError::OpenFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建压缩包格式错误
    pub fn archive_invalid(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        AppError::Archive(ArchiveError::Invalid {
            path: path.into(),
            source,
        })
    }

    /// 创建 JSON 解析错误
    pub fn invalid_json(entry: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::Decode(DecodeError::InvalidJson {
            entry: entry.into(),
            source,
        })
    }

    /// 是否为配置错误
    pub fn is_config(&self) -> bool {
        matches!(self, AppError::Config(_))
    }

    /// 是否为压缩包读取错误
    pub fn is_archive(&self) -> bool {
        matches!(self, AppError::Archive(_))
    }

    /// 是否为解析错误
    pub fn is_decode(&self) -> bool {
        matches!(self, AppError::Decode(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
