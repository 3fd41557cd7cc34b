//! 基础设施层：持有稀缺资源（压缩包句柄），只暴露能力

pub mod archive_reader;

pub use archive_reader::{is_page_entry, ArchiveReader, EntryInfo};
