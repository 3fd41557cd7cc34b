#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

/// 压缩包中的一个条目
pub enum Entry<'a> {
    File(&'a str, &'a str),
    Dir(&'a str),
}

/// 在目录下创建测试用 sketch 文件
pub fn write_sketch(dir: &Path, file_name: &str, entries: &[Entry]) -> PathBuf {
    let path = dir.join(file_name);
    let mut zip = ZipWriter::new(File::create(&path).expect("create sketch file"));
    let options = SimpleFileOptions::default();

    for entry in entries {
        match entry {
            Entry::File(name, content) => {
                zip.start_file(*name, options).expect("start file");
                zip.write_all(content.as_bytes()).expect("write entry");
            }
            Entry::Dir(name) => {
                zip.add_directory(*name, options).expect("add directory");
            }
        }
    }

    zip.finish().expect("finish zip");
    path
}

/// 一个只含单个文本图层的页面
pub fn single_text_page(page: &str, layer: &str, text: &str) -> String {
    serde_json::json!({
        "name": page,
        "layers": [
            {"name": layer, "_class": "text", "attributedString": {"string": text}}
        ]
    })
    .to_string()
}

pub const HOME_PAGE: &str = r#"{"name":"Home","layers":[{"name":"Title","_class":"text","attributedString":{"string":"Hello"}},{"name":"Group","_class":"group","layers":[{"name":"Body","_class":"text","attributedString":{"string":"World"}}]}]}"#;

/// 创建只含一个不压缩（Stored）条目的 sketch 文件
pub fn write_stored_sketch(dir: &Path, file_name: &str, entry: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    let mut zip = ZipWriter::new(File::create(&path).expect("create sketch file"));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    zip.start_file(entry, options).expect("start file");
    zip.write_all(content.as_bytes()).expect("write entry");
    zip.finish().expect("finish zip");
    path
}

/// 翻转文件中第一次出现 marker 处的一个字节，使条目校验和失效
pub fn flip_payload_byte(path: &Path, marker: &str) {
    let mut bytes = std::fs::read(path).expect("read sketch file");
    let pos = bytes
        .windows(marker.len())
        .position(|w| w == marker.as_bytes())
        .expect("marker present in stored payload");
    bytes[pos] ^= 0x20;
    std::fs::write(path, bytes).expect("write sketch file");
}
