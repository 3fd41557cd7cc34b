pub mod page_loader;

pub use page_loader::decode_page;
