pub mod extracted;
pub mod loaders;
pub mod page;

pub use extracted::{PageResult, TextEntry};
pub use loaders::decode_page;
pub use page::{AttributedString, FlatLayer, Layer, PageDocument, TEXT_CLASS};
