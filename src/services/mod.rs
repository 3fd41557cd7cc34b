pub mod layer_flattener;
pub mod output_writer;
pub mod text_projector;

pub use layer_flattener::LayerFlattener;
pub use output_writer::OutputWriter;
pub use text_projector::TextProjector;
