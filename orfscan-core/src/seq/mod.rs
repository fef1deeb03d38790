pub mod buffer;
pub mod location;

pub use buffer::SequenceBuffer;
pub use location::{SequenceLocation, Strand};
