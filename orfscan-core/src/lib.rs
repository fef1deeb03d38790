pub mod alphabets;
pub mod error;
pub mod genetic_code;
pub mod io;
pub mod orf;
pub mod seq;

pub use error::{OrfError, OrfResult};
pub use orf::{CodonTable, FrameMask, Orf, ScanParams, StartMode};
pub use seq::{SequenceLocation, Strand};
