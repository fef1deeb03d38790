pub mod extract;
pub mod fasta;
pub mod header;

pub use extract::{extract_orfs, ExtractSummary};
pub use header::{decode_orf_header, encode_orf_header};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub id: Box<str>,
    pub message: Box<str>,
}
