use std::io;
use thiserror::Error;

/// Which half of a codon table an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodonKind {
    Start,
    Stop,
}

impl std::fmt::Display for CodonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodonKind::Start => f.write_str("start"),
            CodonKind::Stop => f.write_str("stop"),
        }
    }
}

#[derive(Debug, Error)]
pub enum OrfError {
    #[error("invalid translation table with more than 8 {kind} codons ({count})")]
    TooManyCodons { kind: CodonKind, count: usize },

    #[error("translation table defines no {kind} codons")]
    EmptyCodonSet { kind: CodonKind },

    #[error("invalid codon {codon:?} (expected exactly 3 of A, C, G, T)")]
    InvalidCodon { codon: String },

    #[error("unknown genetic code: {code}")]
    UnknownGeneticCode { code: u32 },

    #[error("sequence too short: {len} (need at least 3 symbols)")]
    SequenceTooShort { len: usize },

    #[error("symbol {byte:#04x} at position {pos} has no IUPAC complement")]
    InvalidSymbol { byte: u8, pos: usize },

    #[error("could not find Orf information in header")]
    MissingOrfHeader,

    #[error("could not parse Orf {token:?}")]
    MalformedOrfHeader { token: String },

    #[error("invalid start mode: {value}")]
    InvalidStartMode { value: String },

    #[error("invalid frames: {value} (expected a comma list of 1, 2, 3)")]
    InvalidFrames { value: String },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("fasta io error: {0}")]
    FastaIo(#[from] io::Error),
}

pub type OrfResult<T> = Result<T, OrfError>;
