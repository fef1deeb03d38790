pub mod codon_table;
pub mod matcher;
pub mod params;
pub mod scanner;

pub use codon_table::CodonTable;
pub use matcher::BatchCodonMatcher;
pub use params::{FrameMask, ScanParams, StartMode};
pub use scanner::FrameScanner;


use crate::error::OrfResult;
use crate::seq::buffer::SequenceBuffer;
use crate::seq::location::{SequenceLocation, Strand};

use std::sync::Arc;

/// ORF finder over one sequence at a time.
///
/// Owns the normalized sequence and its reverse complement. The codon table
/// is shared, so many finders built from one table can run on separate
/// threads.
#[derive(Clone, Debug)]
pub struct Orf {
    table: Arc<CodonTable>,
    buffer: SequenceBuffer,
}

impl Orf {
    /// Finder for NCBI genetic code `code`, see [`CodonTable::new`].
    pub fn new(code: u32, use_all_table_starts: bool) -> OrfResult<Self> {
        Ok(Self::with_table(CodonTable::new(code, use_all_table_starts)?))
    }

    pub fn with_table(table: impl Into<Arc<CodonTable>>) -> Self {
        Self {
            table: table.into(),
            buffer: SequenceBuffer::new(),
        }
    }

    pub fn table(&self) -> &CodonTable {
        &self.table
    }

    /// Load a sequence. Fails for inputs shorter than one codon and for
    /// inputs with a symbol lacking an IUPAC complement; after the latter
    /// the finder holds no sequence until the next successful call.
    pub fn set_sequence(&mut self, seq: &[u8]) -> bool {
        self.buffer.set_sequence(seq)
    }

    pub fn try_set_sequence(&mut self, seq: &[u8]) -> OrfResult<()> {
        self.buffer.try_set_sequence(seq)
    }

    pub fn sequence_len(&self) -> usize {
        self.buffer.len()
    }

    /// Normalized sequence of `strand`.
    pub fn sequence(&self, strand: Strand) -> &[u8] {
        self.buffer.sequence(strand)
    }

    /// Bytes of `location` on its own strand.
    pub fn get_sequence(&self, location: &SequenceLocation) -> &[u8] {
        self.buffer.get_sequence(location)
    }

    pub fn find_all(&self, params: &ScanParams) -> Vec<SequenceLocation> {
        let mut out = Vec::new();
        self.find_all_into(params, &mut out);
        out
    }

    /// Append the forward-strand ORFs, then the reverse-complement ORFs.
    pub fn find_all_into(&self, params: &ScanParams, out: &mut Vec<SequenceLocation>) {
        let scanner = FrameScanner::new(&self.table, params);
        let len = self.buffer.len();

        if !params.forward_frames.is_empty() {
            scanner.scan(
                self.buffer.padded(Strand::Plus),
                len,
                params.forward_frames,
                Strand::Plus,
                out,
            );
        }

        if !params.reverse_frames.is_empty() {
            scanner.scan(
                self.buffer.padded(Strand::Minus),
                len,
                params.reverse_frames,
                Strand::Minus,
                out,
            );
        }
    }
}
