use crate::alphabets::dna;
use crate::error::{OrfError, OrfResult};
use crate::orf::matcher::WINDOW;
use crate::seq::location::{SequenceLocation, Strand};

use tracing::debug;

/// Filler after the real content of both strands. It is outside the
/// complement table, so it never matches a codon and always counts as a gap.
pub const SENTINEL: u8 = u8::MAX;

/// Trailing sentinel bytes. A matcher read or the next-codon lookahead from
/// any position below the sequence length stays inside this region.
pub const PADDING: usize = 2 * WINDOW;

pub(crate) const CODON: usize = 3;

/// Normalized forward sequence and its reverse complement, both followed by
/// `PADDING` sentinel bytes.
#[derive(Clone, Debug, Default)]
pub struct SequenceBuffer {
    forward: Vec<u8>,
    reverse: Vec<u8>,
    len: usize,
}

impl SequenceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the ingested sequence, without padding. Zero until a
    /// sequence has been accepted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes the buffers can hold without reallocating, padding included.
    pub fn capacity(&self) -> usize {
        self.forward.capacity().min(self.reverse.capacity())
    }

    pub fn set_sequence(&mut self, raw: &[u8]) -> bool {
        self.try_set_sequence(raw).is_ok()
    }

    /// Replace the buffered sequence. Storage is reallocated to exactly
    /// `raw.len() + PADDING` only when the current capacity is too small.
    ///
    /// A too-short input leaves the buffers untouched. An input with a byte
    /// lacking an IUPAC complement resets the buffers to the unbuilt state
    /// and reports the first such byte.
    pub fn try_set_sequence(&mut self, raw: &[u8]) -> OrfResult<()> {
        if raw.len() < CODON {
            debug!(len = raw.len(), "rejecting sequence shorter than one codon");
            return Err(OrfError::SequenceTooShort { len: raw.len() });
        }

        let required = raw.len() + PADDING;
        if required > self.forward.capacity() || required > self.reverse.capacity() {
            self.forward = Vec::with_capacity(required);
            self.reverse = Vec::with_capacity(required);
        }

        self.forward.clear();
        self.reverse.clear();
        self.forward.extend(raw.iter().map(|&b| dna::normalize(b)));

        if let Some(pos) = self.forward.iter().position(|&b| !dna::has_complement(b)) {
            let byte = self.forward[pos];
            self.reset();
            debug!(pos, byte, "rejecting sequence with a symbol lacking a complement");
            return Err(OrfError::InvalidSymbol { byte, pos });
        }
        self.reverse
            .extend(self.forward.iter().rev().filter_map(|&b| dna::complement(b)));

        self.forward.resize(required, SENTINEL);
        self.reverse.resize(required, SENTINEL);
        self.len = raw.len();
        Ok(())
    }

    fn reset(&mut self) {
        self.forward.clear();
        self.reverse.clear();
        self.len = 0;
    }

    /// Strand bytes including the trailing sentinel padding. Empty if no
    /// sequence has been accepted.
    pub fn padded(&self, strand: Strand) -> &[u8] {
        match strand {
            Strand::Plus => &self.forward,
            Strand::Minus => &self.reverse,
        }
    }

    /// Strand bytes without padding.
    pub fn sequence(&self, strand: Strand) -> &[u8] {
        let padded = self.padded(strand);
        &padded[..self.len.min(padded.len())]
    }

    /// View of `location` in the buffer of its strand. Empty if no sequence
    /// has been accepted or the span lies outside the sequence.
    pub fn get_sequence(&self, location: &SequenceLocation) -> &[u8] {
        debug_assert!(location.to > location.from);
        self.sequence(location.strand)
            .get(location.from..location.to)
            .unwrap_or(&[])
    }
}
