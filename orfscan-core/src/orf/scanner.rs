//! Three-phase ORF state machine.
//!
//! An ORF can begin in any of the three codon phases:
//!
//! ```text
//! Phase 0:  AGA ATT GCC TGA ATA AAA GGA TTA CCT TGA TAG GGT AAA
//! Phase 1: A GAA TTG CCT GAA TAA AAG GAT TAC CTT GAT AGG GTA AA
//! Phase 2: AG AAT TGC CTG AAT AAA AGG ATT ACC TTG ATA GGG TAA A
//! ```
//!
//! The scanner walks the strand once, one byte at a time, and advances the
//! state of the phase the current byte belongs to.

use super::codon_table::CodonTable;
use super::matcher::{BatchCodonMatcher, WINDOW};
use super::params::{FrameMask, ScanParams, StartMode};
use crate::alphabets::dna;
use crate::seq::buffer::{CODON, PADDING, SENTINEL};
use crate::seq::location::{SequenceLocation, Strand};

use tracing::trace;

const FRAMES: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PhaseState {
    inside_orf: bool,
    has_start: bool,
    gaps: usize,
    codons: usize,
    from: usize,
}

impl PhaseState {
    /// Every phase starts inside an ORF without a start codon, so a stop
    /// found before any start still closes an ORF reaching back to the
    /// phase offset.
    fn seed(phase: usize) -> Self {
        Self {
            inside_orf: true,
            has_start: false,
            gaps: 0,
            codons: 0,
            from: phase,
        }
    }

    /// The first codon of a phase may still open an ORF in place of the seed.
    #[inline]
    fn may_open(&self) -> bool {
        !self.inside_orf || self.codons == 0
    }

    #[inline]
    fn open(&mut self, position: usize, genuine_start: bool) {
        self.inside_orf = true;
        self.has_start = genuine_start;
        self.from = position;
        self.gaps = 0;
        self.codons = 0;
    }
}

#[inline]
fn is_incomplete(codon: &[u8]) -> bool {
    codon[..CODON].contains(&SENTINEL)
}

#[inline]
fn is_gap_or_n(codon: &[u8]) -> bool {
    codon[..CODON]
        .iter()
        .any(|&b| b == b'N' || !dna::has_complement(b))
}

/// Finds ORFs on one strand buffer.
#[derive(Clone, Copy, Debug)]
pub struct FrameScanner<'a> {
    matcher: BatchCodonMatcher<'a>,
    params: &'a ScanParams,
}

impl<'a> FrameScanner<'a> {
    pub fn new(table: &'a CodonTable, params: &'a ScanParams) -> Self {
        Self {
            matcher: BatchCodonMatcher::new(table),
            params,
        }
    }

    /// Scan the phases in `frames` of `padded[..len]` and append the ORFs
    /// passing the filters to `out`. `padded` must carry at least `PADDING`
    /// sentinel bytes after `len`. Returns the number of appended locations.
    pub fn scan(
        &self,
        padded: &[u8],
        len: usize,
        frames: FrameMask,
        strand: Strand,
        out: &mut Vec<SequenceLocation>,
    ) -> usize {
        if len < CODON || frames.is_empty() {
            return 0;
        }
        debug_assert!(padded.len() >= len + PADDING);

        let before = out.len();
        let mut states = [
            PhaseState::seed(0),
            PhaseState::seed(1),
            PhaseState::seed(2),
        ];

        for position in 0..len {
            let phase = position % FRAMES;
            if !frames.contains_phase(phase) {
                continue;
            }

            let codon = &padded[position..position + WINDOW];
            if is_incomplete(codon) {
                continue;
            }
            let is_last = is_incomplete(&padded[position + CODON..position + 2 * CODON]);
            let state = &mut states[phase];

            let is_start = self.matcher.is_start(codon);
            let should_start = match self.params.start_mode {
                StartMode::StartToStop => state.may_open() && is_start,
                StartMode::AnyToStop => state.may_open(),
                StartMode::LastStartToStop => is_start,
            };

            // no ORF begins on the final codon
            if should_start && !is_last {
                state.open(position, is_start);
            }

            if state.inside_orf {
                state.codons += 1;
                if is_gap_or_n(codon) {
                    state.gaps += 1;
                }
            }

            let is_stop = self.matcher.is_stop(codon);
            if state.inside_orf && (is_stop || is_last) {
                state.inside_orf = false;

                // the closing codon is part of the span
                let to = position + CODON;
                debug_assert!(to > state.from);

                if !self.params.accepts(state.codons, state.gaps) {
                    continue;
                }

                out.push(SequenceLocation::new(
                    state.from,
                    to,
                    strand,
                    !state.has_start,
                    !is_stop,
                ));
            }
        }

        let emitted = out.len() - before;
        trace!(%strand, frames = frames.bits(), len, emitted, "scanned strand");
        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::buffer::SequenceBuffer;

    fn scan(seq: &[u8], params: &ScanParams) -> Vec<SequenceLocation> {
        let table = CodonTable::from_codons([*b"ATG"], [*b"TAA", *b"TAG", *b"TGA"]).unwrap();
        let mut buf = SequenceBuffer::new();
        buf.try_set_sequence(seq).unwrap();
        let mut out = Vec::new();
        FrameScanner::new(&table, params).scan(
            buf.padded(Strand::Plus),
            buf.len(),
            params.forward_frames,
            Strand::Plus,
            &mut out,
        );
        out
    }

    #[test]
    fn seed_state() {
        let s = PhaseState::seed(2);
        assert!(s.inside_orf && !s.has_start);
        assert_eq!(s.from, 2);
        assert!(s.may_open());
    }

    #[test]
    fn gap_detection() {
        assert!(is_gap_or_n(b"ANA\xFF"));
        assert!(is_gap_or_n(b"AC\xFF\xFF"));
        assert!(!is_gap_or_n(b"ACRN"));
        assert!(is_incomplete(b"A\xFF\xFF"));
        assert!(!is_incomplete(b"ACG"));
    }

    #[test]
    fn empty_mask_scans_nothing() {
        let params = ScanParams::new(0, 100, 0).with_frames(FrameMask::NONE, FrameMask::NONE);
        assert!(scan(b"ATGAAATAA", &params).is_empty());
    }

    #[test]
    fn start_on_last_codon_is_ignored() {
        let params = ScanParams::new(0, 100, 0)
            .with_frames(FrameMask::FRAME_1, FrameMask::NONE)
            .with_start_mode(StartMode::StartToStop);
        // frame 0: CCC TAA ATG; the trailing ATG is the last codon
        let orfs = scan(b"CCCTAAATG", &params);
        assert_eq!(
            orfs,
            vec![SequenceLocation::new(0, 6, Strand::Plus, true, false)]
        );
    }

    #[test]
    fn stop_closes_only_its_phase() {
        let params = ScanParams::new(0, 100, 0)
            .with_frames(FrameMask::ALL, FrameMask::NONE)
            .with_start_mode(StartMode::AnyToStop);
        // phase 1 sees TAA at offset 1, the others run to the end
        let orfs = scan(b"ATAAGGCCCGGG", &params);
        assert!(orfs.contains(&SequenceLocation::new(1, 4, Strand::Plus, true, false)));
        assert!(orfs.contains(&SequenceLocation::new(0, 12, Strand::Plus, true, true)));
        assert!(orfs.iter().all(|l| l.to > l.from));
    }
}
