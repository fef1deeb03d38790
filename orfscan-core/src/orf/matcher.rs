//! Batched codon membership test.
//!
//! A codon table is laid out as `SLOTS` packed 32-bit lanes, one triplet per
//! lane with the high byte cleared. The probed window is packed the same way,
//! broadcast to every lane and compared in one operation.

use super::codon_table::CodonTable;

/// Lanes in a packed codon table.
pub const SLOTS: usize = 8;

/// Bytes read from the sequence per probe.
pub const WINDOW: usize = 4;

/// Value of an unused lane. Its high byte is set, which no packed window has.
pub const EMPTY_SLOT: i32 = -1;

/// Pack a codon into a lane value.
#[inline]
pub fn pack_codon(codon: [u8; 3]) -> i32 {
    i32::from_le_bytes([codon[0], codon[1], codon[2], 0])
}

/// Pack the first three bytes of `window` (at least `WINDOW` long).
#[inline]
pub fn pack_window(window: &[u8]) -> i32 {
    let raw = i32::from_le_bytes([window[0], window[1], window[2], window[3]]);
    raw & 0x00FF_FFFF
}

#[cfg(feature = "simd")]
mod simd {
    use super::SLOTS;
    use wide::{i32x8, CmpEq};

    #[inline]
    pub fn any_eq(key: i32, slots: &[i32; SLOTS]) -> bool {
        let lanes = i32x8::from(*slots);
        let hits = lanes.cmp_eq(i32x8::splat(key));
        hits.to_array().iter().any(|&lane| lane != 0)
    }
}

/// One-lane-at-a-time comparison with the same result as the SIMD path.
#[inline]
pub fn any_eq_scalar(key: i32, slots: &[i32; SLOTS]) -> bool {
    slots.iter().any(|&slot| slot == key)
}

#[inline]
fn any_eq(key: i32, slots: &[i32; SLOTS]) -> bool {
    #[cfg(feature = "simd")]
    {
        simd::any_eq(key, slots)
    }
    #[cfg(not(feature = "simd"))]
    {
        any_eq_scalar(key, slots)
    }
}

/// Compares a sequence window against the start and stop sets of a table.
#[derive(Clone, Copy, Debug)]
pub struct BatchCodonMatcher<'a> {
    table: &'a CodonTable,
}

impl<'a> BatchCodonMatcher<'a> {
    pub fn new(table: &'a CodonTable) -> Self {
        Self { table }
    }

    /// `window` must hold at least `WINDOW` bytes; only the first three are
    /// compared.
    #[inline]
    pub fn is_start(&self, window: &[u8]) -> bool {
        any_eq(pack_window(window), self.table.start_slots())
    }

    #[inline]
    pub fn is_stop(&self, window: &[u8]) -> bool {
        any_eq(pack_window(window), self.table.stop_slots())
    }
}

/// Pack `codons` into lanes, filling the rest with `EMPTY_SLOT`.
pub(crate) fn pack_slots(codons: &[[u8; 3]]) -> [i32; SLOTS] {
    debug_assert!(codons.len() <= SLOTS);
    let mut slots = [EMPTY_SLOT; SLOTS];
    for (slot, &codon) in slots.iter_mut().zip(codons) {
        *slot = pack_codon(codon);
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_ignores_fourth_byte() {
        assert_eq!(pack_window(b"ATGA"), pack_codon(*b"ATG"));
        assert_eq!(pack_window(b"ATG\xFF"), pack_codon(*b"ATG"));
        assert_ne!(pack_window(b"ATCA"), pack_codon(*b"ATG"));
    }

    #[test]
    fn empty_slots_never_match() {
        let slots = pack_slots(&[*b"TAA"]);
        assert!(any_eq(pack_window(b"TAAC"), &slots));
        assert!(!any_eq(pack_window(b"\xFF\xFF\xFF\xFF"), &slots));
        assert!(!any_eq(pack_window(b"\0\0\0\0"), &slots));
        assert_eq!(slots[1..], [EMPTY_SLOT; SLOTS - 1]);
    }

    #[test]
    fn matches_in_every_lane() {
        let codons = [
            *b"AAA", *b"CCC", *b"GGG", *b"TTT", *b"ACG", *b"CGT", *b"GTA", *b"TAC",
        ];
        let slots = pack_slots(&codons);
        for codon in codons {
            let window = [codon[0], codon[1], codon[2], b'N'];
            assert!(any_eq(pack_window(&window), &slots));
            assert!(any_eq_scalar(pack_window(&window), &slots));
        }
        assert!(!any_eq(pack_window(b"ATGN"), &slots));
    }
}
