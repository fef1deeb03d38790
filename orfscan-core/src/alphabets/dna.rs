use crate::alphabets::Alphabet;
use std::sync::LazyLock;

/// Table value for bytes that have no IUPAC complement.
const NO_COMPLEMENT: u8 = b'.';

/// Unambiguous bases as they appear in normalized sequence and codon tables.
pub fn codon_alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

// U complements to A; S, W and N are their own complement.
static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [NO_COMPLEMENT; 256];
    b"ACGTURYSWKMBDHVN"
        .iter()
        .zip(b"TGCAAYRSWMKVHDBN".iter())
        .for_each(|(&a, &b)| {
            comp[a as usize] = b;
            comp[a as usize + 32] = b + 32;
        });
    comp
});

#[inline]
pub fn complement(a: u8) -> Option<u8> {
    match COMPLEMENT[a as usize] {
        NO_COMPLEMENT => None,
        c => Some(c),
    }
}

#[inline]
pub fn has_complement(a: u8) -> bool {
    COMPLEMENT[a as usize] != NO_COMPLEMENT
}

/// Uppercase ASCII letters and read `U` as `T`. Other bytes pass through.
#[inline]
pub fn normalize(a: u8) -> u8 {
    match a.to_ascii_uppercase() {
        b'U' => b'T',
        c => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codon_words() {
        assert!(codon_alphabet().is_word(b"GATTACA"));
        assert!(!codon_alphabet().is_word(b"gattaca"));
        assert!(!codon_alphabet().is_word(b"GAUUACA"));
    }

    #[test]
    fn iupac_codes_complement_to_iupac_codes() {
        for &b in b"ACGTURYSWKMBDHVNacgturyswkmbdhvn" {
            let c = complement(b).unwrap();
            assert!(has_complement(c), "{} -> {}", b as char, c as char);
        }
        assert_eq!(complement(b'N'), Some(b'N'));
        assert_eq!(complement(b'U'), Some(b'A'));
        assert_eq!(complement(b'r'), Some(b'y'));
    }

    #[test]
    fn symbols_without_complement() {
        for &b in b"-.*XZ0#" {
            assert!(!has_complement(b), "{}", b as char);
            assert_eq!(complement(b), None);
        }
        assert!(!has_complement(0xFF));
    }

    #[test]
    fn normalize_bytes() {
        assert_eq!(normalize(b'a'), b'A');
        assert_eq!(normalize(b'u'), b'T');
        assert_eq!(normalize(b'U'), b'T');
        assert_eq!(normalize(b'-'), b'-');
        assert_eq!(normalize(b'1'), b'1');
    }
}
