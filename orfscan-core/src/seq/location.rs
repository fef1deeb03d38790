use std::fmt;

/// Strand an ORF was found on. Coordinates of a `Minus` location index the
/// reverse complement, not the forward sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Plus,
    Minus,
}

impl Strand {
    /// Numeric encoding used in ORF headers.
    pub fn code(self) -> i32 {
        match self {
            Strand::Plus => 0,
            Strand::Minus => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Strand::Plus),
            1 => Some(Strand::Minus),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Strand::Plus => Strand::Minus,
            Strand::Minus => Strand::Plus,
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Plus => f.write_str("+"),
            Strand::Minus => f.write_str("-"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SequenceLocation {
    pub id: u32,
    pub from: usize,
    pub to: usize,
    pub strand: Strand,
    /// No start codon was matched for this ORF.
    pub has_incomplete_start: bool,
    /// The ORF ran into the sequence end instead of a stop codon.
    pub has_incomplete_end: bool,
}

impl SequenceLocation {
    pub fn new(
        from: usize,
        to: usize,
        strand: Strand,
        has_incomplete_start: bool,
        has_incomplete_end: bool,
    ) -> Self {
        debug_assert!(to > from);
        Self {
            id: 0,
            from,
            to,
            strand,
            has_incomplete_start,
            has_incomplete_end,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.to <= self.from
    }

    /// Number of whole codons covered by the span.
    pub fn codons(&self) -> usize {
        self.len() / 3
    }

    /// Half-open span on the forward sequence of length `seq_len`.
    pub fn to_forward_coords(&self, seq_len: usize) -> (usize, usize) {
        match self.strand {
            Strand::Plus => (self.from, self.to),
            Strand::Minus => {
                debug_assert!(self.to <= seq_len);
                (seq_len.saturating_sub(self.to), seq_len.saturating_sub(self.from))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strand_codes() {
        assert_eq!(Strand::Plus.code(), 0);
        assert_eq!(Strand::Minus.code(), 1);
        assert_eq!(Strand::from_code(1), Some(Strand::Minus));
        assert_eq!(Strand::from_code(-1), None);
        assert_eq!(Strand::Plus.opposite(), Strand::Minus);
        assert_eq!(Strand::Minus.to_string(), "-");
    }

    #[test]
    fn span_helpers() {
        let loc = SequenceLocation::new(3, 12, Strand::Plus, false, true).with_id(7);
        assert_eq!(loc.id, 7);
        assert_eq!(loc.len(), 9);
        assert_eq!(loc.codons(), 3);
        assert!(!loc.is_empty());
    }

    #[test]
    fn minus_strand_forward_coords() {
        // reverse complement offsets [2, 8) of a 10-base sequence are forward [2, 8)
        let loc = SequenceLocation::new(2, 8, Strand::Minus, true, true);
        assert_eq!(loc.to_forward_coords(10), (2, 8));

        let loc = SequenceLocation::new(0, 3, Strand::Minus, true, false);
        assert_eq!(loc.to_forward_coords(10), (7, 10));

        let loc = SequenceLocation::new(0, 3, Strand::Plus, true, false);
        assert_eq!(loc.to_forward_coords(10), (0, 3));
    }
}
