//! Text form of a [`SequenceLocation`]:
//! `[Orf: id, from, to, strand, incompleteStart, incompleteEnd]`.
//!
//! The token travels as one field of a longer header line, for example
//! `contig_7 [Orf: 3, 10, 40, 0, 1, 0]`.

use crate::error::{OrfError, OrfResult};
use crate::seq::location::{SequenceLocation, Strand};

use memchr::memmem;
use std::fmt;
use std::str::FromStr;

const TAG: &[u8] = b"[Orf:";

impl fmt::Display for SequenceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Orf: {}, {}, {}, {}, {}, {}]",
            self.id,
            self.from,
            self.to,
            self.strand.code(),
            u8::from(self.has_incomplete_start),
            u8::from(self.has_incomplete_end)
        )
    }
}

impl FromStr for SequenceLocation {
    type Err = OrfError;

    fn from_str(s: &str) -> OrfResult<Self> {
        decode_orf_header(s)
    }
}

pub fn encode_orf_header(location: &SequenceLocation) -> String {
    location.to_string()
}

/// Parse the first whitespace-delimited field of `text` starting with
/// `[Orf:`. At least id, from, to, strand and the start flag must be
/// present; a missing end flag reads as false. The span must be non-empty.
pub fn decode_orf_header(text: &str) -> OrfResult<SequenceLocation> {
    let bytes = text.as_bytes();
    let start = memmem::find_iter(bytes, TAG)
        .find(|&pos| pos == 0 || bytes[pos - 1].is_ascii_whitespace())
        .ok_or(OrfError::MissingOrfHeader)?;

    let rest = &text[start..];
    let token = match memchr::memchr(b']', rest.as_bytes()) {
        Some(end) => &rest[..=end],
        None => rest.trim_end(),
    };
    let malformed = || OrfError::MalformedOrfHeader {
        token: token.to_string(),
    };

    let body = token[TAG.len()..].trim_end_matches(']');
    let values: Vec<i64> = body
        .split(',')
        .map(str::trim)
        .map_while(|field| field.parse::<i64>().ok())
        .collect();
    if values.len() < 5 {
        return Err(malformed());
    }

    let id = u32::try_from(values[0]).map_err(|_| malformed())?;
    let from = usize::try_from(values[1]).map_err(|_| malformed())?;
    let to = usize::try_from(values[2]).map_err(|_| malformed())?;
    let strand = Strand::from_code(values[3]).ok_or_else(malformed)?;
    if to <= from {
        return Err(malformed());
    }

    Ok(SequenceLocation {
        id,
        from,
        to,
        strand,
        has_incomplete_start: values[4] != 0,
        has_incomplete_end: values.get(5).is_some_and(|&v| v != 0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_from_header_line() {
        let loc = decode_orf_header("header [Orf: 3, 10, 40, 0, 1, 0]").unwrap();
        assert_eq!(
            loc,
            SequenceLocation {
                id: 3,
                from: 10,
                to: 40,
                strand: Strand::Plus,
                has_incomplete_start: true,
                has_incomplete_end: false,
            }
        );
    }

    #[test]
    fn encode_matches_grammar() {
        let loc = SequenceLocation::new(5, 95, Strand::Minus, false, true).with_id(12);
        assert_eq!(encode_orf_header(&loc), "[Orf: 12, 5, 95, 1, 0, 1]");
        assert_eq!(decode_orf_header(&format!("seq1 {loc} len=90")).unwrap(), loc);
    }

    #[test]
    fn first_token_wins() {
        let loc = decode_orf_header("[Orf: 1, 0, 9, 1, 0, 0] [Orf: 2, 3, 6, 0, 0, 0]").unwrap();
        assert_eq!(loc.id, 1);
        assert_eq!(loc.strand, Strand::Minus);
    }

    #[test]
    fn token_must_start_a_field() {
        assert!(matches!(
            decode_orf_header("x[Orf: 1, 0, 9, 0, 0, 0]"),
            Err(OrfError::MissingOrfHeader)
        ));
        assert!(decode_orf_header("x\t[Orf: 1, 0, 9, 0, 0, 0]").is_ok());
    }

    #[test]
    fn missing_token_fails() {
        assert!(matches!(
            decode_orf_header("header without location"),
            Err(OrfError::MissingOrfHeader)
        ));
        assert!(matches!(decode_orf_header(""), Err(OrfError::MissingOrfHeader)));
    }

    #[test]
    fn five_fields_are_enough() {
        let loc = decode_orf_header("h [Orf: 4, 0, 30, 0, 1]").unwrap();
        assert!(loc.has_incomplete_start);
        assert!(!loc.has_incomplete_end);
    }

    #[test]
    fn malformed_token_fails() {
        for text in [
            "h [Orf: 4, 0, 30, 0]",
            "h [Orf: 4, x, 30, 0, 1, 1]",
            "h [Orf:]",
            "h [Orf: 4, 0, 30, 2, 1, 1]",
            "h [Orf: -4, 0, 30, 0, 1, 1]",
            "h [Orf: 0, 9, 3, 0, 0, 0]",
            "h [Orf: 0, 3, 3, 0, 0, 0]",
        ] {
            match decode_orf_header(text) {
                Err(OrfError::MalformedOrfHeader { .. }) => {}
                other => panic!("expected malformed header for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_via_from_str() {
        let loc: SequenceLocation = "[Orf: 0, 1, 4, 0, 0, 1]".parse().unwrap();
        assert_eq!(loc.to, 4);
        assert!(loc.has_incomplete_end);
    }
}
