use crate::error::{OrfError, OrfResult};

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

/// How an ORF may begin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StartMode {
    /// Longest fragment whose first codon is a start codon.
    StartToStop,
    /// Longest fragment, from the first codon after the previous stop.
    #[default]
    AnyToStop,
    /// From the last start codon before the stop.
    LastStartToStop,
}

impl StartMode {
    pub fn code(self) -> u32 {
        match self {
            StartMode::StartToStop => 0,
            StartMode::AnyToStop => 1,
            StartMode::LastStartToStop => 2,
        }
    }
}

impl TryFrom<u32> for StartMode {
    type Error = OrfError;

    fn try_from(value: u32) -> OrfResult<Self> {
        match value {
            0 => Ok(StartMode::StartToStop),
            1 => Ok(StartMode::AnyToStop),
            2 => Ok(StartMode::LastStartToStop),
            _ => Err(OrfError::InvalidStartMode {
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for StartMode {
    type Err = OrfError;

    fn from_str(s: &str) -> OrfResult<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "start-to-stop" | "0" => Ok(StartMode::StartToStop),
            "any-to-stop" | "1" => Ok(StartMode::AnyToStop),
            "last-start-to-stop" | "2" => Ok(StartMode::LastStartToStop),
            _ => Err(OrfError::InvalidStartMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartMode::StartToStop => f.write_str("start-to-stop"),
            StartMode::AnyToStop => f.write_str("any-to-stop"),
            StartMode::LastStartToStop => f.write_str("last-start-to-stop"),
        }
    }
}

/// Reading-frame phases taking part in a scan. Bit `i` selects the frame
/// whose codons start at offsets `i, i + 3, i + 6, ...`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrameMask(u8);

impl FrameMask {
    pub const NONE: FrameMask = FrameMask(0);
    pub const FRAME_1: FrameMask = FrameMask(1);
    pub const FRAME_2: FrameMask = FrameMask(2);
    pub const FRAME_3: FrameMask = FrameMask(4);
    pub const ALL: FrameMask = FrameMask(7);

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether the frame of `phase` (0, 1 or 2) is selected.
    #[inline]
    pub fn contains_phase(self, phase: usize) -> bool {
        phase < 3 && self.0 & (1 << phase) != 0
    }
}

impl BitOr for FrameMask {
    type Output = FrameMask;

    fn bitor(self, rhs: FrameMask) -> FrameMask {
        FrameMask(self.0 | rhs.0)
    }
}

impl TryFrom<u32> for FrameMask {
    type Error = OrfError;

    fn try_from(value: u32) -> OrfResult<Self> {
        if value > 7 {
            return Err(OrfError::InvalidFrames {
                value: value.to_string(),
            });
        }
        Ok(FrameMask(value as u8))
    }
}

impl FromStr for FrameMask {
    type Err = OrfError;

    /// Comma list of 1-based frames, e.g. `"1,2,3"`. Empty selects none.
    fn from_str(s: &str) -> OrfResult<Self> {
        let invalid = || OrfError::InvalidFrames {
            value: s.to_string(),
        };
        let mut mask = FrameMask::NONE;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            mask = mask
                | match part {
                    "1" => FrameMask::FRAME_1,
                    "2" => FrameMask::FRAME_2,
                    "3" => FrameMask::FRAME_3,
                    _ => return Err(invalid()),
                };
        }
        Ok(mask)
    }
}

/// Length, gap and frame filters for one `find_all` run. Lengths count
/// codons; `min_length` is exclusive and `max_length` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanParams {
    pub min_length: usize,
    pub max_length: usize,
    pub max_gaps: usize,
    pub forward_frames: FrameMask,
    pub reverse_frames: FrameMask,
    pub start_mode: StartMode,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            min_length: 30,
            max_length: 32734,
            max_gaps: usize::MAX,
            forward_frames: FrameMask::ALL,
            reverse_frames: FrameMask::ALL,
            start_mode: StartMode::AnyToStop,
        }
    }
}

impl ScanParams {
    pub fn new(min_length: usize, max_length: usize, max_gaps: usize) -> Self {
        Self {
            min_length,
            max_length,
            max_gaps,
            ..Self::default()
        }
    }

    pub fn with_frames(mut self, forward: FrameMask, reverse: FrameMask) -> Self {
        self.forward_frames = forward;
        self.reverse_frames = reverse;
        self
    }

    pub fn with_start_mode(mut self, start_mode: StartMode) -> Self {
        self.start_mode = start_mode;
        self
    }

    pub fn with_max_gaps(mut self, max_gaps: usize) -> Self {
        self.max_gaps = max_gaps;
        self
    }

    /// Whether a closed ORF of `codons` codons with `gaps` gap codons passes.
    #[inline]
    pub fn accepts(&self, codons: usize, gaps: usize) -> bool {
        gaps <= self.max_gaps && codons <= self.max_length && codons > self.min_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_mode_encodings() {
        for mode in [
            StartMode::StartToStop,
            StartMode::AnyToStop,
            StartMode::LastStartToStop,
        ] {
            assert_eq!(StartMode::try_from(mode.code()).unwrap(), mode);
            assert_eq!(mode.to_string().parse::<StartMode>().unwrap(), mode);
        }
        assert_eq!(
            "LAST_START_TO_STOP".parse::<StartMode>().unwrap(),
            StartMode::LastStartToStop
        );
        assert!(StartMode::try_from(3).is_err());
        assert!("stop-to-start".parse::<StartMode>().is_err());
    }

    #[test]
    fn frame_masks() {
        let mask: FrameMask = "1,3".parse().unwrap();
        assert_eq!(mask, FrameMask::FRAME_1 | FrameMask::FRAME_3);
        assert!(mask.contains_phase(0));
        assert!(!mask.contains_phase(1));
        assert!(mask.contains_phase(2));
        assert!(!mask.contains_phase(3));

        assert_eq!("1, 2 ,3".parse::<FrameMask>().unwrap(), FrameMask::ALL);
        assert!("".parse::<FrameMask>().unwrap().is_empty());
        assert!("4".parse::<FrameMask>().is_err());
        assert_eq!(FrameMask::try_from(7).unwrap(), FrameMask::ALL);
        assert!(FrameMask::try_from(8).is_err());
    }

    #[test]
    fn length_filter_bounds() {
        let params = ScanParams::new(2, 4, 1);
        assert!(!params.accepts(2, 0));
        assert!(params.accepts(3, 0));
        assert!(params.accepts(4, 1));
        assert!(!params.accepts(5, 0));
        assert!(!params.accepts(3, 2));
    }
}
