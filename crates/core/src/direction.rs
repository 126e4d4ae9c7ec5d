use std::{fmt, str::FromStr};

use crate::InvalidRequest;

/// The initial sweep direction of the sweep-based policies.
///
/// `Up` moves toward the highest cylinder, `Down` toward cylinder 0.
/// FCFS and SSTF ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Both directions, `Up` first.
    pub const BOTH: [Direction; 2] = [Direction::Up, Direction::Down];

    /// Returns the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Returns the canonical name, `UP` or `DOWN`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses `UP`/`DOWN` case-insensitively.
///
/// The aliases `right` and `left` map to `Up` and `Down`.
impl FromStr for Direction {
    type Err = InvalidRequest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "right" => Ok(Self::Up),
            "down" | "left" => Ok(Self::Down),
            _ => Err(InvalidRequest::UnknownDirection { name: s.to_owned() }),
        }
    }
}
