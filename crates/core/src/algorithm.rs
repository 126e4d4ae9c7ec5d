use std::{fmt, str::FromStr};

use crate::InvalidRequest;

/// The scheduling policies the engine implements.
///
/// Variants are declared in canonical order, which is also their `Ord`
/// order and the comparator's tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[cfg_attr(feature = "serde", serde(rename = "FCFS"))]
    Fcfs,
    #[cfg_attr(feature = "serde", serde(rename = "SSTF"))]
    Sstf,
    #[cfg_attr(feature = "serde", serde(rename = "SCAN"))]
    Scan,
    #[cfg_attr(feature = "serde", serde(rename = "LOOK"))]
    Look,
    #[cfg_attr(feature = "serde", serde(rename = "C-SCAN"))]
    CScan,
    #[cfg_attr(feature = "serde", serde(rename = "C-LOOK"))]
    CLook,
}

impl Algorithm {
    /// Every algorithm in canonical order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::Look,
        Algorithm::CScan,
        Algorithm::CLook,
    ];

    /// Returns the display name, e.g. `C-SCAN`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sstf => "SSTF",
            Self::Scan => "SCAN",
            Self::Look => "LOOK",
            Self::CScan => "C-SCAN",
            Self::CLook => "C-LOOK",
        }
    }

    /// Returns `true` if the algorithm needs a sweep [`Direction`].
    ///
    /// [`Direction`]: crate::Direction
    #[must_use]
    pub fn requires_direction(self) -> bool {
        match self {
            Self::Fcfs | Self::Sstf => false,
            Self::Scan | Self::Look | Self::CScan | Self::CLook => true,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses an algorithm name case-insensitively.
///
/// The circular variants also accept `CSCAN`, `C_SCAN`, `CLOOK` and `C_LOOK`.
impl FromStr for Algorithm {
    type Err = InvalidRequest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "FCFS" => Ok(Self::Fcfs),
            "SSTF" => Ok(Self::Sstf),
            "SCAN" => Ok(Self::Scan),
            "LOOK" => Ok(Self::Look),
            "CSCAN" => Ok(Self::CScan),
            "CLOOK" => Ok(Self::CLook),
            _ => Err(InvalidRequest::UnknownAlgorithm { name: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_ord() {
        let mut sorted = Algorithm::ALL;
        sorted.sort();
        assert_eq!(sorted, Algorithm::ALL);
    }

    #[test]
    fn names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse(), Ok(algorithm));
        }
    }

    #[test]
    fn parses_loose_spellings() {
        assert_eq!("fcfs".parse(), Ok(Algorithm::Fcfs));
        assert_eq!("cscan".parse(), Ok(Algorithm::CScan));
        assert_eq!("C_LOOK".parse(), Ok(Algorithm::CLook));
        assert_eq!(
            "elevator".parse::<Algorithm>(),
            Err(InvalidRequest::UnknownAlgorithm {
                name: "elevator".into()
            })
        );
    }

    #[test]
    fn only_sweeps_need_a_direction() {
        let directional: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.requires_direction())
            .collect();

        assert_eq!(
            directional,
            vec![
                Algorithm::Scan,
                Algorithm::Look,
                Algorithm::CScan,
                Algorithm::CLook
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_display_names() {
        let json = serde_json::to_string(&Algorithm::CScan).unwrap();
        assert_eq!(json, "\"C-SCAN\"");
    }
}
