use std::str::FromStr;

use clap::ValueEnum;
use diskhead_core::Direction;
use diskhead_policies::compare::{self, Directions};
use serde::Deserialize;

/// Service-level settings.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration:
///
/// ```toml
/// include_head = true
/// include_stops = true
/// compare_directions = "best"
/// default_direction = "UP"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prepend the head position to every reported sequence.
    pub include_head: bool,

    /// Report the full trajectory, boundary and wrap legs included.
    pub include_stops: bool,

    /// How the comparison picks directions for the sweep algorithms.
    pub compare_directions: CompareDirections,

    /// Direction used when a request names none.
    pub default_direction: Option<Direction>,
}

/// Direction handling for comparisons, as named in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CompareDirections {
    /// Use the request's direction.
    #[default]
    Given,

    /// Try both directions and keep the cheaper.
    Best,
}

impl Config {
    /// Returns the comparator configuration these settings imply.
    #[must_use]
    pub fn comparator(&self) -> compare::Config {
        compare::Config::with_directions(self.compare_directions.into())
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl From<CompareDirections> for Directions {
    fn from(value: CompareDirections) -> Self {
        match value {
            CompareDirections::Given => Directions::Given,
            CompareDirections::Best => Directions::Best,
        }
    }
}
