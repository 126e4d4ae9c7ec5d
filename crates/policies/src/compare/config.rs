use diskhead_core::Algorithm;
use thiserror::Error;

/// How the comparator picks a direction for the sweep-based policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Directions {
    /// Run each sweep with the caller's direction.
    ///
    /// A missing direction is an error.
    #[default]
    Given,

    /// Run each sweep both ways and keep the cheaper run.
    ///
    /// `Up` wins ties. The caller's direction is ignored.
    Best,
}

/// Configuration for the comparator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    directions: Directions,
    algorithms: Vec<Algorithm>,
}

/// Errors that can occur when validating a comparator config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one algorithm must be compared")]
    NoAlgorithms,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directions: Directions::Given,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Creates a config comparing `algorithms`.
    ///
    /// Algorithms are deduplicated and kept in canonical order, so the
    /// order given here never affects tie-breaking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoAlgorithms`] if `algorithms` is empty.
    pub fn new(
        directions: Directions,
        algorithms: impl IntoIterator<Item = Algorithm>,
    ) -> Result<Self, ConfigError> {
        let mut algorithms: Vec<_> = algorithms.into_iter().collect();
        algorithms.sort_unstable();
        algorithms.dedup();

        if algorithms.is_empty() {
            return Err(ConfigError::NoAlgorithms);
        }

        Ok(Self {
            directions,
            algorithms,
        })
    }

    /// Returns a config comparing every algorithm with the given direction mode.
    #[must_use]
    pub fn with_directions(directions: Directions) -> Self {
        Self {
            directions,
            ..Self::default()
        }
    }

    /// Returns the direction mode.
    #[must_use]
    pub fn directions(&self) -> Directions {
        self.directions
    }

    /// Returns the compared algorithms in canonical order.
    #[must_use]
    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }
}
