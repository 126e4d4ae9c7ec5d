use std::str::FromStr;

use crate::{Cylinder, InvalidRequest, cylinder_from_i64};

/// Pending cylinder requests in submission order.
///
/// Duplicates are allowed. Range checks happen when the set is combined
/// with a geometry in [`Input::new`](crate::Input::new).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RequestSet(Vec<Cylinder>);

impl RequestSet {
    /// Creates a request set from cylinders in submission order.
    pub fn new(cylinders: impl Into<Vec<Cylinder>>) -> Self {
        Self(cylinders.into())
    }

    /// Creates a request set from unchecked signed values.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first value that is negative or too large.
    pub fn from_i64s(values: impl IntoIterator<Item = i64>) -> Result<Self, InvalidRequest> {
        values
            .into_iter()
            .map(|value| cylinder_from_i64("request", value))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Returns the requests in submission order.
    #[must_use]
    pub fn as_slice(&self) -> &[Cylinder] {
        &self.0
    }

    /// Returns the number of requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no requests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the requests sorted ascending.
    #[must_use]
    pub fn sorted(&self) -> Vec<Cylinder> {
        let mut sorted = self.0.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Consumes the set and returns the inner cylinders.
    #[must_use]
    pub fn into_inner(self) -> Vec<Cylinder> {
        self.0
    }
}

impl From<Vec<Cylinder>> for RequestSet {
    fn from(cylinders: Vec<Cylinder>) -> Self {
        Self(cylinders)
    }
}

impl FromIterator<Cylinder> for RequestSet {
    fn from_iter<T: IntoIterator<Item = Cylinder>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parses a delimited list such as `"98, 183 37,122"`.
///
/// Commas and whitespace both separate tokens, and empty tokens are skipped,
/// so a trailing comma is harmless. An empty string parses to an empty set;
/// emptiness is rejected later, by [`Input::new`](crate::Input::new).
impl FromStr for RequestSet {
    type Err = InvalidRequest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                let value = token
                    .parse::<i64>()
                    .map_err(|_| InvalidRequest::MalformedCylinder {
                        token: token.to_owned(),
                    })?;
                cylinder_from_i64("request", value)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_delimiters() {
        let set: RequestSet = "98, 183 37,122,\n14".parse().unwrap();
        assert_eq!(set.as_slice(), &[98, 183, 37, 122, 14]);
    }

    #[test]
    fn empty_string_is_empty_set() {
        let set: RequestSet = " , ".parse().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn rejects_malformed_and_negative_tokens() {
        assert_eq!(
            "12, x7".parse::<RequestSet>(),
            Err(InvalidRequest::MalformedCylinder { token: "x7".into() })
        );
        assert_eq!(
            "12, -3".parse::<RequestSet>(),
            Err(InvalidRequest::Negative {
                field: "request",
                value: -3
            })
        );
    }

    #[test]
    fn sorting_keeps_duplicates() {
        let set = RequestSet::new([40, 10, 40, 5]);
        assert_eq!(set.sorted(), vec![5, 10, 40, 40]);
        assert_eq!(set.as_slice(), &[40, 10, 40, 5]);
    }
}
