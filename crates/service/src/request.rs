use diskhead_core::{
    Algorithm, Direction, Geometry, Input, InvalidRequest, RequestSet, cylinder_from_i64,
};
use serde::{Deserialize, Serialize};

/// The name that asks for a comparison instead of a single algorithm.
const COMPARE: &str = "compare";

/// A scheduling request as submitted by a caller.
///
/// Numbers arrive signed so that negative values are reported as such
/// rather than as decode errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub requests: Requests,

    pub head: i64,

    /// The highest cylinder on the disk.
    pub cylinders: i64,

    /// One of the six algorithm names, or `compare`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,

    /// Also run every algorithm and report the cheapest.
    #[serde(default)]
    pub compare: bool,
}

/// Requested cylinders, either as a JSON array or a delimited string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Requests {
    List(Vec<i64>),
    Text(String),
}

/// What a request asks the engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    Single(Algorithm),
    CompareOnly,
}

impl Requests {
    /// Parses the cylinders without range checks.
    ///
    /// # Errors
    ///
    /// Returns an error for negative or malformed values.
    pub fn parse(&self) -> Result<RequestSet, InvalidRequest> {
        match self {
            Self::List(values) => RequestSet::from_i64s(values.iter().copied()),
            Self::Text(text) => text.parse(),
        }
    }
}

impl ScheduleRequest {
    /// Validates the numeric fields into an [`Input`].
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checking requests, then head, then
    /// the cylinder bound, then ranges.
    pub fn input(&self) -> Result<Input, InvalidRequest> {
        let requests = self.requests.parse()?;
        let head = cylinder_from_i64("head", self.head)?;
        let geometry = Geometry::from_i64(self.cylinders)?;
        Input::new(requests, head, geometry)
    }

    /// Parses the direction, if one was given.
    ///
    /// A blank direction counts as none.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequest::UnknownDirection`] for unrecognized names.
    pub fn direction(&self) -> Result<Option<Direction>, InvalidRequest> {
        self.direction
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .map(str::parse)
            .transpose()
    }

    /// Parses the algorithm name; `None` means a comparison was asked for
    /// by name.
    pub(crate) fn selection(&self) -> Result<Option<Selection>, InvalidRequest> {
        let Some(name) = self.algorithm.as_deref().map(str::trim) else {
            return Ok(None);
        };

        if name.is_empty() {
            return Ok(None);
        }
        if name.eq_ignore_ascii_case(COMPARE) {
            return Ok(Some(Selection::CompareOnly));
        }

        name.parse().map(|algorithm| Some(Selection::Single(algorithm)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> ScheduleRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn accepts_array_or_string_requests() {
        let list = request(r#"{"requests": [98, 183, 37], "head": 53, "cylinders": 199}"#);
        let text = request(r#"{"requests": "98, 183, 37", "head": 53, "cylinders": 199}"#);

        assert_eq!(list.input().unwrap(), text.input().unwrap());
        assert!(!list.compare);
        assert_eq!(list.algorithm, None);
    }

    #[test]
    fn reports_negative_head() {
        let request = request(r#"{"requests": [1], "head": -4, "cylinders": 199}"#);

        assert_eq!(
            request.input(),
            Err(InvalidRequest::Negative {
                field: "head",
                value: -4
            })
        );
    }

    #[test]
    fn reports_negative_request_before_bound() {
        let request = request(r#"{"requests": [1, -2], "head": 0, "cylinders": 0}"#);

        assert_eq!(
            request.input(),
            Err(InvalidRequest::Negative {
                field: "request",
                value: -2
            })
        );
    }

    #[test]
    fn parses_algorithm_and_compare_names() {
        let mut request = request(r#"{"requests": [1], "head": 0, "cylinders": 9}"#);

        request.algorithm = Some("c-look".into());
        assert_eq!(
            request.selection(),
            Ok(Some(Selection::Single(Algorithm::CLook)))
        );

        request.algorithm = Some("Compare".into());
        assert_eq!(request.selection(), Ok(Some(Selection::CompareOnly)));

        request.algorithm = Some("ELEVATOR".into());
        assert_eq!(
            request.selection(),
            Err(InvalidRequest::UnknownAlgorithm {
                name: "ELEVATOR".into()
            })
        );
    }

    #[test]
    fn blank_direction_is_none() {
        let request = request(r#"{"requests": [1], "head": 0, "cylinders": 9, "direction": " "}"#);
        assert_eq!(request.direction(), Ok(None));
    }
}
