use thiserror::Error;

use crate::{Algorithm, Cylinder};

/// Reasons a scheduling request is rejected before any computation runs.
///
/// Every variant describes a caller mistake. The same bad input always
/// produces the same variant and message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    /// The request set contains no cylinders.
    #[error("request set is empty")]
    EmptyRequests,

    /// The cylinder bound is below the minimum of 1.
    #[error("cylinder bound must be at least 1, got {bound}")]
    InvalidBound { bound: i64 },

    /// The starting head position lies outside `[0, bound]`.
    #[error("head position {head} is outside the disk range [0, {bound}]")]
    HeadOutOfRange { head: Cylinder, bound: Cylinder },

    /// A requested cylinder lies outside `[0, bound]`.
    #[error("request {cylinder} at position {index} is outside the disk range [0, {bound}]")]
    RequestOutOfRange {
        index: usize,
        cylinder: Cylinder,
        bound: Cylinder,
    },

    /// A numeric field holds a negative value.
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: i64 },

    /// A numeric field holds a value too large to address.
    #[error("{field} is too large, got {value}")]
    TooLarge { field: &'static str, value: i64 },

    /// A token in a delimited request string is not an integer.
    #[error("malformed cylinder `{token}`")]
    MalformedCylinder { token: String },

    /// A sweep-based algorithm was requested without a direction.
    #[error("{algorithm} requires a direction (UP or DOWN)")]
    MissingDirection { algorithm: Algorithm },

    /// The algorithm name is not recognized.
    #[error("unknown algorithm `{name}`")]
    UnknownAlgorithm { name: String },

    /// The direction name is not recognized.
    #[error("unknown direction `{name}`")]
    UnknownDirection { name: String },
}
