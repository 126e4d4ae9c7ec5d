use crate::{Direction, InvalidRequest};

/// A cylinder index on the simulated disk.
pub type Cylinder = u32;

/// The addressable range of a simulated disk.
///
/// Valid cylinders are `0..=bound`, and `bound` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Geometry {
    bound: Cylinder,
}

impl Geometry {
    /// Creates a geometry whose highest cylinder is `bound`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequest::InvalidBound`] if `bound` is zero.
    pub fn new(bound: Cylinder) -> Result<Self, InvalidRequest> {
        if bound < 1 {
            return Err(InvalidRequest::InvalidBound {
                bound: i64::from(bound),
            });
        }
        Ok(Self { bound })
    }

    /// Creates a geometry from an unchecked signed bound.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequest::InvalidBound`] if `bound` is below 1, or
    /// [`InvalidRequest::TooLarge`] if it does not fit a [`Cylinder`].
    pub fn from_i64(bound: i64) -> Result<Self, InvalidRequest> {
        if bound < 1 {
            return Err(InvalidRequest::InvalidBound { bound });
        }
        Self::new(cylinder_from_i64("cylinders", bound)?)
    }

    /// Returns the highest addressable cylinder.
    #[must_use]
    pub fn bound(&self) -> Cylinder {
        self.bound
    }

    /// Returns `true` if `cylinder` lies on the disk.
    #[must_use]
    pub fn contains(&self, cylinder: Cylinder) -> bool {
        cylinder <= self.bound
    }

    /// Returns the edge the head reaches when sweeping in `direction`.
    #[must_use]
    pub fn edge(&self, direction: Direction) -> Cylinder {
        match direction {
            Direction::Up => self.bound,
            Direction::Down => 0,
        }
    }
}

/// Converts a signed value into a [`Cylinder`], naming `field` on failure.
///
/// # Errors
///
/// Returns [`InvalidRequest::Negative`] for negative values and
/// [`InvalidRequest::TooLarge`] for values above `u32::MAX`.
pub fn cylinder_from_i64(field: &'static str, value: i64) -> Result<Cylinder, InvalidRequest> {
    if value < 0 {
        return Err(InvalidRequest::Negative { field, value });
    }
    Cylinder::try_from(value).map_err(|_| InvalidRequest::TooLarge { field, value })
}
