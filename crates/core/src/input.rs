use crate::{Cylinder, Geometry, InvalidRequest, RequestSet};

/// A validated scheduling problem.
///
/// Holding an `Input` proves that the request set is non-empty and that the
/// head and every request lie within the geometry, so policies that accept
/// one never fail on range grounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Input {
    requests: RequestSet,
    head: Cylinder,
    geometry: Geometry,
}

impl Input {
    /// Validates and bundles a scheduling problem.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequest::EmptyRequests`] for an empty set,
    /// [`InvalidRequest::HeadOutOfRange`] if the head is off the disk, or
    /// [`InvalidRequest::RequestOutOfRange`] for the first request that is.
    pub fn new(
        requests: RequestSet,
        head: Cylinder,
        geometry: Geometry,
    ) -> Result<Self, InvalidRequest> {
        if requests.is_empty() {
            return Err(InvalidRequest::EmptyRequests);
        }

        if !geometry.contains(head) {
            return Err(InvalidRequest::HeadOutOfRange {
                head,
                bound: geometry.bound(),
            });
        }

        if let Some((index, &cylinder)) = requests
            .as_slice()
            .iter()
            .enumerate()
            .find(|(_, cylinder)| !geometry.contains(**cylinder))
        {
            return Err(InvalidRequest::RequestOutOfRange {
                index,
                cylinder,
                bound: geometry.bound(),
            });
        }

        Ok(Self {
            requests,
            head,
            geometry,
        })
    }

    /// Validates a problem given as a raw cylinder bound.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequest::InvalidBound`] if `bound` is zero, otherwise
    /// the same errors as [`Input::new`].
    pub fn with_bound(
        requests: RequestSet,
        head: Cylinder,
        bound: Cylinder,
    ) -> Result<Self, InvalidRequest> {
        Self::new(requests, head, Geometry::new(bound)?)
    }

    /// Returns the requests in submission order.
    #[must_use]
    pub fn requests(&self) -> &RequestSet {
        &self.requests
    }

    /// Returns the starting head position.
    #[must_use]
    pub fn head(&self) -> Cylinder {
        self.head
    }

    /// Returns the disk geometry.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }
}
