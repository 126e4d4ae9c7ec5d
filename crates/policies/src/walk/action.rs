/// Control actions supported by the head walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the walk early and return the trajectory so far.
    StopEarly,
}
