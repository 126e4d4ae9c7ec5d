//! Shared fixtures for the cross-crate tests.

use diskhead_core::{Input, RequestSet};

/// Requests in the classic textbook workload.
pub const TEXTBOOK_REQUESTS: [u32; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

/// The textbook workload: head at 53 on a disk with cylinders `0..=199`.
///
/// # Panics
///
/// Never; the workload is valid.
#[must_use]
pub fn textbook() -> Input {
    Input::with_bound(RequestSet::new(TEXTBOOK_REQUESTS), 53, 199)
        .expect("textbook workload is valid")
}

/// Builds a JSON request body around the textbook workload.
#[must_use]
pub fn textbook_body(extra: &str) -> String {
    let mut body =
        String::from(r#"{"requests": "98, 183, 37, 122, 14, 124, 65, 67", "head": 53, "cylinders": 199"#);
    if !extra.is_empty() {
        body.push_str(", ");
        body.push_str(extra);
    }
    body.push('}');
    body
}
