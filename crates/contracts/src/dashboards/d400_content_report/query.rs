use serde::{Deserialize, Serialize};

/// Period requested from both report routes (`?start=..&end=..`).
///
/// Values are kept exactly as the date inputs produced them; whether `start`
/// comes before `end` is decided by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    /// Returns `None` unless both bounds are filled in
    pub fn from_inputs(start: &str, end: &str) -> Option<Self> {
        if start.is_empty() || end.is_empty() {
            return None;
        }
        Some(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}
