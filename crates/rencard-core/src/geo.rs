use serde::{Deserialize, Serialize};

/// A geographic point in floating-point degrees.
///
/// Absence ("this member has no resolvable location") is expressed as
/// `Option<Coordinate>` at every call site; there is no sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Exact-match key into the commune registry: (city name, postal code).
///
/// Also used as the memoization key during distance enrichment. The key is
/// the literal string pair — no case folding — so callers that want
/// effective dedup must supply consistent casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationKey {
    pub city: String,
    pub postal_code: String,
}

impl LocationKey {
    #[must_use]
    pub fn new(city: impl Into<String>, postal_code: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }

    /// Returns `true` if either component is empty, in which case no
    /// registry lookup can succeed.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.city.is_empty() || self.postal_code.is_empty()
    }
}
