//! The read-only location lookup collaborator.
//!
//! The resolver takes an explicit store handle instead of reaching for a
//! process-wide client, so tests substitute an in-memory fake and the
//! production path plugs in the Postgres-backed implementation from
//! `rencard-db`.

use rencard_core::{Coordinate, LocationKey};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum rows returned by a commune prefix search.
pub const PREFIX_SEARCH_LIMIT: usize = 10;

/// Minimum prefix length before a prefix search hits the backend.
pub const PREFIX_SEARCH_MIN_CHARS: usize = 2;

/// One commune autocomplete hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuneHit {
    pub city: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CommuneHit {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Read-only lookups the proximity resolver depends on.
///
/// Implementations report failures through their `Error` type; the resolver
/// decides what a failure means for display (always: absent).
pub trait LocationStore {
    type Error: std::fmt::Display;

    /// Coordinate for an exact (city, postal code) commune match.
    fn commune_coordinate(
        &self,
        key: &LocationKey,
    ) -> impl std::future::Future<Output = Result<Option<Coordinate>, Self::Error>> + Send;

    /// A member's directly stored coordinate, if any.
    fn member_stored_coordinate(
        &self,
        member_id: Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Coordinate>, Self::Error>> + Send;

    /// The (city, postal code) pair from a member's profile, if both are set.
    fn member_profile_location(
        &self,
        member_id: Uuid,
    ) -> impl std::future::Future<Output = Result<Option<LocationKey>, Self::Error>> + Send;

    /// Communes whose name starts with `prefix`, case-insensitively,
    /// alphabetical, at most [`PREFIX_SEARCH_LIMIT`] rows.
    fn communes_with_prefix(
        &self,
        prefix: &str,
    ) -> impl std::future::Future<Output = Result<Vec<CommuneHit>, Self::Error>> + Send;
}
