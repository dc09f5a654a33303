//! Distance resolution and peer-list enrichment.

use std::collections::HashMap;

use rencard_core::{Coordinate, LocationKey};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::distance::distance_km;
use crate::store::{CommuneHit, LocationStore, PREFIX_SEARCH_MIN_CHARS};

/// A peer row as it comes back from a nearby-profiles query, before
/// distance enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyProfile {
    pub member_id: Uuid,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

/// A peer row with its resolved distance from "me", ready for display as
/// "N km away". `distance_km` is absent whenever either side has no
/// resolvable location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileWithDistance {
    #[serde(flatten)]
    pub profile: NearbyProfile,
    pub distance_km: Option<f64>,
}

/// Resolves member coordinates against an injected [`LocationStore`] and
/// computes great-circle distances.
///
/// Every operation degrades lookup failures to absent values: display code
/// always receives a well-typed (possibly absent) answer and never an error.
#[derive(Debug)]
pub struct ProximityResolver<S> {
    store: S,
}

impl<S: LocationStore> ProximityResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Coordinate for an exact (city, postal code) commune match.
    ///
    /// Returns `None` without touching the backend if either input is
    /// empty. Lookup failures are logged and yield `None`.
    pub async fn coordinate_by_city(&self, city: &str, postal_code: &str) -> Option<Coordinate> {
        let key = LocationKey::new(city, postal_code);
        if key.is_incomplete() {
            return None;
        }

        match self.store.commune_coordinate(&key).await {
            Ok(found) => found,
            Err(e) => {
                warn!(city, postal_code, error = %e, "commune coordinate lookup failed");
                None
            }
        }
    }

    /// "My" coordinate: the stored per-member coordinate when present,
    /// otherwise the profile's (city, postal code) resolved through the
    /// commune registry. `None` when both sources fail.
    pub async fn my_coordinate(&self, member_id: Uuid) -> Option<Coordinate> {
        match self.store.member_stored_coordinate(member_id).await {
            Ok(Some(coord)) => return Some(coord),
            Ok(None) => {}
            Err(e) => {
                warn!(%member_id, error = %e, "stored coordinate lookup failed");
            }
        }

        let key = match self.store.member_profile_location(member_id).await {
            Ok(Some(key)) => key,
            Ok(None) => return None,
            Err(e) => {
                warn!(%member_id, error = %e, "profile location lookup failed");
                return None;
            }
        };

        self.coordinate_by_city(&key.city, &key.postal_code).await
    }

    /// Attach a distance to each peer row, relative to `my_member_id`.
    ///
    /// "My" coordinate is resolved once. Peer coordinates are memoized by
    /// the literal (city, postal code) pair for the duration of the call,
    /// so duplicate communes in the input trigger a single registry lookup.
    pub async fn enrich_with_distances(
        &self,
        rows: Vec<NearbyProfile>,
        my_member_id: Uuid,
    ) -> Vec<ProfileWithDistance> {
        let mine = self.my_coordinate(my_member_id).await;

        let mut memo: HashMap<LocationKey, Option<Coordinate>> = HashMap::new();
        let mut enriched = Vec::with_capacity(rows.len());

        for profile in rows {
            let peer = match (profile.city.as_deref(), profile.postal_code.as_deref()) {
                (Some(city), Some(postal_code)) => {
                    let key = LocationKey::new(city, postal_code);
                    if let Some(cached) = memo.get(&key) {
                        debug!(city, postal_code, "commune coordinate memo hit");
                        *cached
                    } else {
                        let resolved = self.coordinate_by_city(city, postal_code).await;
                        memo.insert(key, resolved);
                        resolved
                    }
                }
                _ => None,
            };

            enriched.push(ProfileWithDistance {
                distance_km: distance_km(mine, peer),
                profile,
            });
        }

        enriched
    }

    /// Commune autocomplete: case-insensitive starts-with match on the city
    /// name, alphabetical, at most 10 rows.
    ///
    /// Inputs shorter than 2 characters return an empty list without a
    /// backend call; backend failures are logged and return an empty list.
    pub async fn search_cities(&self, partial: &str) -> Vec<CommuneHit> {
        if partial.chars().count() < PREFIX_SEARCH_MIN_CHARS {
            return Vec::new();
        }

        match self.store.communes_with_prefix(partial).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(partial, error = %e, "commune prefix search failed");
                Vec::new()
            }
        }
    }
}
