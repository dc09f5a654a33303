//! Proximity resolution for nearby-profile displays.
//!
//! Answers "how far is member A from member B" from a commune registry and
//! per-member stored coordinates, and enriches peer lists with a distance
//! field. All lookup failures degrade to absent values; nothing in this
//! crate panics or propagates a store error to display code.

pub mod distance;
pub mod resolver;
pub mod store;

pub use distance::{distance_km, haversine_km, EARTH_RADIUS_KM};
pub use resolver::{NearbyProfile, ProfileWithDistance, ProximityResolver};
pub use store::{CommuneHit, LocationStore};
