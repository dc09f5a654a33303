//! Postgres-backed [`LocationStore`] used by the proximity resolver in
//! production.

use rencard_core::{Coordinate, LocationKey};
use rencard_geo::{CommuneHit, LocationStore};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{communes, members, DbError};

/// The production location store: thin query adapter over a [`PgPool`].
///
/// Constructed explicitly and passed into
/// [`rencard_geo::ProximityResolver::new`]; there is no process-wide
/// instance.
#[derive(Debug, Clone)]
pub struct PgLocationStore {
    pool: PgPool,
}

impl PgLocationStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl LocationStore for PgLocationStore {
    type Error = DbError;

    async fn commune_coordinate(
        &self,
        key: &LocationKey,
    ) -> Result<Option<Coordinate>, Self::Error> {
        communes::commune_coordinate(&self.pool, key).await
    }

    async fn member_stored_coordinate(
        &self,
        member_id: Uuid,
    ) -> Result<Option<Coordinate>, Self::Error> {
        members::stored_coordinate(&self.pool, member_id).await
    }

    async fn member_profile_location(
        &self,
        member_id: Uuid,
    ) -> Result<Option<LocationKey>, Self::Error> {
        members::profile_location(&self.pool, member_id).await
    }

    async fn communes_with_prefix(&self, prefix: &str) -> Result<Vec<CommuneHit>, Self::Error> {
        let limit = i64::try_from(rencard_geo::store::PREFIX_SEARCH_LIMIT).unwrap_or(10);
        let rows = communes::search_communes_by_prefix(&self.pool, prefix, limit).await?;
        Ok(rows.into_iter().map(CommuneHit::from).collect())
    }
}
