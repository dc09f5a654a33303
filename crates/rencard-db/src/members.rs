//! Read queries over member locations and profiles.

use chrono::{DateTime, Utc};
use rencard_core::{Coordinate, LocationKey};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

/// A row from the `member_locations` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MemberLocationRow {
    pub member_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub updated_at: DateTime<Utc>,
}

/// A member's directly stored coordinate, if they saved one.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn stored_coordinate(
    pool: &PgPool,
    member_id: Uuid,
) -> Result<Option<Coordinate>, DbError> {
    let row = sqlx::query_as::<_, MemberLocationRow>(
        "SELECT member_id, latitude::float8 AS latitude, \
                longitude::float8 AS longitude, updated_at \
         FROM member_locations \
         WHERE member_id = $1",
    )
    .bind(member_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|loc| Coordinate::new(loc.latitude, loc.longitude)))
}

/// The (city, postal code) pair from a member's profile.
///
/// Returns `None` when the profile is missing or either field is unset —
/// a half-filled location cannot be resolved against the commune registry.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn profile_location(
    pool: &PgPool,
    member_id: Uuid,
) -> Result<Option<LocationKey>, DbError> {
    let row: Option<(Option<String>, Option<String>)> = sqlx::query_as(
        "SELECT city, postal_code \
         FROM profiles \
         WHERE member_id = $1",
    )
    .bind(member_id)
    .fetch_optional(pool)
    .await?;

    Ok(match row {
        Some((Some(city), Some(postal_code))) => Some(LocationKey::new(city, postal_code)),
        _ => None,
    })
}
