//! Read queries over the `communes` reference table.
//!
//! The registry is seeded from the national commune list and is read-only
//! at runtime.

use rencard_core::{Coordinate, LocationKey};
use rencard_geo::CommuneHit;
use sqlx::PgPool;

use crate::DbError;

/// A row from the `communes` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommuneRow {
    pub name: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<CommuneRow> for CommuneHit {
    fn from(row: CommuneRow) -> Self {
        CommuneHit {
            city: row.name,
            postal_code: row.postal_code,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

/// Coordinate for an exact (name, postal code) match, if the commune exists.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn commune_coordinate(
    pool: &PgPool,
    key: &LocationKey,
) -> Result<Option<Coordinate>, DbError> {
    let row: Option<(f64, f64)> = sqlx::query_as(
        "SELECT latitude::float8, longitude::float8 \
         FROM communes \
         WHERE name = $1 AND postal_code = $2 \
         LIMIT 1",
    )
    .bind(&key.city)
    .bind(&key.postal_code)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(latitude, longitude)| Coordinate::new(latitude, longitude)))
}

/// Communes whose name starts with `prefix`, case-insensitively.
///
/// Ordered by name ascending, capped at `limit` rows. ILIKE pattern
/// metacharacters in the prefix are escaped so `saint_%` matches literally.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn search_communes_by_prefix(
    pool: &PgPool,
    prefix: &str,
    limit: i64,
) -> Result<Vec<CommuneRow>, DbError> {
    let pattern = format!("{}%", escape_like(prefix));

    let rows = sqlx::query_as::<_, CommuneRow>(
        "SELECT name, postal_code, latitude::float8 AS latitude, longitude::float8 AS longitude \
         FROM communes \
         WHERE name ILIKE $1 \
         ORDER BY name ASC \
         LIMIT $2",
    )
    .bind(pattern)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_passes_plain_text_through() {
        assert_eq!(escape_like("Paris"), "Paris");
    }

    #[test]
    fn escape_like_escapes_pattern_metacharacters() {
        assert_eq!(escape_like("Saint_%"), "Saint\\_\\%");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn commune_row_converts_to_hit() {
        let row = CommuneRow {
            name: "Paris".to_string(),
            postal_code: "75001".to_string(),
            latitude: 48.8566,
            longitude: 2.3522,
        };
        let hit = CommuneHit::from(row);
        assert_eq!(hit.city, "Paris");
        assert_eq!(hit.coordinate(), Coordinate::new(48.8566, 2.3522));
    }
}
