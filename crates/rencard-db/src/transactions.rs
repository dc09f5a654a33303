//! Read queries over the payment transaction log.

use chrono::{DateTime, Utc};
use rencard_billing::Transaction;
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

/// A row from the `transactions` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TransactionRow {
    pub id: Uuid,
    pub paid_at: DateTime<Utc>,
    pub email: String,
    pub invoice_number: String,
    pub sku: String,
    pub quantity: i32,
    pub unit_price_ht_cents: i64,
    pub vat_rate_bp: i32,
    pub processor_fee_cents: i64,
}

impl From<TransactionRow> for Transaction {
    fn from(row: TransactionRow) -> Self {
        Transaction {
            id: row.id,
            date: row.paid_at,
            email: row.email,
            invoice_number: row.invoice_number,
            sku: row.sku,
            quantity: i64::from(row.quantity),
            unit_price_ht_cents: row.unit_price_ht_cents,
            vat_rate_bp: i64::from(row.vat_rate_bp),
            processor_fee_cents: row.processor_fee_cents,
        }
    }
}

/// Optional date bounds for transaction listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFilters {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// List transactions, most recent first, optionally bounded by paid date.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_transactions(
    pool: &PgPool,
    filters: TransactionFilters,
) -> Result<Vec<TransactionRow>, DbError> {
    let rows = sqlx::query_as::<_, TransactionRow>(
        "SELECT id, paid_at, email, invoice_number, sku, quantity, \
                unit_price_ht_cents, vat_rate_bp, processor_fee_cents \
         FROM transactions \
         WHERE ($1::timestamptz IS NULL OR paid_at >= $1) \
           AND ($2::timestamptz IS NULL OR paid_at <= $2) \
         ORDER BY paid_at DESC, id DESC",
    )
    .bind(filters.from)
    .bind(filters.to)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
