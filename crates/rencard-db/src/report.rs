//! Revenue report assembly: transaction log → per-product pivot.

use rencard_billing::{build_pivot, PivotReport, Transaction};
use rencard_core::ProductsFile;
use sqlx::PgPool;

use crate::transactions::{list_transactions, TransactionFilters};
use crate::DbError;

/// Build the revenue pivot for the transactions matching `filters`, with
/// one column per registered product.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the transaction query fails.
pub async fn revenue_report(
    pool: &PgPool,
    products: &ProductsFile,
    filters: TransactionFilters,
) -> Result<PivotReport, DbError> {
    let rows = list_transactions(pool, filters).await?;
    let transactions: Vec<Transaction> = rows.into_iter().map(Transaction::from).collect();
    Ok(build_pivot(&transactions, &products.column_ids()))
}
