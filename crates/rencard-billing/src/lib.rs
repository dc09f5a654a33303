//! Billing report aggregation.
//!
//! Turns a flat list of payment transactions into a per-product pivot:
//! one detail row per purchase plus per-column totals. All arithmetic is
//! integer minor currency units; nothing here touches the database.

pub mod amounts;
pub mod pivot;

pub use amounts::{line_amounts, LineAmounts};
pub use pivot::{build_pivot, ColumnTotals, DetailRow, PivotReport, Transaction};
