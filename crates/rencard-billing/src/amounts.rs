//! Per-line amount arithmetic in integer minor currency units.

use serde::Serialize;

use crate::pivot::Transaction;

/// Computed amounts for one transaction line, all in minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineAmounts {
    /// Pre-tax gross: quantity × unit price.
    pub ht: i64,
    /// Tax amount: `ht` × VAT rate (basis points), rounded to the nearest cent.
    pub tva: i64,
    /// Tax-inclusive gross: `ht + tva`.
    pub ttc: i64,
    /// Net revenue basis: `ht` minus the payment-processor fee. The fee is
    /// subtracted from the pre-tax gross, not from `ttc`; tax is excluded
    /// from net by construction.
    pub net: i64,
}

/// Compute the amounts for one transaction.
///
/// Inputs are assumed pre-validated; negative quantities, prices, rates, or
/// fees are coerced to zero rather than rejected.
#[must_use]
pub fn line_amounts(tx: &Transaction) -> LineAmounts {
    let quantity = tx.quantity.max(0);
    let unit_price = tx.unit_price_ht_cents.max(0);
    let vat_rate_bp = tx.vat_rate_bp.max(0);
    let fee = tx.processor_fee_cents.max(0);

    let ht = quantity * unit_price;
    let tva = round_bp(ht, vat_rate_bp);
    let ttc = ht + tva;
    let net = ht - fee;

    LineAmounts { ht, tva, ttc, net }
}

/// `amount × rate_bp / 10000`, rounded to the nearest integer.
///
/// Half-cent values round up. Both operands are non-negative here.
fn round_bp(amount: i64, rate_bp: i64) -> i64 {
    (amount * rate_bp + 5_000) / 10_000
}
