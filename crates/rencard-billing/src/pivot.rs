//! Per-product pivot over a flat transaction list.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::amounts::line_amounts;

/// One payment transaction, as fetched from the payment log.
///
/// Monetary fields are integer minor units; the VAT rate is in basis points
/// (2000 = 20.00%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub email: String,
    pub invoice_number: String,
    pub sku: String,
    pub quantity: i64,
    pub unit_price_ht_cents: i64,
    pub vat_rate_bp: i64,
    pub processor_fee_cents: i64,
}

/// Accumulated totals for one pivot column (one product SKU).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColumnTotals {
    /// Number of transactions with a positive quantity.
    pub count: i64,
    pub total_tva: i64,
    pub total_ttc: i64,
    pub processor_fees: i64,
    pub net: i64,
}

/// One detail row of the pivot: a purchase keyed by email and invoice
/// number, with a one-hot cell per configured column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub key: String,
    pub cells: HashMap<String, u8>,
}

/// The assembled pivot: column ids in registry order, one detail row per
/// transaction, and per-column totals.
#[derive(Debug, Clone, Serialize)]
pub struct PivotReport {
    pub columns: Vec<String>,
    pub details: Vec<DetailRow>,
    pub totals: HashMap<String, ColumnTotals>,
}

/// Build the per-product pivot.
///
/// Transactions whose SKU is in `columns` mark that column's cell and
/// accumulate into its totals. Transactions with an unregistered SKU still
/// emit a detail row (all cells zero) but touch no totals, so they are
/// silently excluded from aggregate reporting.
///
/// Detail-row keys (`email — invoice`) are not deduplicated: identical
/// email/invoice pairs produce one row each. Callers that need strict
/// one-row-per-invoice output must enforce that upstream.
#[must_use]
pub fn build_pivot(transactions: &[Transaction], columns: &[String]) -> PivotReport {
    let mut totals: HashMap<String, ColumnTotals> = columns
        .iter()
        .map(|sku| (sku.clone(), ColumnTotals::default()))
        .collect();

    let mut details = Vec::with_capacity(transactions.len());

    for tx in transactions {
        let mut cells: HashMap<String, u8> =
            columns.iter().map(|sku| (sku.clone(), 0)).collect();

        if let Some(column) = totals.get_mut(&tx.sku) {
            let amounts = line_amounts(tx);

            cells.insert(tx.sku.clone(), 1);
            if tx.quantity > 0 {
                column.count += 1;
            }
            column.total_tva += amounts.tva;
            column.total_ttc += amounts.ttc;
            column.processor_fees += tx.processor_fee_cents.max(0);
            column.net += amounts.net;
        }

        details.push(DetailRow {
            key: format!("{} — {}", tx.email, tx.invoice_number),
            cells,
        });
    }

    PivotReport {
        columns: columns.to_vec(),
        details,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<String> {
        vec![
            "ABO_MOIS_ESSENTIEL".to_string(),
            "ABO_MOIS_PREMIUM".to_string(),
        ]
    }

    fn tx(email: &str, invoice: &str, sku: &str) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            date: Utc::now(),
            email: email.to_string(),
            invoice_number: invoice.to_string(),
            sku: sku.to_string(),
            quantity: 1,
            unit_price_ht_cents: 1000,
            vat_rate_bp: 2000,
            processor_fee_cents: 50,
        }
    }

    #[test]
    fn empty_input_yields_empty_details_and_zero_totals() {
        let report = build_pivot(&[], &columns());
        assert_eq!(report.columns, columns());
        assert!(report.details.is_empty());
        for sku in &report.columns {
            assert_eq!(report.totals[sku], ColumnTotals::default());
        }
    }

    #[test]
    fn single_essentiel_transaction_populates_its_column() {
        let report = build_pivot(
            &[tx("membre@example.fr", "FAC-0001", "ABO_MOIS_ESSENTIEL")],
            &columns(),
        );

        let totals = &report.totals["ABO_MOIS_ESSENTIEL"];
        assert_eq!(totals.count, 1);
        assert_eq!(totals.total_tva, 200);
        assert_eq!(totals.total_ttc, 1200);
        assert_eq!(totals.processor_fees, 50);
        assert_eq!(totals.net, 950);

        assert_eq!(report.totals["ABO_MOIS_PREMIUM"], ColumnTotals::default());

        let row = &report.details[0];
        assert_eq!(row.key, "membre@example.fr — FAC-0001");
        assert_eq!(row.cells["ABO_MOIS_ESSENTIEL"], 1);
        assert_eq!(row.cells["ABO_MOIS_PREMIUM"], 0);
    }

    #[test]
    fn unregistered_sku_emits_zero_row_and_no_totals() {
        let report = build_pivot(
            &[tx("membre@example.fr", "FAC-0002", "LEGACY_PACK")],
            &columns(),
        );

        assert_eq!(report.details.len(), 1);
        let row = &report.details[0];
        assert!(row.cells.values().all(|&cell| cell == 0));
        for sku in &report.columns {
            assert_eq!(report.totals[sku], ColumnTotals::default());
        }
    }

    #[test]
    fn totals_accumulate_across_transactions() {
        let report = build_pivot(
            &[
                tx("a@example.fr", "FAC-0001", "ABO_MOIS_ESSENTIEL"),
                tx("b@example.fr", "FAC-0002", "ABO_MOIS_ESSENTIEL"),
                tx("c@example.fr", "FAC-0003", "ABO_MOIS_PREMIUM"),
            ],
            &columns(),
        );

        let essentiel = &report.totals["ABO_MOIS_ESSENTIEL"];
        assert_eq!(essentiel.count, 2);
        assert_eq!(essentiel.total_ttc, 2400);
        assert_eq!(essentiel.net, 1900);

        let premium = &report.totals["ABO_MOIS_PREMIUM"];
        assert_eq!(premium.count, 1);
        assert_eq!(premium.total_ttc, 1200);
    }

    #[test]
    fn zero_quantity_transaction_is_not_counted_but_fees_accrue() {
        let mut zero_qty = tx("a@example.fr", "FAC-0001", "ABO_MOIS_ESSENTIEL");
        zero_qty.quantity = 0;

        let report = build_pivot(&[zero_qty], &columns());
        let totals = &report.totals["ABO_MOIS_ESSENTIEL"];
        assert_eq!(totals.count, 0);
        assert_eq!(totals.total_ttc, 0);
        assert_eq!(totals.processor_fees, 50);
        assert_eq!(totals.net, -50);
    }

    #[test]
    fn duplicate_email_invoice_pairs_produce_duplicate_rows() {
        let report = build_pivot(
            &[
                tx("a@example.fr", "FAC-0001", "ABO_MOIS_ESSENTIEL"),
                tx("a@example.fr", "FAC-0001", "ABO_MOIS_ESSENTIEL"),
            ],
            &columns(),
        );

        assert_eq!(report.details.len(), 2);
        assert_eq!(report.details[0].key, report.details[1].key);
        assert_eq!(report.totals["ABO_MOIS_ESSENTIEL"].count, 2);
    }

    #[test]
    fn report_serializes_for_the_dashboard() {
        let report = build_pivot(
            &[tx("membre@example.fr", "FAC-0001", "ABO_MOIS_ESSENTIEL")],
            &columns(),
        );
        let json = serde_json::to_value(&report).expect("serialization failed");
        assert_eq!(json["columns"][0], "ABO_MOIS_ESSENTIEL");
        assert_eq!(json["totals"]["ABO_MOIS_ESSENTIEL"]["net"], 950);
    }
}
