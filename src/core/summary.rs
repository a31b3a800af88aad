use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::types::InvoiceItem;

/// VAT breakdown of an invoice, grouped by rate.
///
/// Amounts are unrounded; use [`VatSummary::rounded`] for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatSummary {
    /// Per-rate totals in ascending rate order. Rates are unique.
    pub rates: Vec<VatRateTotal>,
    /// Sum of all item base amounts.
    pub base_total: Decimal,
    /// Sum of all VAT amounts.
    pub vat_total: Decimal,
    /// `base_total + vat_total`.
    pub grand_total: Decimal,
}

/// Totals for one VAT rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatRateTotal {
    /// Rate percentage, normalized (`21.0` is stored as `21`).
    pub rate: Decimal,
    /// Sum of base amounts taxed at this rate.
    pub base_amount: Decimal,
    /// Sum of VAT amounts at this rate.
    pub vat_amount: Decimal,
}

impl VatSummary {
    /// VAT amount accumulated for `rate`, if any item uses it.
    pub fn vat_for_rate(&self, rate: Decimal) -> Option<Decimal> {
        self.rates
            .iter()
            .find(|r| r.rate == rate)
            .map(|r| r.vat_amount)
    }

    /// Copy with every amount rounded half away from zero to `dp` places.
    ///
    /// Per-rate amounts are rounded independently, so the rounded rates may
    /// not add up to the rounded totals.
    pub fn rounded(&self, dp: u32) -> Self {
        let round =
            |v: Decimal| v.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        Self {
            rates: self
                .rates
                .iter()
                .map(|r| VatRateTotal {
                    rate: r.rate,
                    base_amount: round(r.base_amount),
                    vat_amount: round(r.vat_amount),
                })
                .collect(),
            base_total: round(self.base_total),
            vat_total: round(self.vat_total),
            grand_total: round(self.grand_total),
        }
    }
}

/// Aggregate line items into a [`VatSummary`].
///
/// No rounding is applied during accumulation, so `grand_total` equals the
/// sum of each item's own total.
pub fn summarize(items: &[InvoiceItem]) -> VatSummary {
    let mut by_rate: BTreeMap<Decimal, (Decimal, Decimal)> = BTreeMap::new();
    let mut base_total = Decimal::ZERO;

    for item in items {
        let base = item.base_amount();
        let vat = item.vat_amount();
        base_total += base;

        let entry = by_rate
            .entry(item.vat_rate.normalize())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += base;
        entry.1 += vat;
    }

    let rates: Vec<VatRateTotal> = by_rate
        .into_iter()
        .map(|(rate, (base_amount, vat_amount))| VatRateTotal {
            rate,
            base_amount,
            vat_amount,
        })
        .collect();
    let vat_total: Decimal = rates.iter().map(|r| r.vat_amount).sum();

    VatSummary {
        rates,
        base_total,
        vat_total,
        grand_total: base_total + vat_total,
    }
}
