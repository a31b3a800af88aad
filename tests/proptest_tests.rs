//! Property-based tests for the fakturace crate.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "payment")]

use fakturace::core::*;
use fakturace::payment::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Generate a reasonable price (-9999.99 to 99999.99), credit lines included.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (-999_999i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generate a quantity (0.000 to 999.999).
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|milli| Decimal::new(milli, 3))
}

/// Czech VAT rates, with some written with a trailing fraction.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::new(0, 0)),
        Just(Decimal::new(10, 0)),
        Just(Decimal::new(12, 0)),
        Just(Decimal::new(15, 0)),
        Just(Decimal::new(21, 0)),
        Just(Decimal::new(210, 1)),
    ]
}

fn arb_items() -> impl Strategy<Value = Vec<InvoiceItem>> {
    prop::collection::vec(
        (arb_quantity(), arb_price(), arb_rate())
            .prop_map(|(q, p, r)| InvoiceItem::new("item", q, p, r)),
        0..20,
    )
}

/// Czech account in local format: optional prefix, number, bank code.
fn arb_czech_account() -> impl Strategy<Value = String> {
    (
        prop::option::of(1u32..999_999),
        1u64..9_999_999_999,
        0u16..10_000,
    )
        .prop_map(|(prefix, number, bank)| match prefix {
            Some(p) => format!("{p}-{number}/{bank}"),
            None => format!("{number}/{bank}"),
        })
}

proptest! {
    /// Grand total equals the per-item sum of base × (1 + rate/100).
    #[test]
    fn grand_total_matches_item_totals(items in arb_items()) {
        let summary = summarize(&items);
        let expected: Decimal = items
            .iter()
            .map(|i| i.quantity * i.unit_price * (Decimal::ONE + i.vat_rate / Decimal::ONE_HUNDRED))
            .sum();
        prop_assert_eq!(summary.grand_total, expected);
        prop_assert_eq!(summary.grand_total, invoice_total(&items));
    }

    /// Per-rate totals add up and rates are unique and ascending.
    #[test]
    fn rate_totals_consistent(items in arb_items()) {
        let summary = summarize(&items);
        let vat_sum: Decimal = summary.rates.iter().map(|r| r.vat_amount).sum();
        let base_sum: Decimal = summary.rates.iter().map(|r| r.base_amount).sum();
        prop_assert_eq!(vat_sum, summary.vat_total);
        prop_assert_eq!(base_sum, summary.base_total);
        for pair in summary.rates.windows(2) {
            prop_assert!(pair[0].rate < pair[1].rate);
        }
    }

    /// Converted accounts are valid 24-character Czech IBANs and conversion is idempotent.
    #[test]
    fn czech_accounts_convert_to_valid_iban(account in arb_czech_account()) {
        let iban = to_iban(&account);
        prop_assert_eq!(iban.len(), CZ_IBAN_LEN);
        prop_assert!(iban.starts_with("CZ"));
        prop_assert!(is_valid_iban(&iban));
        prop_assert_eq!(to_iban(&iban), iban.clone());
    }

    /// to_iban never panics and returns the input when it cannot convert it.
    #[test]
    fn to_iban_total(account in ".{0,40}") {
        let out = to_iban(&account);
        if Iban::from_czech(&account).is_err() {
            prop_assert_eq!(out, account);
        }
    }

    /// Sanitized messages only contain the SPAYD-safe alphabet.
    #[test]
    fn sanitized_message_alphabet(msg in ".{0,60}") {
        let clean = sanitize_message(&msg);
        prop_assert!(clean.chars().all(|c| c.is_ascii_uppercase()
            || c.is_ascii_digit()
            || " $%*+-./:".contains(c)));
    }

    /// The next number is above every existing number of the year and stays in the year.
    #[test]
    fn next_number_exceeds_existing(
        year in 2000i32..2100,
        seqs in prop::collection::vec(1u64..999, 0..30),
    ) {
        let base = year as u64 * 1000;
        let existing: Vec<u64> = seqs.iter().map(|s| base + s).collect();
        let next = next_invoice_number(existing.iter().copied(), year).unwrap();
        prop_assert!(existing.iter().all(|&n| n < next));
        prop_assert_eq!(invoice_year(next), Some(year));
    }

    /// Formatting never panics and keeps the currency suffix.
    #[test]
    fn format_currency_suffix(cents in -1_000_000_000i64..1_000_000_000i64, cs in any::<bool>()) {
        let amount = Decimal::new(cents, 2);
        let lang = if cs { "cs" } else { "en" };
        let czk = format_currency(amount, "CZK", lang);
        let eur = format_currency(amount, "EUR", lang);
        prop_assert!(eur.ends_with(" EUR"));
        if cs {
            prop_assert!(czk.ends_with("\u{a0}Kč"), "czk.ends_with(NBSP Kč) failed: {:?}", czk);
        } else {
            prop_assert!(czk.ends_with(" CZK"));
        }
    }
}
