//! Locale-aware amount formatting for display and document rendering.
//!
//! These functions produce text for humans. Never parse their output back
//! into numbers.

use rust_decimal::{Decimal, RoundingStrategy};

use super::currencies::minor_units;
use super::types::Language;

/// No-break space, used by Czech number formatting.
const NBSP: char = '\u{a0}';

/// Format `amount` in `currency_code` for the language given by `language_tag`.
///
/// Czech invoices in CZK use the `Kč` symbol (`1 500,00 Kč`); everything else
/// gets the ISO code as a suffix (`1,500.00 EUR`, `1 500,00 EUR`).
pub fn format_currency(amount: Decimal, currency_code: &str, language_tag: &str) -> String {
    format_amount(amount, currency_code, Language::from_tag(language_tag))
}

/// [`format_currency`] with an already resolved [`Language`].
pub fn format_amount(amount: Decimal, currency_code: &str, language: Language) -> String {
    let number = format_number(amount, minor_units(currency_code), language);
    if language == Language::Cs && currency_code == "CZK" {
        format!("{number}{NBSP}Kč")
    } else {
        format!("{number} {currency_code}")
    }
}

/// Format a plain number with `dp` fraction digits using the grouping and
/// decimal separators of `language`.
pub fn format_number(amount: Decimal, dp: u32, language: Language) -> String {
    let (group_sep, decimal_sep) = match language {
        Language::Cs => (NBSP, ','),
        Language::En => (',', '.'),
    };

    let mut rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(dp);

    let digits = rounded.to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(group_sep);
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push(decimal_sep);
        out.push_str(frac);
    }
    out
}
