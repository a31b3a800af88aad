//! SPAYD (Short Payment Descriptor) strings for Czech QR payments.
//!
//! The format is `SPD*1.0*KEY:value*KEY:value...`. Czech banking apps are
//! picky about key order, so fields are always emitted as ACC, AM, CC, MSG,
//! X-VS.

use rust_decimal::{Decimal, RoundingStrategy};

use super::iban::to_iban;

/// Header of every SPAYD string, including the format version.
pub const SPAYD_HEADER: &str = "SPD*1.0";

/// Build a SPAYD payment string.
///
/// `account` may be a Czech account number or an IBAN; it goes through
/// [`to_iban`]. Empty `variable_symbol` and `message` are omitted.
pub fn build_spayd(
    account: &str,
    amount: Decimal,
    currency: &str,
    variable_symbol: &str,
    message: &str,
) -> String {
    SpaydBuilder::new(account, amount, currency)
        .variable_symbol(variable_symbol)
        .message(message)
        .build()
}

/// Uppercase `message` and drop every character outside `A-Z 0-9 space $%*+-./:`.
pub fn sanitize_message(message: &str) -> String {
    message
        .to_uppercase()
        .chars()
        .filter(|c| {
            c.is_ascii_uppercase()
                || c.is_ascii_digit()
                || matches!(c, ' ' | '$' | '%' | '*' | '+' | '-' | '.' | '/' | ':')
        })
        .collect()
}

/// Amount with exactly two decimals and a dot separator, independent of locale.
pub fn format_spayd_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Builder for SPAYD strings.
///
/// ```
/// use fakturace::payment::SpaydBuilder;
/// use rust_decimal_macros::dec;
///
/// let spayd = SpaydBuilder::new("19-2000145399/0800", dec!(1500), "CZK")
///     .variable_symbol("2024001")
///     .build();
/// assert_eq!(spayd, "SPD*1.0*ACC:CZ6508000000192000145399*AM:1500.00*CC:CZK*X-VS:2024001");
/// ```
#[derive(Debug, Clone)]
pub struct SpaydBuilder {
    account: String,
    amount: Decimal,
    currency: String,
    message: Option<String>,
    variable_symbol: Option<String>,
}

impl SpaydBuilder {
    pub fn new(account: impl Into<String>, amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            amount,
            currency: currency.into(),
            message: None,
            variable_symbol: None,
        }
    }

    /// Message for the payee. Sanitized on build; empty means none.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        let message: String = message.into();
        self.message = (!message.is_empty()).then_some(message);
        self
    }

    /// Variable symbol, emitted verbatim; empty means none.
    pub fn variable_symbol(mut self, vs: impl Into<String>) -> Self {
        let vs: String = vs.into();
        self.variable_symbol = (!vs.is_empty()).then_some(vs);
        self
    }

    pub fn build(&self) -> String {
        let mut spayd = format!(
            "{SPAYD_HEADER}*ACC:{}*AM:{}*CC:{}",
            to_iban(&self.account),
            format_spayd_amount(self.amount),
            self.currency
        );
        if let Some(message) = &self.message {
            spayd.push_str("*MSG:");
            spayd.push_str(&sanitize_message(message));
        }
        if let Some(vs) = &self.variable_symbol {
            spayd.push_str("*X-VS:");
            spayd.push_str(vs);
        }
        spayd
    }
}
