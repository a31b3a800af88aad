use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An issued invoice as loaded from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Year-scoped invoice number, e.g. `2024001` (see [`next_invoice_number`](super::next_invoice_number)).
    pub number: u64,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Date of taxable supply (DUZP).
    pub taxable_date: NaiveDate,
    /// Invoice currency code (ISO 4217, e.g. "CZK").
    pub currency_code: String,
    /// Language the invoice is rendered in.
    pub language: Language,
    /// Reverse-charge regime (přenesená daňová povinnost).
    pub is_vat_reverse_charge: bool,
    /// Customer the invoice is issued to.
    pub customer: Party,
    /// Invoice lines in display order.
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Total amount due including VAT, unrounded.
    pub fn total(&self) -> Decimal {
        invoice_total(&self.items)
    }
}

/// Sum of `quantity * unit_price * (1 + vat_rate / 100)` over all items.
pub fn invoice_total(items: &[InvoiceItem]) -> Decimal {
    items.iter().map(InvoiceItem::total).sum()
}

/// Supplier or customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Company or trading name.
    pub name: String,
    /// Postal address as free text.
    pub address: Option<String>,
    /// IČO: company identification number.
    pub ico: Option<String>,
    /// DIČ: VAT identification number (e.g. "CZ12345678").
    pub dic: Option<String>,
    /// Bank account in Czech local format or as an IBAN. Only meaningful for suppliers.
    pub bank_account: Option<String>,
    /// Whether the party is registered for VAT.
    pub is_vat_payer: bool,
}

/// A single invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Free-text description.
    pub description: String,
    /// Invoiced quantity. Must not be negative.
    pub quantity: Decimal,
    /// Net price per unit. Negative for credit lines.
    pub unit_price: Decimal,
    /// VAT rate percentage (e.g. 21).
    pub vat_rate: Decimal,
}

impl InvoiceItem {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        vat_rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            vat_rate,
        }
    }

    /// `quantity * unit_price`.
    pub fn base_amount(&self) -> Decimal {
        self.quantity * self.unit_price
    }

    /// `base_amount * vat_rate / 100`.
    pub fn vat_amount(&self) -> Decimal {
        self.base_amount() * self.vat_rate / Decimal::ONE_HUNDRED
    }

    /// Line total including VAT.
    pub fn total(&self) -> Decimal {
        self.base_amount() + self.vat_amount()
    }
}

/// Language an invoice is presented in.
///
/// Only Czech and English are supported; unknown tags fall back to English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Czech, formatted per `cs-CZ`.
    #[default]
    Cs,
    /// English, formatted per `en-GB`.
    En,
}

impl Language {
    /// Resolve a BCP 47 language tag such as "cs", "cs-CZ" or "en-GB".
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("cs") {
            Self::Cs
        } else {
            Self::En
        }
    }

    /// Short language code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::En => "en",
        }
    }

    /// Locale whose number conventions this language uses.
    pub fn locale(&self) -> &'static str {
        match self {
            Self::Cs => "cs-CZ",
            Self::En => "en-GB",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn item_amounts() {
        let item = InvoiceItem::new("Konzultace", dec!(3), dec!(1000), dec!(21));
        assert_eq!(item.base_amount(), dec!(3000));
        assert_eq!(item.vat_amount(), dec!(630));
        assert_eq!(item.total(), dec!(3630));
    }

    #[test]
    fn credit_line_is_negative() {
        let item = InvoiceItem::new("Dobropis", dec!(1), dec!(-200), dec!(21));
        assert_eq!(item.total(), dec!(-242));
    }

    #[test]
    fn language_tags() {
        assert_eq!(Language::from_tag("cs"), Language::Cs);
        assert_eq!(Language::from_tag("cs-CZ"), Language::Cs);
        assert_eq!(Language::from_tag("CS"), Language::Cs);
        assert_eq!(Language::from_tag("en"), Language::En);
        assert_eq!(Language::from_tag("de"), Language::En);
        assert_eq!(Language::from_tag(""), Language::En);
        assert_eq!(Language::Cs.locale(), "cs-CZ");
        assert_eq!(Language::En.locale(), "en-GB");
    }
}
