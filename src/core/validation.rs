use chrono::Datelike;
use rust_decimal::Decimal;

use super::currencies::is_known_currency_code;
use super::error::ValidationError;
use super::numbering::invoice_year;
use super::types::*;

/// Validate an invoice record before it is persisted or rendered.
///
/// Returns all errors found; an empty vector means the invoice is valid.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.customer.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "customer.name",
            "customer name is required",
        ));
    }

    if !is_known_currency_code(&invoice.currency_code) {
        errors.push(ValidationError::new(
            "currency_code",
            format!("unknown ISO 4217 currency code '{}'", invoice.currency_code),
        ));
    }

    match invoice_year(invoice.number) {
        Some(year) if year == invoice.issue_date.year() => {}
        Some(year) => errors.push(ValidationError::new(
            "number",
            format!(
                "invoice number {} belongs to year {year}, issued in {}",
                invoice.number,
                invoice.issue_date.year()
            ),
        )),
        None => errors.push(ValidationError::new(
            "number",
            format!(
                "invoice number {} is not of the form YYYYNNN",
                invoice.number
            ),
        )),
    }

    if invoice.due_date < invoice.issue_date {
        errors.push(ValidationError::new(
            "due_date",
            "due date must not be before the issue date",
        ));
    }

    if invoice.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "at least one item is required",
        ));
    }

    for (i, item) in invoice.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    errors
}

fn validate_item(item: &InvoiceItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.quantity < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must not be negative",
        ));
    }

    if item.vat_rate < Decimal::ZERO || item.vat_rate > Decimal::ONE_HUNDRED {
        errors.push(ValidationError::new(
            format!("{prefix}.vat_rate"),
            format!("VAT rate {}% outside 0-100", item.vat_rate),
        ));
    }
}
