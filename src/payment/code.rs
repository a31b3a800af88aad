use serde::{Deserialize, Serialize};

use super::spayd::build_spayd;
use crate::core::{Invoice, Party};

/// Currency assumed when an invoice has none set.
pub const DEFAULT_CURRENCY: &str = "CZK";

/// Rendering options handed to the QR encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrOptions {
    /// Quiet zone around the code, in modules.
    pub margin: u32,
    /// Image width in pixels.
    pub width: u32,
    /// Module colour, `#RRGGBB`.
    pub dark: String,
    /// Background colour, `#RRGGBB`.
    pub light: String,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            margin: 1,
            width: 200,
            dark: "#000000".to_string(),
            light: "#FFFFFF".to_string(),
        }
    }
}

/// Turns a payload into a QR image.
///
/// Implemented outside this crate, typically on top of a QR library that
/// returns a `data:image/png;base64,...` URL.
pub trait QrEncoder {
    type Error: std::error::Error;

    fn encode(&self, payload: &str, options: &QrOptions) -> Result<String, Self::Error>;
}

/// Payment information attached to an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCode {
    /// SPAYD payload.
    pub spayd: String,
    /// QR image of `spayd`, or `None` if encoding failed.
    pub qr_data_url: Option<String>,
}

/// SPAYD string for paying `invoice` to `supplier`'s bank account.
///
/// Uses the invoice total including VAT, the invoice number as variable
/// symbol, and `Faktura {number}` as message. Returns `None` when the supplier
/// has no bank account.
pub fn invoice_spayd(invoice: &Invoice, supplier: &Party) -> Option<String> {
    let account = supplier
        .bank_account
        .as_deref()
        .filter(|a| !a.is_empty())?;
    let currency = match invoice.currency_code.as_str() {
        "" => DEFAULT_CURRENCY,
        code => code,
    };
    let number = invoice.number.to_string();
    Some(build_spayd(
        account,
        invoice.total(),
        currency,
        &number,
        &format!("Faktura {number}"),
    ))
}

/// Build the payment code for an invoice, including its QR image.
///
/// A failing encoder does not fail the invoice: the error is logged and the
/// code is returned without an image.
pub fn payment_code<E: QrEncoder>(
    invoice: &Invoice,
    supplier: &Party,
    encoder: &E,
    options: &QrOptions,
) -> Option<PaymentCode> {
    let spayd = invoice_spayd(invoice, supplier)?;
    let qr_data_url = match encoder.encode(&spayd, options) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::warn!(invoice = invoice.number, error = %err, "QR code generation failed");
            None
        }
    };
    Some(PaymentCode { spayd, qr_data_url })
}
