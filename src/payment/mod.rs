//! Czech QR payments: account to IBAN conversion and SPAYD strings.
//!
//! # Example
//!
//! ```
//! use fakturace::payment::*;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(to_iban("19-2000145399/0800"), "CZ6508000000192000145399");
//!
//! let spayd = build_spayd("19-2000145399/0800", dec!(1500), "CZK", "2024001", "Faktura 2024001");
//! assert!(spayd.ends_with("*MSG:FAKTURA 2024001*X-VS:2024001"));
//! ```

mod code;
mod iban;
mod spayd;

pub use crate::core::AccountError;
pub use code::{DEFAULT_CURRENCY, PaymentCode, QrEncoder, QrOptions, invoice_spayd, payment_code};
pub use iban::{CZ_IBAN_LEN, CzechAccount, Iban, is_valid_iban, to_iban};
pub use spayd::{SPAYD_HEADER, SpaydBuilder, build_spayd, format_spayd_amount, sanitize_message};
