//! # fakturace
//!
//! Invoicing core for Czech businesses: VAT breakdown, year-scoped invoice
//! numbering, locale-aware amount formatting, bank account to IBAN
//! conversion, and SPAYD strings for QR payments.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Functions are pure; storage, HTTP, PDF layout and QR rasterization live
//! outside this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fakturace::core::*;
//! use rust_decimal_macros::dec;
//!
//! let issued = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let number = next_invoice_number([2024001, 2024002], 2024).unwrap();
//! assert_eq!(number, 2024003);
//!
//! let invoice = InvoiceBuilder::new(number, issued)
//!     .customer(PartyBuilder::new("Odběratel s.r.o.").build())
//!     .item("Vývoj", dec!(10), dec!(1200), dec!(21))
//!     .item("Kniha", dec!(1), dec!(500), dec!(12))
//!     .build()
//!     .unwrap();
//!
//! let summary = summarize(&invoice.items);
//! assert_eq!(summary.grand_total, dec!(15080));
//! assert_eq!(format_currency(summary.grand_total, "CZK", "cs"), "15\u{a0}080,00\u{a0}Kč");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, VAT summary, numbering, formatting |
//! | `payment` (default) | IBAN conversion, SPAYD, QR payment codes |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "payment")]
pub mod payment;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
