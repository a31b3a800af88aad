//! Core invoice types, VAT aggregation, numbering, and formatting.
//!
//! Everything here is pure: no clock, no session, no I/O. Values such as
//! the current year or the issuing supplier are passed in explicitly.

mod builder;
pub mod currencies;
mod error;
mod format;
mod numbering;
mod summary;
mod types;
mod validation;

pub use builder::*;
pub use currencies::is_known_currency_code;
pub use error::*;
pub use format::*;
pub use numbering::*;
pub use summary::*;
pub use types::*;
pub use validation::*;
