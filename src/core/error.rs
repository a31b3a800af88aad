use thiserror::Error;

/// Errors that can occur during invoice construction or processing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FakturaError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Invoice number allocation error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Bank account could not be parsed or converted to an IBAN.
    #[error("bank account error: {0}")]
    Account(#[from] AccountError),
}

/// Error returned when a bank account cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Not of the form `[prefix-]number/bank`.
    #[error("'{0}' is not in the form [prefix-]number/bank")]
    Format(String),
    /// A part contains something other than ASCII digits.
    #[error("{part} '{value}' must contain only digits")]
    NotDigits { part: &'static str, value: String },
    /// A part has more digits than its field allows.
    #[error("{part} '{value}' exceeds {max} digits")]
    TooLong {
        part: &'static str,
        value: String,
        max: usize,
    },
    /// The IBAN fails the mod-97 check or has the wrong shape.
    #[error("invalid IBAN '{0}'")]
    InvalidIban(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[0].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
