//! Czech bank account numbers and IBAN conversion.
//!
//! Czech accounts are written `[prefix-]number/bank`, e.g.
//! `19-2000145399/0800`. The IBAN is `CZ`, two check digits, then the
//! 20-digit BBAN `bank(4) prefix(6) number(10)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::AccountError;

/// Country code used for Czech IBANs.
const COUNTRY: &str = "CZ";

/// Length of a Czech IBAN.
pub const CZ_IBAN_LEN: usize = 24;

/// Numeric form of `CZ00`: C = 12, Z = 35, placeholder check digits.
const CZ_CHECK_SUFFIX: &str = "123500";

const PREFIX_WEIGHTS: [u32; 6] = [10, 5, 8, 4, 2, 1];
const NUMBER_WEIGHTS: [u32; 10] = [6, 3, 7, 9, 10, 5, 8, 4, 2, 1];

/// A parsed Czech domestic account number.
///
/// Only constructed through [`CzechAccount::parse`], so every part holds
/// ASCII digits at its full width. Serializes as `[prefix-]number/bank`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CzechAccount {
    prefix: String,
    number: String,
    bank_code: String,
}

impl CzechAccount {
    /// Parse `[prefix-]number/bank`.
    pub fn parse(account: &str) -> Result<Self, AccountError> {
        let (left, bank) = match account.split('/').collect::<Vec<_>>()[..] {
            [left, bank] => (left, bank),
            _ => return Err(AccountError::Format(account.to_string())),
        };
        let (prefix, number) = match left.split('-').collect::<Vec<_>>()[..] {
            [prefix, number] => (prefix, number),
            [number] => ("0", number),
            _ => return Err(AccountError::Format(account.to_string())),
        };

        Ok(Self {
            prefix: padded("prefix", prefix, 6)?,
            number: padded("account number", number, 10)?,
            bank_code: padded("bank code", bank, 4)?,
        })
    }

    /// Prefix (předčíslí), zero-padded to 6 digits.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Account number, zero-padded to 10 digits.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Bank code, zero-padded to 4 digits.
    pub fn bank_code(&self) -> &str {
        &self.bank_code
    }

    /// The 20-digit BBAN: bank code, prefix, account number.
    pub fn bban(&self) -> String {
        format!("{}{}{}", self.bank_code, self.prefix, self.number)
    }

    /// Convert to an IBAN, computing the check digits.
    pub fn to_iban(&self) -> Iban {
        let bban = self.bban();
        let remainder = mod97(bban.bytes().chain(CZ_CHECK_SUFFIX.bytes()));
        Iban(format!("{COUNTRY}{:02}{bban}", 98 - remainder))
    }

    /// Czech National Bank weighted mod-11 check of prefix and number.
    pub fn has_valid_checksum(&self) -> bool {
        weighted_mod11(&self.prefix, &PREFIX_WEIGHTS)
            && weighted_mod11(&self.number, &NUMBER_WEIGHTS)
    }
}

impl fmt::Display for CzechAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.prefix.trim_start_matches('0');
        let number = match self.number.trim_start_matches('0') {
            "" => "0",
            n => n,
        };
        if !prefix.is_empty() {
            write!(f, "{prefix}-")?;
        }
        write!(f, "{number}/{}", self.bank_code)
    }
}

impl TryFrom<String> for CzechAccount {
    type Error = AccountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CzechAccount> for String {
    fn from(account: CzechAccount) -> Self {
        account.to_string()
    }
}

/// A validated IBAN in electronic form (no spaces, uppercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban(String);

impl Iban {
    /// Parse and validate an IBAN. Spaces are removed, letters uppercased.
    pub fn parse(iban: &str) -> Result<Self, AccountError> {
        let compact: String = iban
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if is_valid_iban(&compact) {
            Ok(Self(compact))
        } else {
            Err(AccountError::InvalidIban(iban.to_string()))
        }
    }

    /// Convert a Czech account (`[prefix-]number/bank`) or a Czech IBAN.
    pub fn from_czech(account: &str) -> Result<Self, AccountError> {
        if is_czech_iban_shaped(account) {
            return Self::parse(account);
        }
        Ok(CzechAccount::parse(account)?.to_iban())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-digit check number.
    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    /// Everything after country code and check digits.
    pub fn bban(&self) -> &str {
        &self.0[4..]
    }

    /// Print form in blocks of four, e.g. `CZ65 0800 0000 1920 0014 5399`.
    pub fn grouped(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + self.0.len() / 4);
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Iban {
    type Error = AccountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.0
    }
}

/// Normalize a bank account to an IBAN, leniently.
///
/// Strings that already look like a Czech IBAN (`CZ` + 22 characters) are
/// returned unchanged without validation. Czech local format is converted.
/// Anything that cannot be converted is returned unchanged, so the result is
/// not guaranteed to be a valid IBAN; use [`Iban::from_czech`] when the
/// caller needs to know.
pub fn to_iban(account: &str) -> String {
    if is_czech_iban_shaped(account) {
        return account.to_string();
    }
    match CzechAccount::parse(account) {
        Ok(parsed) => parsed.to_iban().0,
        Err(err) => {
            tracing::debug!(%err, "bank account left as is");
            account.to_string()
        }
    }
}

/// ISO 13616 check: rearranged IBAN as a number mod 97 must equal 1.
///
/// Spaces are ignored; letters may be either case.
pub fn is_valid_iban(iban: &str) -> bool {
    let compact: Vec<u8> = iban
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| b.to_ascii_uppercase())
        .collect();

    if !(15..=34).contains(&compact.len())
        || !compact[..2].iter().all(u8::is_ascii_uppercase)
        || !compact[2..4].iter().all(u8::is_ascii_digit)
        || !compact.iter().all(u8::is_ascii_alphanumeric)
    {
        return false;
    }

    let rearranged = compact[4..].iter().chain(&compact[..4]);
    let digits = rearranged.flat_map(|&b| {
        if b.is_ascii_digit() {
            vec![b]
        } else {
            (b - b'A' + 10).to_string().into_bytes()
        }
    });
    mod97(digits) == 1
}

fn is_czech_iban_shaped(account: &str) -> bool {
    account.starts_with(COUNTRY) && account.chars().count() == CZ_IBAN_LEN
}

/// Iterative mod-97 over ASCII digits, one digit at a time.
fn mod97(digits: impl IntoIterator<Item = u8>) -> u32 {
    digits
        .into_iter()
        .fold(0, |rem, d| (rem * 10 + u32::from(d - b'0')) % 97)
}

fn weighted_mod11(digits: &str, weights: &[u32]) -> bool {
    let sum: u32 = digits
        .bytes()
        .zip(weights)
        .map(|(d, w)| u32::from(d - b'0') * w)
        .sum();
    sum % 11 == 0
}

/// Zero-pad `value` to `width`. An empty part pads to all zeros.
fn padded(part: &'static str, value: &str, width: usize) -> Result<String, AccountError> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AccountError::NotDigits {
            part,
            value: value.to_string(),
        });
    }
    if value.len() > width {
        return Err(AccountError::TooLong {
            part,
            value: value.to_string(),
            max: width,
        });
    }
    Ok(format!("{value:0>width$}"))
}
