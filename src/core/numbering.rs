use chrono::{Datelike, NaiveDate};

use super::error::FakturaError;

/// Highest sequence number within one year. Numbers are `YYYY` followed by
/// exactly three sequence digits.
pub const MAX_SEQUENCE: u64 = 999;

const YEAR_FACTOR: u64 = 1000;

/// Compute the next invoice number for `year` from the owner's existing numbers.
///
/// Numbers are `year * 1000 + sequence`, so the first invoice of 2024 is
/// `2024001`. Numbers outside `[year * 1000, (year + 1) * 1000)` are ignored.
///
/// This is pure: two concurrent callers may compute the same number. Allocate
/// inside the insert transaction or rely on a unique (owner, number) constraint
/// and retry on conflict.
///
/// Fails when the year is not four digits or all 999 sequence numbers are used.
pub fn next_invoice_number(
    existing: impl IntoIterator<Item = u64>,
    year: i32,
) -> Result<u64, FakturaError> {
    let base = year_base(year)?;
    let last = existing
        .into_iter()
        .filter(|n| (base..base + YEAR_FACTOR).contains(n))
        .max();

    let sequence = match last {
        Some(n) => n - base + 1,
        None => 1,
    };

    if sequence > MAX_SEQUENCE {
        return Err(FakturaError::Numbering(format!(
            "invoice sequence for {year} exhausted (last issued {})",
            base + MAX_SEQUENCE
        )));
    }

    Ok(base + sequence)
}

/// Like [`next_invoice_number`], taking the year from the issue date.
pub fn next_invoice_number_for_date(
    existing: impl IntoIterator<Item = u64>,
    issue_date: NaiveDate,
) -> Result<u64, FakturaError> {
    next_invoice_number(existing, issue_date.year())
}

/// Year part of an invoice number, if it follows the `YYYYNNN` scheme.
pub fn invoice_year(number: u64) -> Option<i32> {
    invoice_parts(number).map(|(year, _)| year)
}

/// Sequence part of an invoice number, if it follows the `YYYYNNN` scheme.
pub fn invoice_sequence(number: u64) -> Option<u64> {
    invoice_parts(number).map(|(_, seq)| seq)
}

fn invoice_parts(number: u64) -> Option<(i32, u64)> {
    let year = number / YEAR_FACTOR;
    let seq = number % YEAR_FACTOR;
    if !(1000..=9999).contains(&year) || seq == 0 {
        return None;
    }
    Some((year as i32, seq))
}

/// Distinct years of the given issue dates, newest first.
pub fn invoice_years(issue_dates: impl IntoIterator<Item = NaiveDate>) -> Vec<i32> {
    let mut years: Vec<i32> = issue_dates.into_iter().map(|d| d.year()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

fn year_base(year: i32) -> Result<u64, FakturaError> {
    if !(1000..=9999).contains(&year) {
        return Err(FakturaError::Numbering(format!(
            "year {year} must have four digits"
        )));
    }
    Ok(year as u64 * YEAR_FACTOR)
}

/// Caller-owned invoice number allocator for a single owner.
///
/// Seed it from the numbers already stored for the year; it then hands out
/// consecutive numbers without gaps.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    year: i32,
    next_sequence: u64,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at `year * 1000 + 1`.
    pub fn new(year: i32) -> Result<Self, FakturaError> {
        year_base(year)?;
        Ok(Self {
            year,
            next_sequence: 1,
        })
    }

    /// Create a sequence continuing after the highest existing number of `year`.
    pub fn from_existing(
        year: i32,
        existing: impl IntoIterator<Item = u64>,
    ) -> Result<Self, FakturaError> {
        let base = year_base(year)?;
        let last = existing
            .into_iter()
            .filter(|n| (base..base + YEAR_FACTOR).contains(n))
            .max();
        Ok(Self {
            year,
            next_sequence: last.map_or(1, |n| n - base + 1),
        })
    }

    /// Allocate the next invoice number.
    pub fn next_number(&mut self) -> Result<u64, FakturaError> {
        let number = self.peek()?;
        self.next_sequence += 1;
        Ok(number)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> Result<u64, FakturaError> {
        if self.next_sequence > MAX_SEQUENCE {
            return Err(FakturaError::Numbering(format!(
                "invoice sequence for {} exhausted",
                self.year
            )));
        }
        Ok(self.year as u64 * YEAR_FACTOR + self.next_sequence)
    }

    /// Get the current year of the sequence.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Advance to a new year, resetting the counter to 1.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), FakturaError> {
        if new_year <= self.year {
            return Err(FakturaError::Numbering(format!(
                "new year {new_year} must be greater than current year {}",
                self.year
            )));
        }
        year_base(new_year)?;
        self.year = new_year;
        self.next_sequence = 1;
        Ok(())
    }

    /// Auto-advance year if the given date is in a new year.
    /// Returns true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        date.year() > self.year && self.advance_year(date.year()).is_ok()
    }
}
