use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::FakturaError;
use super::types::*;
use super::validation;

/// Builder for constructing valid invoices.
///
/// ```
/// use fakturace::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new(2024001, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .customer(PartyBuilder::new("Odběratel s.r.o.").ico("12345678").build())
///     .add_item(InvoiceItem::new("Konzultace", dec!(10), dec!(1500), dec!(21)))
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.total(), dec!(18150));
/// ```
pub struct InvoiceBuilder {
    number: u64,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    taxable_date: Option<NaiveDate>,
    currency_code: String,
    language: Language,
    is_vat_reverse_charge: bool,
    customer: Option<Party>,
    items: Vec<InvoiceItem>,
}

impl InvoiceBuilder {
    pub fn new(number: u64, issue_date: NaiveDate) -> Self {
        Self {
            number,
            issue_date,
            due_date: None,
            taxable_date: None,
            currency_code: "CZK".to_string(),
            language: Language::Cs,
            is_vat_reverse_charge: false,
            customer: None,
            items: Vec::new(),
        }
    }

    /// Due date. Defaults to 14 days after the issue date.
    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    /// Date of taxable supply. Defaults to the issue date.
    pub fn taxable_date(mut self, date: NaiveDate) -> Self {
        self.taxable_date = Some(date);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn reverse_charge(mut self, enabled: bool) -> Self {
        self.is_vat_reverse_charge = enabled;
        self
    }

    pub fn customer(mut self, party: Party) -> Self {
        self.customer = Some(party);
        self
    }

    pub fn add_item(mut self, item: InvoiceItem) -> Self {
        self.items.push(item);
        self
    }

    /// Shorthand for [`add_item`](Self::add_item).
    pub fn item(
        self,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        vat_rate: Decimal,
    ) -> Self {
        self.add_item(InvoiceItem::new(description, quantity, unit_price, vat_rate))
    }

    /// Build the invoice and run validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, FakturaError> {
        let invoice = self.build_unchecked()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FakturaError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without validation, for records imported from storage.
    pub fn build_unchecked(self) -> Result<Invoice, FakturaError> {
        let customer = self
            .customer
            .ok_or_else(|| FakturaError::Builder("customer is required".into()))?;

        if self.items.len() > 10_000 {
            return Err(FakturaError::Builder(
                "invoice cannot have more than 10,000 items".into(),
            ));
        }

        let due_date = match self.due_date {
            Some(date) => date,
            None => self
                .issue_date
                .checked_add_days(chrono::Days::new(14))
                .ok_or_else(|| FakturaError::Builder("due date out of range".into()))?,
        };

        Ok(Invoice {
            number: self.number,
            issue_date: self.issue_date,
            due_date,
            taxable_date: self.taxable_date.unwrap_or(self.issue_date),
            currency_code: self.currency_code,
            language: self.language,
            is_vat_reverse_charge: self.is_vat_reverse_charge,
            customer,
            items: self.items,
        })
    }
}

/// Builder for [`Party`] (supplier or customer).
pub struct PartyBuilder {
    name: String,
    address: Option<String>,
    ico: Option<String>,
    dic: Option<String>,
    bank_account: Option<String>,
    is_vat_payer: bool,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            ico: None,
            dic: None,
            bank_account: None,
            is_vat_payer: false,
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn ico(mut self, ico: impl Into<String>) -> Self {
        self.ico = Some(ico.into());
        self
    }

    pub fn dic(mut self, dic: impl Into<String>) -> Self {
        self.dic = Some(dic.into());
        self
    }

    pub fn bank_account(mut self, account: impl Into<String>) -> Self {
        self.bank_account = Some(account.into());
        self
    }

    pub fn vat_payer(mut self, is_vat_payer: bool) -> Self {
        self.is_vat_payer = is_vat_payer;
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            address: self.address,
            ico: self.ico,
            dic: self.dic,
            bank_account: self.bank_account,
            is_vat_payer: self.is_vat_payer,
        }
    }
}
