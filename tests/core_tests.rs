use chrono::NaiveDate;
use fakturace::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn customer() -> Party {
    PartyBuilder::new("Odběratel s.r.o.")
        .address("Václavské náměstí 1, 110 00 Praha 1")
        .ico("12345678")
        .dic("CZ12345678")
        .build()
}

// --- Invoice construction ---

#[test]
fn domestic_invoice_full() {
    let inv = InvoiceBuilder::new(2024001, date(2024, 6, 15))
        .due_date(date(2024, 6, 29))
        .taxable_date(date(2024, 6, 14))
        .customer(customer())
        .item("Vývoj webu", dec!(80), dec!(1200), dec!(21))
        .item("Hosting", dec!(12), dec!(249.90), dec!(21))
        .item("Školení", dec!(1), dec!(5000), dec!(12))
        .build()
        .unwrap();

    assert_eq!(inv.currency_code, "CZK");
    assert_eq!(inv.language, Language::Cs);
    assert_eq!(inv.taxable_date, date(2024, 6, 14));

    let s = summarize(&inv.items);
    // 96000 + 2998.80 + 5000
    assert_eq!(s.base_total, dec!(103998.80));
    // (96000 + 2998.80) * 0.21 = 20789.748
    assert_eq!(s.vat_for_rate(dec!(21)), Some(dec!(20789.748)));
    assert_eq!(s.vat_for_rate(dec!(12)), Some(dec!(600)));
    assert_eq!(s.grand_total, dec!(125388.548));
    assert_eq!(s.grand_total, inv.total());

    let rounded = s.rounded(2);
    assert_eq!(rounded.grand_total, dec!(125388.55));
    assert_eq!(
        format_currency(rounded.grand_total, &inv.currency_code, inv.language.code()),
        "125\u{a0}388,55\u{a0}Kč"
    );
}

#[test]
fn builder_defaults() {
    let inv = InvoiceBuilder::new(2024002, date(2024, 12, 20))
        .customer(customer())
        .item("Práce", dec!(1), dec!(100), dec!(0))
        .build()
        .unwrap();
    assert_eq!(inv.due_date, date(2025, 1, 3));
    assert_eq!(inv.taxable_date, date(2024, 12, 20));
    assert!(!inv.is_vat_reverse_charge);
}

#[test]
fn builder_requires_customer() {
    let err = InvoiceBuilder::new(2024001, date(2024, 1, 1))
        .item("Práce", dec!(1), dec!(100), dec!(21))
        .build()
        .unwrap_err();
    assert!(matches!(err, FakturaError::Builder(_)));
}

#[test]
fn builder_reports_all_validation_errors() {
    let err = InvoiceBuilder::new(2023001, date(2024, 1, 1))
        .customer(customer())
        .currency("XXX")
        .item("Práce", dec!(-1), dec!(100), dec!(21))
        .build()
        .unwrap_err();
    let FakturaError::Validation(msg) = err else {
        panic!("expected validation error");
    };
    assert!(msg.contains("currency_code"));
    assert!(msg.contains("number"));
    assert!(msg.contains("items[0].quantity"));
}

#[test]
fn unchecked_build_skips_validation() {
    let inv = InvoiceBuilder::new(1, date(2024, 1, 1))
        .customer(customer())
        .build_unchecked()
        .unwrap();
    assert!(!validate_invoice(&inv).is_empty());
}

#[test]
fn english_euro_invoice() {
    let inv = InvoiceBuilder::new(2024003, date(2024, 2, 1))
        .customer(customer())
        .currency("EUR")
        .language(Language::En)
        .reverse_charge(true)
        .item("Consulting", dec!(10), dec!(95), dec!(0))
        .build()
        .unwrap();
    assert!(inv.is_vat_reverse_charge);
    assert_eq!(format_amount(inv.total(), "EUR", inv.language), "950.00 EUR");
}

// --- Numbering ---

#[test]
fn numbering_examples() {
    assert_eq!(next_invoice_number([2024001, 2024002], 2024).unwrap(), 2024003);
    assert_eq!(next_invoice_number(Vec::new(), 2024).unwrap(), 2024001);
}

#[test]
fn numbering_per_owner_is_caller_scoped() {
    // Numbers from another owner must not be passed in; the function trusts its input.
    let owner_a = [2024001, 2024002, 2024003];
    let owner_b: [u64; 0] = [];
    assert_eq!(next_invoice_number(owner_a, 2024).unwrap(), 2024004);
    assert_eq!(next_invoice_number(owner_b, 2024).unwrap(), 2024001);
}

#[test]
fn numbering_feeds_builder() {
    let issued = date(2025, 1, 2);
    let number = next_invoice_number_for_date([2024118, 2024119], issued).unwrap();
    let inv = InvoiceBuilder::new(number, issued)
        .customer(customer())
        .item("Práce", dec!(1), dec!(100), dec!(21))
        .build()
        .unwrap();
    assert_eq!(inv.number, 2025001);
    assert_eq!(invoice_year(inv.number), Some(2025));
}

// --- Serialization ---

#[test]
fn invoice_serde_roundtrip() {
    let inv = InvoiceBuilder::new(2024001, date(2024, 6, 15))
        .customer(customer())
        .item("Práce", dec!(1.5), dec!(999.99), dec!(21))
        .build()
        .unwrap();
    let json = serde_json::to_string(&inv).unwrap();
    assert!(json.contains("\"unit_price\":\"999.99\""));
    assert!(json.contains("\"language\":\"cs\""));
    let back: Invoice = serde_json::from_str(&json).unwrap();
    assert_eq!(back, inv);
}
