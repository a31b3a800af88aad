//! ISO 4217 currency codes and minor units.

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    CURRENCY_CODES.binary_search(&code).is_ok()
}

/// Number of fraction digits shown for `code`.
///
/// Unknown codes get two, like most currencies.
pub fn minor_units(code: &str) -> u32 {
    if ZERO_DECIMAL_CODES.binary_search(&code).is_ok() {
        0
    } else {
        2
    }
}

/// Currencies formatted without fraction digits. Sorted for binary search.
static ZERO_DECIMAL_CODES: &[&str] = &["ISK", "JPY", "KRW", "VND"];

/// Sorted list of common ISO 4217 currency codes.
/// Sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "AED", // UAE Dirham
    "AMD", // Armenian Dram
    "AUD", // Australian Dollar
    "BGN", // Bulgarian Lev
    "BRL", // Brazilian Real
    "CAD", // Canadian Dollar
    "CHF", // Swiss Franc
    "CNY", // Chinese Yuan
    "CZK", // Czech Koruna
    "DKK", // Danish Krone
    "EGP", // Egyptian Pound
    "EUR", // Euro
    "GBP", // Pound Sterling
    "GEL", // Georgian Lari
    "HKD", // Hong Kong Dollar
    "HRK", // Croatian Kuna
    "HUF", // Hungarian Forint
    "IDR", // Indonesian Rupiah
    "ILS", // Israeli Shekel
    "INR", // Indian Rupee
    "ISK", // Icelandic Krona
    "JPY", // Japanese Yen
    "KES", // Kenyan Shilling
    "KRW", // South Korean Won
    "KZT", // Kazakhstani Tenge
    "MXN", // Mexican Peso
    "MYR", // Malaysian Ringgit
    "NGN", // Nigerian Naira
    "NOK", // Norwegian Krone
    "NZD", // New Zealand Dollar
    "PHP", // Philippine Peso
    "PLN", // Polish Zloty
    "RON", // Romanian Leu
    "RUB", // Russian Ruble
    "SAR", // Saudi Riyal
    "SEK", // Swedish Krona
    "SGD", // Singapore Dollar
    "THB", // Thai Baht
    "TRY", // Turkish Lira
    "TWD", // New Taiwan Dollar
    "UAH", // Ukrainian Hryvnia
    "USD", // US Dollar
    "VND", // Vietnamese Dong
    "ZAR", // South African Rand
];
