#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|input: (&str, i64, &str, &str)| {
    let (account, cents, vs, message) = input;
    let spayd =
        fakturace::payment::build_spayd(account, Decimal::new(cents, 2), "CZK", vs, message);
    assert!(spayd.starts_with(fakturace::payment::SPAYD_HEADER));
});
