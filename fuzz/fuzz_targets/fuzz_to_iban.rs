#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; unconvertible input comes back unchanged.
        let out = fakturace::payment::to_iban(s);
        if fakturace::payment::Iban::from_czech(s).is_err() {
            assert_eq!(out, s);
        }
        let _ = fakturace::payment::is_valid_iban(s);
    }
});
