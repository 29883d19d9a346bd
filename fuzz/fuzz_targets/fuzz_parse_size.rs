#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the size-string parser with arbitrary UTF-8.
///
/// Malformed unit strings must come back as clear errors, not panics, and
/// accepted ones must not overflow on the multiplier.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = garble::units::parse_size(text);
    }
});
