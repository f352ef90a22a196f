#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Full decode must never panic, whatever the bytes
    let _ = bmplite::decode(data, enough::Unstoppable);

    // Header parse alone must never panic either
    let _ = bmplite::BmpHeader::parse(data);
});
