#![no_main]
use libfuzzer_sys::fuzz_target;
use bmplite::*;

fuzz_target!(|data: &[u8]| {
    let Ok(header) = BmpHeader::parse(data) else {
        return;
    };

    // Re-serializing a parsed header and parsing it back must reproduce
    // every field. Cap the offset so the padding loop stays small.
    if header.data_offset <= 1 << 20 {
        let bytes = header.to_bytes();
        let reparsed = BmpHeader::parse(&bytes).expect("re-serialized header failed to parse");
        assert_eq!(reparsed, header, "header roundtrip mismatch");
    }

    // A successful decode must match the header's declared geometry,
    // and 24-bit sources must come back with zero alpha.
    if let Ok(image) = decode(data, enough::Unstoppable) {
        let expected = image.header().width_px as usize * image.header().height_px as usize;
        assert_eq!(image.pixels().len(), expected);
        if image.header().bits_per_pixel == 24 {
            assert!(image.pixels().iter().all(|p| p.a == 0));
        }
    }
});
