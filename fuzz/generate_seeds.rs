#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fn header(width: i32, height: i32, bpp: u16, compression: u32, total: usize) -> Vec<u8> {
        let mut bmp = vec![0u8; total];
        bmp[0] = b'B';
        bmp[1] = b'M';
        bmp[2..6].copy_from_slice(&(total as u32).to_le_bytes()); // file size
        bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
        bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
        bmp[18..22].copy_from_slice(&width.to_le_bytes());
        bmp[22..26].copy_from_slice(&height.to_le_bytes());
        bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
        bmp[28..30].copy_from_slice(&bpp.to_le_bytes());
        bmp[30..34].copy_from_slice(&compression.to_le_bytes());
        bmp
    }

    // Minimal 1x1 24-bit: 3 pixel bytes + 1 filler
    let mut bmp = header(1, 1, 24, 0, 58);
    bmp[54] = 0xff;
    bmp[55] = 0x00;
    bmp[56] = 0x00; // BGR
    fs::write(format!("{dir}/bmp_1x1_24.bmp"), bmp).unwrap();

    // 2x2 32-bit: 16 pixel bytes, no filler
    let mut bmp = header(2, 2, 32, 0, 70);
    for (i, b) in bmp[54..].iter_mut().enumerate() {
        *b = i as u8;
    }
    fs::write(format!("{dir}/bmp_2x2_32.bmp"), bmp).unwrap();

    // 3x1 24-bit: exercises the 3-byte filler per group
    let bmp = header(3, 1, 24, 0, 54 + 3 * 6);
    fs::write(format!("{dir}/bmp_3x1_24.bmp"), bmp).unwrap();

    // Rejected variants for edge coverage
    fs::write(format!("{dir}/compressed.bmp"), header(1, 1, 24, 1, 54)).unwrap();
    fs::write(format!("{dir}/depth16.bmp"), header(1, 1, 16, 0, 54)).unwrap();
    fs::write(format!("{dir}/topdown.bmp"), header(2, -2, 24, 0, 54)).unwrap();

    // Truncated/malformed seeds
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/header_only.bin"), header(4, 4, 24, 0, 54)).unwrap();

    println!("Generated seed corpus in {dir}/");
}
