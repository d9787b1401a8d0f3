#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

use std::fs;

fn bmp(width: i32, height: i32, bit_count: u16, pixel_bytes: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; 54];
    out[0] = b'B';
    out[1] = b'M';
    out[10..14].copy_from_slice(&54u32.to_le_bytes());
    out[14..18].copy_from_slice(&40u32.to_le_bytes());
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes());
    out[28..30].copy_from_slice(&bit_count.to_le_bytes());
    out.extend_from_slice(pixel_bytes);
    let size = out.len() as u32;
    out[2..6].copy_from_slice(&size.to_le_bytes());
    out
}

fn main() {
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1 24-bit bottom-up: three pixel bytes plus one pad byte
    let seed = bmp(1, 1, 24, &[0xff, 0x00, 0x00, 0x00]);
    fs::write(format!("{dir}/bmp_1x1_24.bmp"), seed).unwrap();

    // 2x2 24-bit top-down: two pad bytes per row
    let rows = [[1u8, 2, 3, 4, 5, 6, 0, 0], [7u8, 8, 9, 10, 11, 12, 0, 0]];
    let seed = bmp(2, -2, 24, &rows.concat());
    fs::write(format!("{dir}/bmp_2x2_24_topdown.bmp"), seed).unwrap();

    // 4x1 32-bit: no padding under either rule
    let px: Vec<u8> = (0..16).collect();
    fs::write(format!("{dir}/bmp_4x1_32.bmp"), bmp(4, 1, 32, &px)).unwrap();

    // 5x1 32-bit with the default rule's single pad byte
    let mut px: Vec<u8> = (0..20).collect();
    px.push(0);
    fs::write(format!("{dir}/bmp_5x1_32_padded.bmp"), bmp(5, -1, 32, &px)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/no_pixels.bin"), bmp(1, 1, 24, &[])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
