#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode or error, never panic.
    let _ = bmpcanvas::decode(data);
    let _ = bmpcanvas::ImageInfo::from_bytes(data);

    // The standards-aligned padding rule shares every validation path.
    let _ = bmpcanvas::DecodeRequest::new(data)
        .with_row_padding(bmpcanvas::RowPadding::PixelStride)
        .decode();
});
