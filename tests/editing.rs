//! Drawing and preview over decoded images.

use bmpcanvas::*;

/// Top-down 24-bit file filled with a single color.
fn solid_bmp(width: usize, height: usize, color: (u8, u8, u8)) -> Vec<u8> {
    let pad = (4 - (width * 3) % 4) % 4;
    let mut out = Vec::new();
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&54u32.to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(-(height as i32)).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&[0u8; 24]);
    for _ in 0..height {
        for _ in 0..width {
            out.extend_from_slice(&[color.0, color.1, color.2]);
        }
        out.extend(std::iter::repeat_n(0u8, pad));
    }
    out
}

fn black_canvas(width: usize, height: usize) -> Image {
    decode(&solid_bmp(width, height, (0, 0, 0))).unwrap()
}

#[test]
fn set_pixel_persists_through_roundtrip() {
    let mut img = black_canvas(3, 3);
    img.edit().set_pixel(2, 1, Pixel::WHITE);

    let back = decode(&encode(&img).unwrap()).unwrap();
    assert_eq!(back.pixels().get(1, 2), Some(&Pixel::WHITE));
    let white = back
        .pixels()
        .as_slice()
        .iter()
        .filter(|px| px.is_white())
        .count();
    assert_eq!(white, 1);
}

#[test]
fn out_of_bounds_edits_change_nothing() {
    let f = solid_bmp(2, 2, (9, 9, 9));
    let mut img = decode(&f).unwrap();
    let mut ed = img.edit();
    ed.set_pixel(-1, 0, Pixel::WHITE);
    ed.set_pixel(0, -1, Pixel::WHITE);
    ed.set_pixel(2, 0, Pixel::WHITE);
    ed.set_pixel(0, 2, Pixel::WHITE);
    assert_eq!(encode(&img).unwrap(), f);
}

#[test]
fn horizontal_line_paints_exact_run() {
    let mut img = black_canvas(5, 5);
    img.edit().draw_line(0, 0, 3, 0, Pixel::WHITE);

    let rows = preview(&img);
    assert_eq!(rows[0], "****@");
    for row in &rows[1..] {
        assert_eq!(row.as_str(), "@@@@@");
    }
}

#[test]
fn vertical_line_paints_exact_run() {
    let mut img = black_canvas(3, 4);
    img.edit().draw_line(1, 0, 1, 3, Pixel::WHITE);
    for row in &preview(&img) {
        assert_eq!(row.as_str(), "@*@");
    }
}

#[test]
fn degenerate_line_is_single_pixel() {
    let mut img = black_canvas(3, 3);
    img.edit().draw_line(1, 1, 1, 1, Pixel::WHITE);
    assert_eq!(preview(&img), vec!["@@@", "@*@", "@@@"]);
}

#[test]
fn diagonal_cross_marks_both_diagonals() {
    let mut img = black_canvas(5, 5);
    img.edit().draw_diagonal_cross(0, 0, 4, 4, Pixel::WHITE);
    assert_eq!(
        preview(&img),
        vec!["*@@@*", "@*@*@", "@@*@@", "@*@*@", "*@@@*"]
    );
}

#[test]
fn cross_with_off_canvas_corners_clips() {
    let mut img = black_canvas(3, 3);
    img.edit().draw_diagonal_cross(-1, -1, 3, 3, Pixel::WHITE);
    assert_eq!(preview(&img), vec!["*@*", "@*@", "*@*"]);
}

#[test]
fn preview_ignores_alpha() {
    let mut img = black_canvas(4, 1);
    let mut ed = img.edit();
    ed.set_pixel(1, 0, Pixel::WHITE);
    ed.set_pixel(2, 0, Pixel::bgr(7, 7, 7));
    ed.set_pixel(3, 0, Pixel::bgra(255, 255, 255, 0));
    assert_eq!(preview(&img), vec!["@* *"]);
}

#[test]
fn edits_show_up_in_encoded_bytes() {
    let mut img = black_canvas(1, 1);
    img.edit().set_pixel(0, 0, Pixel::bgr(11, 22, 33));
    let out = encode(&img).unwrap();
    assert_eq!(&out[54..57], &[11, 22, 33]);
}
