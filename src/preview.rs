use alloc::string::String;
use alloc::vec::Vec;

use crate::image::Image;
use crate::pixel::Pixel;

/// ASCII rendering of the image, one `String` per row, top row first.
///
/// `'@'` marks a pure black pixel, `'*'` pure white, and every other color a
/// space, so each row is exactly `width` characters. Alpha plays no part in
/// the classification.
pub fn preview(image: &Image) -> Vec<String> {
    image.pixels().rows().map(preview_row).collect()
}

fn preview_row(row: &[Pixel]) -> String {
    row.iter()
        .map(|px| {
            if px.is_black() {
                '@'
            } else if px.is_white() {
                '*'
            } else {
                ' '
            }
        })
        .collect()
}
