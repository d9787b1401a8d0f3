//! In-place drawing over a decoded pixel grid.

use crate::buffer::PixelBuffer;
use crate::pixel::Pixel;

/// Drawing handle borrowed from an [`Image`](crate::Image).
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row, both `i32`.
/// Every operation clips silently: pixels that fall outside the canvas are
/// skipped, so line endpoints may hang off any edge.
pub struct RasterEditor<'a> {
    pixels: &'a mut PixelBuffer,
}

impl<'a> RasterEditor<'a> {
    pub(crate) fn new(pixels: &'a mut PixelBuffer) -> Self {
        Self { pixels }
    }

    /// Write `color` at column `x`, row `y`; out-of-range coordinates are a
    /// no-op.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Pixel) {
        self.plot(i64::from(x), i64::from(y), color);
    }

    fn plot(&mut self, x: i64, y: i64, color: Pixel) {
        let (Ok(col), Ok(row)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if let Some(px) = self.pixels.get_mut(row, col) {
            *px = color;
        }
    }

    /// Integer Bresenham line from `(x0, y0)` to `(x1, y1)`, endpoints
    /// included. A zero-length line paints exactly one pixel.
    ///
    /// Steps in x and y are decided independently per iteration, and the
    /// walk also stops once the leading axis reaches its endpoint.
    /// Arithmetic is widened to i64 so extreme i32 endpoints cannot
    /// overflow.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Pixel) {
        let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
        let (x1, y1) = (i64::from(x1), i64::from(y1));

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                if x0 == x1 {
                    break;
                }
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                if y0 == y1 {
                    break;
                }
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Both diagonals of the rectangle spanned by `(x1, y1)` and `(x2, y2)`:
    /// the line `(x1, y1)`-`(x2, y2)` and the line `(x1, y2)`-`(x2, y1)`.
    pub fn draw_diagonal_cross(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Pixel) {
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x1, y2, x2, y1, color);
    }
}
