use alloc::vec;
use alloc::vec::Vec;

use crate::pixel::Pixel;

/// Owned 2D pixel grid, one contiguous row-major allocation.
///
/// Row 0 is always the visually topmost row: the decoder normalizes on-disk
/// row order (bottom-up or top-down) into this one convention, so nothing
/// downstream has to reason about orientation.
///
/// Indexing is bounds-checked: [`get`]/[`get_mut`] return `None` out of
/// range rather than panicking.
///
/// [`get`]: PixelBuffer::get
/// [`get_mut`]: PixelBuffer::get_mut
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Zero-filled buffer. Only the decoder constructs these, after it has
    /// validated `width >= 1`, `height >= 1`, and that `width * height`
    /// fits in memory.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::default(); width * height],
        }
    }

    /// Columns per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Pixel> {
        if row < self.height && col < self.width {
            self.pixels.get(row * self.width + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Pixel> {
        if row < self.height && col < self.width {
            self.pixels.get_mut(row * self.width + col)
        } else {
            None
        }
    }

    /// All pixels in row-major order, top row first.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }

    /// One row as a slice, `None` out of range.
    pub fn row(&self, row: usize) -> Option<&[Pixel]> {
        if row < self.height {
            let start = row * self.width;
            self.pixels.get(start..start + self.width)
        } else {
            None
        }
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width)
    }

    pub fn rows_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut [Pixel]> {
        self.pixels.chunks_exact_mut(self.width)
    }
}
