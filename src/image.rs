use alloc::vec::Vec;

use crate::buffer::PixelBuffer;
use crate::draw::RasterEditor;
use crate::error::BmpError;
use crate::pixel::BitDepth;

/// Every byte of the file before the pixel array, kept verbatim.
///
/// The decoder reads the handful of fields it needs out of this region and
/// interprets nothing else; the encoder writes the region back untouched.
/// That is what keeps round trips faithful for header material this crate
/// does not model: V4/V5 color-space blocks, the image-size and resolution
/// fields, gap bytes between header and pixel data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderBlob(pub(crate) Vec<u8>);

impl HeaderBlob {
    /// Length in bytes; equals the file's pixel-data offset field.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Image geometry, available without decoding pixel data.
///
/// Width and height are magnitudes: a negative on-disk height (top-down row
/// order) has already been folded away here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub depth: BitDepth,
}

impl ImageInfo {
    /// Probe the header fields of `data` without touching the pixel array.
    ///
    /// Validates the signature, dimensions, pixel-data offset and bit depth,
    /// but not that `data` actually contains the pixel array it declares;
    /// that check belongs to [`decode`](crate::decode()).
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let header = crate::decode::parse_header(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            depth: header.depth,
        })
    }
}

/// A decoded BMP: the untouched header bytes plus the pixel grid.
///
/// Pixels are stored top-down regardless of the file's row order. Edit them
/// through [`edit`](Image::edit) or [`pixels_mut`](Image::pixels_mut), then
/// re-serialize with [`encode`](crate::encode()).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub(crate) header: HeaderBlob,
    pub(crate) info: ImageInfo,
    pub(crate) pixels: PixelBuffer,
}

impl Image {
    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    pub fn depth(&self) -> BitDepth {
        self.info.depth
    }

    pub fn info(&self) -> ImageInfo {
        self.info
    }

    pub fn header(&self) -> &HeaderBlob {
        &self.header
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    /// Drawing handle over the pixel grid.
    pub fn edit(&mut self) -> RasterEditor<'_> {
        RasterEditor::new(&mut self.pixels)
    }
}
