//! BMP encoding: header-blob passthrough plus top-down pixel serialization.

use alloc::vec::Vec;

use log::debug;

use crate::error::BmpError;
use crate::image::Image;
use crate::pixel::RowPadding;

/// Builder-style encode with a row-padding rule.
///
/// [`encode`] is the shorthand for a request with defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    row_padding: RowPadding,
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row padding rule; see [`RowPadding`].
    #[must_use]
    pub fn with_row_padding(mut self, padding: RowPadding) -> Self {
        self.row_padding = padding;
        self
    }

    pub fn encode(self, image: &Image) -> Result<Vec<u8>, BmpError> {
        let width = image.pixels().width();
        let height = image.pixels().height();
        let depth = image.depth();
        let pad = self.row_padding.bytes(width, depth);

        let too_large = || BmpError::DimensionsTooLarge {
            width: image.width(),
            height: image.height(),
        };
        let row_stride = width
            .checked_mul(depth.bytes_per_pixel())
            .and_then(|r| r.checked_add(pad))
            .ok_or_else(too_large)?;
        let file_size = row_stride
            .checked_mul(height)
            .and_then(|p| p.checked_add(image.header().len()))
            .ok_or_else(too_large)?;

        let mut out = Vec::with_capacity(file_size);
        out.extend_from_slice(image.header().as_bytes());

        // Rows always go out top-down while the blob keeps whatever height
        // sign the input carried. A bottom-up source therefore reads back
        // flipped; a second round trip restores it.
        let alpha = depth.has_alpha();
        for row in image.pixels().rows() {
            for px in row {
                out.push(px.b);
                out.push(px.g);
                out.push(px.r);
                if alpha {
                    out.push(px.a);
                }
            }
            out.extend(core::iter::repeat_n(0u8, pad));
        }

        debug!(
            "encoded BMP {}x{} {}bpp, {} bytes ({} header)",
            width,
            height,
            depth.bits(),
            out.len(),
            image.header().len(),
        );

        Ok(out)
    }
}

/// Serialize back to BMP bytes with default options.
pub fn encode(image: &Image) -> Result<Vec<u8>, BmpError> {
    EncodeRequest::new().encode(image)
}

/// Encode and write to a file. Not atomic: a failed write can leave a
/// partial file behind.
#[cfg(feature = "std")]
pub fn encode_file<P: AsRef<std::path::Path>>(image: &Image, path: P) -> Result<(), BmpError> {
    let bytes = encode(image)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
