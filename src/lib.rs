//! # bmpcanvas
//!
//! Decoder, in-place raster editor, and encoder for uncompressed 24-bit and
//! 32-bit BMP images.
//!
//! ## Round-Trip Model
//!
//! The decoder interprets only the handful of header fields it needs
//! (signature, pixel-data offset, dimensions, bit count) and keeps the whole
//! header region as an opaque byte blob. Pixel rows are normalized to
//! top-down in memory whatever the file's row order. The encoder writes the
//! blob back verbatim followed by the (possibly edited) rows, so a
//! decode → edit → encode cycle preserves every header byte this crate does
//! not model.
//!
//! One caveat rides along with that model: rows are always emitted top-down
//! while the blob keeps the original height sign, so a bottom-up input reads
//! back vertically flipped. A second round trip restores it.
//!
//! ## Supported Input
//!
//! - Uncompressed BMP, 24-bit BGR and 32-bit BGRA
//! - Bottom-up (positive height) and top-down (negative height) row order
//!
//! ## Non-Goals
//!
//! - RLE and bitfields compression
//! - Palette/indexed color (1/4/8-bit)
//! - Color-space and ICC metadata interpretation
//!
//! ## Usage
//!
//! ```no_run
//! use bmpcanvas::{decode_file, encode_file, preview, Pixel};
//!
//! let mut image = decode_file("input.bmp")?;
//! println!("{}x{} {}bpp", image.width(), image.height(), image.depth().bits());
//!
//! // Draw an X over the whole canvas.
//! let (w, h) = (image.width() as i32, image.height() as i32);
//! image.edit().draw_diagonal_cross(0, 0, w - 1, h - 1, Pixel::WHITE);
//!
//! for line in preview(&image) {
//!     println!("{line}");
//! }
//!
//! encode_file(&image, "output.bmp")?;
//! # Ok::<(), bmpcanvas::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod decode;
mod draw;
mod encode;
mod error;
mod image;
mod limits;
mod pixel;
mod preview;

// Re-exports
pub use buffer::PixelBuffer;
#[cfg(feature = "std")]
pub use decode::decode_file;
pub use decode::{DecodeRequest, decode};
pub use draw::RasterEditor;
#[cfg(feature = "std")]
pub use encode::encode_file;
pub use encode::{EncodeRequest, encode};
pub use error::BmpError;
pub use image::{HeaderBlob, Image, ImageInfo};
pub use limits::Limits;
pub use pixel::{BitDepth, Pixel, RowPadding};
pub use preview::preview;
