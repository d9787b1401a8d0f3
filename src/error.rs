use alloc::string::String;

/// Errors from BMP decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// The first two bytes were not the `BM` magic.
    #[error("not a BMP file (bad signature)")]
    InvalidSignature,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Bit count other than 24 or 32. Palette and compressed variants
    /// carry depths this crate does not read.
    #[error("unsupported bit depth: {0} (only 24 and 32 are supported)")]
    UnsupportedBitDepth(u16),

    /// Input ended before the declared header or pixel array did.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Width × height (× bytes per pixel) overflowed the address space.
    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// Underlying file I/O failure (open, read, or write).
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
