//! BMP decoding: header-field parse, validation, and the pixel-array read
//! that normalizes row order to top-down.

use log::{debug, trace};

use crate::buffer::PixelBuffer;
use crate::error::BmpError;
use crate::image::{HeaderBlob, Image, ImageInfo};
use crate::limits::Limits;
use crate::pixel::{BitDepth, Pixel, RowPadding};

/// "BM", little-endian.
const BMP_SIGNATURE: u16 = 0x4D42;

/// BITMAPFILEHEADER (14) plus BITMAPINFOHEADER (40). The fixed field layout
/// parsed below assumes at least this much header before the pixel array.
const MIN_PIXEL_DATA_OFFSET: u32 = 54;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn set_position(&mut self, pos: usize) -> Result<(), BmpError> {
        if pos > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        let new_pos = self.pos.checked_add(n).ok_or(BmpError::UnexpectedEof)?;
        if new_pos > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        self.pos = new_pos;
        Ok(())
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        if self.pos + N > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        Ok(u16::from_le_bytes(self.read_fixed_bytes()?))
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        Ok(u32::from_le_bytes(self.read_fixed_bytes()?))
    }

    fn get_i32_le(&mut self) -> Result<i32, BmpError> {
        Ok(i32::from_le_bytes(self.read_fixed_bytes()?))
    }
}

// ── Header fields ───────────────────────────────────────────────────

pub(crate) struct RawHeader {
    pub(crate) pixel_data_offset: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) top_down: bool,
    pub(crate) depth: BitDepth,
}

/// Parse and validate the fixed header fields. Everything else in the
/// header region stays opaque and rides along in the blob.
pub(crate) fn parse_header(data: &[u8]) -> Result<RawHeader, BmpError> {
    let mut bytes = Cursor::new(data);

    if bytes.get_u16_le()? != BMP_SIGNATURE {
        return Err(BmpError::InvalidSignature);
    }
    // File size field + two reserved words, preserved via the blob.
    bytes.skip(8)?;
    let pixel_data_offset = bytes.get_u32_le()?;
    bytes.skip(4)?; // info header size
    let width = bytes.get_i32_le()?;
    let height = bytes.get_i32_le()?;
    bytes.skip(2)?; // planes
    let bit_count = bytes.get_u16_le()?;

    let depth = BitDepth::from_bits(bit_count).ok_or(BmpError::UnsupportedBitDepth(bit_count))?;

    if width < 1 {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "BMP width is {width}, expected >= 1"
        )));
    }
    // Negative height flags top-down row order. unsigned_abs because
    // i32::MIN has no i32 negation.
    let top_down = height < 0;
    let height = height.unsigned_abs();
    if height == 0 {
        return Err(BmpError::InvalidHeader("BMP height is zero".into()));
    }
    if pixel_data_offset < MIN_PIXEL_DATA_OFFSET {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "BMP pixel data offset is {pixel_data_offset}, expected >= {MIN_PIXEL_DATA_OFFSET}"
        )));
    }

    Ok(RawHeader {
        pixel_data_offset,
        width: width as u32,
        height,
        top_down,
        depth,
    })
}

// ── Decode ──────────────────────────────────────────────────────────

fn decode_with(
    data: &[u8],
    limits: Option<&Limits>,
    padding: RowPadding,
) -> Result<Image, BmpError> {
    let header = parse_header(data)?;

    let offset = header.pixel_data_offset as usize;
    if offset > data.len() {
        return Err(BmpError::UnexpectedEof);
    }

    let width = header.width as usize;
    let height = header.height as usize;
    let depth = header.depth;
    let pad = padding.bytes(width, depth);

    let too_large = || BmpError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    };
    let row_bytes = width
        .checked_mul(depth.bytes_per_pixel())
        .and_then(|n| n.checked_add(pad))
        .ok_or_else(too_large)?;
    let pixel_array_len = row_bytes.checked_mul(height).ok_or_else(too_large)?;
    let pixel_array_end = offset.checked_add(pixel_array_len).ok_or_else(too_large)?;
    if pixel_array_end > data.len() {
        return Err(BmpError::UnexpectedEof);
    }

    if let Some(limits) = limits {
        limits.check_dimensions(header.width, header.height)?;
        let buf_bytes = (u64::from(header.width) * u64::from(header.height))
            .saturating_mul(core::mem::size_of::<Pixel>() as u64);
        limits.check_allocation(buf_bytes)?;
    }

    debug!(
        "BMP {}x{} {}bpp, {} row order, pixel array at {}..{}",
        width,
        height,
        depth.bits(),
        if header.top_down { "top-down" } else { "bottom-up" },
        offset,
        pixel_array_end,
    );
    trace!("row stride {row_bytes} bytes ({pad} pad)");

    let mut pixels = PixelBuffer::new(width, height);
    let mut bytes = Cursor::new(data);
    bytes.set_position(offset)?;

    // One on-disk row into one memory row, in file order. The caller picks
    // memory rows so that row 0 lands visually topmost.
    let mut read_row = |row: &mut [Pixel]| -> Result<(), BmpError> {
        for px in row.iter_mut() {
            *px = match depth {
                BitDepth::Rgb24 => {
                    let [b, g, r] = bytes.read_fixed_bytes()?;
                    Pixel::bgr(b, g, r)
                }
                BitDepth::Rgba32 => {
                    let [b, g, r, a] = bytes.read_fixed_bytes()?;
                    Pixel::bgra(b, g, r, a)
                }
            };
        }
        bytes.skip(pad)
    };

    if header.top_down {
        for row in pixels.rows_mut() {
            read_row(row)?;
        }
    } else {
        // Bottom-up files store the visually last row first.
        for row in pixels.rows_mut().rev() {
            read_row(row)?;
        }
    }

    Ok(Image {
        header: HeaderBlob(data[..offset].to_vec()),
        info: ImageInfo {
            width: header.width,
            height: header.height,
            depth,
        },
        pixels,
    })
}

// ── Request ─────────────────────────────────────────────────────────

/// Builder-style decode with optional limits and a row-padding rule.
///
/// [`decode`] is the shorthand for a request with defaults.
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    row_padding: RowPadding,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            row_padding: RowPadding::default(),
        }
    }

    /// Cap dimensions and memory before anything is allocated.
    #[must_use]
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Row padding rule; see [`RowPadding`].
    #[must_use]
    pub fn with_row_padding(mut self, padding: RowPadding) -> Self {
        self.row_padding = padding;
        self
    }

    pub fn decode(self) -> Result<Image, BmpError> {
        decode_with(self.data, self.limits, self.row_padding)
    }
}

/// Decode a BMP from memory with default options.
pub fn decode(data: &[u8]) -> Result<Image, BmpError> {
    DecodeRequest::new(data).decode()
}

/// Read and decode a BMP file.
#[cfg(feature = "std")]
pub fn decode_file<P: AsRef<std::path::Path>>(path: P) -> Result<Image, BmpError> {
    let data = std::fs::read(path)?;
    decode(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(offset: u32, width: i32, height: i32, bit_count: u16) -> [u8; 30] {
        let mut h = [0u8; 30];
        h[0] = b'B';
        h[1] = b'M';
        h[10..14].copy_from_slice(&offset.to_le_bytes());
        h[14..18].copy_from_slice(&40u32.to_le_bytes());
        h[18..22].copy_from_slice(&width.to_le_bytes());
        h[22..26].copy_from_slice(&height.to_le_bytes());
        h[26..28].copy_from_slice(&1u16.to_le_bytes());
        h[28..30].copy_from_slice(&bit_count.to_le_bytes());
        h
    }

    #[test]
    fn cursor_reads_little_endian() {
        let mut c = Cursor::new(&[0x42, 0x4D, 0xFF, 0xFF, 0xFF, 0x7F]);
        assert_eq!(c.get_u16_le().unwrap(), 0x4D42);
        assert_eq!(c.get_i32_le().unwrap(), i32::MAX);
        assert!(matches!(c.get_u16_le(), Err(BmpError::UnexpectedEof)));
    }

    #[test]
    fn cursor_skip_and_seek_stop_at_eof() {
        let mut c = Cursor::new(&[0u8; 4]);
        assert!(c.skip(4).is_ok());
        assert!(c.skip(1).is_err());
        assert!(c.set_position(4).is_ok());
        assert!(c.set_position(5).is_err());
    }

    #[test]
    fn truncated_header_is_eof() {
        assert!(matches!(parse_header(b"BM"), Err(BmpError::UnexpectedEof)));
    }

    #[test]
    fn rejects_bad_signature() {
        let mut h = header_bytes(54, 1, 1, 24);
        h[0] = b'X';
        assert!(matches!(
            parse_header(&h),
            Err(BmpError::InvalidSignature)
        ));
    }

    #[test]
    fn parses_orientation_and_magnitude() {
        let parsed = parse_header(&header_bytes(54, 7, -9, 32)).unwrap();
        assert_eq!((parsed.width, parsed.height), (7, 9));
        assert!(parsed.top_down);
        assert_eq!(parsed.depth, BitDepth::Rgba32);

        let parsed = parse_header(&header_bytes(54, 7, 9, 24)).unwrap();
        assert!(!parsed.top_down);
        assert_eq!(parsed.depth, BitDepth::Rgb24);
    }

    #[test]
    fn i32_min_height_keeps_full_magnitude() {
        let parsed = parse_header(&header_bytes(54, 1, i32::MIN, 24)).unwrap();
        assert!(parsed.top_down);
        assert_eq!(parsed.height, 2_147_483_648);
    }

    #[test]
    fn rejects_offset_inside_header() {
        assert!(matches!(
            parse_header(&header_bytes(53, 1, 1, 24)),
            Err(BmpError::InvalidHeader(_))
        ));
    }

    #[test]
    fn rejects_nonpositive_dimensions() {
        assert!(matches!(
            parse_header(&header_bytes(54, 0, 1, 24)),
            Err(BmpError::InvalidHeader(_))
        ));
        assert!(matches!(
            parse_header(&header_bytes(54, -3, 1, 24)),
            Err(BmpError::InvalidHeader(_))
        ));
        assert!(matches!(
            parse_header(&header_bytes(54, 1, 0, 24)),
            Err(BmpError::InvalidHeader(_))
        ));
    }

    #[test]
    fn rejects_unsupported_depths() {
        for bits in [0u16, 1, 4, 8, 16, 48] {
            assert!(matches!(
                parse_header(&header_bytes(54, 1, 1, bits)),
                Err(BmpError::UnsupportedBitDepth(b)) if b == bits
            ));
        }
    }
}
