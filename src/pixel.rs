/// One pixel in BGRA channel order, matching BMP's on-disk byte order.
///
/// `a` is meaningful only for 32-bit images. The decoder leaves it 0 for
/// 24-bit input and the encoder never writes it at that depth.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::bgr(0, 0, 0);
    pub const WHITE: Pixel = Pixel::bgr(255, 255, 255);

    /// Color with alpha left at 0 (the 24-bit convention).
    pub const fn bgr(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r, a: 0 }
    }

    pub const fn bgra(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// All color channels 0. Alpha is ignored.
    pub const fn is_black(self) -> bool {
        self.b == 0 && self.g == 0 && self.r == 0
    }

    /// All color channels 255. Alpha is ignored.
    pub const fn is_white(self) -> bool {
        self.b == 255 && self.g == 255 && self.r == 255
    }
}

/// Pixel depth of a decoded image. Only the two uncompressed truecolor
/// depths are supported; everything else is rejected at decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitDepth {
    /// 24 bits per pixel, B,G,R on disk.
    Rgb24,
    /// 32 bits per pixel, B,G,R,A on disk.
    Rgba32,
}

impl BitDepth {
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            24 => Some(Self::Rgb24),
            32 => Some(Self::Rgba32),
            _ => None,
        }
    }

    /// The bit-count value as stored in the info header.
    pub fn bits(self) -> u16 {
        match self {
            Self::Rgb24 => 24,
            Self::Rgba32 => 32,
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb24 => 3,
            Self::Rgba32 => 4,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba32)
    }
}

/// How the trailing padding of each pixel row is computed.
///
/// BMP rows are padded to 4-byte boundaries. [`ThreeByteStride`], the
/// default, derives the padding from a 3-byte pixel stride at *every* depth,
/// so 32-bit rows carry `(4 - (width*3) % 4) % 4` pad bytes even though
/// 4-byte pixels never need any; files written under this rule read back
/// under it symmetrically. [`PixelStride`] computes padding from the actual
/// pixel size, which is what standard BMP writers produce (zero padding at
/// 32-bit).
///
/// Decoding a standards-compliant 32-bit file whose width is not a multiple
/// of 4 under [`ThreeByteStride`] fails the pixel-array length validation
/// rather than shearing rows; select [`PixelStride`] for such files.
///
/// [`ThreeByteStride`]: RowPadding::ThreeByteStride
/// [`PixelStride`]: RowPadding::PixelStride
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RowPadding {
    /// Pad as if pixels were 3 bytes wide regardless of depth.
    #[default]
    ThreeByteStride,
    /// Pad from the real byte width of a pixel row.
    PixelStride,
}

impl RowPadding {
    /// Pad bytes appended after one row of `width` pixels at `depth`.
    pub(crate) fn bytes(self, width: usize, depth: BitDepth) -> usize {
        let stride = match self {
            Self::ThreeByteStride => width * 3,
            Self::PixelStride => width * depth.bytes_per_pixel(),
        };
        (4 - stride % 4) % 4
    }
}
