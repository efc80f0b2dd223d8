//! The packed 16-bit pixel type.

/// A 16-bit pixel with 5 red bits, 6 green bits and 5 blue bits.
///
/// Red occupies the most significant bits:
///
/// ```text
/// 15      11 10        5 4       0
/// R R R R R  G G G G G G  B B B B B
/// ```
///
/// # Example
///
/// ```
/// use rgb565_codec::Rgb565;
///
/// let red = Rgb565::from_rgb(255, 0, 0);
/// assert_eq!(red.value(), 0xF800);
/// assert_eq!(red.to_be_bytes(), [0xF8, 0x00]);
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb565(u16);

impl Rgb565 {
    const R_MASK: u16 = 0b1111_1000_0000_0000;
    const G_MASK: u16 = 0b0000_0111_1110_0000;
    const B_MASK: u16 = 0b0000_0000_0001_1111;

    /// Wrap an already packed value.
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Quantize 8-bit channels by truncating the low-order bits.
    ///
    /// Truncation is deterministic and never rounds up, so `(7, 3, 7)`
    /// packs to zero just like black.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r5 = ((r >> 3) & 0x1F) as u16;
        let g6 = ((g >> 2) & 0x3F) as u16;
        let b5 = ((b >> 3) & 0x1F) as u16;
        Self((r5 << 11) | (g6 << 5) | b5)
    }

    /// Quantize one RGBA8888 pixel, ignoring alpha.
    #[inline]
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::from_rgb(rgba[0], rgba[1], rgba[2])
    }

    /// Rebuild a pixel from its big-endian encoding.
    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    /// The packed value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Big-endian encoding, high byte first.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// The 5-bit red field.
    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 & Self::R_MASK) >> 11) as u8
    }

    /// The 6-bit green field.
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 & Self::G_MASK) >> 5) as u8
    }

    /// The 5-bit blue field.
    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 & Self::B_MASK) as u8
    }
}

impl From<Rgb565> for u16 {
    fn from(pixel: Rgb565) -> Self {
        pixel.0
    }
}

impl From<u16> for Rgb565 {
    fn from(value: u16) -> Self {
        Self(value)
    }
}
