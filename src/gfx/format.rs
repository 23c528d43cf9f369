//! Pixel layouts and the compile-time pixel configuration.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Compile-time layout of the native 32-bit pixel and the screen RGB565 pixel.
///
/// Channel shifts must be distinct multiples of 8 so the packed two-lane kernels
/// (`0x00FF00FF` groups) stay valid. The screen green field is always bits `5..11`.
pub trait PixelConfig: Copy + Debug + Default + 'static {
    /// Bit offset of red in a native pixel.
    const RED_SHIFT: u32;
    /// Bit offset of green in a native pixel.
    const GREEN_SHIFT: u32;
    /// Bit offset of blue in a native pixel.
    const BLUE_SHIFT: u32;
    /// Bit offset of alpha in a native pixel.
    const ALPHA_SHIFT: u32;
    /// Bit offset of the 5-bit red field in a screen pixel.
    const SCREEN_RED_SHIFT: u32;
    /// Bit offset of the 5-bit blue field in a screen pixel.
    const SCREEN_BLUE_SHIFT: u32;
    /// Whether native colour channels are stored premultiplied by alpha.
    const PREMULTIPLIED: bool;

    /// Read the alpha channel of a native pixel.
    #[inline]
    fn alpha(pixel: u32) -> u32 {
        (pixel >> Self::ALPHA_SHIFT) & 0xFF
    }

    /// Pack channel values (already in the configured alpha convention).
    #[inline]
    fn pack(r: u8, g: u8, b: u8, a: u8) -> u32 {
        (u32::from(r) << Self::RED_SHIFT)
            | (u32::from(g) << Self::GREEN_SHIFT)
            | (u32::from(b) << Self::BLUE_SHIFT)
            | (u32::from(a) << Self::ALPHA_SHIFT)
    }

    /// Unpack a native pixel into `[r, g, b, a]` without touching the alpha convention.
    #[inline]
    fn unpack(pixel: u32) -> [u8; 4] {
        [
            (pixel >> Self::RED_SHIFT) as u8,
            (pixel >> Self::GREEN_SHIFT) as u8,
            (pixel >> Self::BLUE_SHIFT) as u8,
            (pixel >> Self::ALPHA_SHIFT) as u8,
        ]
    }
}

/// ARGB native layout with premultiplied colour, RGB565 screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Premultiplied;

impl PixelConfig for Premultiplied {
    const RED_SHIFT: u32 = 16;
    const GREEN_SHIFT: u32 = 8;
    const BLUE_SHIFT: u32 = 0;
    const ALPHA_SHIFT: u32 = 24;
    const SCREEN_RED_SHIFT: u32 = 11;
    const SCREEN_BLUE_SHIFT: u32 = 0;
    const PREMULTIPLIED: bool = true;
}

/// ARGB native layout with straight (non-premultiplied) colour, RGB565 screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Straight;

impl PixelConfig for Straight {
    const RED_SHIFT: u32 = 16;
    const GREEN_SHIFT: u32 = 8;
    const BLUE_SHIFT: u32 = 0;
    const ALPHA_SHIFT: u32 = 24;
    const SCREEN_RED_SHIFT: u32 = 11;
    const SCREEN_BLUE_SHIFT: u32 = 0;
    const PREMULTIPLIED: bool = false;
}

/// Pixel configuration used by the format-dispatching entry points.
#[cfg(not(feature = "straight-alpha"))]
pub type DefaultConfig = Premultiplied;

/// Pixel configuration used by the format-dispatching entry points.
#[cfg(feature = "straight-alpha")]
pub type DefaultConfig = Straight;

/// Storage format of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceFormat {
    /// 32-bit pixel laid out by the active [`PixelConfig`].
    Native,
    /// 16-bit RGB565 with red/blue placement taken from the active [`PixelConfig`].
    Screen,
    /// 16-bit RGB565 with red in the top bits and blue in the bottom bits.
    Rgb565,
    /// 8-bit index into a 256-entry native colour lookup table.
    Index8,
    /// 8-bit coverage/alpha only.
    Alpha8,
}

impl SurfaceFormat {
    /// Bytes occupied by one pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Native => 4,
            Self::Screen | Self::Rgb565 => 2,
            Self::Index8 | Self::Alpha8 => 1,
        }
    }

    /// Whether the format carries a colour lookup table.
    pub fn has_clut(self) -> bool {
        matches!(self, Self::Index8)
    }
}

/// Straight-alpha 8-bit colour used at API boundaries (gradient corners, solid fills, CLI).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Build a colour from its components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Parse `RRGGBB` or `RRGGBBAA` hex, with or without a leading `#`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(s.get(i..i + 2)?, 16).ok();
        match s.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Encode as the native pixel of `C`, premultiplying when `C` asks for it.
    pub fn to_native<C: PixelConfig>(self) -> u32 {
        if C::PREMULTIPLIED {
            let w = u32::from(self.a) + 1;
            let m = |c: u8| ((u32::from(c) * w) >> 8) as u8;
            C::pack(m(self.r), m(self.g), m(self.b), self.a)
        } else {
            C::pack(self.r, self.g, self.b, self.a)
        }
    }

    /// Decode a native pixel of `C`, undoing premultiplication when `C` uses it.
    pub fn from_native<C: PixelConfig>(pixel: u32) -> Self {
        let [r, g, b, a] = C::unpack(pixel);
        if !C::PREMULTIPLIED || a == 255 {
            return Self::rgba(r, g, b, a);
        }
        if a == 0 {
            return Self::TRANSPARENT;
        }
        let inv = crate::foundation::math::INV_ALPHA[usize::from(a)];
        let un = |c: u8| ((u32::from(c) * 255 * inv + 0x8000) >> 16).min(255) as u8;
        Self::rgba(un(r), un(g), un(b), a)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gfx/format.rs"]
mod tests;
