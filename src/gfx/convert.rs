//! Native <-> RGB565 conversion.
//!
//! Narrowing truncates; widening replicates the high bits into the low bits so `0x1F`
//! expands to `0xFF` and `0` stays `0`.

use super::format::PixelConfig;

const RGB565_RED_SHIFT: u32 = 11;
const RGB565_GREEN_SHIFT: u32 = 5;
const RGB565_BLUE_SHIFT: u32 = 0;

#[inline]
fn expand5(c: u32) -> u32 {
    (c << 3) | (c >> 2)
}

#[inline]
fn expand6(c: u32) -> u32 {
    (c << 2) | (c >> 4)
}

#[inline]
fn narrow<C: PixelConfig>(pixel: u32, red_shift: u32, blue_shift: u32) -> u16 {
    let r = (pixel >> C::RED_SHIFT) & 0xFF;
    let g = (pixel >> C::GREEN_SHIFT) & 0xFF;
    let b = (pixel >> C::BLUE_SHIFT) & 0xFF;
    (((r >> 3) << red_shift) | ((g >> 2) << RGB565_GREEN_SHIFT) | ((b >> 3) << blue_shift)) as u16
}

#[inline]
fn widen<C: PixelConfig>(pixel: u16, red_shift: u32, blue_shift: u32, alpha: u32) -> u32 {
    let p = u32::from(pixel);
    let r = expand5((p >> red_shift) & 0x1F);
    let g = expand6((p >> RGB565_GREEN_SHIFT) & 0x3F);
    let b = expand5((p >> blue_shift) & 0x1F);
    (r << C::RED_SHIFT) | (g << C::GREEN_SHIFT) | (b << C::BLUE_SHIFT) | (alpha << C::ALPHA_SHIFT)
}

/// Convert a native pixel to the screen RGB565 layout of `C`. Alpha is dropped.
#[inline]
pub fn native_to_screen<C: PixelConfig>(pixel: u32) -> u16 {
    narrow::<C>(pixel, C::SCREEN_RED_SHIFT, C::SCREEN_BLUE_SHIFT)
}

/// Widen a screen pixel to an opaque native pixel.
#[inline]
pub fn screen_to_native_opaque<C: PixelConfig>(pixel: u16) -> u32 {
    widen::<C>(pixel, C::SCREEN_RED_SHIFT, C::SCREEN_BLUE_SHIFT, 0xFF)
}

/// Widen a screen pixel to a native pixel with alpha 0.
///
/// In premultiplied configurations the result is only meaningful as an additive term.
#[inline]
pub fn screen_to_native_transparent<C: PixelConfig>(pixel: u16) -> u32 {
    widen::<C>(pixel, C::SCREEN_RED_SHIFT, C::SCREEN_BLUE_SHIFT, 0)
}

/// Convert a native pixel to explicit RGB565 (red high, blue low).
#[inline]
pub fn native_to_rgb565<C: PixelConfig>(pixel: u32) -> u16 {
    narrow::<C>(pixel, RGB565_RED_SHIFT, RGB565_BLUE_SHIFT)
}

/// Widen an explicit RGB565 pixel to an opaque native pixel.
#[inline]
pub fn rgb565_to_native_opaque<C: PixelConfig>(pixel: u16) -> u32 {
    widen::<C>(pixel, RGB565_RED_SHIFT, RGB565_BLUE_SHIFT, 0xFF)
}

#[cfg(test)]
#[path = "../../tests/unit/gfx/convert.rs"]
mod tests;
