//! Bilinear sampling kernels.
//!
//! Coordinates carry 4 sub-pixel bits (`x_q4 = x * 16`). Neighbours past the right or
//! bottom edge are clamped to the last column or row.

use super::convert::{rgb565_to_native_opaque, screen_to_native_opaque};
use super::format::PixelConfig;
use super::surface::SurfaceView;

const LANES: u32 = 0x00FF_00FF;
const LANES_565: u64 = 0xF81F | (0x07E0 << 24);

/// Weights `[f1, f2, f3, f4]` for top-left, top-right, bottom-left, bottom-right; they sum
/// to 256. `fx`, `fy` are in `0..16`.
#[inline]
pub fn bilinear_weights(fx: u32, fy: u32) -> [u32; 4] {
    [(16 - fx) * (16 - fy), fx * (16 - fy), (16 - fx) * fy, fx * fy]
}

/// Interpolate four native pixels `[tl, tr, bl, br]` with packed lane arithmetic.
#[inline]
pub fn bilinear_native(p: [u32; 4], fx: u32, fy: u32) -> u32 {
    let [f1, f2, f3, f4] = bilinear_weights(fx, fy);
    let even = ((p[0] & LANES) * f1
        + (p[1] & LANES) * f2
        + (p[2] & LANES) * f3
        + (p[3] & LANES) * f4)
        >> 8;
    let odd = ((p[0] >> 8) & LANES) * f1
        + ((p[1] >> 8) & LANES) * f2
        + ((p[2] >> 8) & LANES) * f3
        + ((p[3] >> 8) & LANES) * f4;
    (even & LANES) | (odd & !LANES)
}

/// Interpolate four packed RGB565 pixels on a 3-bit grid (`fx`, `fy` in `0..8`), weights
/// summing to 64. Works for both screen and explicit RGB565 layouts since green always sits
/// in bits `5..11`.
#[inline]
pub fn bilinear_rgb565_half(p: [u16; 4], fx: u32, fy: u32) -> u16 {
    let spread = |v: u16| {
        let v = u64::from(v);
        (v & 0xF81F) | ((v & 0x07E0) << 24)
    };
    let (fx, fy) = (u64::from(fx), u64::from(fy));
    let sum = spread(p[0]) * ((8 - fx) * (8 - fy))
        + spread(p[1]) * (fx * (8 - fy))
        + spread(p[2]) * ((8 - fx) * fy)
        + spread(p[3]) * (fx * fy);
    let packed = (sum >> 6) & LANES_565;
    ((packed & 0xF81F) | ((packed >> 24) & 0x07E0)) as u16
}

/// Interpolate four coverage values.
#[inline]
pub fn bilinear_alpha8(p: [u8; 4], fx: u32, fy: u32) -> u8 {
    let [f1, f2, f3, f4] = bilinear_weights(fx, fy);
    ((u32::from(p[0]) * f1 + u32::from(p[1]) * f2 + u32::from(p[2]) * f3 + u32::from(p[3]) * f4)
        >> 8) as u8
}

/// Split a `.4` coordinate into `(integer, fraction)`, clamping negatives to 0.
#[inline]
pub(crate) fn split_q4(v: i32) -> (usize, u32) {
    let v = v.max(0) as u32;
    ((v >> 4) as usize, v & 0xF)
}

/// Fetch the 2x2 neighbourhood of `(x, y)` with edge clamping.
#[inline]
pub(crate) fn neighbours<P: Copy>(view: &SurfaceView<'_, P>, x: usize, y: usize) -> [P; 4] {
    let last_x = view.width() - 1;
    let last_y = view.height() - 1;
    let x0 = x.min(last_x);
    let y0 = y.min(last_y);
    let x1 = (x0 + 1).min(last_x);
    let y1 = (y0 + 1).min(last_y);
    [view.get(x0, y0), view.get(x1, y0), view.get(x0, y1), view.get(x1, y1)]
}

/// Bilinear sample of a native view at a `.4` coordinate.
#[inline]
pub fn sample_native(view: &SurfaceView<'_, u32>, x_q4: i32, y_q4: i32) -> u32 {
    let (x, fx) = split_q4(x_q4);
    let (y, fy) = split_q4(y_q4);
    bilinear_native(neighbours(view, x, y), fx, fy)
}

/// Bilinear sample of an Index8 view, looking neighbours up in `clut` first.
#[inline]
pub fn sample_index8(view: &SurfaceView<'_, u8>, clut: &[u32], x_q4: i32, y_q4: i32) -> u32 {
    let (x, fx) = split_q4(x_q4);
    let (y, fy) = split_q4(y_q4);
    let n = neighbours(view, x, y).map(|i| clut[usize::from(i)]);
    bilinear_native(n, fx, fy)
}

/// Bilinear sample of an Alpha8 view.
#[inline]
pub fn sample_alpha8(view: &SurfaceView<'_, u8>, x_q4: i32, y_q4: i32) -> u8 {
    let (x, fx) = split_q4(x_q4);
    let (y, fy) = split_q4(y_q4);
    bilinear_alpha8(neighbours(view, x, y), fx, fy)
}

/// Full-precision bilinear sample of a screen view, expanded to native first.
#[inline]
pub fn sample_screen<C: PixelConfig>(view: &SurfaceView<'_, u16>, x_q4: i32, y_q4: i32) -> u32 {
    let (x, fx) = split_q4(x_q4);
    let (y, fy) = split_q4(y_q4);
    bilinear_native(neighbours(view, x, y).map(screen_to_native_opaque::<C>), fx, fy)
}

/// Full-precision bilinear sample of an explicit RGB565 view, expanded to native first.
#[inline]
pub fn sample_rgb565<C: PixelConfig>(view: &SurfaceView<'_, u16>, x_q4: i32, y_q4: i32) -> u32 {
    let (x, fx) = split_q4(x_q4);
    let (y, fy) = split_q4(y_q4);
    bilinear_native(neighbours(view, x, y).map(rgb565_to_native_opaque::<C>), fx, fy)
}

/// Reduced-precision bilinear sample on packed RGB565, dropping the lowest fraction bit.
#[inline]
pub fn sample_565_half(view: &SurfaceView<'_, u16>, x_q4: i32, y_q4: i32) -> u16 {
    let (x, fx) = split_q4(x_q4);
    let (y, fy) = split_q4(y_q4);
    bilinear_rgb565_half(neighbours(view, x, y), fx >> 1, fy >> 1)
}

#[cfg(test)]
#[path = "../../tests/unit/gfx/filter.rs"]
mod tests;
