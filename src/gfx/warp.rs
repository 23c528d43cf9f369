//! Fixed-point stepping for affine-warped texture rows.

use crate::foundation::math::{SUBPIXEL_BITS, WARP_FRAC_BITS, WARP_PROJECT_SHIFT};
use kurbo::{Affine, Point};

const HALF_PIXEL_Q4: i32 = 1 << (SUBPIXEL_BITS - 1);
const PROJECT_ROUND: i64 = 1 << (WARP_PROJECT_SHIFT - 1);

/// One destination row of a warped texture draw.
///
/// `(s, t)` is the normalized source coordinate of the first destination pixel (`1 << 16`
/// spans the whole source extent) and `(ss, ts)` the per-pixel step. Projection into source
/// pixels is one multiply and a shift, leaving 4 sub-pixel bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WarpRow {
    /// Normalized horizontal source coordinate.
    pub s: i32,
    /// Normalized vertical source coordinate.
    pub t: i32,
    /// Per-pixel step of `s`.
    pub ss: i32,
    /// Per-pixel step of `t`.
    pub ts: i32,
    /// Source width in pixels.
    pub src_width: u32,
    /// Source height in pixels.
    pub src_height: u32,
}

impl WarpRow {
    /// Build a row from raw fixed-point values.
    pub fn new(s: i32, t: i32, ss: i32, ts: i32, src_width: u32, src_height: u32) -> Self {
        Self {
            s,
            t,
            ss,
            ts,
            src_width,
            src_height,
        }
    }

    /// Derive the stepping for destination row `dst_y` starting at column `dst_x` from a
    /// destination-to-source affine map in source pixel units. Pixel centres are sampled.
    pub fn from_affine(
        dst_to_src: Affine,
        dst_x: i32,
        dst_y: i32,
        src_width: u32,
        src_height: u32,
    ) -> Self {
        let one = f64::from(1u32 << WARP_FRAC_BITS);
        let w = f64::from(src_width.max(1));
        let h = f64::from(src_height.max(1));
        let origin = dst_to_src * Point::new(f64::from(dst_x) + 0.5, f64::from(dst_y) + 0.5);
        let [a, b, ..] = dst_to_src.as_coeffs();
        Self {
            s: (origin.x / w * one).round() as i32,
            t: (origin.y / h * one).round() as i32,
            ss: (a / w * one).round() as i32,
            ts: (b / h * one).round() as i32,
            src_width,
            src_height,
        }
    }

    /// Current source position in `.4` pixels, with the pixel-centre bias removed so the
    /// integer part addresses the top-left bilinear neighbour.
    #[inline]
    pub(crate) fn filter_position(&self) -> (i32, i32) {
        let (x, y) = self.position();
        (x - HALF_PIXEL_Q4, y - HALF_PIXEL_Q4)
    }

    /// Current source position in `.4` pixels, rounded to the nearest sub-pixel step.
    #[inline]
    pub(crate) fn position(&self) -> (i32, i32) {
        let x = (i64::from(self.s) * i64::from(self.src_width) + PROJECT_ROUND)
            >> WARP_PROJECT_SHIFT;
        let y = (i64::from(self.t) * i64::from(self.src_height) + PROJECT_ROUND)
            >> WARP_PROJECT_SHIFT;
        (x as i32, y as i32)
    }

    /// Source pixel under the current position, clamped to the source extent.
    #[inline]
    pub(crate) fn texel(&self) -> (usize, usize) {
        let (x, y) = self.position();
        let clamp = |v: i32, extent: u32| {
            ((v.max(0) >> SUBPIXEL_BITS) as usize).min(extent.saturating_sub(1) as usize)
        };
        (clamp(x, self.src_width), clamp(y, self.src_height))
    }

    /// Step to the next destination pixel.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.s = self.s.wrapping_add(self.ss);
        self.t = self.t.wrapping_add(self.ts);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gfx/warp.rs"]
mod tests;
