//! Four-corner linear gradients evaluated incrementally in 20-bit fixed point.

use super::format::{Color, PixelConfig};
use crate::foundation::math::{GRADIENT_FRAC_BITS, recip_span, scale_by_recip};

const ROUND: i32 = 1 << (GRADIENT_FRAC_BITS - 1);

/// Which axes a gradient varies along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientKind {
    /// Constant colour.
    Solid,
    /// Varies along x only.
    Horizontal,
    /// Varies along y only.
    Vertical,
    /// Varies along both axes.
    Both,
}

/// Gradient over a `width` x `height` area, interpolated between four corner colours.
///
/// Channels are held per byte lane of the native pixel (lane `i` = bits `8i..8i+8`), so the
/// same gradient feeds colour and opacity sources.
#[derive(Clone, Debug)]
pub struct Gradient {
    kind: GradientKind,
    width: u32,
    height: u32,
    top_left: [i32; 4],
    top_right: [i32; 4],
    left_slope: [i32; 4],
    right_slope: [i32; 4],
    inv_width: u32,
}

/// Per-row cursor over a gradient. Produces one native pixel per call to [`Self::next_pixel`].
#[derive(Clone, Copy, Debug)]
pub struct GradientRow {
    value: [i32; 4],
    step: [i32; 4],
}

fn lanes<C: PixelConfig>(c: Color) -> [i32; 4] {
    let p = c.to_native::<C>();
    std::array::from_fn(|i| (((p >> (8 * i)) & 0xFF) as i32) << GRADIENT_FRAC_BITS)
}

fn slope(from: [i32; 4], to: [i32; 4], span: u32) -> [i32; 4] {
    if span == 0 {
        return [0; 4];
    }
    std::array::from_fn(|i| (to[i] - from[i]) / span as i32)
}

impl Gradient {
    /// A constant colour.
    pub fn solid<C: PixelConfig>(color: Color) -> Self {
        let c = lanes::<C>(color);
        Self {
            kind: GradientKind::Solid,
            width: 1,
            height: 1,
            top_left: c,
            top_right: c,
            left_slope: [0; 4],
            right_slope: [0; 4],
            inv_width: 0,
        }
    }

    /// Interpolate between corner colours over `width` x `height` pixels. Corner values are
    /// hit exactly at columns `0`, `width - 1` and rows `0`, `height - 1`.
    pub fn corners<C: PixelConfig>(
        width: u32,
        height: u32,
        top_left: Color,
        top_right: Color,
        bottom_left: Color,
        bottom_right: Color,
    ) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let horizontal = top_left != top_right || bottom_left != bottom_right;
        let vertical = top_left != bottom_left || top_right != bottom_right;
        let kind = match (horizontal, vertical) {
            (false, false) => GradientKind::Solid,
            (true, false) => GradientKind::Horizontal,
            (false, true) => GradientKind::Vertical,
            (true, true) => GradientKind::Both,
        };
        let tl = lanes::<C>(top_left);
        let tr = lanes::<C>(top_right);
        let bl = lanes::<C>(bottom_left);
        let br = lanes::<C>(bottom_right);
        Self {
            kind,
            width,
            height,
            top_left: tl,
            top_right: tr,
            left_slope: slope(tl, bl, height - 1),
            right_slope: slope(tr, br, height - 1),
            inv_width: recip_span(width - 1),
        }
    }

    /// Left-to-right gradient.
    pub fn horizontal<C: PixelConfig>(width: u32, left: Color, right: Color) -> Self {
        Self::corners::<C>(width, 1, left, right, left, right)
    }

    /// Top-to-bottom gradient.
    pub fn vertical<C: PixelConfig>(height: u32, top: Color, bottom: Color) -> Self {
        Self::corners::<C>(1, height, top, top, bottom, bottom)
    }

    /// Which axes vary.
    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    /// Width the horizontal interpolation spans.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height the vertical interpolation spans.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cursor for row `y` starting at column `x`.
    pub fn row(&self, x: u32, y: u32) -> GradientRow {
        let y = y.min(self.height - 1) as i32;
        let left: [i32; 4] = std::array::from_fn(|i| self.top_left[i] + self.left_slope[i] * y);
        let step: [i32; 4] = match self.kind {
            GradientKind::Solid | GradientKind::Vertical => [0; 4],
            GradientKind::Horizontal | GradientKind::Both => std::array::from_fn(|i| {
                let right = self.top_right[i] + self.right_slope[i] * y;
                scale_by_recip(right - left[i], self.inv_width)
            }),
        };
        let x = x.min(self.width - 1) as i32;
        GradientRow {
            value: std::array::from_fn(|i| left[i] + step[i] * x + ROUND),
            step,
        }
    }

    /// Evaluate one pixel. Intended for tests and diagnostics; drawing uses [`Self::row`].
    pub fn pixel_at(&self, x: u32, y: u32) -> u32 {
        self.row(x, y).peek()
    }
}

impl GradientRow {
    /// A zero-slope row whose every byte lane is `value`.
    pub fn constant(value: u8) -> Self {
        let v = (i32::from(value) << GRADIENT_FRAC_BITS) + ROUND;
        Self {
            value: [v; 4],
            step: [0; 4],
        }
    }

    #[inline]
    fn lane(&self, i: usize) -> u32 {
        (self.value[i] >> GRADIENT_FRAC_BITS).clamp(0, 255) as u32
    }

    /// Current pixel without advancing.
    #[inline]
    pub fn peek(&self) -> u32 {
        self.lane(0) | (self.lane(1) << 8) | (self.lane(2) << 16) | (self.lane(3) << 24)
    }

    /// Current value of the byte lane at bit offset `shift`, then advance one pixel.
    #[inline]
    pub fn next_lane(&mut self, shift: u32) -> u8 {
        let v = self.lane((shift / 8) as usize) as u8;
        self.advance();
        v
    }

    /// Current pixel, then advance one pixel.
    #[inline]
    pub fn next_pixel(&mut self) -> u32 {
        let p = self.peek();
        self.advance();
        p
    }

    #[inline]
    fn advance(&mut self) {
        for i in 0..4 {
            self.value[i] = self.value[i].saturating_add(self.step[i]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gfx/gradient.rs"]
mod tests;
