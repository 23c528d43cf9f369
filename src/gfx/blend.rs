//! Per-pixel "over" compositing and opacity modulation on native pixels.
//!
//! Opacities are 8-bit and scale by `(opacity + 1) / 256`, so 255 is the identity and 0
//! clears. All kernels are total functions: any `u32` input yields a defined output.

use super::format::PixelConfig;
use crate::foundation::math::{INV_ALPHA, mul_shr8};

const LANES: u32 = 0x00FF_00FF;

/// Scale all four channels by `weight / 256` (`weight` in `0..=256`) using two packed
/// multiplies over the `0x00FF00FF` lane groups.
#[inline]
fn scale_lanes(pixel: u32, weight: u32) -> u32 {
    let even = (((pixel & LANES) * weight) >> 8) & LANES;
    let odd = (((pixel >> 8) & LANES) * weight) & !LANES;
    even | odd
}

/// Apply `opacity` to a native pixel.
///
/// Premultiplied pixels scale every channel; straight pixels scale alpha only.
#[inline]
pub fn modulate<C: PixelConfig>(pixel: u32, opacity: u8) -> u32 {
    let weight = u32::from(opacity) + 1;
    if C::PREMULTIPLIED {
        scale_lanes(pixel, weight)
    } else {
        let a = (C::alpha(pixel) * weight) >> 8;
        (pixel & !(0xFF << C::ALPHA_SHIFT)) | (a << C::ALPHA_SHIFT)
    }
}

/// Composite `src` over `dst`.
#[inline]
pub fn blend<C: PixelConfig>(dst: u32, src: u32) -> u32 {
    let sa = C::alpha(src);
    if sa == 0xFF {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let da = C::alpha(dst);
    if da == 0 {
        return src;
    }
    if C::PREMULTIPLIED {
        src.wrapping_add(scale_lanes(dst, 256 - sa))
    } else {
        over_straight::<C>(dst, src, sa, da)
    }
}

/// Composite `src` scaled by `opacity` over `dst` in one pass.
#[inline]
pub fn blend_with_opacity<C: PixelConfig>(dst: u32, src: u32, opacity: u8) -> u32 {
    let weight = u32::from(opacity) + 1;
    let sa = (C::alpha(src) * weight) >> 8;
    if sa == 0 {
        return dst;
    }
    if C::PREMULTIPLIED {
        let src = scale_lanes(src, weight);
        if sa == 0xFF || C::alpha(dst) == 0 {
            return src;
        }
        return src.wrapping_add(scale_lanes(dst, 256 - sa));
    }
    let src = (src & !(0xFF << C::ALPHA_SHIFT)) | (sa << C::ALPHA_SHIFT);
    let da = C::alpha(dst);
    if sa == 0xFF || da == 0 {
        return src;
    }
    over_straight::<C>(dst, src, sa, da)
}

/// Straight-alpha "over": weight both colours by their effective coverage, then divide
/// by the result alpha through [`INV_ALPHA`].
#[inline]
fn over_straight<C: PixelConfig>(dst: u32, src: u32, sa: u32, da: u32) -> u32 {
    let dw = mul_shr8(da, 256 - sa);
    let ra = sa + dw;
    let inv = INV_ALPHA[ra as usize];
    let channel = |shift: u32| {
        let sc = (src >> shift) & 0xFF;
        let dc = (dst >> shift) & 0xFF;
        (((sc * sa + dc * dw) * inv + 0x8000) >> 16).min(0xFF) << shift
    };
    channel(C::RED_SHIFT) | channel(C::GREEN_SHIFT) | channel(C::BLUE_SHIFT) | (ra << C::ALPHA_SHIFT)
}

#[cfg(test)]
#[path = "../../tests/unit/gfx/blend.rs"]
mod tests;
