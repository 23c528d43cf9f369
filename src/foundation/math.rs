//! Fixed-point helpers and precomputed reciprocal tables shared by the pixel kernels.

/// Fractional bits of gradient channel accumulators.
pub(crate) const GRADIENT_FRAC_BITS: u32 = 20;

/// Fractional bits of normalized warp coordinates.
pub(crate) const WARP_FRAC_BITS: u32 = 16;

/// Right shift applied after `coord * extent` when projecting warp coordinates. Leaves
/// `WARP_FRAC_BITS - WARP_PROJECT_SHIFT` sub-pixel bits.
pub(crate) const WARP_PROJECT_SHIFT: u32 = 12;

/// Sub-pixel bits produced by warp projection (bilinear fractions are `0..16`).
pub(crate) const SUBPIXEL_BITS: u32 = WARP_FRAC_BITS - WARP_PROJECT_SHIFT;

/// Fractional bits of [`RECIP_WIDTH`] entries.
pub(crate) const RECIP_BITS: u32 = 24;

const RECIP_TABLE_LEN: usize = 1024;

/// `INV_ALPHA[a] == 65536 / a`, with `INV_ALPHA[0] == 0`.
pub(crate) static INV_ALPHA: [u32; 256] = build_inv_alpha();

/// `RECIP_WIDTH[w] == (1 << RECIP_BITS) / w` for small spans, with `RECIP_WIDTH[0] == 0`.
static RECIP_WIDTH: [u32; RECIP_TABLE_LEN] = build_recip_width();

const fn build_inv_alpha() -> [u32; 256] {
    let mut out = [0u32; 256];
    let mut a = 1;
    while a < 256 {
        out[a] = (1u32 << 16) / a as u32;
        a += 1;
    }
    out
}

const fn build_recip_width() -> [u32; RECIP_TABLE_LEN] {
    let mut out = [0u32; RECIP_TABLE_LEN];
    let mut w = 1;
    while w < RECIP_TABLE_LEN {
        out[w] = (1u32 << RECIP_BITS) / w as u32;
        w += 1;
    }
    out
}

/// Reciprocal of `span` in `.24` fixed point. Zero for a zero span.
#[inline]
pub(crate) fn recip_span(span: u32) -> u32 {
    match RECIP_WIDTH.get(span as usize) {
        Some(&r) => r,
        None => (1u32 << RECIP_BITS) / span,
    }
}

/// `delta * recip >> RECIP_BITS`, rounding toward negative infinity.
#[inline]
pub(crate) fn scale_by_recip(delta: i32, recip: u32) -> i32 {
    ((i64::from(delta) * i64::from(recip)) >> RECIP_BITS) as i32
}

/// Scale an 8-bit value by `weight / 256` where `weight` is in `0..=256`.
#[inline]
pub(crate) fn mul_shr8(value: u32, weight: u32) -> u32 {
    (value * weight) >> 8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
