use super::*;

#[test]
fn inv_alpha_matches_division() {
    assert_eq!(INV_ALPHA[0], 0);
    assert_eq!(INV_ALPHA[1], 65536);
    assert_eq!(INV_ALPHA[255], 65536 / 255);
    for a in 1..256u32 {
        assert_eq!(INV_ALPHA[a as usize], 65536 / a);
    }
}

#[test]
fn recip_span_covers_table_and_fallback() {
    let one = 1u32 << RECIP_BITS;
    assert_eq!(recip_span(0), 0);
    assert_eq!(recip_span(1), one);
    assert_eq!(recip_span(3), one / 3);
    assert_eq!(recip_span(1023), one / 1023);
    assert_eq!(recip_span(4000), one / 4000);
}

#[test]
fn scaled_spans_reach_the_full_delta() {
    let delta = 255 << GRADIENT_FRAC_BITS;
    for span in [1u32, 99, 599, 999, 1023, 1024, 3999] {
        let step = scale_by_recip(delta, recip_span(span));
        let total = i64::from(step) * i64::from(span);
        let shortfall = i64::from(delta) - total;
        assert!(
            (0..1 << (GRADIENT_FRAC_BITS - 2)).contains(&shortfall),
            "span {span} falls short by {shortfall}"
        );
    }
}

#[test]
fn scale_by_recip_handles_negative_deltas() {
    let one = 1 << GRADIENT_FRAC_BITS;
    assert_eq!(scale_by_recip(255 * one, recip_span(1)), 255 * one);
    assert!(scale_by_recip(-255 * one, recip_span(5)) < 0);
    assert_eq!(scale_by_recip(0, recip_span(7)), 0);
}

#[test]
fn subpixel_bits_leave_sixteen_steps() {
    assert_eq!(1 << SUBPIXEL_BITS, 16);
    assert_eq!(mul_shr8(255, 256), 255);
    assert_eq!(mul_shr8(255, 1), 0);
}
