use super::*;
use crate::gfx::format::{Color, Premultiplied, Straight};

#[test]
fn extremes_round_trip_exactly() {
    let white = Color::rgb(255, 255, 255).to_native::<Premultiplied>();
    let black = Color::rgb(0, 0, 0).to_native::<Premultiplied>();
    assert_eq!(native_to_screen::<Premultiplied>(white), 0xFFFF);
    assert_eq!(native_to_screen::<Premultiplied>(black), 0x0000);
    assert_eq!(screen_to_native_opaque::<Premultiplied>(0xFFFF), white);
    assert_eq!(screen_to_native_opaque::<Premultiplied>(0x0000), black);
}

#[test]
fn every_screen_value_survives_widen_then_narrow() {
    for s in 0..=u16::MAX {
        let n = screen_to_native_opaque::<Straight>(s);
        assert_eq!(native_to_screen::<Straight>(n), s);
        assert_eq!(native_to_rgb565::<Straight>(rgb565_to_native_opaque::<Straight>(s)), s);
    }
}

#[test]
fn narrowing_error_is_bounded() {
    for v in [0u8, 1, 7, 8, 100, 127, 128, 200, 254, 255] {
        let n = Color::rgb(v, v, v).to_native::<Premultiplied>();
        let back = Color::from_native::<Premultiplied>(screen_to_native_opaque::<Premultiplied>(
            native_to_screen::<Premultiplied>(n),
        ));
        assert!(back.r.abs_diff(v) <= 7, "red {v} -> {}", back.r);
        assert!(back.g.abs_diff(v) <= 3, "green {v} -> {}", back.g);
        assert!(back.b.abs_diff(v) <= 7, "blue {v} -> {}", back.b);
    }
}

#[test]
fn screen_layout_places_red_high() {
    let red = Color::rgb(255, 0, 0).to_native::<Premultiplied>();
    assert_eq!(native_to_screen::<Premultiplied>(red), 0xF800);
    assert_eq!(native_to_rgb565::<Premultiplied>(red), 0xF800);
    let blue = Color::rgb(0, 0, 255).to_native::<Premultiplied>();
    assert_eq!(native_to_screen::<Premultiplied>(blue), 0x001F);
}

#[test]
fn transparent_widening_clears_alpha() {
    let p = screen_to_native_transparent::<Premultiplied>(0xFFFF);
    assert_eq!(Premultiplied::alpha(p), 0);
    assert_eq!(p & 0x00FF_FFFF, 0x00FF_FFFF);
}
