use super::*;
use crate::gfx::format::{Color, Premultiplied, Straight};

fn px<C: PixelConfig>(r: u8, g: u8, b: u8, a: u8) -> u32 {
    Color::rgba(r, g, b, a).to_native::<C>()
}

#[test]
fn opaque_source_replaces_destination() {
    let dst = px::<Premultiplied>(1, 2, 3, 200);
    let src = px::<Premultiplied>(9, 8, 7, 255);
    assert_eq!(blend::<Premultiplied>(dst, src), src);
    assert_eq!(blend::<Straight>(dst, src), src);
}

#[test]
fn transparent_source_keeps_destination() {
    let dst = px::<Premultiplied>(40, 50, 60, 255);
    assert_eq!(blend::<Premultiplied>(dst, 0), dst);
    assert_eq!(blend::<Straight>(dst, px::<Straight>(200, 0, 0, 0)), dst);
}

#[test]
fn transparent_destination_takes_source() {
    let src = px::<Straight>(40, 50, 60, 77);
    assert_eq!(blend::<Straight>(0, src), src);
    assert_eq!(blend::<Premultiplied>(0, src), src);
}

#[test]
fn modulate_extremes() {
    let p = px::<Premultiplied>(200, 100, 50, 255);
    assert_eq!(modulate::<Premultiplied>(p, 255), p);
    assert_eq!(modulate::<Premultiplied>(p, 0), 0);
    let s = px::<Straight>(200, 100, 50, 255);
    assert_eq!(modulate::<Straight>(s, 255), s);
    assert_eq!(Straight::unpack(modulate::<Straight>(s, 0)), [200, 100, 50, 0]);
}

#[test]
fn modulate_halves_every_premultiplied_channel() {
    let p = Premultiplied::pack(200, 100, 50, 255);
    assert_eq!(Premultiplied::unpack(modulate::<Premultiplied>(p, 127)), [100, 50, 25, 127]);
}

#[test]
fn half_white_over_black_is_mid_grey() {
    let black = px::<Premultiplied>(0, 0, 0, 255);
    let half = Premultiplied::pack(128, 128, 128, 128);
    let [r, g, b, a] = Premultiplied::unpack(blend::<Premultiplied>(black, half));
    assert_eq!(a, 255);
    assert_eq!((r, g, b), (128, 128, 128));

    let black = px::<Straight>(0, 0, 0, 255);
    let half = px::<Straight>(255, 255, 255, 128);
    let [r, _, _, a] = Straight::unpack(blend::<Straight>(black, half));
    assert_eq!(a, 255);
    assert!(r.abs_diff(128) <= 1, "got {r}");
}

#[test]
fn straight_result_alpha_accumulates() {
    let dst = px::<Straight>(0, 0, 255, 128);
    let src = px::<Straight>(255, 0, 0, 128);
    let [r, _, b, a] = Straight::unpack(blend::<Straight>(dst, src));
    assert_eq!(a, 192);
    assert!(r > b, "source should dominate: r={r} b={b}");
}

#[test]
fn opacity_blend_matches_identities() {
    let dst = px::<Premultiplied>(10, 20, 30, 255);
    let src = px::<Premultiplied>(200, 100, 0, 255);
    assert_eq!(blend_with_opacity::<Premultiplied>(dst, src, 255), src);
    assert_eq!(blend_with_opacity::<Premultiplied>(dst, src, 0), dst);
    assert_eq!(blend_with_opacity::<Straight>(dst, src, 0), dst);
    assert_eq!(
        blend_with_opacity::<Premultiplied>(dst, src, 100),
        blend::<Premultiplied>(dst, modulate::<Premultiplied>(src, 100))
    );
}

#[test]
fn arbitrary_inputs_never_panic() {
    for &d in &[0u32, u32::MAX, 0x80FF_00FF, 0x0100_0000] {
        for &s in &[0u32, u32::MAX, 0x7F12_3456, 0x01FF_FFFF] {
            let _ = blend::<Premultiplied>(d, s);
            let _ = blend::<Straight>(d, s);
            let _ = blend_with_opacity::<Premultiplied>(d, s, 99);
            let _ = blend_with_opacity::<Straight>(d, s, 99);
        }
    }
}
