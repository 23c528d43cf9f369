use super::*;
use crate::gfx::format::Premultiplied;

#[test]
fn weights_always_sum_to_256() {
    for fx in 0..16 {
        for fy in 0..16 {
            assert_eq!(bilinear_weights(fx, fy).iter().sum::<u32>(), 256);
        }
    }
}

#[test]
fn zero_fraction_returns_top_left() {
    let p = [0x8040_2010, 0xFFFF_FFFF, 0, 0x1234_5678];
    assert_eq!(bilinear_native(p, 0, 0), p[0]);
    assert_eq!(bilinear_alpha8([9, 200, 3, 4], 0, 0), 9);
    assert_eq!(bilinear_rgb565_half([0xF81F, 0, 0, 0], 0, 0), 0xF81F);
}

#[test]
fn uniform_neighbourhoods_are_fixed_points() {
    for fx in [0, 3, 8, 15] {
        for fy in [0, 5, 15] {
            assert_eq!(bilinear_native([0xFFFF_FFFF; 4], fx, fy), 0xFFFF_FFFF);
            assert_eq!(bilinear_alpha8([77; 4], fx, fy), 77);
        }
    }
    for fx in 0..8 {
        for fy in 0..8 {
            assert_eq!(bilinear_rgb565_half([0xFFFF; 4], fx, fy), 0xFFFF);
            assert_eq!(bilinear_rgb565_half([0x07E0; 4], fx, fy), 0x07E0);
        }
    }
}

#[test]
fn midpoint_averages_channels() {
    let black = 0xFF00_0000u32;
    let white = 0xFFFF_FFFFu32;
    let mid = bilinear_native([black, white, black, white], 8, 0);
    assert_eq!(mid, 0xFF7F_7F7F);
    assert_eq!(bilinear_alpha8([0, 255, 0, 255], 8, 8), 127);
}

#[test]
fn sampling_clamps_at_edges() {
    let px = [10u8, 20, 30, 40];
    let view = SurfaceView::from_slice(&px, 2, 2, 2).unwrap();
    assert_eq!(sample_alpha8(&view, 1 << 4, 1 << 4), 40);
    assert_eq!(sample_alpha8(&view, (1 << 4) | 8, (1 << 4) | 8), 40);
    assert_eq!(sample_alpha8(&view, -5, 0), 10);
}

#[test]
fn index8_samples_through_clut() {
    let idx = [0u8, 1];
    let mut clut = [0u32; 256];
    clut[0] = 0xFF00_0000;
    clut[1] = 0xFFFF_FFFF;
    let view = SurfaceView::from_slice(&idx, 2, 1, 2).unwrap();
    assert_eq!(sample_index8(&view, &clut, 0, 0), 0xFF00_0000);
    assert_eq!(sample_index8(&view, &clut, 8, 0), 0xFF7F_7F7F);
}

#[test]
fn screen_samples_expand_to_opaque_native() {
    let px = [0xFFFFu16, 0xFFFF];
    let view = SurfaceView::from_slice(&px, 2, 1, 2).unwrap();
    assert_eq!(sample_screen::<Premultiplied>(&view, 4, 0), 0xFFFF_FFFF);
    assert_eq!(sample_rgb565::<Premultiplied>(&view, 4, 0), 0xFFFF_FFFF);
    assert_eq!(sample_565_half(&view, 4, 0), 0xFFFF);
}
