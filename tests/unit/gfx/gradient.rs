use super::*;
use crate::gfx::format::{Premultiplied, Straight};

fn opaque(c: Color) -> u32 {
    c.to_native::<Premultiplied>()
}

#[test]
fn solid_gradient_is_flat() {
    let g = Gradient::solid::<Premultiplied>(Color::rgb(10, 20, 30));
    assert_eq!(g.kind(), GradientKind::Solid);
    let mut row = g.row(0, 0);
    for _ in 0..50 {
        assert_eq!(row.next_pixel(), opaque(Color::rgb(10, 20, 30)));
    }
}

#[test]
fn kind_follows_corner_differences() {
    let a = Color::rgb(0, 0, 0);
    let b = Color::rgb(255, 255, 255);
    assert_eq!(Gradient::corners::<Straight>(4, 4, a, a, a, a).kind(), GradientKind::Solid);
    assert_eq!(Gradient::horizontal::<Straight>(4, a, b).kind(), GradientKind::Horizontal);
    assert_eq!(Gradient::vertical::<Straight>(4, a, b).kind(), GradientKind::Vertical);
    assert_eq!(Gradient::corners::<Straight>(4, 4, a, b, b, a).kind(), GradientKind::Both);
}

#[test]
fn horizontal_endpoints_are_exact() {
    let g = Gradient::horizontal::<Premultiplied>(256, Color::rgb(0, 0, 0), Color::rgb(255, 0, 0));
    assert_eq!(g.pixel_at(0, 0), opaque(Color::rgb(0, 0, 0)));
    assert_eq!(g.pixel_at(255, 0), opaque(Color::rgb(255, 0, 0)));
    let mid = Color::from_native::<Premultiplied>(g.pixel_at(128, 0));
    assert!(mid.r.abs_diff(128) <= 1, "mid red {}", mid.r);
}

#[test]
fn row_cursor_matches_random_access() {
    let g = Gradient::corners::<Premultiplied>(
        37,
        11,
        Color::rgb(255, 0, 0),
        Color::rgb(0, 255, 0),
        Color::rgb(0, 0, 255),
        Color::rgb(255, 255, 255),
    );
    for y in [0, 5, 10] {
        let mut row = g.row(3, y);
        for x in 3..37 {
            assert_eq!(row.next_pixel(), g.pixel_at(x, y));
        }
    }
}

#[test]
fn vertical_gradient_changes_per_row_only() {
    let g = Gradient::vertical::<Straight>(3, Color::rgba(0, 0, 0, 0), Color::rgba(0, 0, 0, 255));
    let shift = Straight::ALPHA_SHIFT;
    assert_eq!(g.row(0, 0).next_lane(shift), 0);
    assert_eq!(g.row(9, 1).next_lane(shift), 128);
    assert_eq!(g.row(0, 2).next_lane(shift), 255);
}

#[test]
fn constant_rows_repeat_their_value() {
    let mut row = GradientRow::constant(77);
    for _ in 0..10 {
        assert_eq!(row.next_lane(24), 77);
    }
}

#[test]
fn monotone_ramp_never_overshoots() {
    let g = Gradient::horizontal::<Straight>(3, Color::rgba(255, 0, 0, 255), Color::rgba(0, 0, 0, 255));
    let mut row = g.row(0, 0);
    let reds: Vec<u8> = (0..3).map(|_| Color::from_native::<Straight>(row.next_pixel()).r).collect();
    assert_eq!(reds[0], 255);
    assert!(reds[1] <= 128 && reds[1] >= 127);
    assert_eq!(reds[2], 0);
}

#[test]
fn wide_gradients_reach_their_end_colour() {
    let black = Color::rgb(0, 0, 0);
    let white = Color::rgb(255, 255, 255);
    for w in [600u32, 1000, 1024, 1025, 4000] {
        let up = Gradient::horizontal::<Straight>(w, black, white);
        let down = Gradient::horizontal::<Straight>(w, white, black);
        assert_eq!(Color::from_native::<Straight>(up.pixel_at(0, 0)).r, 0, "w={w}");
        assert_eq!(Color::from_native::<Straight>(up.pixel_at(w - 1, 0)).r, 255, "w={w}");
        assert_eq!(Color::from_native::<Straight>(down.pixel_at(w - 1, 0)).r, 0, "w={w}");

        let mut row = up.row(0, 0);
        let mut last = 0;
        for _ in 0..w {
            last = row.next_pixel();
        }
        assert_eq!(last, up.pixel_at(w - 1, 0), "w={w}");
        assert_eq!(Color::from_native::<Straight>(last).r, 255, "w={w}");
    }
}
