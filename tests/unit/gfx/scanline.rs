use super::*;
use crate::gfx::format::{Premultiplied, Straight};
use crate::gfx::surface::Surface;
use crate::gfx::format::SurfaceFormat;
use kurbo::Affine;

type P = Premultiplied;

fn native(c: Color) -> u32 {
    c.to_native::<P>()
}

#[test]
fn solid_overwrite_fills_the_row() {
    let mut row = [0u32; 7];
    let red = native(Color::rgb(255, 0, 0));
    draw_row::<NativeTarget, P>(&mut row, &RowJob::new(RowSource::Solid(red))).unwrap();
    assert!(row.iter().all(|&p| p == red));
}

#[test]
fn gradient_rows_follow_the_gradient() {
    let g = Gradient::horizontal::<P>(16, Color::rgb(0, 0, 0), Color::rgb(0, 0, 255));
    let mut row = [0u32; 12];
    let job = RowJob::new(RowSource::Gradient(&g)).with_gradient_origin(4, 0);
    draw_row::<NativeTarget, P>(&mut row, &job).unwrap();
    for (i, &p) in row.iter().enumerate() {
        assert_eq!(p, g.pixel_at(4 + i as u32, 0));
    }
}

#[test]
fn native_copy_blends_with_solid_opacity() {
    let src = [native(Color::rgb(255, 255, 255)); 4];
    let view = SurfaceView::from_slice(&src, 4, 1, 4).unwrap();
    let black = native(Color::rgb(0, 0, 0));
    let mut row = [black; 4];
    let job = RowJob::new(RowSource::Native(view))
        .with_mode(CompositeMode::Blend)
        .with_opacity(Opacity::Solid(127));
    draw_row::<NativeTarget, P>(&mut row, &job).unwrap();
    let [r, g, b, a] = P::unpack(row[0]);
    assert_eq!(a, 255);
    assert!(r.abs_diff(128) <= 1 && r == g && g == b, "got {r} {g} {b}");
}

#[test]
fn index8_rows_resolve_through_the_clut() {
    let mut clut = [0u32; 256];
    clut[1] = native(Color::rgb(1, 2, 3));
    clut[9] = native(Color::rgb(9, 9, 9));
    let idx = [1u8, 9, 1];
    let view = SurfaceView::from_slice(&idx, 3, 1, 3).unwrap().with_clut(&clut);
    let mut row = [0u32; 3];
    draw_row::<NativeTarget, P>(&mut row, &RowJob::new(RowSource::Index8(view))).unwrap();
    assert_eq!(row, [clut[1], clut[9], clut[1]]);
}

#[test]
fn index8_without_clut_is_rejected() {
    let idx = [0u8; 2];
    let view = SurfaceView::from_slice(&idx, 2, 1, 2).unwrap();
    let mut row = [0u32; 2];
    let err = draw_row::<NativeTarget, P>(&mut row, &RowJob::new(RowSource::Index8(view)));
    assert!(matches!(err, Err(EmberError::InvalidArgument(_))));
}

#[test]
fn short_sources_are_rejected_before_drawing() {
    let src = [0u32; 2];
    let view = SurfaceView::from_slice(&src, 2, 1, 2).unwrap();
    let mut row = [7u32; 3];
    assert!(draw_row::<NativeTarget, P>(&mut row, &RowJob::new(RowSource::Native(view))).is_err());
    assert_eq!(row, [7, 7, 7]);
}

#[test]
fn alpha_masks_modulate_paint() {
    let mask = [0u8, 255, 127];
    let view = SurfaceView::from_slice(&mask, 3, 1, 3).unwrap();
    let white = native(Color::rgb(255, 255, 255));
    let mut row = [0u32; 3];
    let job = RowJob::new(RowSource::Alpha8 {
        mask: view,
        paint: Paint::Solid(white),
    });
    draw_row::<NativeTarget, P>(&mut row, &job).unwrap();
    assert_eq!(row[0], 0);
    assert_eq!(row[1], white);
    assert_eq!(P::alpha(row[2]), 127);
}

#[test]
fn screen_sources_widen_and_screen_targets_narrow() {
    let src = [0xF800u16, 0x07E0, 0x001F];
    let view = SurfaceView::from_slice(&src, 3, 1, 3).unwrap();
    let mut wide = [0u32; 3];
    draw_row::<NativeTarget, P>(&mut wide, &RowJob::new(RowSource::Screen(view))).unwrap();
    assert_eq!(wide[0], native(Color::rgb(255, 0, 0)));
    assert_eq!(wide[1], native(Color::rgb(0, 255, 0)));

    let view = SurfaceView::from_slice(&wide, 3, 1, 3).unwrap();
    let mut narrow = [0u16; 3];
    draw_row::<ScreenTarget, P>(&mut narrow, &RowJob::new(RowSource::Native(view))).unwrap();
    assert_eq!(narrow, src);
}

#[test]
fn blending_into_rgb565_reads_the_destination() {
    let half_red = P::pack(128, 0, 0, 128);
    let mut row = [0x001Fu16; 2];
    let job = RowJob::new(RowSource::Solid(half_red)).with_mode(CompositeMode::Blend);
    draw_row::<Rgb565Target, P>(&mut row, &job).unwrap();
    let out = rgb565_to_native_opaque::<P>(row[0]);
    let [r, _, b, _] = P::unpack(out);
    assert!(r > 100 && b > 100, "expected a red/blue mix, got {r} {b}");
}

#[test]
fn identity_warp_matches_direct_copy() {
    let src: Vec<u32> = (0..16).map(|i| native(Color::rgb(i * 10, 0, 255 - i * 10))).collect();
    let view = SurfaceView::from_slice(&src, 4, 4, 4).unwrap();
    let warp = WarpRow::from_affine(Affine::IDENTITY, 0, 2, 4, 4);
    let mut row = [0u32; 4];
    let job = RowJob::new(RowSource::Warp {
        texture: Texture::Native(view),
        row: warp,
        filter: Filter::Nearest,
    });
    draw_row::<NativeTarget, P>(&mut row, &job).unwrap();
    assert_eq!(&row[..], &src[8..12]);

    let mut filtered = [0u32; 4];
    let job = RowJob::new(RowSource::Warp {
        texture: Texture::Native(view),
        row: warp,
        filter: Filter::Bilinear,
    });
    draw_row::<NativeTarget, P>(&mut filtered, &job).unwrap();
    assert_eq!(&filtered[..], &src[8..12]);
}

#[test]
fn warp_half_filter_keeps_uniform_565_textures() {
    let src = [0x07E0u16; 9];
    let view = SurfaceView::from_slice(&src, 3, 3, 3).unwrap();
    let warp = WarpRow::from_affine(Affine::scale(0.37), 0, 1, 3, 3);
    let mut row = [0u16; 5];
    let job = RowJob::new(RowSource::Warp {
        texture: Texture::Rgb565(view),
        row: warp,
        filter: Filter::BilinearHalf,
    });
    draw_row::<Rgb565Target, P>(&mut row, &job).unwrap();
    assert!(row.iter().all(|&p| p == 0x07E0));
}

#[test]
fn warp_solid_opacity_matches_plain_solid_opacity() {
    let src = [native(Color::rgb(200, 100, 50)); 4];
    let view = SurfaceView::from_slice(&src, 4, 1, 4).unwrap();
    let base = native(Color::rgb(0, 0, 90));

    let mut plain = [base; 4];
    let job = RowJob::new(RowSource::Native(view))
        .with_mode(CompositeMode::Blend)
        .with_opacity(Opacity::Solid(90));
    draw_row::<NativeTarget, P>(&mut plain, &job).unwrap();

    let mut warped = [base; 4];
    let job = RowJob::new(RowSource::Warp {
        texture: Texture::Native(view),
        row: WarpRow::from_affine(Affine::IDENTITY, 0, 0, 4, 1),
        filter: Filter::Nearest,
    })
    .with_mode(CompositeMode::Blend)
    .with_opacity(Opacity::Solid(90));
    draw_row::<NativeTarget, P>(&mut warped, &job).unwrap();
    assert_eq!(plain, warped);
}

#[test]
fn gradient_opacity_ramps_across_the_row() {
    let fade = Gradient::horizontal::<Straight>(5, Color::rgba(0, 0, 0, 0), Color::rgba(0, 0, 0, 255));
    let white = Color::rgb(255, 255, 255).to_native::<Straight>();
    let mut row = [0u32; 5];
    let job = RowJob::new(RowSource::Solid(white)).with_opacity(Opacity::Gradient(&fade));
    draw_row::<NativeTarget, Straight>(&mut row, &job).unwrap();
    let alphas: Vec<u32> = row.iter().map(|&p| Straight::alpha(p)).collect();
    assert_eq!(alphas[0], 0);
    assert_eq!(alphas[4], 255);
    assert!(alphas.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn every_job_maps_into_the_table() {
    let g = Gradient::solid::<P>(Color::rgb(1, 1, 1));
    let px = [0u32; 1];
    let view = SurfaceView::from_slice(&px, 1, 1, 1).unwrap();
    let row = WarpRow::new(0, 0, 0, 0, 1, 1);
    let sources = [
        RowSource::Solid(0),
        RowSource::Gradient(&g),
        RowSource::Native(view),
        RowSource::Warp {
            texture: Texture::Native(view),
            row,
            filter: Filter::BilinearHalf,
        },
    ];
    for source in sources {
        for mode in [CompositeMode::Overwrite, CompositeMode::Blend] {
            for opacity in [Opacity::Opaque, Opacity::Solid(3), Opacity::Gradient(&g)] {
                let job = RowJob::new(source).with_mode(mode).with_opacity(opacity);
                assert!(job.table_index() < TABLE_LEN);
            }
        }
    }
}

#[test]
fn surface_rows_dispatch_on_format() {
    let mut screen = Surface::allocate(SurfaceFormat::Screen, 4, 2).unwrap();
    {
        let mut view = screen.view_mut(0, 0).unwrap();
        fill_row(&mut view, 1, 3, Color::rgb(255, 255, 255), CompositeMode::Overwrite).unwrap();
        assert!(fill_row(&mut view, 2, 1, Color::rgb(0, 0, 0), CompositeMode::Overwrite).is_err());
        assert!(fill_row(&mut view, 0, 5, Color::rgb(0, 0, 0), CompositeMode::Overwrite).is_err());
    }
    let SurfaceRef::Screen(v) = screen.view(0, 1).unwrap() else {
        panic!("expected screen view");
    };
    assert_eq!([v.get(0, 0), v.get(2, 0), v.get(3, 0)], [0xFFFF, 0xFFFF, 0]);

    let mut mask = Surface::allocate(SurfaceFormat::Alpha8, 2, 2).unwrap();
    let mut view = mask.view_mut(0, 0).unwrap();
    assert!(fill_row(&mut view, 0, 2, Color::rgb(1, 1, 1), CompositeMode::Blend).is_err());
}

#[test]
fn copy_row_converts_between_surfaces() {
    let mut src = Surface::allocate(SurfaceFormat::Native, 3, 1).unwrap();
    {
        let mut view = src.view_mut(0, 0).unwrap();
        fill_row(&mut view, 0, 3, Color::rgb(0, 255, 0), CompositeMode::Overwrite).unwrap();
    }
    let mut dst = Surface::allocate(SurfaceFormat::Rgb565, 3, 1).unwrap();
    let mut view = dst.view_mut(0, 0).unwrap();
    copy_row(&mut view, 0, 3, src.view(0, 0).unwrap(), CompositeMode::Overwrite).unwrap();
    let SurfaceMut::Rgb565(v) = view else {
        panic!("expected rgb565 view");
    };
    assert_eq!(v.get(1, 0), 0x07E0);
}
