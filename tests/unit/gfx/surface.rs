use super::*;

struct Checker;

impl PixelReader<u8> for Checker {
    fn len(&self) -> usize {
        16
    }

    fn read(&self, index: usize) -> u8 {
        if (index / 4 + index % 4) % 2 == 0 { 255 } else { 0 }
    }
}

#[test]
fn allocated_surfaces_are_zeroed_and_tight() {
    let s = Surface::allocate(SurfaceFormat::Screen, 5, 3).unwrap();
    assert_eq!(s.pitch(), 10);
    assert!(!s.is_constant());
    let SurfaceRef::Screen(v) = s.view(0, 0).unwrap() else {
        panic!("expected screen view");
    };
    assert_eq!(v.width(), 5);
    assert_eq!(v.layout().pitch_y, 10);
    assert_eq!(v.layout().pitch_x, 2);
    assert_eq!(v.get(4, 2), 0);
}

#[test]
fn zero_sized_surfaces_are_rejected() {
    assert!(matches!(
        Surface::allocate(SurfaceFormat::Native, 0, 4),
        Err(EmberError::InvalidArgument(_))
    ));
}

#[test]
fn view_mut_writes_are_visible_through_view() {
    let mut s = Surface::allocate(SurfaceFormat::Native, 4, 4).unwrap();
    let Ok(SurfaceMut::Native(mut w)) = s.view_mut(1, 2) else {
        panic!("expected native view");
    };
    w.set(0, 0, 0xDEAD_BEEF);
    assert_eq!(w.row_mut(1).len(), 3);
    let SurfaceRef::Native(r) = s.view(0, 0).unwrap() else {
        panic!("expected native view");
    };
    assert_eq!(r.get(1, 2), 0xDEAD_BEEF);
}

#[test]
fn const_surfaces_reject_write_views() {
    let pixels = [0u32; 6];
    let mut s = Surface::wrap(
        SurfaceFormat::Native,
        3,
        2,
        MemoryDescriptor::new(ConstPixels::Native(&pixels), 12),
    )
    .unwrap();
    assert!(s.is_constant());
    assert!(s.view(2, 1).is_ok());
    assert!(matches!(s.view_mut(0, 0), Err(EmberError::WriteProtected)));
    assert!(matches!(s.set_clut(&[1]), Err(EmberError::WriteProtected)));
}

#[test]
fn const_surfaces_validate_pitch_and_length() {
    let pixels = [0u16; 8];
    let padded = Surface::wrap(
        SurfaceFormat::Rgb565,
        4,
        2,
        MemoryDescriptor::new(ConstPixels::Wide(&pixels), 10),
    );
    assert!(matches!(padded, Err(EmberError::InvalidArgument(_))));
    let short = Surface::wrap(
        SurfaceFormat::Rgb565,
        4,
        3,
        MemoryDescriptor::new(ConstPixels::Wide(&pixels), 8),
    );
    assert!(matches!(short, Err(EmberError::InvalidArgument(_))));
    let wrong_kind = Surface::wrap(
        SurfaceFormat::Native,
        4,
        2,
        MemoryDescriptor::new(ConstPixels::Wide(&pixels), 16),
    );
    assert!(matches!(wrong_kind, Err(EmberError::InvalidArgument(_))));
}

#[test]
fn index8_needs_a_full_clut() {
    let idx = [0u8, 1, 2, 3];
    let clut = [7u32; 256];
    let missing = Surface::wrap(
        SurfaceFormat::Index8,
        2,
        2,
        MemoryDescriptor::new(ConstPixels::Byte(&idx), 2),
    );
    assert!(missing.is_err());
    let s = Surface::wrap(
        SurfaceFormat::Index8,
        2,
        2,
        MemoryDescriptor::new(ConstPixels::Byte(&idx), 2).with_clut(&clut),
    )
    .unwrap();
    let SurfaceRef::Index8(v) = s.view(1, 1).unwrap() else {
        panic!("expected index view");
    };
    assert_eq!(v.get(0, 0), 3);
    assert_eq!(v.clut().map(|c| c[3]), Some(7));
}

#[test]
fn reader_backed_views_route_reads() {
    let reader = Checker;
    let s = Surface::wrap(
        SurfaceFormat::Alpha8,
        4,
        4,
        MemoryDescriptor::new(ConstPixels::ByteReader(&reader), 4),
    )
    .unwrap();
    let SurfaceRef::Alpha8(v) = s.view(0, 1).unwrap() else {
        panic!("expected alpha view");
    };
    assert!(v.is_indirect());
    assert_eq!(v.get(0, 0), 0);
    assert_eq!(v.get(1, 0), 255);
}

#[test]
fn owned_clut_is_editable() {
    let mut s = Surface::allocate(SurfaceFormat::Index8, 2, 2).unwrap();
    assert_eq!(s.clut().map(<[u32]>::len), Some(CLUT_ENTRIES));
    s.set_clut(&[0xFF00_00FF, 0xFFFF_0000]).unwrap();
    assert_eq!(s.clut().unwrap()[1], 0xFFFF_0000);
    let mut native = Surface::allocate(SurfaceFormat::Native, 1, 1).unwrap();
    assert!(native.set_clut(&[1]).is_err());
}

#[test]
fn views_reject_out_of_range_anchors() {
    let s = Surface::allocate(SurfaceFormat::Alpha8, 3, 3).unwrap();
    assert!(s.view(3, 0).is_err());
    assert!(s.view(0, 3).is_err());
    let SurfaceRef::Alpha8(v) = s.view(1, 1).unwrap() else {
        panic!("expected alpha view");
    };
    assert!(v.offset(1, 1).is_ok());
    assert!(v.offset(2, 0).is_err());
}

#[test]
fn slice_views_check_geometry() {
    let px = [1u32, 2, 3, 4, 5, 6];
    let v = SurfaceView::from_slice(&px, 2, 2, 3).unwrap();
    assert_eq!(v.get(1, 1), 5);
    assert!(SurfaceView::from_slice(&px, 3, 3, 3).is_err());
}
