//! Single-row drawing primitives.
//!
//! A row draw is parameterized over three independent axes: the source kind, the
//! compositing mode and the opacity source. Every combination is a monomorphized
//! `run_row` instance; [`draw_row`] picks one from a per-(target, config) table so the
//! per-pixel loop carries no format or mode branches.

use super::blend::{blend, blend_with_opacity, modulate};
use super::convert::{
    native_to_rgb565, native_to_screen, rgb565_to_native_opaque, screen_to_native_opaque,
};
use super::filter::{
    sample_565_half, sample_alpha8, sample_index8, sample_native, sample_rgb565, sample_screen,
};
use super::format::{Color, DefaultConfig, PixelConfig};
use super::gradient::{Gradient, GradientRow};
use super::surface::{CLUT_ENTRIES, SurfaceMut, SurfaceRef, SurfaceView, SurfaceViewMut};
use super::warp::WarpRow;
use crate::foundation::error::{EmberError, EmberResult};
use std::marker::PhantomData;

/// Colour modulated by an Alpha8 mask.
#[derive(Clone, Copy, Debug)]
pub enum Paint<'a> {
    /// One native colour.
    Solid(u32),
    /// Gradient evaluated at the job's gradient origin.
    Gradient(&'a Gradient),
}

/// Source image of a warped draw.
#[derive(Clone, Copy, Debug)]
pub enum Texture<'a> {
    /// Native pixels.
    Native(SurfaceView<'a, u32>),
    /// Indexed pixels; the view must carry a CLUT.
    Index8(SurfaceView<'a, u8>),
    /// Coverage modulating `paint`.
    Alpha8 {
        /// Coverage values.
        mask: SurfaceView<'a, u8>,
        /// Colour source.
        paint: Paint<'a>,
    },
    /// Screen RGB565 pixels.
    Screen(SurfaceView<'a, u16>),
    /// Explicit RGB565 pixels.
    Rgb565(SurfaceView<'a, u16>),
}

/// Texture filtering for warped draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Nearest texel.
    #[default]
    Nearest,
    /// 4-bit bilinear.
    Bilinear,
    /// 3-bit bilinear on packed RGB565; other textures fall back to [`Filter::Bilinear`].
    BilinearHalf,
}

/// What a row draw reads.
#[derive(Clone, Copy, Debug)]
pub enum RowSource<'a> {
    /// One native colour.
    Solid(u32),
    /// Gradient evaluated at the job's gradient origin.
    Gradient(&'a Gradient),
    /// Native pixels, read left to right from the view anchor.
    Native(SurfaceView<'a, u32>),
    /// Indexed pixels; the view must carry a CLUT.
    Index8(SurfaceView<'a, u8>),
    /// Coverage modulating `paint`.
    Alpha8 {
        /// Coverage values.
        mask: SurfaceView<'a, u8>,
        /// Colour source.
        paint: Paint<'a>,
    },
    /// Screen RGB565 pixels.
    Screen(SurfaceView<'a, u16>),
    /// Explicit RGB565 pixels.
    Rgb565(SurfaceView<'a, u16>),
    /// Affine-warped texture.
    Warp {
        /// Source image.
        texture: Texture<'a>,
        /// Row stepping.
        row: WarpRow,
        /// Sampling filter.
        filter: Filter,
    },
}

impl<'a> RowSource<'a> {
    /// Read straight from a surface view. `paint` colours Alpha8 masks and is ignored for
    /// other formats.
    pub fn from_surface(view: SurfaceRef<'a>, paint: Paint<'a>) -> Self {
        match view {
            SurfaceRef::Native(v) => Self::Native(v),
            SurfaceRef::Screen(v) => Self::Screen(v),
            SurfaceRef::Rgb565(v) => Self::Rgb565(v),
            SurfaceRef::Index8(v) => Self::Index8(v),
            SurfaceRef::Alpha8(mask) => Self::Alpha8 { mask, paint },
        }
    }

    /// Sample a surface view through a warp row.
    pub fn warp(view: SurfaceRef<'a>, paint: Paint<'a>, row: WarpRow, filter: Filter) -> Self {
        let texture = match view {
            SurfaceRef::Native(v) => Texture::Native(v),
            SurfaceRef::Screen(v) => Texture::Screen(v),
            SurfaceRef::Rgb565(v) => Texture::Rgb565(v),
            SurfaceRef::Index8(v) => Texture::Index8(v),
            SurfaceRef::Alpha8(mask) => Texture::Alpha8 { mask, paint },
        };
        Self::Warp {
            texture,
            row,
            filter,
        }
    }

    fn kind(&self) -> SourceKind {
        use Filter::{Bilinear, BilinearHalf, Nearest};
        match self {
            Self::Solid(_) => SourceKind::Solid,
            Self::Gradient(_) => SourceKind::Gradient,
            Self::Native(_) => SourceKind::Native,
            Self::Index8(_) => SourceKind::Index8,
            Self::Alpha8 { .. } => SourceKind::Alpha8,
            Self::Screen(_) => SourceKind::Screen,
            Self::Rgb565(_) => SourceKind::Rgb565,
            Self::Warp {
                texture, filter, ..
            } => match (texture, filter) {
                (Texture::Native(_), Nearest) => SourceKind::WarpNative,
                (Texture::Native(_), Bilinear | BilinearHalf) => SourceKind::WarpNativeBilinear,
                (Texture::Index8(_), Nearest) => SourceKind::WarpIndex8,
                (Texture::Index8(_), Bilinear | BilinearHalf) => SourceKind::WarpIndex8Bilinear,
                (Texture::Alpha8 { .. }, Nearest) => SourceKind::WarpAlpha8,
                (Texture::Alpha8 { .. }, Bilinear | BilinearHalf) => SourceKind::WarpAlpha8Bilinear,
                (Texture::Screen(_), Nearest) => SourceKind::WarpScreen,
                (Texture::Screen(_), Bilinear) => SourceKind::WarpScreenBilinear,
                (Texture::Screen(_), BilinearHalf) => SourceKind::WarpScreenHalf,
                (Texture::Rgb565(_), Nearest) => SourceKind::WarpRgb565,
                (Texture::Rgb565(_), Bilinear) => SourceKind::WarpRgb565Bilinear,
                (Texture::Rgb565(_), BilinearHalf) => SourceKind::WarpRgb565Half,
            },
        }
    }
}

/// How source pixels combine with the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompositeMode {
    /// Replace destination pixels.
    #[default]
    Overwrite,
    /// Composite source over destination.
    Blend,
}

/// Per-pixel opacity applied to the source.
#[derive(Clone, Copy, Debug, Default)]
pub enum Opacity<'a> {
    /// No modulation.
    #[default]
    Opaque,
    /// One scalar for the whole row.
    Solid(u8),
    /// Alpha lane of a gradient evaluated at the job's gradient origin.
    Gradient(&'a Gradient),
}

/// Everything a single row draw needs besides the destination.
#[derive(Clone, Copy, Debug)]
pub struct RowJob<'a> {
    /// Pixel source.
    pub source: RowSource<'a>,
    /// Compositing mode.
    pub mode: CompositeMode,
    /// Opacity source.
    pub opacity: Opacity<'a>,
    /// Gradient coordinate of the first destination pixel, for gradient colours and
    /// gradient opacity.
    pub gradient_origin: (u32, u32),
}

impl<'a> RowJob<'a> {
    /// Overwrite with `source` at full opacity.
    pub fn new(source: RowSource<'a>) -> Self {
        Self {
            source,
            mode: CompositeMode::Overwrite,
            opacity: Opacity::Opaque,
            gradient_origin: (0, 0),
        }
    }

    /// Set the compositing mode.
    pub fn with_mode(mut self, mode: CompositeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the opacity source.
    pub fn with_opacity(mut self, opacity: Opacity<'a>) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the gradient coordinate of the first destination pixel.
    pub fn with_gradient_origin(mut self, x: u32, y: u32) -> Self {
        self.gradient_origin = (x, y);
        self
    }

    fn table_index(&self) -> usize {
        let mode = match self.mode {
            CompositeMode::Overwrite => 0,
            CompositeMode::Blend => 1,
        };
        let opacity = match self.opacity {
            Opacity::Opaque => 0,
            Opacity::Solid(_) => 1,
            Opacity::Gradient(_) => 2,
        };
        (self.source.kind() as usize * 2 + mode) * 3 + opacity
    }

    /// Check that the source can feed `width` pixels. Runs once per row, outside the
    /// pixel loop.
    fn validate(&self, width: usize) -> EmberResult<()> {
        fn wide_enough<P: Copy>(view: &SurfaceView<'_, P>, width: usize) -> EmberResult<()> {
            if view.width() < width {
                return Err(EmberError::invalid(format!(
                    "source row has {} pixels, {width} requested",
                    view.width()
                )));
            }
            Ok(())
        }
        fn has_clut(view: &SurfaceView<'_, u8>) -> EmberResult<()> {
            match view.clut() {
                Some(c) if c.len() >= CLUT_ENTRIES => Ok(()),
                _ => Err(EmberError::invalid("Index8 source without a 256-entry CLUT")),
            }
        }
        fn covers<P: Copy>(view: &SurfaceView<'_, P>, row: &WarpRow) -> EmberResult<()> {
            if row.src_width == 0
                || row.src_height == 0
                || view.width() < row.src_width as usize
                || view.height() < row.src_height as usize
            {
                return Err(EmberError::invalid(format!(
                    "warp extent {}x{} does not fit texture {}x{}",
                    row.src_width,
                    row.src_height,
                    view.width(),
                    view.height()
                )));
            }
            Ok(())
        }

        match &self.source {
            RowSource::Solid(_) | RowSource::Gradient(_) => Ok(()),
            RowSource::Native(v) => wide_enough(v, width),
            RowSource::Index8(v) => {
                has_clut(v)?;
                wide_enough(v, width)
            }
            RowSource::Alpha8 { mask, .. } => wide_enough(mask, width),
            RowSource::Screen(v) | RowSource::Rgb565(v) => wide_enough(v, width),
            RowSource::Warp { texture, row, .. } => match texture {
                Texture::Native(v) => covers(v, row),
                Texture::Index8(v) => {
                    has_clut(v)?;
                    covers(v, row)
                }
                Texture::Alpha8 { mask, .. } => covers(mask, row),
                Texture::Screen(v) | Texture::Rgb565(v) => covers(v, row),
            },
        }
    }
}

#[derive(Clone, Copy)]
#[repr(u8)]
enum SourceKind {
    Solid,
    Gradient,
    Native,
    Index8,
    Alpha8,
    Screen,
    Rgb565,
    WarpNative,
    WarpNativeBilinear,
    WarpIndex8,
    WarpIndex8Bilinear,
    WarpAlpha8,
    WarpAlpha8Bilinear,
    WarpScreen,
    WarpScreenBilinear,
    WarpScreenHalf,
    WarpRgb565,
    WarpRgb565Bilinear,
    WarpRgb565Half,
}

const SOURCE_KINDS: usize = SourceKind::WarpRgb565Half as usize + 1;
const TABLE_LEN: usize = SOURCE_KINDS * 2 * 3;

/// Destination pixel storage a row can be drawn into.
pub trait Target {
    /// Stored pixel type.
    type Pixel: Copy;

    /// Widen a stored pixel to native.
    fn load<C: PixelConfig>(pixel: Self::Pixel) -> u32;

    /// Narrow a native pixel for storage.
    fn store<C: PixelConfig>(native: u32) -> Self::Pixel;
}

/// Native 32-bit destination.
#[derive(Debug)]
pub struct NativeTarget;

/// Screen RGB565 destination.
#[derive(Debug)]
pub struct ScreenTarget;

/// Explicit RGB565 destination.
#[derive(Debug)]
pub struct Rgb565Target;

impl Target for NativeTarget {
    type Pixel = u32;

    #[inline]
    fn load<C: PixelConfig>(pixel: u32) -> u32 {
        pixel
    }

    #[inline]
    fn store<C: PixelConfig>(native: u32) -> u32 {
        native
    }
}

impl Target for ScreenTarget {
    type Pixel = u16;

    #[inline]
    fn load<C: PixelConfig>(pixel: u16) -> u32 {
        screen_to_native_opaque::<C>(pixel)
    }

    #[inline]
    fn store<C: PixelConfig>(native: u32) -> u16 {
        native_to_screen::<C>(native)
    }
}

impl Target for Rgb565Target {
    type Pixel = u16;

    #[inline]
    fn load<C: PixelConfig>(pixel: u16) -> u32 {
        rgb565_to_native_opaque::<C>(pixel)
    }

    #[inline]
    fn store<C: PixelConfig>(native: u32) -> u16 {
        native_to_rgb565::<C>(native)
    }
}

trait Cursor {
    fn next_pixel<C: PixelConfig>(&mut self) -> u32;
}

trait Source {
    /// Opacity kernel used for [`Opacity::Solid`] jobs.
    type SolidOpacity: OpacitySource;
    type Cursor<'j>: Cursor;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>>;
}

trait Mode {
    const READS_DST: bool;

    fn apply<C: PixelConfig>(dst: u32, src: u32) -> u32;

    fn apply_with_opacity<C: PixelConfig>(dst: u32, src: u32, opacity: u8) -> u32;
}

struct OverwriteMode;
struct BlendMode;

impl Mode for OverwriteMode {
    const READS_DST: bool = false;

    #[inline]
    fn apply<C: PixelConfig>(_dst: u32, src: u32) -> u32 {
        src
    }

    #[inline]
    fn apply_with_opacity<C: PixelConfig>(_dst: u32, src: u32, opacity: u8) -> u32 {
        modulate::<C>(src, opacity)
    }
}

impl Mode for BlendMode {
    const READS_DST: bool = true;

    #[inline]
    fn apply<C: PixelConfig>(dst: u32, src: u32) -> u32 {
        blend::<C>(dst, src)
    }

    #[inline]
    fn apply_with_opacity<C: PixelConfig>(dst: u32, src: u32, opacity: u8) -> u32 {
        blend_with_opacity::<C>(dst, src, opacity)
    }
}

trait OpacitySource: Sized {
    const ACTIVE: bool;

    fn open<C: PixelConfig>(job: &RowJob<'_>) -> Self;

    fn next(&mut self) -> u8;
}

struct NoOpacity;

impl OpacitySource for NoOpacity {
    const ACTIVE: bool = false;

    fn open<C: PixelConfig>(_job: &RowJob<'_>) -> Self {
        Self
    }

    #[inline]
    fn next(&mut self) -> u8 {
        0xFF
    }
}

struct SolidOpacity(u8);

impl OpacitySource for SolidOpacity {
    const ACTIVE: bool = true;

    fn open<C: PixelConfig>(job: &RowJob<'_>) -> Self {
        match job.opacity {
            Opacity::Solid(o) => Self(o),
            _ => Self(0xFF),
        }
    }

    #[inline]
    fn next(&mut self) -> u8 {
        self.0
    }
}

struct GradientOpacity {
    row: GradientRow,
    shift: u32,
}

impl OpacitySource for GradientOpacity {
    const ACTIVE: bool = true;

    fn open<C: PixelConfig>(job: &RowJob<'_>) -> Self {
        let (x, y) = job.gradient_origin;
        let row = match job.opacity {
            Opacity::Gradient(g) => g.row(x, y),
            Opacity::Solid(o) => GradientRow::constant(o),
            Opacity::Opaque => GradientRow::constant(0xFF),
        };
        Self {
            row,
            shift: C::ALPHA_SHIFT,
        }
    }

    #[inline]
    fn next(&mut self) -> u8 {
        self.row.next_lane(self.shift)
    }
}

enum PaintCursor {
    Solid(u32),
    Gradient(GradientRow),
}

impl PaintCursor {
    fn open(paint: Paint<'_>, job: &RowJob<'_>) -> Self {
        match paint {
            Paint::Solid(c) => Self::Solid(c),
            Paint::Gradient(g) => {
                let (x, y) = job.gradient_origin;
                Self::Gradient(g.row(x, y))
            }
        }
    }

    #[inline]
    fn next(&mut self) -> u32 {
        match self {
            Self::Solid(c) => *c,
            Self::Gradient(row) => row.next_pixel(),
        }
    }
}

struct SolidCursor(u32);

impl Cursor for SolidCursor {
    #[inline]
    fn next_pixel<C: PixelConfig>(&mut self) -> u32 {
        self.0
    }
}

struct GradientCursor(GradientRow);

impl Cursor for GradientCursor {
    #[inline]
    fn next_pixel<C: PixelConfig>(&mut self) -> u32 {
        self.0.next_pixel()
    }
}

struct NativeCursor<'j> {
    view: SurfaceView<'j, u32>,
    x: usize,
}

impl Cursor for NativeCursor<'_> {
    #[inline]
    fn next_pixel<C: PixelConfig>(&mut self) -> u32 {
        let p = self.view.get(self.x, 0);
        self.x += 1;
        p
    }
}

struct Index8Cursor<'j> {
    view: SurfaceView<'j, u8>,
    clut: &'j [u32],
    x: usize,
}

impl Cursor for Index8Cursor<'_> {
    #[inline]
    fn next_pixel<C: PixelConfig>(&mut self) -> u32 {
        let p = self.clut[usize::from(self.view.get(self.x, 0))];
        self.x += 1;
        p
    }
}

struct MaskCursor<'j> {
    mask: SurfaceView<'j, u8>,
    paint: PaintCursor,
    x: usize,
}

impl Cursor for MaskCursor<'_> {
    #[inline]
    fn next_pixel<C: PixelConfig>(&mut self) -> u32 {
        let coverage = self.mask.get(self.x, 0);
        self.x += 1;
        modulate::<C>(self.paint.next(), coverage)
    }
}

struct Wide565Cursor<'j> {
    view: SurfaceView<'j, u16>,
    screen: bool,
    x: usize,
}

impl Cursor for Wide565Cursor<'_> {
    #[inline]
    fn next_pixel<C: PixelConfig>(&mut self) -> u32 {
        let p = self.view.get(self.x, 0);
        self.x += 1;
        if self.screen {
            screen_to_native_opaque::<C>(p)
        } else {
            rgb565_to_native_opaque::<C>(p)
        }
    }
}

trait Tap: 'static {
    const BILINEAR: bool;
    const HALF: bool;
}

struct NearestTap;
struct BilinearTap;
struct HalfTap;

impl Tap for NearestTap {
    const BILINEAR: bool = false;
    const HALF: bool = false;
}

impl Tap for BilinearTap {
    const BILINEAR: bool = true;
    const HALF: bool = false;
}

impl Tap for HalfTap {
    const BILINEAR: bool = true;
    const HALF: bool = true;
}

struct WarpNativeCursor<'j, F> {
    view: SurfaceView<'j, u32>,
    row: WarpRow,
    tap: PhantomData<F>,
}

impl<F: Tap> Cursor for WarpNativeCursor<'_, F> {
    #[inline]
    fn next_pixel<C: PixelConfig>(&mut self) -> u32 {
        let p = if F::BILINEAR {
            let (x, y) = self.row.filter_position();
            sample_native(&self.view, x, y)
        } else {
            let (x, y) = self.row.texel();
            self.view.get(x, y)
        };
        self.row.advance();
        p
    }
}

struct WarpIndex8Cursor<'j, F> {
    view: SurfaceView<'j, u8>,
    clut: &'j [u32],
    row: WarpRow,
    tap: PhantomData<F>,
}

impl<F: Tap> Cursor for WarpIndex8Cursor<'_, F> {
    #[inline]
    fn next_pixel<C: PixelConfig>(&mut self) -> u32 {
        let p = if F::BILINEAR {
            let (x, y) = self.row.filter_position();
            sample_index8(&self.view, self.clut, x, y)
        } else {
            let (x, y) = self.row.texel();
            self.clut[usize::from(self.view.get(x, y))]
        };
        self.row.advance();
        p
    }
}

struct WarpMaskCursor<'j, F> {
    mask: SurfaceView<'j, u8>,
    paint: PaintCursor,
    row: WarpRow,
    tap: PhantomData<F>,
}

impl<F: Tap> Cursor for WarpMaskCursor<'_, F> {
    #[inline]
    fn next_pixel<C: PixelConfig>(&mut self) -> u32 {
        let coverage = if F::BILINEAR {
            let (x, y) = self.row.filter_position();
            sample_alpha8(&self.mask, x, y)
        } else {
            let (x, y) = self.row.texel();
            self.mask.get(x, y)
        };
        self.row.advance();
        modulate::<C>(self.paint.next(), coverage)
    }
}

struct Warp565Cursor<'j, F> {
    view: SurfaceView<'j, u16>,
    screen: bool,
    row: WarpRow,
    tap: PhantomData<F>,
}

impl<F: Tap> Cursor for Warp565Cursor<'_, F> {
    #[inline]
    fn next_pixel<C: PixelConfig>(&mut self) -> u32 {
        let widen = |p: u16| {
            if self.screen {
                screen_to_native_opaque::<C>(p)
            } else {
                rgb565_to_native_opaque::<C>(p)
            }
        };
        let p = if F::HALF {
            let (x, y) = self.row.filter_position();
            widen(sample_565_half(&self.view, x, y))
        } else if F::BILINEAR {
            let (x, y) = self.row.filter_position();
            if self.screen {
                sample_screen::<C>(&self.view, x, y)
            } else {
                sample_rgb565::<C>(&self.view, x, y)
            }
        } else {
            let (x, y) = self.row.texel();
            widen(self.view.get(x, y))
        };
        self.row.advance();
        p
    }
}

struct SolidSrc;
struct GradientSrc;
struct NativeSrc;
struct Index8Src;
struct Alpha8Src;
struct ScreenSrc;
struct Rgb565Src;
struct WarpNativeSrc<F>(PhantomData<F>);
struct WarpIndex8Src<F>(PhantomData<F>);
struct WarpAlpha8Src<F>(PhantomData<F>);
struct WarpScreenSrc<F>(PhantomData<F>);
struct WarpRgb565Src<F>(PhantomData<F>);

impl Source for SolidSrc {
    type SolidOpacity = SolidOpacity;
    type Cursor<'j> = SolidCursor;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>> {
        match job.source {
            RowSource::Solid(c) => Some(SolidCursor(c)),
            _ => None,
        }
    }
}

impl Source for GradientSrc {
    type SolidOpacity = SolidOpacity;
    type Cursor<'j> = GradientCursor;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>> {
        match job.source {
            RowSource::Gradient(g) => {
                let (x, y) = job.gradient_origin;
                Some(GradientCursor(g.row(x, y)))
            }
            _ => None,
        }
    }
}

impl Source for NativeSrc {
    type SolidOpacity = SolidOpacity;
    type Cursor<'j> = NativeCursor<'j>;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>> {
        match job.source {
            RowSource::Native(view) => Some(NativeCursor { view, x: 0 }),
            _ => None,
        }
    }
}

impl Source for Index8Src {
    type SolidOpacity = SolidOpacity;
    type Cursor<'j> = Index8Cursor<'j>;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>> {
        match job.source {
            RowSource::Index8(view) => Some(Index8Cursor {
                view,
                clut: view.clut()?,
                x: 0,
            }),
            _ => None,
        }
    }
}

impl Source for Alpha8Src {
    type SolidOpacity = SolidOpacity;
    type Cursor<'j> = MaskCursor<'j>;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>> {
        match job.source {
            RowSource::Alpha8 { mask, paint } => Some(MaskCursor {
                mask,
                paint: PaintCursor::open(paint, job),
                x: 0,
            }),
            _ => None,
        }
    }
}

impl Source for ScreenSrc {
    type SolidOpacity = SolidOpacity;
    type Cursor<'j> = Wide565Cursor<'j>;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>> {
        match job.source {
            RowSource::Screen(view) => Some(Wide565Cursor {
                view,
                screen: true,
                x: 0,
            }),
            _ => None,
        }
    }
}

impl Source for Rgb565Src {
    type SolidOpacity = SolidOpacity;
    type Cursor<'j> = Wide565Cursor<'j>;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>> {
        match job.source {
            RowSource::Rgb565(view) => Some(Wide565Cursor {
                view,
                screen: false,
                x: 0,
            }),
            _ => None,
        }
    }
}

impl<F: Tap> Source for WarpNativeSrc<F> {
    type SolidOpacity = GradientOpacity;
    type Cursor<'j> = WarpNativeCursor<'j, F>;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>> {
        match job.source {
            RowSource::Warp {
                texture: Texture::Native(view),
                row,
                ..
            } => Some(WarpNativeCursor {
                view,
                row,
                tap: PhantomData,
            }),
            _ => None,
        }
    }
}

impl<F: Tap> Source for WarpIndex8Src<F> {
    type SolidOpacity = GradientOpacity;
    type Cursor<'j> = WarpIndex8Cursor<'j, F>;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>> {
        match job.source {
            RowSource::Warp {
                texture: Texture::Index8(view),
                row,
                ..
            } => Some(WarpIndex8Cursor {
                view,
                clut: view.clut()?,
                row,
                tap: PhantomData,
            }),
            _ => None,
        }
    }
}

impl<F: Tap> Source for WarpAlpha8Src<F> {
    type SolidOpacity = GradientOpacity;
    type Cursor<'j> = WarpMaskCursor<'j, F>;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>> {
        match job.source {
            RowSource::Warp {
                texture: Texture::Alpha8 { mask, paint },
                row,
                ..
            } => Some(WarpMaskCursor {
                mask,
                paint: PaintCursor::open(paint, job),
                row,
                tap: PhantomData,
            }),
            _ => None,
        }
    }
}

impl<F: Tap> Source for WarpScreenSrc<F> {
    type SolidOpacity = GradientOpacity;
    type Cursor<'j> = Warp565Cursor<'j, F>;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>> {
        match job.source {
            RowSource::Warp {
                texture: Texture::Screen(view),
                row,
                ..
            } => Some(Warp565Cursor {
                view,
                screen: true,
                row,
                tap: PhantomData,
            }),
            _ => None,
        }
    }
}

impl<F: Tap> Source for WarpRgb565Src<F> {
    type SolidOpacity = GradientOpacity;
    type Cursor<'j> = Warp565Cursor<'j, F>;

    fn open<'j, C: PixelConfig>(job: &'j RowJob<'_>) -> Option<Self::Cursor<'j>> {
        match job.source {
            RowSource::Warp {
                texture: Texture::Rgb565(view),
                row,
                ..
            } => Some(Warp565Cursor {
                view,
                screen: false,
                row,
                tap: PhantomData,
            }),
            _ => None,
        }
    }
}

fn run_row<T: Target, C: PixelConfig, S: Source, M: Mode, O: OpacitySource>(
    dst: &mut [T::Pixel],
    job: &RowJob<'_>,
) {
    let Some(mut src) = S::open::<C>(job) else {
        return;
    };
    let mut opacity = O::open::<C>(job);
    for px in dst.iter_mut() {
        let s = src.next_pixel::<C>();
        let d = if M::READS_DST { T::load::<C>(*px) } else { 0 };
        let out = if O::ACTIVE {
            M::apply_with_opacity::<C>(d, s, opacity.next())
        } else {
            M::apply::<C>(d, s)
        };
        *px = T::store::<C>(out);
    }
}

type RowFn<T> = fn(&mut [<T as Target>::Pixel], &RowJob<'_>);

macro_rules! row_table {
    ($t:ty, $c:ty; $($src:ty),+ $(,)?) => {
        [$(
            run_row::<$t, $c, $src, OverwriteMode, NoOpacity> as RowFn<$t>,
            run_row::<$t, $c, $src, OverwriteMode, <$src as Source>::SolidOpacity> as RowFn<$t>,
            run_row::<$t, $c, $src, OverwriteMode, GradientOpacity> as RowFn<$t>,
            run_row::<$t, $c, $src, BlendMode, NoOpacity> as RowFn<$t>,
            run_row::<$t, $c, $src, BlendMode, <$src as Source>::SolidOpacity> as RowFn<$t>,
            run_row::<$t, $c, $src, BlendMode, GradientOpacity> as RowFn<$t>,
        )+]
    };
}

struct Kernels<T, C>(PhantomData<(T, C)>);

impl<T: Target, C: PixelConfig> Kernels<T, C> {
    // Order must match `SourceKind`.
    const TABLE: [RowFn<T>; TABLE_LEN] = row_table!(
        T, C;
        SolidSrc,
        GradientSrc,
        NativeSrc,
        Index8Src,
        Alpha8Src,
        ScreenSrc,
        Rgb565Src,
        WarpNativeSrc<NearestTap>,
        WarpNativeSrc<BilinearTap>,
        WarpIndex8Src<NearestTap>,
        WarpIndex8Src<BilinearTap>,
        WarpAlpha8Src<NearestTap>,
        WarpAlpha8Src<BilinearTap>,
        WarpScreenSrc<NearestTap>,
        WarpScreenSrc<BilinearTap>,
        WarpScreenSrc<HalfTap>,
        WarpRgb565Src<NearestTap>,
        WarpRgb565Src<BilinearTap>,
        WarpRgb565Src<HalfTap>,
    );
}

/// Draw one row: every pixel of `dst` receives one source pixel.
///
/// Fails only if the source cannot feed `dst.len()` pixels or an Index8 source lacks its
/// CLUT. Warp coordinates outside the texture are clamped to its edges.
pub fn draw_row<T: Target, C: PixelConfig>(
    dst: &mut [T::Pixel],
    job: &RowJob<'_>,
) -> EmberResult<()> {
    job.validate(dst.len())?;
    let kernel = Kernels::<T, C>::TABLE[job.table_index()];
    kernel(dst, job);
    Ok(())
}

fn row_slice<'v, P: Copy>(
    view: &'v mut SurfaceViewMut<'_, P>,
    y: usize,
    width: usize,
) -> EmberResult<&'v mut [P]> {
    if y >= view.height() || width > view.width() {
        return Err(EmberError::invalid(format!(
            "row {y} x {width} pixels outside {}x{} view",
            view.width(),
            view.height()
        )));
    }
    Ok(&mut view.row_mut(y)[..width])
}

/// Draw `width` pixels of row `y` (relative to the view anchor) of a writable surface view
/// using [`DefaultConfig`].
pub fn draw_surface_row(
    target: &mut SurfaceMut<'_>,
    y: usize,
    width: usize,
    job: &RowJob<'_>,
) -> EmberResult<()> {
    match target {
        SurfaceMut::Native(v) => {
            draw_row::<NativeTarget, DefaultConfig>(row_slice(v, y, width)?, job)
        }
        SurfaceMut::Screen(v) => {
            draw_row::<ScreenTarget, DefaultConfig>(row_slice(v, y, width)?, job)
        }
        SurfaceMut::Rgb565(v) => {
            draw_row::<Rgb565Target, DefaultConfig>(row_slice(v, y, width)?, job)
        }
        SurfaceMut::Index8(_) | SurfaceMut::Alpha8(_) => Err(EmberError::invalid(
            "Index8 and Alpha8 surfaces are not drawable destinations",
        )),
    }
}

/// Fill `width` pixels of row `y` with one colour.
pub fn fill_row(
    target: &mut SurfaceMut<'_>,
    y: usize,
    width: usize,
    color: Color,
    mode: CompositeMode,
) -> EmberResult<()> {
    let job = RowJob::new(RowSource::Solid(color.to_native::<DefaultConfig>())).with_mode(mode);
    draw_surface_row(target, y, width, &job)
}

/// Copy `width` pixels from `source` into row `y`, converting formats as needed. Alpha8
/// sources paint opaque white.
pub fn copy_row(
    target: &mut SurfaceMut<'_>,
    y: usize,
    width: usize,
    source: SurfaceRef<'_>,
    mode: CompositeMode,
) -> EmberResult<()> {
    let white = Paint::Solid(Color::rgb(255, 255, 255).to_native::<DefaultConfig>());
    let job = RowJob::new(RowSource::from_surface(source, white)).with_mode(mode);
    draw_surface_row(target, y, width, &job)
}

#[cfg(test)]
#[path = "../../tests/unit/gfx/scanline.rs"]
mod tests;
