//! Surfaces and the transient memory views handed to the scanline drivers.

use super::format::SurfaceFormat;
use crate::foundation::error::{EmberError, EmberResult};
use std::borrow::Cow;

/// Number of entries in an Index8 colour lookup table.
pub const CLUT_ENTRIES: usize = 256;

/// Bytes charged for a surface descriptor, owned or not.
pub(crate) const DESCRIPTOR_BYTES: usize = std::mem::size_of::<Surface<'static>>();

/// Indirect access to pixel memory that cannot be exposed as a slice (device memory,
/// compressed stores, ...). When a surface carries a reader every pixel read goes through it.
pub trait PixelReader<P> {
    /// Number of addressable elements.
    fn len(&self) -> usize;

    /// Whether the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the element at `index`.
    fn read(&self, index: usize) -> P;
}

enum Access<'a, P> {
    Direct(&'a [P]),
    Reader(&'a dyn PixelReader<P>),
}

impl<P> Clone for Access<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Access<'_, P> {}

/// Byte pitches of the planes behind a view. The secondary plane is carried for
/// collaborators that use planar layouts; the engine itself only reads the primary plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaneLayout {
    /// Bytes between vertically adjacent pixels of the primary plane.
    pub pitch_y: usize,
    /// Bytes between horizontally adjacent pixels of the primary plane.
    pub pitch_x: usize,
    /// Vertical pitch of the secondary plane, 0 when absent.
    pub secondary_pitch_y: usize,
    /// Horizontal pitch of the secondary plane, 0 when absent.
    pub secondary_pitch_x: usize,
}

/// Read-only window onto a surface, anchored at the pixel it was created for.
pub struct SurfaceView<'a, P> {
    access: Access<'a, P>,
    base: usize,
    pitch: usize,
    width: usize,
    height: usize,
    clut: Option<&'a [u32]>,
    layout: PlaneLayout,
}

impl<P> Clone for SurfaceView<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for SurfaceView<'_, P> {}

impl<P> std::fmt::Debug for SurfaceView<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceView")
            .field("base", &self.base)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("reader", &matches!(self.access, Access::Reader(_)))
            .field("layout", &self.layout)
            .finish()
    }
}

impl<'a, P: Copy> SurfaceView<'a, P> {
    /// View a plain slice as a `width` x `height` image with `pitch` elements per row.
    ///
    /// Fails if the slice is too short for the requested geometry.
    pub fn from_slice(
        pixels: &'a [P],
        width: usize,
        height: usize,
        pitch: usize,
    ) -> EmberResult<Self> {
        check_geometry(pixels.len(), width, height, pitch)?;
        Ok(Self {
            access: Access::Direct(pixels),
            base: 0,
            pitch,
            width,
            height,
            clut: None,
            layout: PlaneLayout {
                pitch_y: pitch * std::mem::size_of::<P>(),
                pitch_x: std::mem::size_of::<P>(),
                ..PlaneLayout::default()
            },
        })
    }

    /// Attach a colour lookup table (Index8 sources).
    pub fn with_clut(mut self, clut: &'a [u32]) -> Self {
        self.clut = Some(clut);
        self
    }

    /// Columns available to the right of the anchor, anchor included.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows available below the anchor, anchor included.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Plane pitches.
    pub fn layout(&self) -> PlaneLayout {
        self.layout
    }

    /// Colour lookup table, for Index8 views.
    pub fn clut(&self) -> Option<&'a [u32]> {
        self.clut
    }

    /// Whether reads are routed through a [`PixelReader`].
    pub fn is_indirect(&self) -> bool {
        matches!(self.access, Access::Reader(_))
    }

    /// Read the pixel at `(x, y)` relative to the anchor.
    ///
    /// Coordinates are not clipped; reading outside the backing memory panics.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> P {
        let i = self.base + y * self.pitch + x;
        match self.access {
            Access::Direct(s) => s[i],
            Access::Reader(r) => r.read(i),
        }
    }

    /// Re-anchor the view at `(dx, dy)` relative to the current anchor.
    pub fn offset(&self, dx: usize, dy: usize) -> EmberResult<Self> {
        if dx >= self.width || dy >= self.height {
            return Err(EmberError::invalid(format!(
                "view offset ({dx}, {dy}) outside {}x{}",
                self.width, self.height
            )));
        }
        Ok(Self {
            base: self.base + dy * self.pitch + dx,
            width: self.width - dx,
            height: self.height - dy,
            ..*self
        })
    }
}

/// Writable window onto an owned surface.
pub struct SurfaceViewMut<'a, P> {
    pixels: &'a mut [P],
    base: usize,
    pitch: usize,
    width: usize,
    height: usize,
    clut: Option<&'a [u32]>,
    layout: PlaneLayout,
}

impl<'a, P: Copy> SurfaceViewMut<'a, P> {
    /// View a mutable slice as a `width` x `height` image with `pitch` elements per row.
    pub fn from_slice(
        pixels: &'a mut [P],
        width: usize,
        height: usize,
        pitch: usize,
    ) -> EmberResult<Self> {
        check_geometry(pixels.len(), width, height, pitch)?;
        Ok(Self {
            pixels,
            base: 0,
            pitch,
            width,
            height,
            clut: None,
            layout: PlaneLayout {
                pitch_y: pitch * std::mem::size_of::<P>(),
                pitch_x: std::mem::size_of::<P>(),
                ..PlaneLayout::default()
            },
        })
    }

    /// Columns available to the right of the anchor, anchor included.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows available below the anchor, anchor included.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Plane pitches.
    pub fn layout(&self) -> PlaneLayout {
        self.layout
    }

    /// Colour lookup table, for Index8 views.
    pub fn clut(&self) -> Option<&[u32]> {
        self.clut
    }

    /// Read the pixel at `(x, y)` relative to the anchor.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> P {
        self.pixels[self.base + y * self.pitch + x]
    }

    /// Write the pixel at `(x, y)` relative to the anchor.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: P) {
        self.pixels[self.base + y * self.pitch + x] = value;
    }

    /// Row `y` from the anchor column to the right edge.
    pub fn row_mut(&mut self, y: usize) -> &mut [P] {
        let start = self.base + y * self.pitch;
        &mut self.pixels[start..start + self.width]
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> SurfaceView<'_, P> {
        SurfaceView {
            access: Access::Direct(self.pixels),
            base: self.base,
            pitch: self.pitch,
            width: self.width,
            height: self.height,
            clut: self.clut,
            layout: self.layout,
        }
    }
}

fn check_geometry(len: usize, width: usize, height: usize, pitch: usize) -> EmberResult<()> {
    if width == 0 || height == 0 || pitch < width {
        return Err(EmberError::invalid(format!(
            "bad geometry: {width}x{height} with pitch {pitch}"
        )));
    }
    let needed = (height - 1)
        .checked_mul(pitch)
        .and_then(|n| n.checked_add(width))
        .ok_or_else(|| EmberError::invalid("geometry overflows usize"))?;
    if len < needed {
        return Err(EmberError::invalid(format!(
            "pixel memory too short: {len} elements, need {needed}"
        )));
    }
    Ok(())
}

/// Read-only view of a surface, tagged by storage format.
#[derive(Clone, Copy, Debug)]
pub enum SurfaceRef<'a> {
    /// Native 32-bit pixels.
    Native(SurfaceView<'a, u32>),
    /// Screen RGB565 pixels.
    Screen(SurfaceView<'a, u16>),
    /// Explicit RGB565 pixels.
    Rgb565(SurfaceView<'a, u16>),
    /// Indexed pixels; the view carries the CLUT.
    Index8(SurfaceView<'a, u8>),
    /// Alpha-only pixels.
    Alpha8(SurfaceView<'a, u8>),
}

/// Writable view of a surface, tagged by storage format.
pub enum SurfaceMut<'a> {
    /// Native 32-bit pixels.
    Native(SurfaceViewMut<'a, u32>),
    /// Screen RGB565 pixels.
    Screen(SurfaceViewMut<'a, u16>),
    /// Explicit RGB565 pixels.
    Rgb565(SurfaceViewMut<'a, u16>),
    /// Indexed pixels.
    Index8(SurfaceViewMut<'a, u8>),
    /// Alpha-only pixels.
    Alpha8(SurfaceViewMut<'a, u8>),
}

/// Caller-owned pixel memory wrapped by a constant surface.
pub enum ConstPixels<'m> {
    /// Native 32-bit pixels.
    Native(&'m [u32]),
    /// 16-bit pixels (screen or explicit RGB565).
    Wide(&'m [u16]),
    /// 8-bit pixels (Index8 or Alpha8).
    Byte(&'m [u8]),
    /// Native pixels behind a reader.
    NativeReader(&'m dyn PixelReader<u32>),
    /// 16-bit pixels behind a reader.
    WideReader(&'m dyn PixelReader<u16>),
    /// 8-bit pixels behind a reader.
    ByteReader(&'m dyn PixelReader<u8>),
}

/// Description of caller memory for [`crate::SurfaceAllocator::create_const_surface`].
pub struct MemoryDescriptor<'m> {
    /// Pixel storage.
    pub pixels: ConstPixels<'m>,
    /// Bytes per row; must equal `width * bytes_per_pixel`.
    pub pitch: usize,
    /// Colour lookup table for Index8 memory.
    pub clut: Option<&'m [u32]>,
}

impl<'m> MemoryDescriptor<'m> {
    /// Describe tightly packed memory.
    pub fn new(pixels: ConstPixels<'m>, pitch: usize) -> Self {
        Self {
            pixels,
            pitch,
            clut: None,
        }
    }

    /// Attach a colour lookup table.
    pub fn with_clut(mut self, clut: &'m [u32]) -> Self {
        self.clut = Some(clut);
        self
    }
}

enum Pixels<'m, P> {
    Owned(Vec<P>),
    Borrowed(&'m [P]),
    Reader(&'m dyn PixelReader<P>),
}

impl<P: Copy> Pixels<'_, P> {
    fn access(&self) -> Access<'_, P> {
        match self {
            Pixels::Owned(v) => Access::Direct(v),
            Pixels::Borrowed(s) => Access::Direct(s),
            Pixels::Reader(r) => Access::Reader(*r),
        }
    }

    fn len(&self) -> usize {
        match self {
            Pixels::Owned(v) => v.len(),
            Pixels::Borrowed(s) => s.len(),
            Pixels::Reader(r) => r.len(),
        }
    }
}

enum Plane<'m> {
    Native(Pixels<'m, u32>),
    Wide(Pixels<'m, u16>),
    Byte(Pixels<'m, u8>),
}

/// A 2-D pixel buffer in one of the [`SurfaceFormat`]s.
///
/// Owned surfaces come from [`crate::SurfaceAllocator::create_surface`] and hold their
/// pixels. Constant surfaces wrap caller memory for `'m` and reject write access.
pub struct Surface<'m> {
    format: SurfaceFormat,
    width: u32,
    height: u32,
    pitch: usize,
    plane: Plane<'m>,
    clut: Option<Cow<'m, [u32]>>,
    constant: bool,
    footprint: usize,
}

impl std::fmt::Debug for Surface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pitch", &self.pitch)
            .field("constant", &self.constant)
            .finish()
    }
}

fn try_zeroed<T: Copy + Default>(n: usize) -> EmberResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(n).map_err(|_| {
        EmberError::out_of_memory(n.saturating_mul(std::mem::size_of::<T>()), None)
    })?;
    v.resize(n, T::default());
    Ok(v)
}

impl Surface<'static> {
    /// Allocate zeroed, tightly packed pixel memory.
    pub(crate) fn allocate(format: SurfaceFormat, width: u32, height: u32) -> EmberResult<Self> {
        let (count, pitch) = tight_layout(format, width, height)?;
        let plane = match format {
            SurfaceFormat::Native => Plane::Native(Pixels::Owned(try_zeroed(count)?)),
            SurfaceFormat::Screen | SurfaceFormat::Rgb565 => {
                Plane::Wide(Pixels::Owned(try_zeroed(count)?))
            }
            SurfaceFormat::Index8 | SurfaceFormat::Alpha8 => {
                Plane::Byte(Pixels::Owned(try_zeroed(count)?))
            }
        };
        let clut = if format.has_clut() {
            Some(Cow::Owned(try_zeroed::<u32>(CLUT_ENTRIES)?))
        } else {
            None
        };
        let footprint = owned_footprint(format, width, height);
        Ok(Self {
            format,
            width,
            height,
            pitch,
            plane,
            clut,
            constant: false,
            footprint,
        })
    }
}

impl<'m> Surface<'m> {
    /// Wrap caller memory as a constant surface.
    pub(crate) fn wrap(
        format: SurfaceFormat,
        width: u32,
        height: u32,
        memory: MemoryDescriptor<'m>,
    ) -> EmberResult<Self> {
        let (count, pitch) = tight_layout(format, width, height)?;
        if memory.pitch != pitch {
            return Err(EmberError::invalid(format!(
                "pitch {} does not match tight packing {pitch} for {format:?}",
                memory.pitch
            )));
        }
        let plane = match (format, memory.pixels) {
            (SurfaceFormat::Native, ConstPixels::Native(s)) => Plane::Native(Pixels::Borrowed(s)),
            (SurfaceFormat::Native, ConstPixels::NativeReader(r)) => {
                Plane::Native(Pixels::Reader(r))
            }
            (SurfaceFormat::Screen | SurfaceFormat::Rgb565, ConstPixels::Wide(s)) => {
                Plane::Wide(Pixels::Borrowed(s))
            }
            (SurfaceFormat::Screen | SurfaceFormat::Rgb565, ConstPixels::WideReader(r)) => {
                Plane::Wide(Pixels::Reader(r))
            }
            (SurfaceFormat::Index8 | SurfaceFormat::Alpha8, ConstPixels::Byte(s)) => {
                Plane::Byte(Pixels::Borrowed(s))
            }
            (SurfaceFormat::Index8 | SurfaceFormat::Alpha8, ConstPixels::ByteReader(r)) => {
                Plane::Byte(Pixels::Reader(r))
            }
            _ => {
                return Err(EmberError::invalid(format!(
                    "memory element size does not match {format:?}"
                )));
            }
        };
        let len = match &plane {
            Plane::Native(p) => p.len(),
            Plane::Wide(p) => p.len(),
            Plane::Byte(p) => p.len(),
        };
        if len < count {
            return Err(EmberError::invalid(format!(
                "memory holds {len} pixels, {width}x{height} needs {count}"
            )));
        }
        let clut = match (format.has_clut(), memory.clut) {
            (true, Some(c)) if c.len() >= CLUT_ENTRIES => Some(Cow::Borrowed(c)),
            (true, _) => {
                return Err(EmberError::invalid(
                    "Index8 memory needs a 256-entry colour lookup table",
                ));
            }
            (false, _) => None,
        };
        Ok(Self {
            format,
            width,
            height,
            pitch,
            plane,
            clut,
            constant: true,
            footprint: DESCRIPTOR_BYTES,
        })
    }

    /// Storage format.
    pub fn format(&self) -> SurfaceFormat {
        self.format
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// Whether the surface wraps caller memory and rejects writes.
    pub fn is_constant(&self) -> bool {
        self.constant
    }

    /// Bytes charged to the allocator for this surface.
    pub(crate) fn footprint(&self) -> usize {
        self.footprint
    }

    /// Colour lookup table of an Index8 surface.
    pub fn clut(&self) -> Option<&[u32]> {
        self.clut.as_deref()
    }

    /// Replace the leading entries of an owned Index8 surface's colour lookup table.
    pub fn set_clut(&mut self, entries: &[u32]) -> EmberResult<()> {
        if self.constant {
            return Err(EmberError::WriteProtected);
        }
        let Some(clut) = self.clut.as_mut() else {
            return Err(EmberError::invalid(format!(
                "{:?} surfaces have no colour lookup table",
                self.format
            )));
        };
        if entries.len() > CLUT_ENTRIES {
            return Err(EmberError::invalid(format!(
                "{} CLUT entries exceed {CLUT_ENTRIES}",
                entries.len()
            )));
        }
        clut.to_mut()[..entries.len()].copy_from_slice(entries);
        Ok(())
    }

    fn check_coords(&self, x: u32, y: u32) -> EmberResult<()> {
        if x >= self.width || y >= self.height {
            return Err(EmberError::invalid(format!(
                "({x}, {y}) outside {}x{} surface",
                self.width, self.height
            )));
        }
        Ok(())
    }

    fn layout(&self) -> PlaneLayout {
        PlaneLayout {
            pitch_y: self.pitch,
            pitch_x: self.format.bytes_per_pixel(),
            ..PlaneLayout::default()
        }
    }

    /// Read-only view anchored at `(x, y)`.
    pub fn view(&self, x: u32, y: u32) -> EmberResult<SurfaceRef<'_>> {
        self.check_coords(x, y)?;
        let pitch = self.pitch / self.format.bytes_per_pixel();
        let base = y as usize * pitch + x as usize;
        let width = (self.width - x) as usize;
        let height = (self.height - y) as usize;
        let layout = self.layout();
        let clut = self.clut.as_deref();
        macro_rules! view {
            ($pixels:expr) => {
                SurfaceView {
                    access: $pixels.access(),
                    base,
                    pitch,
                    width,
                    height,
                    clut,
                    layout,
                }
            };
        }
        Ok(match (&self.plane, self.format) {
            (Plane::Native(p), _) => SurfaceRef::Native(view!(p)),
            (Plane::Wide(p), SurfaceFormat::Screen) => SurfaceRef::Screen(view!(p)),
            (Plane::Wide(p), _) => SurfaceRef::Rgb565(view!(p)),
            (Plane::Byte(p), SurfaceFormat::Index8) => SurfaceRef::Index8(view!(p)),
            (Plane::Byte(p), _) => SurfaceRef::Alpha8(view!(p)),
        })
    }

    /// Writable view anchored at `(x, y)`. Fails with [`EmberError::WriteProtected`] on
    /// constant surfaces.
    pub fn view_mut(&mut self, x: u32, y: u32) -> EmberResult<SurfaceMut<'_>> {
        if self.constant {
            return Err(EmberError::WriteProtected);
        }
        self.check_coords(x, y)?;
        let pitch = self.pitch / self.format.bytes_per_pixel();
        let base = y as usize * pitch + x as usize;
        let width = (self.width - x) as usize;
        let height = (self.height - y) as usize;
        let layout = self.layout();
        let format = self.format;
        let clut = self.clut.as_deref();
        macro_rules! view_mut {
            ($pixels:expr) => {
                SurfaceViewMut {
                    pixels: $pixels,
                    base,
                    pitch,
                    width,
                    height,
                    clut,
                    layout,
                }
            };
        }
        Ok(match (&mut self.plane, format) {
            (Plane::Native(Pixels::Owned(v)), _) => SurfaceMut::Native(view_mut!(v)),
            (Plane::Wide(Pixels::Owned(v)), SurfaceFormat::Screen) => {
                SurfaceMut::Screen(view_mut!(v))
            }
            (Plane::Wide(Pixels::Owned(v)), _) => SurfaceMut::Rgb565(view_mut!(v)),
            (Plane::Byte(Pixels::Owned(v)), SurfaceFormat::Index8) => {
                SurfaceMut::Index8(view_mut!(v))
            }
            (Plane::Byte(Pixels::Owned(v)), _) => SurfaceMut::Alpha8(view_mut!(v)),
            _ => return Err(EmberError::WriteProtected),
        })
    }
}

fn tight_layout(format: SurfaceFormat, width: u32, height: u32) -> EmberResult<(usize, usize)> {
    if width == 0 || height == 0 {
        return Err(EmberError::invalid(format!(
            "surface dimensions must be non-zero, got {width}x{height}"
        )));
    }
    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| EmberError::invalid("surface dimensions overflow usize"))?;
    count
        .checked_mul(format.bytes_per_pixel())
        .ok_or_else(|| EmberError::invalid("surface size overflows usize"))?;
    Ok((count, width as usize * format.bytes_per_pixel()))
}

/// Bytes an owned surface of this shape charges: pixels, CLUT and descriptor.
pub(crate) fn owned_footprint(format: SurfaceFormat, width: u32, height: u32) -> usize {
    let pixels = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(format.bytes_per_pixel());
    let clut = if format.has_clut() {
        CLUT_ENTRIES * std::mem::size_of::<u32>()
    } else {
        0
    };
    pixels.saturating_add(clut).saturating_add(DESCRIPTOR_BYTES)
}

#[cfg(test)]
#[path = "../../tests/unit/gfx/surface.rs"]
mod tests;
