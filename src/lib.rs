//! emberkit is the runtime core of an embedded GUI toolkit.
//!
//! It provides two self-contained engines:
//!
//! - A software compositing engine: pixel format conversion, alpha blending, opacity
//!   modulation, bilinear filtering, gradients and affine-warped texture sampling, driven
//!   one scanline at a time through [`draw_row`] and a [`SurfaceAllocator`].
//! - A Unicode Bidirectional Algorithm (UAX #9) engine with Arabic shaping and mirroring,
//!   exposed through [`BidiContext`].
//!
//! Pixel layout is fixed at compile time through [`PixelConfig`]; the `straight-alpha`
//! feature switches [`DefaultConfig`] from premultiplied to straight alpha.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bidi;
mod foundation;
mod gfx;

pub use crate::foundation::error::{EmberError, EmberResult};

pub use crate::gfx::alloc::{AllocatorOpts, MemoryStats, Reclaim, SurfaceAllocator};
pub use crate::gfx::blend::{blend, blend_with_opacity, modulate};
pub use crate::gfx::convert::{
    native_to_rgb565, native_to_screen, rgb565_to_native_opaque, screen_to_native_opaque,
    screen_to_native_transparent,
};
pub use crate::gfx::filter::{
    bilinear_alpha8, bilinear_native, bilinear_rgb565_half, bilinear_weights, sample_565_half,
    sample_alpha8, sample_index8, sample_native, sample_rgb565, sample_screen,
};
pub use crate::gfx::format::{
    Color, DefaultConfig, PixelConfig, Premultiplied, Straight, SurfaceFormat,
};
pub use crate::gfx::gradient::{Gradient, GradientKind, GradientRow};
pub use crate::gfx::scanline::{
    CompositeMode, Filter, NativeTarget, Opacity, Paint, Rgb565Target, RowJob, RowSource,
    ScreenTarget, Target, Texture, copy_row, draw_row, draw_surface_row, fill_row,
};
pub use crate::gfx::surface::{
    CLUT_ENTRIES, ConstPixels, MemoryDescriptor, PixelReader, PlaneLayout, Surface, SurfaceMut,
    SurfaceRef, SurfaceView, SurfaceViewMut,
};
pub use crate::gfx::warp::WarpRow;

pub use crate::bidi::classify::{
    CharClass, PositionalForms, bidi_type, bracket, classify, joining_type, mirror_of,
    positional_forms,
};
pub use crate::bidi::context::BidiContext;
pub use crate::bidi::reorder::reorder_by_levels;
pub use crate::bidi::shaping::GlyphSource;
pub use crate::bidi::types::{
    BaseDirection, BidiType, Bracket, CharInfo, JoiningType, MAX_BRACKET_STACK, MAX_DEPTH,
    MAX_LEVEL,
};
