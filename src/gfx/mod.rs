pub(crate) mod alloc;
pub(crate) mod blend;
pub(crate) mod convert;
pub(crate) mod filter;
pub(crate) mod format;
pub(crate) mod gradient;
pub(crate) mod scanline;
pub(crate) mod surface;
pub(crate) mod warp;
