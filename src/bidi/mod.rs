//! Unicode Bidirectional Algorithm (UAX #9) with Arabic shaping and mirroring.

pub(crate) mod brackets;
pub(crate) mod classify;
pub(crate) mod context;
pub(crate) mod explicit;
pub(crate) mod neutral;
pub(crate) mod reorder;
pub(crate) mod sequence;
pub(crate) mod shaping;
pub(crate) mod tables;
pub(crate) mod types;
pub(crate) mod weak;
