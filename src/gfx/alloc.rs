//! Surface allocation with explicit memory accounting.

use super::format::SurfaceFormat;
use super::surface::{MemoryDescriptor, Surface, owned_footprint};
use crate::foundation::error::{EmberError, EmberResult};
use serde::{Deserialize, Serialize};

/// Allocator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorOpts {
    /// Maximum bytes live at once across all surfaces. `None` means unbounded.
    pub budget_bytes: Option<usize>,
    /// Reclaim rounds tried by [`SurfaceAllocator::create_surface_with`] before giving up.
    pub reclaim_attempts: u32,
}

impl Default for AllocatorOpts {
    fn default() -> Self {
        Self {
            budget_bytes: None,
            reclaim_attempts: 3,
        }
    }
}

impl AllocatorOpts {
    /// Return options with a byte budget.
    pub fn with_budget_bytes(mut self, budget: Option<usize>) -> Self {
        self.budget_bytes = budget;
        self
    }

    /// Return options with a reclaim retry count.
    pub fn with_reclaim_attempts(mut self, attempts: u32) -> Self {
        self.reclaim_attempts = attempts;
        self
    }

    /// Defaults overlaid with `EMBERKIT_SURFACE_BUDGET` and `EMBERKIT_RECLAIM_ATTEMPTS`.
    ///
    /// A budget of `0` disables the limit. Unparsable values are a [`EmberError::Config`].
    pub fn from_env() -> EmberResult<Self> {
        let mut opts = Self::default();
        if let Ok(v) = std::env::var("EMBERKIT_SURFACE_BUDGET") {
            let n = v.trim().parse::<usize>().map_err(|e| {
                EmberError::config(format!("EMBERKIT_SURFACE_BUDGET={v:?}: {e}"))
            })?;
            opts.budget_bytes = (n > 0).then_some(n);
        }
        if let Ok(v) = std::env::var("EMBERKIT_RECLAIM_ATTEMPTS") {
            opts.reclaim_attempts = v.trim().parse::<u32>().map_err(|e| {
                EmberError::config(format!("EMBERKIT_RECLAIM_ATTEMPTS={v:?}: {e}"))
            })?;
        }
        Ok(opts)
    }

    /// Parse options from a JSON document; missing fields keep their defaults.
    pub fn from_json(text: &str) -> EmberResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| EmberError::config(format!("allocator options: {e}")))
    }
}

/// Snapshot of allocator accounting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    /// Bytes currently charged to live surfaces.
    pub current_bytes: usize,
    /// High-water mark of `current_bytes`.
    pub peak_bytes: usize,
    /// Surfaces created and not yet destroyed.
    pub live_surfaces: usize,
    /// Successful creations since the allocator was built.
    pub total_allocations: u64,
}

/// External collaborator able to free memory when an allocation fails.
pub trait Reclaim {
    /// Try to free at least `needed` bytes, destroying surfaces through `allocator`.
    /// Return `false` when nothing more can be freed.
    fn reclaim(&mut self, allocator: &mut SurfaceAllocator, needed: usize) -> bool;
}

/// Creates and destroys surfaces, tracking current and peak memory use.
///
/// Every surface must be returned through [`Self::destroy_surface`] for the counters to net
/// to zero; dropping a surface directly frees its memory but leaves it charged.
#[derive(Debug)]
pub struct SurfaceAllocator {
    opts: AllocatorOpts,
    stats: MemoryStats,
}

impl Default for SurfaceAllocator {
    fn default() -> Self {
        Self::new(AllocatorOpts::default())
    }
}

impl SurfaceAllocator {
    /// Build an allocator with `opts`.
    pub fn new(opts: AllocatorOpts) -> Self {
        Self {
            opts,
            stats: MemoryStats::default(),
        }
    }

    /// Active options.
    pub fn opts(&self) -> AllocatorOpts {
        self.opts
    }

    /// Current accounting snapshot.
    pub fn stats(&self) -> MemoryStats {
        self.stats
    }

    fn charge(&mut self, bytes: usize) {
        self.stats.current_bytes = self.stats.current_bytes.saturating_add(bytes);
        self.stats.peak_bytes = self.stats.peak_bytes.max(self.stats.current_bytes);
        self.stats.live_surfaces = self.stats.live_surfaces.saturating_add(1);
        self.stats.total_allocations = self.stats.total_allocations.saturating_add(1);
    }

    fn check_budget(&self, bytes: usize) -> EmberResult<()> {
        match self.opts.budget_bytes {
            Some(budget) if self.stats.current_bytes.saturating_add(bytes) > budget => {
                Err(EmberError::out_of_memory(bytes, Some(budget)))
            }
            _ => Ok(()),
        }
    }

    /// Allocate a zeroed surface that owns its pixels.
    pub fn create_surface(
        &mut self,
        format: SurfaceFormat,
        width: u32,
        height: u32,
    ) -> EmberResult<Surface<'static>> {
        let bytes = owned_footprint(format, width, height);
        self.check_budget(bytes)?;
        let surface = Surface::allocate(format, width, height).map_err(|e| match e {
            EmberError::OutOfMemory { requested, .. } => {
                EmberError::out_of_memory(requested, self.opts.budget_bytes)
            }
            other => other,
        })?;
        self.charge(surface.footprint());
        tracing::debug!(
            ?format,
            width,
            height,
            bytes = surface.footprint(),
            current = self.stats.current_bytes,
            "surface created"
        );
        Ok(surface)
    }

    /// Like [`Self::create_surface`], asking `reclaim` to free memory after each
    /// out-of-memory failure, up to `reclaim_attempts` times.
    pub fn create_surface_with(
        &mut self,
        format: SurfaceFormat,
        width: u32,
        height: u32,
        reclaim: &mut dyn Reclaim,
    ) -> EmberResult<Surface<'static>> {
        let mut attempt = 0;
        loop {
            match self.create_surface(format, width, height) {
                Ok(s) => return Ok(s),
                Err(e) if e.is_out_of_memory() && attempt < self.opts.reclaim_attempts => {
                    attempt += 1;
                    let needed = owned_footprint(format, width, height);
                    tracing::debug!(attempt, needed, "allocation failed, reclaiming");
                    if !reclaim.reclaim(self, needed) {
                        tracing::warn!(?format, width, height, "reclaim freed nothing");
                        return Err(e);
                    }
                }
                Err(e) => {
                    if e.is_out_of_memory() {
                        tracing::warn!(?format, width, height, attempt, "allocation failed");
                    }
                    return Err(e);
                }
            }
        }
    }

    /// Wrap caller memory as a constant surface. Only the descriptor is charged.
    pub fn create_const_surface<'m>(
        &mut self,
        format: SurfaceFormat,
        width: u32,
        height: u32,
        memory: MemoryDescriptor<'m>,
    ) -> EmberResult<Surface<'m>> {
        let surface = Surface::wrap(format, width, height, memory)?;
        self.check_budget(surface.footprint())?;
        self.charge(surface.footprint());
        tracing::debug!(?format, width, height, "const surface created");
        Ok(surface)
    }

    /// Release a surface, subtracting exactly what its creation charged. `None` is a no-op.
    pub fn destroy_surface(&mut self, surface: Option<Surface<'_>>) {
        let Some(surface) = surface else {
            return;
        };
        let bytes = surface.footprint();
        self.stats.current_bytes = self.stats.current_bytes.saturating_sub(bytes);
        self.stats.live_surfaces = self.stats.live_surfaces.saturating_sub(1);
        tracing::debug!(
            format = ?surface.format(),
            bytes,
            current = self.stats.current_bytes,
            "surface destroyed"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gfx/alloc.rs"]
mod tests;
