use super::*;
use crate::gfx::surface::{ConstPixels, DESCRIPTOR_BYTES};

struct Pool {
    parked: Vec<Surface<'static>>,
    calls: u32,
}

impl Reclaim for Pool {
    fn reclaim(&mut self, allocator: &mut SurfaceAllocator, _needed: usize) -> bool {
        self.calls += 1;
        match self.parked.pop() {
            Some(s) => {
                allocator.destroy_surface(Some(s));
                true
            }
            None => false,
        }
    }
}

#[test]
fn create_then_destroy_nets_to_zero() {
    let mut a = SurfaceAllocator::default();
    let s = a.create_surface(SurfaceFormat::Native, 10, 10).unwrap();
    let stats = a.stats();
    assert_eq!(stats.current_bytes, 400 + DESCRIPTOR_BYTES);
    assert_eq!(stats.peak_bytes, stats.current_bytes);
    assert_eq!(stats.live_surfaces, 1);
    a.destroy_surface(Some(s));
    let stats = a.stats();
    assert_eq!(stats.current_bytes, 0);
    assert_eq!(stats.peak_bytes, 400 + DESCRIPTOR_BYTES);
    assert_eq!(stats.live_surfaces, 0);
    assert_eq!(stats.total_allocations, 1);
}

#[test]
fn destroying_none_changes_nothing() {
    let mut a = SurfaceAllocator::default();
    a.destroy_surface(None);
    assert_eq!(a.stats(), MemoryStats::default());
}

#[test]
fn index8_charges_its_clut() {
    let mut a = SurfaceAllocator::default();
    let s = a.create_surface(SurfaceFormat::Index8, 4, 4).unwrap();
    assert_eq!(a.stats().current_bytes, 16 + 1024 + DESCRIPTOR_BYTES);
    a.destroy_surface(Some(s));
    assert_eq!(a.stats().current_bytes, 0);
}

#[test]
fn const_surfaces_charge_only_the_descriptor() {
    let mut a = SurfaceAllocator::default();
    let px = [0u16; 6];
    let s = a
        .create_const_surface(
            SurfaceFormat::Screen,
            3,
            2,
            MemoryDescriptor::new(ConstPixels::Wide(&px), 6),
        )
        .unwrap();
    assert_eq!(a.stats().current_bytes, DESCRIPTOR_BYTES);
    a.destroy_surface(Some(s));
    assert_eq!(a.stats().current_bytes, 0);
}

#[test]
fn budget_overflow_is_out_of_memory() {
    let budget = 100 + DESCRIPTOR_BYTES;
    let mut a = SurfaceAllocator::new(AllocatorOpts::default().with_budget_bytes(Some(budget)));
    let first = a.create_surface(SurfaceFormat::Alpha8, 10, 10).unwrap();
    let err = a.create_surface(SurfaceFormat::Alpha8, 1, 1).unwrap_err();
    assert!(matches!(err, EmberError::OutOfMemory { budget: Some(b), .. } if b == budget));
    a.destroy_surface(Some(first));
    assert!(a.create_surface(SurfaceFormat::Alpha8, 1, 1).is_ok());
}

#[test]
fn reclaim_frees_room_and_retries() {
    let budget = 2 * (64 + DESCRIPTOR_BYTES);
    let mut a = SurfaceAllocator::new(AllocatorOpts::default().with_budget_bytes(Some(budget)));
    let mut pool = Pool {
        parked: vec![
            a.create_surface(SurfaceFormat::Alpha8, 8, 8).unwrap(),
            a.create_surface(SurfaceFormat::Alpha8, 8, 8).unwrap(),
        ],
        calls: 0,
    };
    let s = a
        .create_surface_with(SurfaceFormat::Alpha8, 8, 8, &mut pool)
        .unwrap();
    assert_eq!(pool.calls, 1);
    assert_eq!(a.stats().live_surfaces, 2);
    a.destroy_surface(Some(s));
}

#[test]
fn reclaim_gives_up_after_configured_attempts() {
    let mut a = SurfaceAllocator::new(
        AllocatorOpts::default()
            .with_budget_bytes(Some(1))
            .with_reclaim_attempts(2),
    );
    struct Liar(u32);
    impl Reclaim for Liar {
        fn reclaim(&mut self, _allocator: &mut SurfaceAllocator, _needed: usize) -> bool {
            self.0 += 1;
            true
        }
    }
    let mut liar = Liar(0);
    let err = a.create_surface_with(SurfaceFormat::Native, 1, 1, &mut liar);
    assert!(err.is_err_and(|e| e.is_out_of_memory()));
    assert_eq!(liar.0, 2);
}

#[test]
fn peak_is_monotone_across_mixed_sequences() {
    let mut a = SurfaceAllocator::default();
    let mut peak = 0;
    let mut live = Vec::new();
    for (i, (w, h)) in [(4, 4), (16, 2), (1, 1), (32, 32), (3, 3)].into_iter().enumerate() {
        live.push(a.create_surface(SurfaceFormat::Native, w, h).unwrap());
        if i % 2 == 1 {
            a.destroy_surface(live.pop());
        }
        assert!(a.stats().peak_bytes >= peak);
        assert!(a.stats().peak_bytes >= a.stats().current_bytes);
        peak = a.stats().peak_bytes;
    }
    for s in live {
        a.destroy_surface(Some(s));
    }
    assert_eq!(a.stats().current_bytes, 0);
}

#[test]
fn opts_parse_from_json() {
    let opts = AllocatorOpts::from_json(r#"{ "budget_bytes": 4096 }"#).unwrap();
    assert_eq!(opts.budget_bytes, Some(4096));
    assert_eq!(opts.reclaim_attempts, AllocatorOpts::default().reclaim_attempts);
    assert!(matches!(
        AllocatorOpts::from_json("{ nope"),
        Err(EmberError::Config(_))
    ));
}
