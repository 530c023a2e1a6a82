use std::cell::RefCell;

thread_local! {
    pub static PERF_SWEEP_STEPS: RefCell<u64> = RefCell::new(0);
    pub static PERF_SWEEP_COLLISIONS: RefCell<u64> = RefCell::new(0);
}

pub fn reset_physics_perf_counters() {
    PERF_SWEEP_STEPS.with(|c| *c.borrow_mut() = 0);
    PERF_SWEEP_COLLISIONS.with(|c| *c.borrow_mut() = 0);
}

/// (cells visited, sweeps that stopped early) since the last reset
pub fn take_physics_perf_counters() -> (u64, u64) {
    let steps = PERF_SWEEP_STEPS.with(|c| {
        let v = *c.borrow();
        *c.borrow_mut() = 0;
        v
    });
    let collisions = PERF_SWEEP_COLLISIONS.with(|c| {
        let v = *c.borrow();
        *c.borrow_mut() = 0;
        v
    });
    (steps, collisions)
}

#[inline]
pub(super) fn record_sweep(steps: u32, collided: bool) {
    PERF_SWEEP_STEPS.with(|c| {
        let mut v = c.borrow_mut();
        *v = v.saturating_add(steps as u64);
    });
    if collided {
        PERF_SWEEP_COLLISIONS.with(|c| {
            let mut v = c.borrow_mut();
            *v = v.saturating_add(1);
        });
    }
}
