// ===== aimforge/src/calculator/optimization.rs =====
//
// Temporal optimization factor: a linear ramp over days since first
// use, read through an hourly cache so steady-state calculations never
// touch the durable store.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::consts::{MS_PER_DAY, OPTIMIZATION_CACHE_TTL_MS, RAMP_CAP_DAYS, RAMP_DAILY_GAIN};
use crate::store::{MemoryTimestampStore, TimestampStore};

#[derive(Debug, Clone, Copy)]
struct CachedFactor {
    factor: f32,
    computed_at_ms: u64,
}

/// Caller-owned ramp state for one user. The calculator itself stays
/// stateless; anything session-scoped lives here.
#[derive(Debug)]
pub struct OptimizationContext<S: TimestampStore> {
    store: S,
    cached: Option<CachedFactor>,
}

impl OptimizationContext<MemoryTimestampStore> {
    /// Context with no durable backing. Every run looks like a fresh
    /// install, which pins the factor at 1.0.
    pub fn in_memory() -> Self {
        Self::new(MemoryTimestampStore::new())
    }
}

impl<S: TimestampStore> OptimizationContext<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cached: None,
        }
    }

    /// The factor at `now_ms`, reusing the cached value while it is
    /// younger than an hour.
    pub fn factor_at(&mut self, now_ms: u64) -> f32 {
        if let Some(cached) = self.cached {
            if now_ms.saturating_sub(cached.computed_at_ms) < OPTIMIZATION_CACHE_TTL_MS {
                return cached.factor;
            }
        }
        self.refresh_at(now_ms)
    }

    /// Recompute from the durable store, bypassing the cache. A store
    /// that cannot be read is treated as a fresh install: the session
    /// still gets a usable (neutral) factor.
    pub fn refresh_at(&mut self, now_ms: u64) -> f32 {
        let first_use_ms = match self.store.load() {
            Ok(Some(ts)) => ts,
            Ok(None) => {
                if let Err(e) = self.store.save(now_ms) {
                    warn!("⚠️ Could not persist first-use timestamp: {}", e);
                }
                now_ms
            }
            Err(e) => {
                warn!(
                    "⚠️ Could not read first-use timestamp: {}. Treating as fresh install.",
                    e
                );
                now_ms
            }
        };

        let days = now_ms.saturating_sub(first_use_ms) / MS_PER_DAY;
        let factor = 1.0 + days.min(RAMP_CAP_DAYS) as f32 * RAMP_DAILY_GAIN;

        self.cached = Some(CachedFactor {
            factor,
            computed_at_ms: now_ms,
        });
        factor
    }

    /// Drops the cache and the durable timestamp. The next calculation
    /// starts the ramp over from day zero.
    pub fn reset(&mut self) {
        self.cached = None;
        if let Err(e) = self.store.clear() {
            warn!("⚠️ Could not clear first-use timestamp: {}", e);
        }
    }

    pub fn factor_now(&mut self) -> f32 {
        self.factor_at(wall_clock_ms())
    }

    pub fn refresh_now(&mut self) -> f32 {
        self.refresh_at(wall_clock_ms())
    }

    pub fn cached_factor(&self) -> Option<f32> {
        self.cached.map(|c| c.factor)
    }
}

/// Milliseconds since the Unix epoch. A pre-epoch clock reads as 0
/// rather than panicking.
pub fn wall_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
