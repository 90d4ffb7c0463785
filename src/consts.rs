// ===== aimforge/src/consts.rs =====

/// Milliseconds per elapsed-day unit of the optimization ramp.
pub const MS_PER_DAY: u64 = 86_400_000;

/// How long a computed optimization factor may be reused before the
/// durable store is consulted again (one hour).
pub const OPTIMIZATION_CACHE_TTL_MS: u64 = 3_600_000;

/// Linear gain per elapsed day of the optimization ramp.
/// Day 7 lands at ~1.15.
pub const RAMP_DAILY_GAIN: f32 = 0.02143;

/// The ramp stops compounding after this many days.
pub const RAMP_CAP_DAYS: u64 = 7;

/// Processor/GPU sub-scores are saturated into [0, SCORE_SCALE_MAX].
pub const SCORE_SCALE_MAX: f32 = 100.0;

/// Maximum number of hits returned by a catalog name search.
pub const SEARCH_RESULT_LIMIT: usize = 10;

// Legacy free-tier heuristics. These cutoffs are part of the shipped
// behavior and are not exposed as tunables.

/// Mean-score cutoffs for the free-tier optimization boost.
pub const FREE_PERF_HIGH_CUTOFF: f32 = 90.0;
pub const FREE_PERF_MID_CUTOFF: f32 = 75.0;
pub const FREE_PERF_LOW_CUTOFF: f32 = 50.0;

/// Processor-score cutoffs for the free-tier "complex" adjustment.
pub const COMPLEX_CPU_HIGH_CUTOFF: f32 = 95.0;
pub const COMPLEX_CPU_LOW_CUTOFF: f32 = 40.0;

/// Screen-size cutoffs (inches) for the free-tier "complex" adjustment.
pub const COMPLEX_SCREEN_LARGE_IN: f32 = 6.5;
pub const COMPLEX_SCREEN_SMALL_IN: f32 = 5.5;

/// Mean-score cutoffs for the displayed performance-tier label.
pub const TIER_BUDGET_CUTOFF: f32 = 60.0;
pub const TIER_MID_RANGE_CUTOFF: f32 = 75.0;
pub const TIER_HIGH_END_CUTOFF: f32 = 90.0;
