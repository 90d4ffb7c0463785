// ===== aimforge/src/calculator/bounds.rs =====
//
// Final saturation stage. Out-of-range values clamp, they never reject.

use crate::config::RatioTables;

use super::ratios::RatioSet;
use super::types::SensitivitySettings;

/// Round-then-clamp into an integer slider position. A non-finite value
/// (upstream guards should prevent this) collapses to the floor.
#[inline(always)]
pub fn clamp_round(value: f32, floor: f32, ceiling: f32) -> u32 {
    if !value.is_finite() {
        return floor as u32;
    }
    value.round().clamp(floor, ceiling) as u32
}

/// Derives all six sliders from the composed pre-clamp general value.
/// Each sight multiplies its ratio on the raw value and clamps into its
/// own range, so a clipped general never distorts the sight spread.
pub fn clamp_settings(
    general_raw: f32,
    set: &RatioSet,
    tables: &RatioTables,
) -> SensitivitySettings {
    let floors = tables.get_sight_floors();
    SensitivitySettings {
        general: clamp_round(general_raw, tables.general_floor, tables.general_ceiling),
        red_dot: clamp_round(general_raw * set.red_dot, floors[0], tables.sight_ceiling),
        scope_2x: clamp_round(general_raw * set.scope_2x, floors[1], tables.sight_ceiling),
        scope_4x: clamp_round(general_raw * set.scope_4x, floors[2], tables.sight_ceiling),
        sniper_scope: clamp_round(
            general_raw * set.sniper_scope,
            floors[3],
            tables.sight_ceiling,
        ),
        free_look: clamp_round(general_raw * set.free_look, floors[4], tables.sight_ceiling),
    }
}
