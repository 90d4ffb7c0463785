// ===== aimforge/src/calculator/ratios.rs =====
use serde::Serialize;
use strum_macros::Display;

use crate::config::RatioTables;
use crate::device::DeviceBucket;

/// One row of per-sight derivation ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioSet {
    pub red_dot: f32,
    pub scope_2x: f32,
    pub scope_4x: f32,
    pub sniper_scope: f32,
    pub free_look: f32,
}

impl RatioSet {
    pub fn from_array(values: [f32; 5]) -> Self {
        Self {
            red_dot: values[0],
            scope_2x: values[1],
            scope_4x: values[2],
            sniper_scope: values[3],
            free_look: values[4],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RatioTableKind {
    Default,
    HighEnd,
    Apple,
}

/// Table priority: apple beats high-end beats default. Total, every
/// input resolves to exactly one table.
#[inline(always)]
pub fn select_ratio_table(bucket: DeviceBucket, high_end: bool) -> RatioTableKind {
    if bucket == DeviceBucket::Apple {
        RatioTableKind::Apple
    } else if high_end {
        RatioTableKind::HighEnd
    } else {
        RatioTableKind::Default
    }
}

pub fn ratio_set(tables: &RatioTables, kind: RatioTableKind) -> RatioSet {
    match kind {
        RatioTableKind::Default => RatioSet::from_array(tables.get_default_ratios()),
        RatioTableKind::HighEnd => RatioSet::from_array(tables.get_high_end_ratios()),
        RatioTableKind::Apple => RatioSet::from_array(tables.get_apple_ratios()),
    }
}
