// ===== aimforge/src/calculator/types.rs =====
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::calculator::ratios::{RatioSet, RatioTableKind};
use crate::device::DeviceBucket;
use crate::profile::{ExperienceLevel, PlayStyle, TierKind};

/// The six per-sight output values. Immutable once returned; every
/// field is already rounded and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivitySettings {
    pub general: u32,
    pub red_dot: u32,
    pub scope_2x: u32,
    pub scope_4x: u32,
    pub sniper_scope: u32,
    pub free_look: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum SightKind {
    #[strum(serialize = "Red Dot")]
    RedDot,
    #[strum(serialize = "2x Scope")]
    Scope2x,
    #[strum(serialize = "4x Scope")]
    Scope4x,
    #[strum(serialize = "Sniper Scope")]
    SniperScope,
    #[strum(serialize = "Free Look")]
    FreeLook,
}

impl SensitivitySettings {
    pub fn sight(&self, kind: SightKind) -> u32 {
        match kind {
            SightKind::RedDot => self.red_dot,
            SightKind::Scope2x => self.scope_2x,
            SightKind::Scope4x => self.scope_4x,
            SightKind::SniperScope => self.sniper_scope,
            SightKind::FreeLook => self.free_look,
        }
    }
}

impl SightKind {
    pub fn ratio(&self, set: &RatioSet) -> f32 {
        match self {
            SightKind::RedDot => set.red_dot,
            SightKind::Scope2x => set.scope_2x,
            SightKind::Scope4x => set.scope_4x,
            SightKind::SniperScope => set.sniper_scope,
            SightKind::FreeLook => set.free_look,
        }
    }
}

/// Full factor trace of one calculation. The settings inside are what
/// `calculate` alone would have returned.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationBreakdown {
    pub device_name: String,
    pub bucket: DeviceBucket,
    pub tier: TierKind,
    pub play_style: PlayStyle,
    pub experience: ExperienceLevel,

    pub base_value: f32,
    pub play_style_modifier: f32,
    pub experience_modifier: f32,
    /// Temporal ramp factor, 1.0 when the profile disables the ramp.
    pub optimization_factor: f32,
    /// Free-tier boost chain, 1.0 when the profile disables it.
    pub device_boost: f32,
    pub general_raw: f32,

    pub high_end: bool,
    pub ratio_table: RatioTableKind,
    pub settings: SensitivitySettings,
}
