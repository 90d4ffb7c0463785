// ===== aimforge/src/profile.rs =====
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::Tuning;

/// User-declared aim behavior. Unrecognized labels land on `Unknown`
/// at the parse boundary and contribute a neutral modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PlayStyle {
    Aggressive,
    Precise,
    Balanced,
    Defensive,
    Unknown,
}

impl PlayStyle {
    /// Boundary parse: case-insensitive, synonym-aware, total.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "aggressive" | "rusher" => Self::Aggressive,
            "precise" | "sniper" => Self::Precise,
            "balanced" | "versatile" => Self::Balanced,
            "defensive" => Self::Defensive,
            _ => Self::Unknown,
        }
    }

    pub fn modifier(&self, tuning: &Tuning) -> f32 {
        match self {
            Self::Aggressive => tuning.style_aggressive,
            Self::Precise => tuning.style_precise,
            Self::Balanced => tuning.style_balanced,
            Self::Defensive => tuning.style_defensive,
            Self::Unknown => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Professional,
    Unknown,
}

impl ExperienceLevel {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "beginner" | "novice" => Self::Beginner,
            "intermediate" | "casual" => Self::Intermediate,
            "advanced" | "experienced" => Self::Advanced,
            "professional" | "expert" => Self::Professional,
            _ => Self::Unknown,
        }
    }

    pub fn modifier(&self, tuning: &Tuning) -> f32 {
        match self {
            Self::Beginner => tuning.exp_beginner,
            Self::Intermediate => tuning.exp_intermediate,
            Self::Advanced => tuning.exp_advanced,
            Self::Professional => tuning.exp_professional,
            Self::Unknown => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TierKind {
    Free,
    Vip,
}

/// Which optional pipeline stages are active. The two shipped tiers are
/// values of this struct, not separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorProfile {
    pub tier: TierKind,
    pub ram_factor: bool,
    pub age_factor: bool,
    pub brand_factor: bool,
    pub temporal_ramp: bool,
    /// The free tier's flat/device-keyed boost chain.
    pub device_boosts: bool,
}

impl CalculatorProfile {
    pub fn vip() -> Self {
        Self {
            tier: TierKind::Vip,
            ram_factor: true,
            age_factor: true,
            brand_factor: true,
            temporal_ramp: true,
            device_boosts: false,
        }
    }

    pub fn free() -> Self {
        Self {
            tier: TierKind::Free,
            ram_factor: false,
            age_factor: false,
            brand_factor: false,
            temporal_ramp: false,
            device_boosts: true,
        }
    }

    pub fn for_tier(tier: TierKind) -> Self {
        match tier {
            TierKind::Free => Self::free(),
            TierKind::Vip => Self::vip(),
        }
    }
}

impl Default for CalculatorProfile {
    fn default() -> Self {
        Self::vip()
    }
}
