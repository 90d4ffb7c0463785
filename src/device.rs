// ===== aimforge/src/device.rs =====
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::consts::{
    SCORE_SCALE_MAX, TIER_BUDGET_CUTOFF, TIER_HIGH_END_CUTOFF, TIER_MID_RANGE_CUTOFF,
};

/// A device record as supplied by the catalog (or built inline).
/// Missing RAM / release year are valid states, not errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub screen_size: f32,
    pub refresh_rate: u32,
    #[serde(default)]
    pub touch_sampling_rate: u32,
    pub processor_score: f32,
    pub gpu_score: f32,
    #[serde(default)]
    pub ram: Option<f32>,
    #[serde(default)]
    pub release_year: Option<i32>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeviceBucket {
    Apple,
    Samsung,
    Google,
    OnePlus,
    Xiaomi,
    Oppo,
    Vivo,
    Huawei,
    Realme,
    Asus,
    Sony,
    /// Generic fallback for anything unrecognized.
    Android,
}

// Scan order matters: first match against brand or name wins.
const ANDROID_BRANDS: [(&str, DeviceBucket); 10] = [
    ("samsung", DeviceBucket::Samsung),
    ("google", DeviceBucket::Google),
    ("oneplus", DeviceBucket::OnePlus),
    ("xiaomi", DeviceBucket::Xiaomi),
    ("oppo", DeviceBucket::Oppo),
    ("vivo", DeviceBucket::Vivo),
    ("huawei", DeviceBucket::Huawei),
    ("realme", DeviceBucket::Realme),
    ("asus", DeviceBucket::Asus),
    ("sony", DeviceBucket::Sony),
];

/// Total classification: platform beats brand string, and absence of a
/// match is the generic android bucket, never an error.
pub fn classify_device(device: &DeviceInfo) -> DeviceBucket {
    let brand = device.brand.as_deref().unwrap_or("").to_lowercase();
    let name = device.name.to_lowercase();

    if brand == "apple" || name.contains("iphone") || name.contains("ipad") {
        return DeviceBucket::Apple;
    }

    for (token, bucket) in ANDROID_BRANDS.iter() {
        if brand.contains(token) || name.contains(token) {
            return *bucket;
        }
    }

    DeviceBucket::Android
}

/// Saturate a sub-score into [0, 100]. Non-finite input (bad catalog
/// data) collapses to 0 rather than poisoning downstream powers/logs.
#[inline(always)]
pub fn saturate_score(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, SCORE_SCALE_MAX)
}

/// Mean of the saturated processor/GPU sub-scores.
#[inline(always)]
pub fn performance_score(device: &DeviceInfo) -> f32 {
    (saturate_score(device.processor_score) + saturate_score(device.gpu_score)) / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceTier {
    Budget,
    MidRange,
    HighEnd,
    Flagship,
}

pub fn performance_tier(device: &DeviceInfo) -> PerformanceTier {
    let score = performance_score(device);
    if score < TIER_BUDGET_CUTOFF {
        PerformanceTier::Budget
    } else if score < TIER_MID_RANGE_CUTOFF {
        PerformanceTier::MidRange
    } else if score < TIER_HIGH_END_CUTOFF {
        PerformanceTier::HighEnd
    } else {
        PerformanceTier::Flagship
    }
}

/// Weighted 0-100 composite used for catalog ranking. Screen is
/// normalized against 7in, refresh against 120Hz, touch sampling
/// against 240Hz; each term saturates at 100 before weighting.
pub fn device_score(device: &DeviceInfo) -> u32 {
    const W_SCREEN: f32 = 0.15;
    const W_REFRESH: f32 = 0.25;
    const W_TOUCH: f32 = 0.20;
    const W_CPU: f32 = 0.20;
    const W_GPU: f32 = 0.20;

    let screen = saturate_score(device.screen_size / 7.0 * 100.0) * W_SCREEN;
    let refresh = saturate_score(device.refresh_rate as f32 / 120.0 * 100.0) * W_REFRESH;
    let touch = saturate_score(device.touch_sampling_rate as f32 / 240.0 * 100.0) * W_TOUCH;
    let cpu = saturate_score(device.processor_score) * W_CPU;
    let gpu = saturate_score(device.gpu_score) * W_GPU;

    (screen + refresh + touch + cpu + gpu).round() as u32
}
