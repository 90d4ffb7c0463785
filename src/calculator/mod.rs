// ===== aimforge/src/calculator/mod.rs =====
pub mod base;
pub mod bounds;
pub mod optimization;
pub mod ratios;
pub mod types;

pub use self::optimization::OptimizationContext;
pub use self::ratios::{RatioSet, RatioTableKind};
pub use self::types::{CalculationBreakdown, SensitivitySettings, SightKind};

use rayon::prelude::*;
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::config::{Config, RatioTables, Tuning};
use crate::device::{classify_device, performance_score, DeviceInfo};
use crate::profile::{CalculatorProfile, ExperienceLevel, PlayStyle};
use crate::store::TimestampStore;

use self::ratios::{ratio_set, select_ratio_table};

/// The sensitivity pipeline. Stateless and cheap to clone: all tuning
/// lives in the value tables, all session state in the caller-owned
/// [`OptimizationContext`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct Calculator {
    #[builder(default)]
    pub profile: CalculatorProfile,
    #[builder(default)]
    pub tuning: Tuning,
    #[builder(default)]
    pub ratios: RatioTables,
}

impl Calculator {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn from_config(profile: CalculatorProfile, config: Config) -> Self {
        Self::builder()
            .profile(profile)
            .tuning(config.tuning)
            .ratios(config.ratios)
            .build()
    }

    /// Full pipeline for one device, returning just the six sliders.
    pub fn calculate(
        &self,
        device: &DeviceInfo,
        play_style: PlayStyle,
        experience: ExperienceLevel,
        temporal_factor: f32,
    ) -> SensitivitySettings {
        self.calculate_detailed(device, play_style, experience, temporal_factor)
            .settings
    }

    /// Full pipeline with every intermediate factor exposed.
    pub fn calculate_detailed(
        &self,
        device: &DeviceInfo,
        play_style: PlayStyle,
        experience: ExperienceLevel,
        temporal_factor: f32,
    ) -> CalculationBreakdown {
        let bucket = classify_device(device);
        let base_value = base::device_base(&self.tuning, &self.profile, device, bucket);

        let play_style_modifier = play_style.modifier(&self.tuning);
        let experience_modifier = experience.modifier(&self.tuning);

        let optimization_factor = if self.profile.temporal_ramp {
            if temporal_factor.is_finite() {
                temporal_factor
            } else {
                1.0
            }
        } else {
            1.0
        };

        let device_boost = if self.profile.device_boosts {
            base::device_boosts(&self.tuning, device, bucket)
        } else {
            1.0
        };

        let mut general_raw = base_value
            * play_style_modifier
            * experience_modifier
            * optimization_factor
            * device_boost;
        if !general_raw.is_finite() {
            general_raw = self.tuning.nominal_base;
        }

        let high_end = self.tuning.is_high_end(performance_score(device));
        let ratio_table = select_ratio_table(bucket, high_end);
        let set = ratio_set(&self.ratios, ratio_table);
        let settings = bounds::clamp_settings(general_raw, &set, &self.ratios);

        debug!(
            "🎯 {} [{}]: base {:.0}, raw {:.1} → general {} ({} ratios)",
            device.name, bucket, base_value, general_raw, settings.general, ratio_table
        );

        CalculationBreakdown {
            device_name: device.name.clone(),
            bucket,
            tier: self.profile.tier,
            play_style,
            experience,
            base_value,
            play_style_modifier,
            experience_modifier,
            optimization_factor,
            device_boost,
            general_raw,
            high_end,
            ratio_table,
            settings,
        }
    }

    /// Pipeline run that sources the temporal factor from a context.
    /// Profiles without the ramp skip the context (and its store) entirely.
    pub fn calculate_with_context<S: TimestampStore>(
        &self,
        device: &DeviceInfo,
        play_style: PlayStyle,
        experience: ExperienceLevel,
        context: &mut OptimizationContext<S>,
    ) -> SensitivitySettings {
        let temporal_factor = if self.profile.temporal_ramp {
            context.factor_now()
        } else {
            1.0
        };
        self.calculate(device, play_style, experience, temporal_factor)
    }

    /// One profile applied across a device list in parallel.
    pub fn calculate_batch(
        &self,
        devices: &[DeviceInfo],
        play_style: PlayStyle,
        experience: ExperienceLevel,
        temporal_factor: f32,
    ) -> Vec<SensitivitySettings> {
        devices
            .par_iter()
            .map(|d| self.calculate(d, play_style, experience, temporal_factor))
            .collect()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
