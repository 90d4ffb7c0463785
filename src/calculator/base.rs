// ===== aimforge/src/calculator/base.rs =====
//
// Base value estimation. Every function here is total: bad numeric
// input saturates or falls back to a neutral factor, it never errors.

use crate::config::Tuning;
use crate::consts::{
    COMPLEX_CPU_HIGH_CUTOFF, COMPLEX_CPU_LOW_CUTOFF, COMPLEX_SCREEN_LARGE_IN,
    COMPLEX_SCREEN_SMALL_IN, FREE_PERF_HIGH_CUTOFF, FREE_PERF_LOW_CUTOFF, FREE_PERF_MID_CUTOFF,
};
use crate::device::{performance_score, saturate_score, DeviceBucket, DeviceInfo};
use crate::profile::CalculatorProfile;

/// Larger screens are harder to reach across: one decay step per
/// half-inch above the pivot.
#[inline(always)]
pub fn screen_size_factor(tuning: &Tuning, screen_in: f32) -> f32 {
    let steps = ((screen_in - tuning.screen_pivot_in) / tuning.screen_step_in).max(0.0);
    if !steps.is_finite() {
        return 1.0;
    }
    tuning.screen_decay.powf(steps)
}

/// Logarithmic reward for refresh rates above the 60Hz baseline. The
/// floor also guards the log argument against a zero rate.
#[inline(always)]
pub fn refresh_rate_factor(tuning: &Tuning, refresh_hz: u32) -> f32 {
    let hz = (refresh_hz as f32).max(tuning.refresh_floor_hz);
    let factor = 1.0 + tuning.refresh_log_weight * (hz / tuning.refresh_floor_hz).log10();
    if !factor.is_finite() {
        return 1.0;
    }
    factor
}

/// Compounding reward for RAM above the pivot, capped. Absent RAM is a
/// neutral 1.0, not an error.
#[inline(always)]
pub fn ram_factor(tuning: &Tuning, ram_gb: Option<f32>) -> f32 {
    let Some(ram) = ram_gb else {
        return 1.0;
    };
    if !ram.is_finite() {
        return 1.0;
    }
    let above_pivot = (ram - tuning.ram_pivot_gb).max(0.0);
    tuning.ram_growth.powf(above_pivot).min(tuning.ram_cap)
}

/// Compounding reward for newer devices, capped at five years.
#[inline(always)]
pub fn age_factor(tuning: &Tuning, release_year: Option<i32>) -> f32 {
    let Some(year) = release_year else {
        return 1.0;
    };
    let span = year
        .saturating_sub(tuning.age_base_year)
        .clamp(0, tuning.age_cap_years);
    tuning.age_growth.powf(span as f32)
}

/// Five-tier step over the mean sub-score. The tiers are disjoint:
/// the top cutoff is checked before the high one.
#[inline(always)]
pub fn performance_factor(tuning: &Tuning, mean_score: f32) -> f32 {
    let cutoffs = tuning.get_perf_step_cutoffs();
    let factors = tuning.get_perf_step_factors();

    if mean_score < cutoffs[0] {
        factors[0]
    } else if mean_score < cutoffs[1] {
        factors[1]
    } else if mean_score > cutoffs[3] {
        factors[3]
    } else if mean_score > cutoffs[2] {
        factors[2]
    } else {
        1.0
    }
}

/// Fixed per-bucket multiplier (VIP pipeline only).
#[inline(always)]
pub fn brand_factor(tuning: &Tuning, bucket: DeviceBucket) -> f32 {
    match bucket {
        DeviceBucket::Samsung => tuning.brand_samsung,
        DeviceBucket::Google => tuning.brand_google,
        DeviceBucket::OnePlus => tuning.brand_oneplus,
        DeviceBucket::Asus => tuning.brand_asus,
        DeviceBucket::Xiaomi | DeviceBucket::Oppo | DeviceBucket::Vivo => {
            tuning.brand_conservative
        }
        _ => 1.0,
    }
}

/// Apple hardware skips the factor pipeline entirely: tablets, pro
/// phones (by name or top-tier processor), and standard phones each
/// map to one shipped constant.
pub fn apple_base(tuning: &Tuning, device: &DeviceInfo) -> f32 {
    let name = device.name.to_lowercase();
    if name.contains("ipad") {
        return tuning.apple_base_tablet;
    }
    if name.contains("pro") || saturate_score(device.processor_score) > tuning.pro_processor_cutoff
    {
        return tuning.apple_base_pro;
    }
    tuning.apple_base_standard
}

/// Composes the active factors on the nominal base, rounds, clamps.
pub fn device_base(
    tuning: &Tuning,
    profile: &CalculatorProfile,
    device: &DeviceInfo,
    bucket: DeviceBucket,
) -> f32 {
    if bucket == DeviceBucket::Apple {
        return apple_base(tuning, device);
    }

    let mut value = tuning.nominal_base
        * screen_size_factor(tuning, device.screen_size)
        * refresh_rate_factor(tuning, device.refresh_rate);

    if profile.ram_factor {
        value *= ram_factor(tuning, device.ram);
    }
    if profile.age_factor {
        value *= age_factor(tuning, device.release_year);
    }

    value *= performance_factor(tuning, performance_score(device));

    if profile.brand_factor {
        value *= brand_factor(tuning, bucket);
    }

    if !value.is_finite() {
        value = tuning.nominal_base;
    }

    let floor = if profile.brand_factor && bucket == DeviceBucket::Asus {
        tuning.base_floor_gaming
    } else {
        tuning.base_floor
    };
    value.round().clamp(floor, tuning.base_ceiling)
}

/// The free tier's boost chain, applied to the composed general value
/// instead of the per-factor pipeline.
pub fn device_boosts(tuning: &Tuning, device: &DeviceInfo, bucket: DeviceBucket) -> f32 {
    tuning.free_flat_boost
        * optimization_boost(tuning, device, bucket)
        * coarse_brand_boost(tuning, device)
        * complex_boost(tuning, device)
}

fn optimization_boost(tuning: &Tuning, device: &DeviceInfo, bucket: DeviceBucket) -> f32 {
    let mut factor = 1.0;
    if bucket == DeviceBucket::Apple {
        factor *= tuning.free_apple_boost;
    }

    let mean = performance_score(device);
    if mean > FREE_PERF_HIGH_CUTOFF {
        factor *= tuning.free_perf_high_boost;
    } else if mean > FREE_PERF_MID_CUTOFF {
        factor *= tuning.free_perf_mid_boost;
    } else if mean < FREE_PERF_LOW_CUTOFF {
        factor *= tuning.free_perf_low_penalty;
    }
    factor
}

// Cruder than the bucket table: matches tokens against the name and
// brand strings directly. First match wins, in the shipped order; the
// gaming arm is name-only.
fn coarse_brand_boost(tuning: &Tuning, device: &DeviceInfo) -> f32 {
    let name = device.name.to_lowercase();
    let brand = device.brand.as_deref().unwrap_or("").to_lowercase();
    if name.contains("samsung") || brand.contains("samsung") {
        tuning.free_brand_samsung
    } else if name.contains("google") || name.contains("pixel") || brand.contains("google") {
        tuning.free_brand_google
    } else if name.contains("oneplus") || brand.contains("oneplus") {
        tuning.free_brand_oneplus
    } else if name.contains("rog")
        || name.contains("gaming")
        || name.contains("redmagic")
        || name.contains("black shark")
    {
        tuning.free_brand_gaming
    } else {
        1.0
    }
}

fn complex_boost(tuning: &Tuning, device: &DeviceInfo) -> f32 {
    let mut factor = 1.0;

    let cpu = saturate_score(device.processor_score);
    if cpu > COMPLEX_CPU_HIGH_CUTOFF {
        factor *= tuning.complex_cpu_bonus;
    } else if cpu < COMPLEX_CPU_LOW_CUTOFF {
        factor *= tuning.complex_cpu_penalty;
    }

    // NaN screen sizes fail both comparisons and stay neutral.
    if device.screen_size > COMPLEX_SCREEN_LARGE_IN {
        factor *= tuning.complex_screen_bonus;
    } else if device.screen_size < COMPLEX_SCREEN_SMALL_IN {
        factor *= tuning.complex_screen_penalty;
    }
    factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::classify_device;

    fn tuning() -> Tuning {
        Tuning::default()
    }

    fn device(name: &str, screen: f32, refresh: u32, cpu: f32, gpu: f32) -> DeviceInfo {
        DeviceInfo {
            name: name.to_string(),
            screen_size: screen,
            refresh_rate: refresh,
            processor_score: cpu,
            gpu_score: gpu,
            ..Default::default()
        }
    }

    #[test]
    fn test_screen_factor_neutral_at_pivot() {
        let t = tuning();
        assert_eq!(screen_size_factor(&t, 6.0), 1.0);
        assert_eq!(screen_size_factor(&t, 5.0), 1.0);
    }

    #[test]
    fn test_screen_factor_decays_per_half_inch() {
        let t = tuning();
        assert!((screen_size_factor(&t, 6.5) - 0.98).abs() < 1e-6);
        assert!((screen_size_factor(&t, 7.0) - 0.9604).abs() < 1e-4);
    }

    #[test]
    fn test_refresh_factor_floored_at_baseline() {
        let t = tuning();
        assert_eq!(refresh_rate_factor(&t, 60), 1.0);
        assert_eq!(refresh_rate_factor(&t, 30), 1.0);
        assert_eq!(refresh_rate_factor(&t, 0), 1.0);
    }

    #[test]
    fn test_refresh_factor_logarithmic() {
        let t = tuning();
        // 120Hz: 1 + 0.15 * log10(2)
        assert!((refresh_rate_factor(&t, 120) - 1.04515).abs() < 1e-4);
        // growth tapers: tripling the baseline gains less than twice
        // the doubling bonus
        let f120 = refresh_rate_factor(&t, 120) - 1.0;
        let f180 = refresh_rate_factor(&t, 180) - 1.0;
        assert!(f180 < 2.0 * f120);
    }

    #[test]
    fn test_ram_factor_neutral_when_absent_or_low() {
        let t = tuning();
        assert_eq!(ram_factor(&t, None), 1.0);
        assert_eq!(ram_factor(&t, Some(4.0)), 1.0);
        assert_eq!(ram_factor(&t, Some(2.0)), 1.0);
    }

    #[test]
    fn test_ram_factor_compounds_and_caps() {
        let t = tuning();
        assert!((ram_factor(&t, Some(8.0)) - 1.1255).abs() < 1e-3);
        assert_eq!(ram_factor(&t, Some(32.0)), 1.15);
    }

    #[test]
    fn test_age_factor_clamps_span() {
        let t = tuning();
        assert_eq!(age_factor(&t, None), 1.0);
        assert_eq!(age_factor(&t, Some(2020)), 1.0);
        assert_eq!(age_factor(&t, Some(2018)), 1.0);
        let capped = age_factor(&t, Some(2030));
        assert_eq!(capped, age_factor(&t, Some(2025)));
        assert!((capped - 1.02f32.powi(5)).abs() < 1e-6);
    }

    #[test]
    fn test_performance_factor_tiers() {
        let t = tuning();
        assert_eq!(performance_factor(&t, 50.0), 0.95);
        assert_eq!(performance_factor(&t, 65.0), 0.98);
        assert_eq!(performance_factor(&t, 75.0), 1.0);
        assert_eq!(performance_factor(&t, 85.0), 1.0);
        assert_eq!(performance_factor(&t, 90.0), 1.05);
        assert_eq!(performance_factor(&t, 95.0), 1.05);
        // the top tier is reachable
        assert_eq!(performance_factor(&t, 98.0), 1.08);
    }

    #[test]
    fn test_brand_factors() {
        let t = tuning();
        assert_eq!(brand_factor(&t, DeviceBucket::Samsung), 1.02);
        assert_eq!(brand_factor(&t, DeviceBucket::Asus), 1.05);
        assert_eq!(brand_factor(&t, DeviceBucket::Xiaomi), 0.99);
        assert_eq!(brand_factor(&t, DeviceBucket::Sony), 1.0);
        assert_eq!(brand_factor(&t, DeviceBucket::Android), 1.0);
    }

    #[test]
    fn test_apple_base_constants() {
        let t = tuning();
        assert_eq!(apple_base(&t, &device("iPad Pro 12.9", 12.9, 120, 99.0, 98.0)), 155.0);
        assert_eq!(apple_base(&t, &device("iPhone 15 Pro", 6.1, 120, 98.0, 97.0)), 175.0);
        // top-tier processor lands in the pro bucket without the name
        assert_eq!(apple_base(&t, &device("iPhone 16", 6.1, 60, 97.0, 90.0)), 175.0);
        assert_eq!(apple_base(&t, &device("iPhone 13", 6.1, 60, 88.0, 86.0)), 171.0);
    }

    #[test]
    fn test_device_base_clamps_both_ends() {
        let t = tuning();
        let vip = CalculatorProfile::vip();

        let mut monster = device("Samsung Hyper", 5.0, 240, 100.0, 100.0);
        monster.ram = Some(24.0);
        monster.release_year = Some(2025);
        let bucket = classify_device(&monster);
        assert_eq!(device_base(&t, &vip, &monster, bucket), 185.0);

        let weak = device("No Name Slab", 12.0, 60, 20.0, 20.0);
        let bucket = classify_device(&weak);
        assert_eq!(device_base(&t, &vip, &weak, bucket), 150.0);
    }

    #[test]
    fn test_asus_floor_only_with_brand_stage() {
        let t = tuning();
        let weak_rog = device("Asus ROG Phone (worn)", 12.0, 60, 20.0, 20.0);
        let bucket = classify_device(&weak_rog);
        assert_eq!(bucket, DeviceBucket::Asus);

        assert_eq!(
            device_base(&t, &CalculatorProfile::vip(), &weak_rog, bucket),
            160.0
        );
        assert_eq!(
            device_base(&t, &CalculatorProfile::free(), &weak_rog, bucket),
            150.0
        );
    }

    #[test]
    fn test_free_boost_chain() {
        let t = tuning();
        // budget generic device: flat boost and low-perf penalty only
        let budget = device("Plain Phone", 6.0, 60, 40.0, 40.0);
        let boost = device_boosts(&t, &budget, classify_device(&budget));
        assert!((boost - 1.05 * 0.95).abs() < 1e-5);

        // apple flagship: flat, apple, high-perf, complex cpu bonus
        let iphone = device("iPhone 15 Pro Max", 6.7, 120, 98.0, 97.0);
        let boost = device_boosts(&t, &iphone, classify_device(&iphone));
        let expected = 1.05 * (1.03 * 1.08) * 1.0 * (1.05 * 1.02);
        assert!((boost - expected).abs() < 1e-5);
    }

    #[test]
    fn test_coarse_brand_boost_order() {
        let t = tuning();
        // "samsung" wins before the gaming tokens
        let d = device("Samsung Gaming Edition", 6.5, 120, 80.0, 80.0);
        assert_eq!(coarse_brand_boost(&t, &d), 1.02);

        let rog = device("ROG Phone 8", 6.78, 165, 98.0, 97.0);
        assert_eq!(coarse_brand_boost(&t, &rog), 1.06);
    }

    #[test]
    fn test_coarse_brand_boost_reads_brand_field() {
        let t = tuning();
        let mut d = device("Galaxy S24", 6.2, 120, 80.0, 80.0);
        d.brand = Some("Samsung".to_string());
        assert_eq!(coarse_brand_boost(&t, &d), 1.02);

        // gaming arm stays name-keyed
        let mut rog = device("Phone 8", 6.78, 165, 98.0, 97.0);
        rog.brand = Some("ROG".to_string());
        assert_eq!(coarse_brand_boost(&t, &rog), 1.0);
    }

    #[test]
    fn test_age_factor_survives_extreme_years() {
        let t = tuning();
        assert_eq!(age_factor(&t, Some(i32::MIN)), 1.0);
        assert_eq!(age_factor(&t, Some(i32::MAX)), age_factor(&t, Some(2025)));
    }

    #[test]
    fn test_non_finite_inputs_saturate() {
        let t = tuning();
        let vip = CalculatorProfile::vip();
        let mut bad = device("Corrupt Row", f32::NAN, 120, f32::INFINITY, -1.0);
        bad.ram = Some(f32::NAN);
        let bucket = classify_device(&bad);
        let base = device_base(&t, &vip, &bad, bucket);
        assert!(base >= 150.0 && base <= 185.0);
    }
}
