use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub tuning: Tuning,
    #[command(flatten)]
    pub ratios: RatioTables,
}

/// Every tuned multiplier in the pipeline. The defaults are the shipped
/// product values; a JSON weights file and explicit CLI flags layer on top.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === BASE VALUE ===
    #[arg(long, default_value_t = 165.0)]
    pub nominal_base: f32,
    #[arg(long, default_value_t = 150.0)]
    pub base_floor: f32,

    // Gaming-line asus hardware tolerates a tighter bottom end.
    #[arg(long, default_value_t = 160.0)]
    pub base_floor_gaming: f32,

    #[arg(long, default_value_t = 185.0)]
    pub base_ceiling: f32,

    #[arg(long, default_value_t = 155.0)]
    pub apple_base_tablet: f32,
    #[arg(long, default_value_t = 175.0)]
    pub apple_base_pro: f32,
    #[arg(long, default_value_t = 171.0)]
    pub apple_base_standard: f32,

    // Unnamed "pro" hardware still lands in the pro bucket above this
    // processor score.
    #[arg(long, default_value_t = 95.0)]
    pub pro_processor_cutoff: f32,

    // === HARDWARE FACTORS ===
    #[arg(long, default_value_t = 6.0)]
    pub screen_pivot_in: f32,
    #[arg(long, default_value_t = 0.5)]
    pub screen_step_in: f32,
    #[arg(long, default_value_t = 0.98)]
    pub screen_decay: f32,

    #[arg(long, default_value_t = 60.0)]
    pub refresh_floor_hz: f32,
    #[arg(long, default_value_t = 0.15)]
    pub refresh_log_weight: f32,

    #[arg(long, default_value_t = 4.0)]
    pub ram_pivot_gb: f32,
    #[arg(long, default_value_t = 1.03)]
    pub ram_growth: f32,
    #[arg(long, default_value_t = 1.15)]
    pub ram_cap: f32,

    #[arg(long, default_value_t = 2020)]
    pub age_base_year: i32,
    #[arg(long, default_value_t = 1.02)]
    pub age_growth: f32,
    #[arg(long, default_value_t = 5)]
    pub age_cap_years: i32,

    // Step function over mean(cpu, gpu): factors apply below the first
    // two cutoffs and above the last two, neutral in between.
    #[arg(long, default_value = "60,70,85,95")]
    pub perf_step_cutoffs: String,
    #[arg(long, default_value = "0.95,0.98,1.05,1.08")]
    pub perf_step_factors: String,

    // === BRAND (VIP PIPELINE) ===
    #[arg(long, default_value_t = 1.02)]
    pub brand_samsung: f32,
    #[arg(long, default_value_t = 1.03)]
    pub brand_google: f32,
    #[arg(long, default_value_t = 1.04)]
    pub brand_oneplus: f32,
    #[arg(long, default_value_t = 1.05)]
    pub brand_asus: f32,

    // xiaomi / oppo / vivo ship hot default curves; pull them back.
    #[arg(long, default_value_t = 0.99)]
    pub brand_conservative: f32,

    // === PLAY STYLE ===
    #[arg(long, default_value_t = 1.12)]
    pub style_aggressive: f32,
    #[arg(long, default_value_t = 0.88)]
    pub style_precise: f32,
    #[arg(long, default_value_t = 1.0)]
    pub style_balanced: f32,
    #[arg(long, default_value_t = 0.94)]
    pub style_defensive: f32,

    // === EXPERIENCE ===
    #[arg(long, default_value_t = 0.92)]
    pub exp_beginner: f32,
    #[arg(long, default_value_t = 0.98)]
    pub exp_intermediate: f32,
    #[arg(long, default_value_t = 1.08)]
    pub exp_advanced: f32,
    #[arg(long, default_value_t = 1.12)]
    pub exp_professional: f32,

    // === FREE TIER ===
    #[arg(long, default_value_t = 1.05)]
    pub free_flat_boost: f32,
    #[arg(long, default_value_t = 1.03)]
    pub free_apple_boost: f32,
    #[arg(long, default_value_t = 1.08)]
    pub free_perf_high_boost: f32,
    #[arg(long, default_value_t = 1.05)]
    pub free_perf_mid_boost: f32,
    #[arg(long, default_value_t = 0.95)]
    pub free_perf_low_penalty: f32,

    #[arg(long, default_value_t = 1.02)]
    pub free_brand_samsung: f32,
    #[arg(long, default_value_t = 1.03)]
    pub free_brand_google: f32,
    #[arg(long, default_value_t = 1.04)]
    pub free_brand_oneplus: f32,
    #[arg(long, default_value_t = 1.06)]
    pub free_brand_gaming: f32,

    #[arg(long, default_value_t = 1.05)]
    pub complex_cpu_bonus: f32,
    #[arg(long, default_value_t = 0.92)]
    pub complex_cpu_penalty: f32,
    #[arg(long, default_value_t = 1.02)]
    pub complex_screen_bonus: f32,
    #[arg(long, default_value_t = 0.98)]
    pub complex_screen_penalty: f32,

    // === TIERING ===
    #[arg(long, default_value_t = 85.0)]
    pub high_end_cutoff: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            nominal_base: 165.0,
            base_floor: 150.0,
            base_floor_gaming: 160.0,
            base_ceiling: 185.0,
            apple_base_tablet: 155.0,
            apple_base_pro: 175.0,
            apple_base_standard: 171.0,
            pro_processor_cutoff: 95.0,

            screen_pivot_in: 6.0,
            screen_step_in: 0.5,
            screen_decay: 0.98,
            refresh_floor_hz: 60.0,
            refresh_log_weight: 0.15,
            ram_pivot_gb: 4.0,
            ram_growth: 1.03,
            ram_cap: 1.15,
            age_base_year: 2020,
            age_growth: 1.02,
            age_cap_years: 5,
            perf_step_cutoffs: "60,70,85,95".to_string(),
            perf_step_factors: "0.95,0.98,1.05,1.08".to_string(),

            brand_samsung: 1.02,
            brand_google: 1.03,
            brand_oneplus: 1.04,
            brand_asus: 1.05,
            brand_conservative: 0.99,

            style_aggressive: 1.12,
            style_precise: 0.88,
            style_balanced: 1.0,
            style_defensive: 0.94,

            exp_beginner: 0.92,
            exp_intermediate: 0.98,
            exp_advanced: 1.08,
            exp_professional: 1.12,

            free_flat_boost: 1.05,
            free_apple_boost: 1.03,
            free_perf_high_boost: 1.08,
            free_perf_mid_boost: 1.05,
            free_perf_low_penalty: 0.95,
            free_brand_samsung: 1.02,
            free_brand_google: 1.03,
            free_brand_oneplus: 1.04,
            free_brand_gaming: 1.06,
            complex_cpu_bonus: 1.05,
            complex_cpu_penalty: 0.92,
            complex_screen_bonus: 1.02,
            complex_screen_penalty: 0.98,

            high_end_cutoff: 85.0,
        }
    }
}

/// Per-sight derivation ratios and clamp ranges.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatioTables {
    // redDot, scope2x, scope4x, sniperScope, freeLook
    #[arg(long, default_value = "0.65,0.55,0.40,0.30,0.50")]
    pub ratios_default: String,
    #[arg(long, default_value = "0.62,0.52,0.38,0.28,0.48")]
    pub ratios_high_end: String,
    #[arg(long, default_value = "0.68,0.58,0.42,0.32,0.52")]
    pub ratios_apple: String,

    #[arg(long, default_value = "30,25,20,15,25")]
    pub sight_floors: String,

    #[arg(long, default_value_t = 50.0)]
    pub general_floor: f32,
    #[arg(long, default_value_t = 200.0)]
    pub general_ceiling: f32,
    #[arg(long, default_value_t = 200.0)]
    pub sight_ceiling: f32,
}

impl Default for RatioTables {
    fn default() -> Self {
        Self {
            ratios_default: "0.65,0.55,0.40,0.30,0.50".to_string(),
            ratios_high_end: "0.62,0.52,0.38,0.28,0.48".to_string(),
            ratios_apple: "0.68,0.58,0.42,0.32,0.52".to_string(),
            sight_floors: "30,25,20,15,25".to_string(),
            general_floor: 50.0,
            general_ceiling: 200.0,
            sight_ceiling: 200.0,
        }
    }
}

impl Tuning {
    pub fn get_perf_step_cutoffs(&self) -> [f32; 4] {
        parse_f32_array::<4>(&self.perf_step_cutoffs, "perf_step_cutoffs")
    }

    pub fn get_perf_step_factors(&self) -> [f32; 4] {
        parse_f32_array::<4>(&self.perf_step_factors, "perf_step_factors")
    }

    #[inline(always)]
    pub fn is_high_end(&self, mean_score: f32) -> bool {
        mean_score > self.high_end_cutoff
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("❌ Failed to read weights file: {}", e));

        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("❌ Failed to parse weights JSON: {}", e))
    }

    pub fn merge_from_cli(&mut self, cli_tuning: &Tuning, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_tuning.$field.clone();
                }
            };
        }

        update_if_present!(nominal_base, "nominal_base");
        update_if_present!(base_floor, "base_floor");
        update_if_present!(base_floor_gaming, "base_floor_gaming");
        update_if_present!(base_ceiling, "base_ceiling");
        update_if_present!(apple_base_tablet, "apple_base_tablet");
        update_if_present!(apple_base_pro, "apple_base_pro");
        update_if_present!(apple_base_standard, "apple_base_standard");
        update_if_present!(pro_processor_cutoff, "pro_processor_cutoff");

        update_if_present!(screen_pivot_in, "screen_pivot_in");
        update_if_present!(screen_step_in, "screen_step_in");
        update_if_present!(screen_decay, "screen_decay");
        update_if_present!(refresh_floor_hz, "refresh_floor_hz");
        update_if_present!(refresh_log_weight, "refresh_log_weight");
        update_if_present!(ram_pivot_gb, "ram_pivot_gb");
        update_if_present!(ram_growth, "ram_growth");
        update_if_present!(ram_cap, "ram_cap");
        update_if_present!(age_base_year, "age_base_year");
        update_if_present!(age_growth, "age_growth");
        update_if_present!(age_cap_years, "age_cap_years");
        update_if_present!(perf_step_cutoffs, "perf_step_cutoffs");
        update_if_present!(perf_step_factors, "perf_step_factors");

        update_if_present!(brand_samsung, "brand_samsung");
        update_if_present!(brand_google, "brand_google");
        update_if_present!(brand_oneplus, "brand_oneplus");
        update_if_present!(brand_asus, "brand_asus");
        update_if_present!(brand_conservative, "brand_conservative");

        update_if_present!(style_aggressive, "style_aggressive");
        update_if_present!(style_precise, "style_precise");
        update_if_present!(style_balanced, "style_balanced");
        update_if_present!(style_defensive, "style_defensive");

        update_if_present!(exp_beginner, "exp_beginner");
        update_if_present!(exp_intermediate, "exp_intermediate");
        update_if_present!(exp_advanced, "exp_advanced");
        update_if_present!(exp_professional, "exp_professional");

        update_if_present!(free_flat_boost, "free_flat_boost");
        update_if_present!(free_apple_boost, "free_apple_boost");
        update_if_present!(free_perf_high_boost, "free_perf_high_boost");
        update_if_present!(free_perf_mid_boost, "free_perf_mid_boost");
        update_if_present!(free_perf_low_penalty, "free_perf_low_penalty");
        update_if_present!(free_brand_samsung, "free_brand_samsung");
        update_if_present!(free_brand_google, "free_brand_google");
        update_if_present!(free_brand_oneplus, "free_brand_oneplus");
        update_if_present!(free_brand_gaming, "free_brand_gaming");
        update_if_present!(complex_cpu_bonus, "complex_cpu_bonus");
        update_if_present!(complex_cpu_penalty, "complex_cpu_penalty");
        update_if_present!(complex_screen_bonus, "complex_screen_bonus");
        update_if_present!(complex_screen_penalty, "complex_screen_penalty");

        update_if_present!(high_end_cutoff, "high_end_cutoff");
    }
}

impl RatioTables {
    pub fn get_default_ratios(&self) -> [f32; 5] {
        parse_f32_array::<5>(&self.ratios_default, "ratios_default")
    }

    pub fn get_high_end_ratios(&self) -> [f32; 5] {
        parse_f32_array::<5>(&self.ratios_high_end, "ratios_high_end")
    }

    pub fn get_apple_ratios(&self) -> [f32; 5] {
        parse_f32_array::<5>(&self.ratios_apple, "ratios_apple")
    }

    pub fn get_sight_floors(&self) -> [f32; 5] {
        parse_f32_array::<5>(&self.sight_floors, "sight_floors")
    }
}

fn parse_f32_array<const N: usize>(s: &str, name: &str) -> [f32; N] {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != N {
        panic!("--{} requires {} values", name, N);
    }
    let mut arr = [0.0; N];
    for (i, p) in parts.iter().enumerate() {
        arr[i] = p
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("Invalid number in {}", name));
    }
    arr
}
