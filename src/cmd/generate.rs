use crate::reports;
use aimforge::calculator::{Calculator, OptimizationContext};
use aimforge::catalog::DeviceCatalog;
use aimforge::config::Config;
use aimforge::profile::{CalculatorProfile, ExperienceLevel, PlayStyle, TierKind};
use aimforge::store::FileTimestampStore;
use aimforge::util::stable_key;
use clap::Args;
use std::path::Path;
use std::process;
use tracing::{error, info, warn};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Device name; fuzzy-matched against the catalog.
    #[arg(short = 'D', long)]
    pub device: String,

    #[arg(short, long, default_value = "balanced")]
    pub style: String,

    #[arg(short, long, default_value = "intermediate")]
    pub experience: String,

    /// "vip"/"premium" or "free".
    #[arg(short, long, default_value = "vip")]
    pub tier: String,

    /// Identity the optimization ramp is tracked under.
    #[arg(short, long, default_value = "local")]
    pub user: String,

    /// Emit the full breakdown as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(
    args: GenerateArgs,
    catalog: &DeviceCatalog,
    config: Config,
    data_dir: &str,
    debug: bool,
) {
    let device = match catalog.resolve(&args.device) {
        Some(d) => d.clone(),
        None => {
            error!("❌ Device not found: '{}'", args.device);
            let hits = catalog.search(&args.device);
            if !hits.is_empty() {
                for hit in hits {
                    info!("   Did you mean: {}", hit.name);
                }
            }
            process::exit(1);
        }
    };
    if !device.name.eq_ignore_ascii_case(args.device.trim()) {
        info!("🔍 Resolved '{}' to '{}'", args.device, device.name);
    }

    let play_style = PlayStyle::parse(&args.style);
    if play_style == PlayStyle::Unknown {
        warn!("⚠️  Unrecognized play style '{}'. Using a neutral modifier.", args.style);
    }
    let experience = ExperienceLevel::parse(&args.experience);
    if experience == ExperienceLevel::Unknown {
        warn!("⚠️  Unrecognized experience '{}'. Using a neutral modifier.", args.experience);
    }

    let tier = match args.tier.trim().to_lowercase().as_str() {
        "vip" | "premium" => TierKind::Vip,
        _ => TierKind::Free,
    };
    let profile = CalculatorProfile::for_tier(tier);
    let calculator = Calculator::from_config(profile, config);

    let temporal_factor = if profile.temporal_ramp {
        let store_path = Path::new(data_dir).join(format!("{}.json", stable_key(&args.user)));
        let mut context = OptimizationContext::new(FileTimestampStore::new(store_path));
        context.factor_now()
    } else {
        1.0
    };

    let detail = calculator.calculate_detailed(&device, play_style, experience, temporal_factor);

    if args.json {
        match serde_json::to_string_pretty(&detail) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("❌ Could not serialize result: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    reports::print_settings_report(&detail);
    if debug {
        reports::print_breakdown_report(&detail);
    }
}
