use crate::reports;
use aimforge::calculator::{CalculationBreakdown, Calculator};
use aimforge::catalog::DeviceCatalog;
use aimforge::config::Config;
use aimforge::device::DeviceInfo;
use aimforge::profile::{CalculatorProfile, ExperienceLevel, PlayStyle, TierKind};
use clap::Args;
use rayon::prelude::*;

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, default_value = "balanced")]
    pub style: String,

    #[arg(short, long, default_value = "intermediate")]
    pub experience: String,

    #[arg(short, long, default_value = "vip")]
    pub tier: String,

    /// Substring filter on device names.
    #[arg(long)]
    pub filter: Option<String>,
}

/// Runs every catalog device through one profile, ramp-neutral, and
/// prints the spread. Useful after retuning weights.
pub fn run(args: AuditArgs, catalog: &DeviceCatalog, config: Config) {
    let devices: Vec<&DeviceInfo> = match &args.filter {
        Some(filter) => catalog.search(filter),
        None => catalog.devices().iter().collect(),
    };

    if devices.is_empty() {
        println!("No devices found matching criteria.");
        return;
    }

    let play_style = PlayStyle::parse(&args.style);
    let experience = ExperienceLevel::parse(&args.experience);
    let tier = match args.tier.trim().to_lowercase().as_str() {
        "vip" | "premium" => TierKind::Vip,
        _ => TierKind::Free,
    };
    let calculator = Calculator::from_config(CalculatorProfile::for_tier(tier), config);

    let mut details: Vec<CalculationBreakdown> = devices
        .par_iter()
        .map(|d| calculator.calculate_detailed(d, play_style, experience, 1.0))
        .collect();

    details.sort_by(|a, b| b.settings.general.cmp(&a.settings.general));

    println!("\n🔎 === SENSITIVITY AUDIT ({} tier) === 🔎", tier);
    reports::print_audit_report(&details);
}
