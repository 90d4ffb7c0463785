// ===== aimforge/src/api.rs =====
use crate::calculator::{CalculationBreakdown, Calculator, OptimizationContext};
use crate::catalog::DeviceCatalog;
use crate::config::Config;
use crate::device::DeviceInfo;
use crate::profile::{CalculatorProfile, ExperienceLevel, PlayStyle, TierKind};
use crate::store::FileTimestampStore;
use crate::util::stable_key;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// The global state required to run AimForge services.
pub struct AimForgeState {
    pub config: Mutex<Config>,
    pub catalog: Mutex<DeviceCatalog>,
    /// Per-user optimization contexts, keyed by hashed user id. Their
    /// timestamp files live under `data_dir`.
    pub contexts: Mutex<HashMap<String, OptimizationContext<FileTimestampStore>>>,
    pub data_dir: PathBuf,
}

impl AimForgeState {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            config: Mutex::new(Config::default()),
            catalog: Mutex::new(DeviceCatalog::builtin()),
            contexts: Mutex::new(HashMap::new()),
            data_dir: data_dir.into(),
        }
    }
}

impl Default for AimForgeState {
    fn default() -> Self {
        Self::new("data")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub device_name: String,
    pub play_style: String,
    pub experience: String,
    /// "vip" / "premium" select the VIP pipeline; anything else is free.
    #[serde(default)]
    pub tier: Option<String>,
}

fn parse_tier(label: Option<&str>) -> TierKind {
    match label.unwrap_or("free").trim().to_lowercase().as_str() {
        "vip" | "premium" => TierKind::Vip,
        _ => TierKind::Free,
    }
}

/// Service: Run the full pipeline for one user and device.
pub fn calculate_for_user(
    state: &AimForgeState,
    user_id: &str,
    request: CalculationRequest,
) -> Result<CalculationBreakdown, String> {
    let config = state.config.lock().map_err(|e| e.to_string())?.clone();

    let device: DeviceInfo = {
        let catalog = state.catalog.lock().map_err(|e| e.to_string())?;
        let device = catalog
            .resolve(&request.device_name)
            .ok_or(format!("Unknown device: '{}'", request.device_name))?;
        if !device.name.eq_ignore_ascii_case(request.device_name.trim()) {
            println!(
                "API: Resolved '{}' to '{}'",
                request.device_name, device.name
            );
        }
        device.clone()
    };

    let play_style = PlayStyle::parse(&request.play_style);
    let experience = ExperienceLevel::parse(&request.experience);
    let tier = parse_tier(request.tier.as_deref());
    let profile = CalculatorProfile::for_tier(tier);
    let calculator = Calculator::from_config(profile, config);

    let temporal_factor = if profile.temporal_ramp {
        let key = stable_key(user_id);
        let mut contexts = state.contexts.lock().map_err(|e| e.to_string())?;
        let context = contexts.entry(key.clone()).or_insert_with(|| {
            let store_path = state.data_dir.join(format!("{}.json", key));
            OptimizationContext::new(FileTimestampStore::new(store_path))
        });
        context.factor_now()
    } else {
        1.0
    };

    Ok(calculator.calculate_detailed(&device, play_style, experience, temporal_factor))
}

/// Service: Clear a user's optimization history (cache and durable
/// timestamp). Their ramp restarts at day zero.
pub fn reset_user(state: &AimForgeState, user_id: &str) -> Result<String, String> {
    let key = stable_key(user_id);
    let mut contexts = state.contexts.lock().map_err(|e| e.to_string())?;
    let context = contexts.entry(key.clone()).or_insert_with(|| {
        let store_path = state.data_dir.join(format!("{}.json", key));
        OptimizationContext::new(FileTimestampStore::new(store_path))
    });
    context.reset();
    Ok("Optimization history cleared".to_string())
}

/// Service: Name search over the active catalog.
pub fn search_devices(state: &AimForgeState, query: &str) -> Result<Vec<DeviceInfo>, String> {
    let catalog = state.catalog.lock().map_err(|e| e.to_string())?;
    Ok(catalog.search(query).into_iter().cloned().collect())
}

/// Service: Swap in a catalog loaded from a CSV file.
pub fn load_catalog(state: &AimForgeState, path: &str) -> Result<String, String> {
    let loaded = DeviceCatalog::load_csv(path).map_err(|e| e.to_string())?;
    let count = loaded.len();

    let mut catalog = state.catalog.lock().map_err(|e| e.to_string())?;
    *catalog = loaded;
    Ok(format!("Catalog loaded: {} devices", count))
}
