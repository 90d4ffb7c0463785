use aimforge::calculator::OptimizationContext;
use aimforge::config::Config;
use aimforge::store::FileTimestampStore;
use aimforge::util::stable_key;
use clap::Args;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ResetArgs {
    #[command(flatten)]
    pub config: Config,

    /// Identity whose optimization ramp restarts at day zero.
    #[arg(short, long, default_value = "local")]
    pub user: String,

    /// Clear every tracked identity instead.
    #[arg(long, default_value_t = false)]
    pub all: bool,
}

pub fn run(args: ResetArgs, data_dir: &str) {
    if args.all {
        let dir = Path::new(data_dir);
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => {
                info!("Nothing to clear: no data directory at {}", data_dir);
                return;
            }
        };

        let mut cleared = 0usize;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Err(e) = fs::remove_file(&path) {
                    warn!("⚠️  Could not remove {}: {}", path.display(), e);
                } else {
                    cleared += 1;
                }
            }
        }
        info!("🗑  Cleared {} optimization profile(s).", cleared);
        return;
    }

    let store_path = Path::new(data_dir).join(format!("{}.json", stable_key(&args.user)));
    let mut context = OptimizationContext::new(FileTimestampStore::new(store_path));
    context.reset();
    info!("✅ Optimization history cleared for '{}'.", args.user);
}
