// ===== aimforge/src/main.rs =====
use aimforge::catalog::DeviceCatalog;
use aimforge::config::Tuning;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CSV device catalog; the built-in catalog is used when omitted.
    #[arg(global = true, short, long)]
    catalog: Option<String>,

    /// Where per-user optimization timestamps live.
    #[arg(global = true, short, long, default_value = "data/profiles")]
    data_dir: String,

    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Generate(cmd::generate::GenerateArgs),
    Devices(cmd::devices::DevicesArgs),
    Audit(cmd::audit::AuditArgs),
    Reset(cmd::reset::ResetArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    info!("🚀 Initializing AimForge...");

    let catalog = match &cli.catalog {
        Some(path) => {
            info!("📂 Loading Device Catalog: {}", path);
            DeviceCatalog::load_csv(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            })
        }
        None => DeviceCatalog::builtin(),
    };

    // Pull the flattened config AND the raw subcommand matches, so a
    // weights file can be overridden only by flags the user actually typed.
    let (mut config, cli_tuning_ref, sub_matches) = match &cli.command {
        Commands::Generate(args) => (
            args.config.clone(),
            &args.config.tuning,
            matches.subcommand_matches("generate").unwrap(),
        ),
        Commands::Devices(args) => (
            args.config.clone(),
            &args.config.tuning,
            matches.subcommand_matches("devices").unwrap(),
        ),
        Commands::Audit(args) => (
            args.config.clone(),
            &args.config.tuning,
            matches.subcommand_matches("audit").unwrap(),
        ),
        Commands::Reset(args) => (
            args.config.clone(),
            &args.config.tuning,
            matches.subcommand_matches("reset").unwrap(),
        ),
    };

    if let Some(path) = &cli.weights {
        info!("⚖️  Loading Weights from: {}", path);
        let mut file_tuning = Tuning::load_from_file(path);
        file_tuning.merge_from_cli(cli_tuning_ref, sub_matches);
        config.tuning = file_tuning;
    }

    if cli.debug {
        warn!("Debug mode: full factor breakdowns enabled.");
    }

    match cli.command {
        Commands::Generate(args) => {
            cmd::generate::run(args.clone(), &catalog, config, &cli.data_dir, cli.debug)
        }
        Commands::Devices(args) => cmd::devices::run(args.clone(), &catalog),
        Commands::Audit(args) => cmd::audit::run(args.clone(), &catalog, config),
        Commands::Reset(args) => cmd::reset::run(args.clone(), &cli.data_dir),
    }
}
