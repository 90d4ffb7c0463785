use crate::reports;
use aimforge::catalog::DeviceCatalog;
use aimforge::config::Config;
use aimforge::device::DeviceInfo;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct DevicesArgs {
    #[command(flatten)]
    pub config: Config,

    /// Substring filter on device names.
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Exact brand filter (case-insensitive).
    #[arg(short, long)]
    pub brand: Option<String>,
}

pub fn run(args: DevicesArgs, catalog: &DeviceCatalog) {
    let devices: Vec<&DeviceInfo> = if let Some(ref brand) = args.brand {
        catalog.by_brand(brand)
    } else if let Some(ref filter) = args.filter {
        catalog.search(filter)
    } else {
        catalog.devices().iter().collect()
    };

    if devices.is_empty() {
        println!("No devices found matching criteria.");
        return;
    }

    reports::print_device_report(&devices);
}
