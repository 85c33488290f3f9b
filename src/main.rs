use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use nano_imgui::config as cfg;
use nano_imgui::ui::UiState;

/// nano-imgui CLI
#[derive(Debug, Parser)]
#[command(
    name = nano_imgui::PKG_NAME,
    version = nano_imgui::PKG_VERSION,
    about = "Desktop wallet shell"
)]
struct Args {
    /// Path to the optional configuration file, including the file name
    #[arg(long = "config_path", default_value = cfg::DEFAULT_CONFIG_PATH)]
    config_path: PathBuf,

    /// Pass configuration values. This takes precedence over any values in the
    /// configuration file. This option can be repeated multiple times.
    #[arg(long = "config", value_name = "KEY=VALUE", num_args = 1..)]
    config: Vec<String>,

    /// Write configuration to stdout, populated with commented defaults
    #[arg(long = "generate_config")]
    generate_config: bool,

    /// Print the JSON Schema for the configuration and exit
    #[arg(long = "print_schema")]
    print_schema: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.generate_config {
        println!("{}", cfg::export_documented());
        return Ok(());
    }

    if args.print_schema {
        let schema = cfg::generate_schema();
        let json = serde_json::to_string_pretty(&schema)?;
        println!("{json}");
        return Ok(());
    }

    let config = cfg::resolve(Some(args.config_path.as_path()), args.config.as_slice())?;

    nano_imgui::init_tracing(Path::new("."), config.wallet.log_to_stderr)?;
    info!(
        version = nano_imgui::PKG_VERSION,
        config = %args.config_path.display(),
        overrides = args.config.len(),
        "Starting nano-imgui"
    );

    if cfg::config_file_exists(&args.config_path) {
        info!(path = %args.config_path.display(), "Config file loaded successfully");
    } else {
        info!("Config file not found, using defaults");
    }

    let state = UiState::from_config(&config.wallet);
    debug!(
        target: "nano_imgui",
        menu = state.menu().label(),
        scale = %state.scale(),
        caption = %state.scale_caption(),
        "Navigation state ready"
    );

    info!("nano-imgui exited");
    Ok(())
}
