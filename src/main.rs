use clap::Parser;
use dotenvy::dotenv;
use schoolnav::cli::{self, Cli};
use schoolnav::state::init_app_state;
use schoolnav_config::{LoggingConfig, StorageConfig};
use schoolnav_observability::init_logging;

fn main() {
    dotenv().ok();

    if let Err(e) = init_logging(&LoggingConfig::from_env()) {
        eprintln!("⚠️  Failed to initialize logging: {e:#}");
    }

    let cli = Cli::parse();
    let state = init_app_state(StorageConfig::from_env());

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli::run(cli, &state, &mut stdout) {
        eprintln!("\n❌ Error: {e:#}");
        std::process::exit(1);
    }
}
