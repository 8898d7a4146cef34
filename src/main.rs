//! Management API CLI
//!
//! Command-line entry point for querying the management REST API

use clap::Parser;
use mgmt_api_client::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let runner = Runner::new(cli);

    let config = match runner.client_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    config.logging.init();

    if let Err(e) = runner.run(&config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
