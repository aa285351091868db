//! noclist
//!
//! Prints the NOC list as one JSON line on stdout and exits 0, or prints a
//! diagnostic on stderr and exits 1.
//!
//! ```text
//! CLI args / config file
//!     → config (normalize host, validate)
//!     → HEAD /auth   (retrying requester)
//!     → GET /users   (X-Request-Checksum)
//!     → stdout
//! ```

use std::process::ExitCode;

use clap::Parser;

use noclist::cli::Cli;
use noclist::observability;
use noclist::pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    observability::init_logging(cli.log_level.as_deref(), &config.observability);

    tracing::debug!(
        host = %config.host,
        connect_ms = config.timeouts.connect_ms,
        read_ms = config.timeouts.read_ms,
        "Configuration loaded"
    );

    match pipeline::fetch_noc_list(&config).await {
        Ok(users) => {
            println!("{}", users);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
