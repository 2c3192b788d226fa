//! keystore-migrator
//!
//! Imports every `keystore*` file of a directory into a Web3Signer-style
//! keymanager API, one request per keystore, with the matching
//! slashing-protection history attached when available.
//!
//! # Architecture Overview
//!
//! ```text
//!   --network ──▶ config::network ──▶ (base URL, virtual host)
//!                                              │
//!   --wallet-password-path ─┐                  │
//!   --slashing-protection ──┼─▶ keystore::loader
//!   --keystores-path ───────┘        │         │
//!                                    ▼         ▼
//!                 ┌──────────── migration::driver ─────────────┐
//!                 │ per file:                                  │
//!                 │   keystore::matcher → http::request        │
//!                 │   → resilience::retries → http::client ────┼──▶ keymanager API
//!                 └────────────────────────────────────────────┘
//! ```
//!
//! Exit code 0 when every keystore was imported, 1 on the first failure.

use std::process::ExitCode;
use tracing::Instrument;

use keystore_migrator::cli::parse_args;
use keystore_migrator::config::loader::load_optional_config;
use keystore_migrator::config::network;
use keystore_migrator::http::HttpTransport;
use keystore_migrator::observability::init_logging;
use keystore_migrator::resilience::RetryPolicy;
use keystore_migrator::{migrate, MigrationError, MigrationResult};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(Ok(cli)) => cli,
        Ok(Err(info)) => {
            let _ = info.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = match load_optional_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", MigrationError::from(e));
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.observability);

    let span = tracing::info_span!(
        "migration",
        run_id = %uuid::Uuid::new_v4(),
        network = %cli.network
    );

    let result: MigrationResult<_> = async {
        let endpoints = network::resolve(&cli.network)?;
        let transport = HttpTransport::new()?;
        let policy = RetryPolicy::from(&config.delivery);

        let mut stdout = std::io::stdout().lock();
        migrate(&cli.sources(), &endpoints, transport, policy, &mut stdout).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(summary) => {
            println!("imported {} keystore(s)", summary.imported());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
