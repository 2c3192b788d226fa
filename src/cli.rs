//! Command line interface.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use crate::error::MigrationError;
use crate::migration::Sources;

#[derive(Debug, Clone, Parser)]
#[command(name = "keystore-migrator")]
#[command(version, about = "Import validator keystores into a remote keymanager API", long_about = None)]
pub struct Cli {
    /// Directory containing keystore*.json files
    #[arg(long, value_name = "DIR")]
    pub keystores_path: PathBuf,

    /// EIP-3076 slashing protection interchange file
    #[arg(long, value_name = "FILE")]
    pub slashing_protection_path: Option<PathBuf>,

    /// File whose first line is the keystores password
    #[arg(long, value_name = "FILE")]
    pub wallet_password_path: PathBuf,

    /// Target network
    #[arg(long, value_name = "prater|gnosis|mainnet")]
    pub network: String,

    /// Optional TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn sources(&self) -> Sources {
        Sources {
            keystores_path: self.keystores_path.clone(),
            slashing_protection_path: self.slashing_protection_path.clone(),
            wallet_password_path: self.wallet_password_path.clone(),
        }
    }
}

/// Parse arguments, separating help/version requests from real errors.
///
/// `Ok(Err(e))` carries a clap message that should be printed as-is with
/// a zero exit code.
pub fn parse_args<I, T>(args: I) -> Result<Result<Cli, clap::Error>, MigrationError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Ok(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Err(e))
        }
        Err(e) => Err(usage_error(&e)),
    }
}

fn usage_error(e: &clap::Error) -> MigrationError {
    let rendered = e.render().to_string();
    let message = rendered
        .strip_prefix("error: ")
        .unwrap_or(&rendered)
        .trim_end()
        .to_string();
    match e.kind() {
        ErrorKind::MissingRequiredArgument => MigrationError::MissingArgument(message),
        _ => MigrationError::InvalidArgument(message),
    }
}
