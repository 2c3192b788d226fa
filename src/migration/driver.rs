//! Import driver.
//!
//! # Responsibilities
//! - Load the shared documents once (password, slashing protection)
//! - For each keystore file: load → match → build → deliver → report
//! - Stop at the first failure, leaving later files untouched
//!
//! # Design Decisions
//! - Strictly sequential; one keystore is fully handled before the next
//! - A delivery that never got a response is a transport error, not success
//! - A 200 whose body reports a per-key `error` status also halts the run

use std::io::Write;
use std::path::PathBuf;

use crate::config::Endpoints;
use crate::error::{MigrationError, MigrationResult};
use crate::http::client::Transport;
use crate::http::request::ImportRequest;
use crate::http::response::{ImportResponse, ImportResult};
use crate::keystore::{self, KeystoreFile, SlashingProtection};
use crate::resilience::{DeliveryEngine, RetryPolicy};

/// Where the documents to migrate live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub keystores_path: PathBuf,
    pub slashing_protection_path: Option<PathBuf>,
    pub wallet_password_path: PathBuf,
}

/// Outcome of one imported keystore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: String,
    pub attempts: u32,
    pub with_slashing_protection: bool,
    pub result: ImportResult,
    pub statuses: Option<ImportResponse>,
}

impl FileReport {
    /// Human readable response: decoded statuses, or the raw body.
    pub fn describe(&self) -> String {
        match &self.statuses {
            Some(response) if !response.data.is_empty() => response
                .data
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            _ => self.result.body.clone(),
        }
    }
}

/// Everything imported during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub reports: Vec<FileReport>,
}

impl ImportSummary {
    pub fn imported(&self) -> usize {
        self.reports.len()
    }
}

/// Imports keystore files one at a time.
pub struct Importer<T> {
    engine: DeliveryEngine<T>,
    password: String,
    slashing_protection: Option<SlashingProtection>,
}

impl<T: Transport> Importer<T> {
    pub fn new(
        engine: DeliveryEngine<T>,
        password: String,
        slashing_protection: Option<SlashingProtection>,
    ) -> Self {
        Self {
            engine,
            password,
            slashing_protection,
        }
    }

    /// Import a single file, turning every non-success into an error.
    pub async fn import_file(&self, file: &KeystoreFile) -> MigrationResult<FileReport> {
        let keystore = keystore::load_keystore(&file.path)?;
        let matched = keystore::match_record(self.slashing_protection.as_ref(), &keystore);

        tracing::debug!(
            file = %file.name,
            slashing_protection = matched.is_some(),
            "Keystore loaded"
        );

        let body = ImportRequest::build(&keystore, &self.password, matched.as_ref())?.to_body()?;
        let outcome = self.engine.deliver(&body).await;

        let Some(result) = outcome.result else {
            return Err(MigrationError::Transport {
                file: file.name.clone(),
                attempts: outcome.attempts,
            });
        };

        if !result.is_success() {
            return Err(MigrationError::RemoteRejection {
                file: file.name.clone(),
                status: result.status,
                body: result.body,
            });
        }

        let statuses = result.decode();
        if let Some(error) = statuses.as_ref().and_then(|s| s.first_error()) {
            return Err(MigrationError::KeystoreRejected {
                file: file.name.clone(),
                message: error.message.clone().unwrap_or_default(),
            });
        }

        Ok(FileReport {
            file: file.name.clone(),
            attempts: outcome.attempts,
            with_slashing_protection: matched.is_some(),
            result,
            statuses,
        })
    }

    /// Import `files` in order, writing one report line per success to `out`.
    pub async fn run<W: Write>(
        &self,
        files: &[KeystoreFile],
        out: &mut W,
    ) -> MigrationResult<ImportSummary> {
        let mut summary = ImportSummary::default();

        for file in files {
            let report = self.import_file(file).await?;

            tracing::info!(
                file = %report.file,
                attempts = report.attempts,
                slashing_protection = report.with_slashing_protection,
                "Keystore imported"
            );
            writeln!(out, "imported keystore {}: {}", report.file, report.describe())
                .map_err(|e| MigrationError::io("<output>", e))?;

            summary.reports.push(report);
        }

        Ok(summary)
    }
}

/// Run a whole migration against `endpoints`.
pub async fn migrate<T: Transport, W: Write>(
    sources: &Sources,
    endpoints: &Endpoints,
    transport: T,
    policy: RetryPolicy,
    out: &mut W,
) -> MigrationResult<ImportSummary> {
    let engine = DeliveryEngine::new(transport, endpoints, policy)?;

    let slashing_protection =
        keystore::load_slashing_protection(sources.slashing_protection_path.as_deref())?;
    let password = keystore::load_wallet_password(&sources.wallet_password_path)?;
    let files = keystore::list_keystore_files(&sources.keystores_path)?;

    tracing::info!(
        keystores = files.len(),
        url = %engine.url(),
        virtual_host = %endpoints.virtual_host,
        "Starting keystore import"
    );

    let importer = Importer::new(engine, password, slashing_protection);
    let summary = importer.run(&files, out).await?;

    tracing::info!(imported = summary.imported(), "Keystore import finished");
    Ok(summary)
}
