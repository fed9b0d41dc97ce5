// File: crates/sevenbarber_gcal/src/auth.rs
//! Service-account credential loading and calendar client construction.
//!
//! Credentials come from exactly one place. A non-empty environment blob
//! wins and the key file is then never opened. Without it, the key file is
//! the only source. Whichever source is picked, a failure to use it is fatal
//! and names that source.

use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{read_service_account_key, ServiceAccountAuthenticator, ServiceAccountKey},
    CalendarHub,
};
use sevenbarber_common::SevenBarberError;
use sevenbarber_config::GcalConfig;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Error reading credentials from environment variable {var}: {source}")]
    Environment {
        var: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Error loading credentials file {path}: {source}. In production set {env_var} instead")]
    File {
        path: String,
        env_var: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Error building calendar client from {origin}: {source}")]
    Client {
        origin: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<CredentialError> for SevenBarberError {
    fn from(err: CredentialError) -> Self {
        SevenBarberError::CredentialError(err.to_string())
    }
}

/// Where the service-account key is taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// JSON blob carried by an environment variable.
    Environment { var: String, raw: String },
    /// Key file on the local filesystem.
    File { path: PathBuf, env_var: String },
}

impl CredentialSource {
    /// Human readable name of the source, used in logs and errors.
    pub fn describe(&self) -> String {
        match self {
            CredentialSource::Environment { var, .. } => format!("environment variable {}", var),
            CredentialSource::File { path, .. } => format!("file {}", path.display()),
        }
    }
}

/// Picks the credential source. `lookup` is consulted once, for the configured variable.
pub fn resolve_credential_source<F>(config: &GcalConfig, lookup: F) -> CredentialSource
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(&config.credentials_env_var) {
        Some(raw) if !raw.trim().is_empty() => CredentialSource::Environment {
            var: config.credentials_env_var.clone(),
            raw,
        },
        _ => CredentialSource::File {
            path: PathBuf::from(&config.key_path),
            env_var: config.credentials_env_var.clone(),
        },
    }
}

/// Turns double-escaped newlines (`\\n`) back into JSON newline escapes (`\n`).
///
/// Hosting dashboards often store the key that way when it is pasted as one line.
pub fn normalize_escaped_newlines(raw: &str) -> String {
    raw.replace("\\\\n", "\\n")
}

/// Parses a service-account key from an environment blob.
pub fn parse_env_credentials(var: &str, raw: &str) -> Result<ServiceAccountKey, CredentialError> {
    let normalized = normalize_escaped_newlines(raw);
    serde_json::from_str(&normalized).map_err(|source| CredentialError::Environment {
        var: var.to_string(),
        source,
    })
}

/// Loads the service-account key from the resolved source.
pub async fn load_service_account_key(
    source: &CredentialSource,
) -> Result<ServiceAccountKey, CredentialError> {
    match source {
        CredentialSource::Environment { var, raw } => {
            let key = parse_env_credentials(var, raw)?;
            info!("Credentials loaded from {}.", var);
            Ok(key)
        }
        CredentialSource::File { path, env_var } => {
            let key = read_service_account_key(path)
                .await
                .map_err(|source| CredentialError::File {
                    path: path.display().to_string(),
                    env_var: env_var.clone(),
                    source,
                })?;
            info!("Using local credentials file {}.", path.display());
            Ok(key)
        }
    }
}

/// Builds the authenticated calendar client from the process environment.
pub async fn create_calendar_hub(config: &GcalConfig) -> Result<HubType, CredentialError> {
    let source = resolve_credential_source(config, |var| std::env::var(var).ok());
    create_calendar_hub_from(&source).await
}

/// Builds the authenticated calendar client from an already resolved source.
pub async fn create_calendar_hub_from(source: &CredentialSource) -> Result<HubType, CredentialError> {
    let sa_key = load_service_account_key(source).await?;

    let origin = source.describe();
    let client_error = |err: std::io::Error| CredentialError::Client {
        origin: origin.clone(),
        source: err,
    };

    let auth = ServiceAccountAuthenticator::builder(sa_key)
        .build()
        .await
        .map_err(client_error)?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(client_error)?
        .https_or_http()
        .enable_http1()
        .build();

    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    Ok(CalendarHub::new(client, auth))
}
