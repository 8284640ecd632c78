//! Initialisation du subscriber `tracing`.
//!
//! Les traces vont sur stderr pour ne pas se mêler aux résultats (stdout).
//! `RUST_LOG` est respecté ; défaut : `warn`.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filtre utilisé quand `RUST_LOG` est absent ou invalide.
pub const FILTRE_DEFAUT: &str = "warn";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoggingError {
    #[error("subscriber tracing déjà initialisé")]
    SubscriberAlreadySet,
}

pub fn init() -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
