//! Chargement de la configuration (fichier TOML) avec priorités.
//!
//! Priorité (du plus fort au plus faible) :
//! 1. options de ligne de commande
//! 2. fichier `--config`, sinon `CALCULATRICE_CONFIG`, sinon `~/.config/calculatrice/config.toml`
//! 3. valeurs par défaut
//!
//! Un fichier absent n’est pas une erreur.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::bases::FRACTION_MAX;
use crate::noyau::format::{CHIFFRES_DEFAUT, CHIFFRES_MAX};
use crate::noyau::ModeAngle;

/// Variable d’environnement désignant un fichier de configuration.
pub const ENV_CONFIG: &str = "CALCULATRICE_CONFIG";

/// Borne haute des chiffres fractionnaires en conversion de base.
pub const FRACTION_LIMITE: usize = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("lecture impossible du fichier de configuration {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("TOML invalide dans {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },
}

/// Contenu du fichier `config.toml` ; tout est optionnel.
///
/// ```toml
/// angle_mode = "radians"
/// significant_digits = 12
/// fraction_digits = 16
/// history_capacity = 500
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFichier {
    #[serde(default)]
    pub angle_mode: Option<ModeAngle>,

    #[serde(default)]
    pub significant_digits: Option<usize>,

    #[serde(default)]
    pub fraction_digits: Option<usize>,

    #[serde(default)]
    pub history_capacity: Option<usize>,
}

/// Configuration finale après fusion des sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResolue {
    pub mode_angle: ModeAngle,
    /// Chiffres significatifs affichés (1..=17).
    pub chiffres_significatifs: usize,
    /// Chiffres après la virgule en conversion de base (0..=64).
    pub chiffres_fraction: usize,
    /// None = historique sans limite.
    pub capacite_historique: Option<usize>,
}

impl Default for ConfigResolue {
    fn default() -> Self {
        Self {
            mode_angle: ModeAngle::Degres,
            chiffres_significatifs: CHIFFRES_DEFAUT,
            chiffres_fraction: FRACTION_MAX,
            capacite_historique: None,
        }
    }
}

/// Chemin par défaut : `~/.config/calculatrice/config.toml` (selon la plateforme).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("calculatrice").join("config.toml"))
}

/// Charge un fichier ; `Ok(None)` s’il n’existe pas.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFichier>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contenu = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFichier = toml::from_str(&contenu).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Charge la configuration selon l’ordre : chemin explicite, variable d’environnement, défaut.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFichier>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(path) => load_config_file(path),
        None => Ok(None),
    }
}

/// Fusionne le fichier (optionnel) avec les valeurs par défaut, en bornant les nombres.
pub fn merge_config(fichier: Option<ConfigFichier>) -> ConfigResolue {
    let defaut = ConfigResolue::default();

    let Some(f) = fichier else {
        return defaut;
    };

    ConfigResolue {
        mode_angle: f.angle_mode.unwrap_or(defaut.mode_angle),
        chiffres_significatifs: f
            .significant_digits
            .unwrap_or(defaut.chiffres_significatifs)
            .clamp(1, CHIFFRES_MAX),
        chiffres_fraction: f
            .fraction_digits
            .unwrap_or(defaut.chiffres_fraction)
            .min(FRACTION_LIMITE),
        capacite_historique: f.history_capacity.or(defaut.capacite_historique),
    }
}

/// Applique les options de ligne de commande (seulement celles données).
pub fn apply_cli_overrides(
    mut config: ConfigResolue,
    mode: Option<ModeAngle>,
    chiffres: Option<usize>,
) -> ConfigResolue {
    if let Some(m) = mode {
        config.mode_angle = m;
    }
    if let Some(c) = chiffres {
        config.chiffres_significatifs = c.clamp(1, CHIFFRES_MAX);
    }
    config
}
