// src/main.rs
//
// Calculatrice : point d’entrée (console)
// ---------------------------------------
// 1. options (clap)
// 2. configuration : --config, CALCULATRICE_CONFIG, ~/.config/calculatrice/config.toml
// 3. traces sur stderr (RUST_LOG, défaut warn)
// 4. boucle ligne par ligne sur stdin/stdout

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use calculatrice::app::{console, Calculatrice};
use calculatrice::config;
use calculatrice::noyau::ModeAngle;

/// Calculatrice en ligne de commande (une expression par ligne, commandes ':').
#[derive(Parser, Debug)]
#[command(name = "calculatrice")]
#[command(version)]
#[command(about = "Évalue des expressions, convertit des bases, garde un historique")]
pub struct Args {
    /// Fichier de configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Angles en radians (défaut : degrés)
    #[arg(long)]
    pub rad: bool,

    /// Chiffres significatifs affichés (1 à 17)
    #[arg(long)]
    pub digits: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = {
        let fichier = config::load_config_with_precedence(args.config.clone())?;
        let fusion = config::merge_config(fichier);
        let mode = args.rad.then_some(ModeAngle::Radians);
        config::apply_cli_overrides(fusion, mode, args.digits)
    };

    calculatrice::logging::init()?;
    info!(config = ?config, "configuration chargée");

    let mut calc = Calculatrice::depuis_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(stdin.lock(), stdout.lock(), &mut calc)?;

    Ok(())
}
