// src/app.rs
//
// Calculatrice : module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + console.rs)
// - Ré-exporter Calculatrice (pour main.rs: use calculatrice::app::Calculatrice;)
//
// La vue ne parle qu’à Calculatrice ; jamais directement au noyau ni à l’historique.

pub mod console;
pub mod etat;

pub use etat::{Calcul, Calculatrice};
