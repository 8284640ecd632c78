//! Calculatrice : noyau d’évaluation d’expressions, conversion de bases, historique.
//!
//! - `noyau`   : pur (jetons -> RPN -> arbre -> valeur), bases 2..=36, romains, historique
//! - `app`     : session (`Calculatrice`) et vue texte
//! - `config`  : fichier TOML + priorités
//! - `logging` : subscriber `tracing`
//!
//! ```
//! use calculatrice::app::Calculatrice;
//!
//! let mut calc = Calculatrice::default();
//! assert_eq!(calc.calculer("3+4*2").unwrap().texte, "11");
//! assert!(calc.calculer("5/0").is_err());
//! assert_eq!(calc.historique().len(), 1);
//! ```

pub mod app;
pub mod config;
pub mod logging;
pub mod noyau;
