//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreurs.rs    : EvalError / ConvertError (typées, récupérables)
//! - jetons.rs     : tokenisation (frontière du bac à sable : alphabet + liste blanche)
//! - expr.rs       : AST + Fonction / Constante (énumérations fermées)
//! - rpn.rs        : shunting-yard + construction Expr
//! - trig.rs       : mode d’angle + angles spéciaux en degrés
//! - eval.rs       : pipeline complet
//! - format.rs     : affichage d’un résultat (chiffres significatifs)
//! - bases.rs      : conversion bases 2..=36 (exacte, big int / rationnels)
//! - romain.rs     : chiffres romains 1..=3999
//! - historique.rs : historique des calculs

pub mod bases;
pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod romain;
pub mod rpn;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;


// API publique minimale
pub use bases::{convertir, to_base, Base, Systeme};
pub use erreurs::{ConvertError, EvalError};
pub use eval::{evaluate, evaluer_avec_demarche, Demarche};
pub use format::format_resultat;
pub use historique::{EntreeHistorique, EntreeId, Historique, HistoriquePartage, Reutilisation};
pub use romain::{from_roman, to_roman};
pub use trig::ModeAngle;
