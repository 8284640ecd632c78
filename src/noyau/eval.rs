//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> RPN -> Expr -> évaluation flottante -> contrôle NaN / ∞
//!
//! Aucune résolution dynamique de nom : les identifiants sont déjà des variantes
//! fermées (Fonction, Constante) quand l’arbre existe.

use tracing::debug;

use super::erreurs::EvalError;
use super::expr::{Expr, Fonction, OpAdditif, OpMultiplicatif};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{from_rpn, to_rpn};
use super::trig::{self, ModeAngle, TrigFn};

/// Étapes intermédiaires d’une évaluation (pour l’explication / le debug).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

/// API publique : évalue une expression en un flottant fini.
///
/// Pure et déterministe : même texte + même mode => même valeur ou même erreur.
pub fn evaluate(texte: &str, mode: ModeAngle) -> Result<f64, EvalError> {
    evaluer_avec_demarche(texte, mode).map(|(v, _)| v)
}

/// Comme `evaluate`, en retournant aussi la démarche (jetons, RPN, arbre).
pub fn evaluer_avec_demarche(
    texte: &str,
    mode: ModeAngle,
) -> Result<(f64, Demarche), EvalError> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    if jetons.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    let jetons_txt = format_tokens(&jetons);

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    debug!(jetons = %jetons_txt, rpn = %rpn_txt, "expression analysée");

    // 3) AST (Expr)
    let expr = from_rpn(&rpn)?;

    // 4) Valeur + contrôle final (jamais NaN / ∞ en succès)
    let v = eval_expr(&expr, mode)?;
    if v.is_nan() {
        return Err(EvalError::InvalidResult);
    }
    if v.is_infinite() {
        return Err(EvalError::NumericOverflow);
    }

    let d = Demarche {
        jetons: jetons_txt,
        rpn: rpn_txt,
        arbre: expr.to_string(),
    };

    Ok((v, d))
}

/// Évaluation récursive de l’arbre (profondeur bornée par from_rpn).
pub fn eval_expr(expr: &Expr, mode: ModeAngle) -> Result<f64, EvalError> {
    use Expr::*;

    match expr {
        Num(v) => Ok(*v),
        Const(k) => Ok(k.valeur()),

        Neg(x) => Ok(-eval_expr(x, mode)?),
        Pourcent(x) => Ok(eval_expr(x, mode)? / 100.0),

        // chaînes : pliage de gauche à droite (même ordre d’arrondi qu’en binaire)
        Somme(tete, termes) => {
            let mut acc = eval_expr(tete, mode)?;
            for (op, t) in termes {
                let v = eval_expr(t, mode)?;
                match op {
                    OpAdditif::Plus => acc += v,
                    OpAdditif::Moins => acc -= v,
                }
            }
            Ok(acc)
        }

        Produit(tete, termes) => {
            let mut acc = eval_expr(tete, mode)?;
            for (op, t) in termes {
                let v = eval_expr(t, mode)?;
                match op {
                    OpMultiplicatif::Fois => acc *= v,
                    OpMultiplicatif::Divise => {
                        if v == 0.0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        acc /= v;
                    }
                }
            }
            Ok(acc)
        }

        Pow(a, b) => Ok(eval_expr(a, mode)?.powf(eval_expr(b, mode)?)),

        Appel(f, x) => appliquer_fonction(*f, eval_expr(x, mode)?, mode),
    }
}

fn appliquer_fonction(f: Fonction, x: f64, mode: ModeAngle) -> Result<f64, EvalError> {
    match f {
        Fonction::Sin => trig::appliquer(TrigFn::Sin, x, mode),
        Fonction::Cos => trig::appliquer(TrigFn::Cos, x, mode),
        Fonction::Tan => trig::appliquer(TrigFn::Tan, x, mode),

        Fonction::Log => {
            if x <= 0.0 {
                return Err(EvalError::DomainError("log d’un nombre ≤ 0"));
            }
            Ok(x.log10())
        }
        Fonction::Ln => {
            if x <= 0.0 {
                return Err(EvalError::DomainError("ln d’un nombre ≤ 0"));
            }
            Ok(x.ln())
        }
        Fonction::Exp => Ok(x.exp()),
        Fonction::Sqrt => {
            if x < 0.0 {
                return Err(EvalError::DomainError("racine d’un nombre négatif"));
            }
            Ok(x.sqrt())
        }
    }
}
