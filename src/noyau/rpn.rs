// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles (grammaire fermée, rien d’implicite):
// - état "attend une valeur" / "attend un opérateur" : tout jeton hors de sa place => SyntaxError
//   (donc pas de multiplication implicite "2(3)", pas de "3 4", pas de "()").
// - Moins unaire : si '-' arrive quand on attend une valeur => Tok::Neg (préfixe, prioritaire sur ^ à gauche)
//   "-2^2" => (-2)^2, "2^-2" => 2^(-2)
// - '^' associatif à droite : "2^3^2" => 2^(3^2)
// - '%' postfixé : sort directement en RPN (lié à la valeur qui précède)
// - Fonction : doit être suivie immédiatement de '(' ; sort après la parenthèse fermante.
// - Pas de '+' unaire.

use super::erreurs::EvalError;
use super::expr::{Expr, OpAdditif, OpMultiplicatif};
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Caret => 3,
        Tok::Neg => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret | Tok::Neg)
}

fn est_operateur_binaire(t: &Tok) -> bool {
    matches!(
        t,
        Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret
    )
}

/// Vérifie l’appariement des parenthèses sur toute la suite de jetons.
///
/// Fait avant toute analyse : "(3" et "3)" échouent toujours en UnbalancedParentheses,
/// quel que soit le reste.
pub fn verifier_parentheses(tokens: &[Tok]) -> Result<(), EvalError> {
    let mut profondeur: usize = 0;
    for t in tokens {
        match t {
            Tok::LPar => profondeur += 1,
            Tok::RPar => {
                profondeur = profondeur
                    .checked_sub(1)
                    .ok_or(EvalError::UnbalancedParentheses)?;
            }
            _ => {}
        }
    }
    if profondeur != 0 {
        return Err(EvalError::UnbalancedParentheses);
    }
    Ok(())
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(Sin), LPar, Const(Pi), Slash, Num(2), RPar]
///   rpn:    [Const(Pi), Num(2), Slash, Fonction(Sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, EvalError> {
    verifier_parentheses(tokens)?;

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // true tant qu’on attend une opérande (début, après opérateur, après '(').
    let mut attend_valeur = true;

    for (pos, tok) in tokens.iter().enumerate() {
        let syntaxe = || EvalError::SyntaxError { position: pos };

        match tok {
            Tok::Num(_) | Tok::Const(_) => {
                if !attend_valeur {
                    return Err(syntaxe());
                }
                out.push(tok.clone());
                attend_valeur = false;
            }

            Tok::Fonction(_) => {
                if !attend_valeur || tokens.get(pos + 1) != Some(&Tok::LPar) {
                    return Err(syntaxe());
                }
                // fonction : on la garde sur la pile (elle sortira après son argument)
                ops.push(tok.clone());
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(syntaxe());
                }
                ops.push(Tok::LPar);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(syntaxe());
                }

                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(EvalError::UnbalancedParentheses),
                    }
                }

                // si une fonction est au sommet, on la sort aussi
                if matches!(ops.last(), Some(Tok::Fonction(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }

            Tok::Percent => {
                if attend_valeur {
                    return Err(syntaxe());
                }
                out.push(Tok::Percent);
            }

            Tok::Minus if attend_valeur => {
                // moins unaire : préfixe, ne dépile rien
                ops.push(Tok::Neg);
            }

            t if est_operateur_binaire(t) => {
                if attend_valeur {
                    return Err(syntaxe());
                }

                // dépile tant que:
                // - on n'est pas bloqué par '(' ou une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar | Tok::Fonction(_)) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(t);

                    let doit_pop = if is_right_associative(t) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(t.clone());
                attend_valeur = true;
            }

            // Tok::Neg n’existe pas en entrée (produit ici seulement)
            _ => return Err(syntaxe()),
        }
    }

    if attend_valeur {
        return Err(EvalError::SyntaxError {
            position: tokens.len(),
        });
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(EvalError::UnbalancedParentheses);
        }
        out.push(op);
    }

    Ok(out)
}

/// Profondeur maximale de l’AST.
/// Garde-fou : l’évaluation et la destruction de l’arbre sont récursives.
/// Seule l’imbrication réelle compte (unaires, fonctions, `^`, chaîne entre parenthèses
/// utilisée comme terme) : une chaîne `a + b - c ...` reste à plat.
pub const PROFONDEUR_MAX: usize = 1000;

/// Construit une Expr à partir d’une RPN.
///
/// Chaque nœud de la pile porte sa profondeur : au-delà de PROFONDEUR_MAX on refuse.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, EvalError> {
    let mut st: Vec<(Expr, usize)> = Vec::new();

    for (pos, tok) in rpn.iter().enumerate() {
        let syntaxe = || EvalError::SyntaxError { position: pos };

        let (e, prof) = match tok {
            Tok::Num(v) => (Expr::Num(*v), 1),
            Tok::Const(k) => (Expr::Const(*k), 1),

            Tok::Neg | Tok::Percent => {
                let (x, p) = st.pop().ok_or_else(syntaxe)?;
                let x = Box::new(x);
                let e = if *tok == Tok::Neg {
                    Expr::Neg(x)
                } else {
                    Expr::Pourcent(x)
                };
                (e, p + 1)
            }

            Tok::Fonction(f) => {
                let (x, p) = st.pop().ok_or_else(syntaxe)?;
                (Expr::Appel(*f, Box::new(x)), p + 1)
            }

            Tok::Plus | Tok::Minus => {
                let (b, pb) = st.pop().ok_or_else(syntaxe)?;
                let (a, pa) = st.pop().ok_or_else(syntaxe)?;
                let op = if *tok == Tok::Plus {
                    OpAdditif::Plus
                } else {
                    OpAdditif::Moins
                };

                match a {
                    // chaîne en cours : on l’allonge sans approfondir
                    Expr::Somme(tete, mut termes) => {
                        termes.push((op, b));
                        (Expr::Somme(tete, termes), pa.max(pb + 1))
                    }
                    a => (Expr::Somme(Box::new(a), vec![(op, b)]), pa.max(pb) + 1),
                }
            }

            Tok::Star | Tok::Slash => {
                let (b, pb) = st.pop().ok_or_else(syntaxe)?;
                let (a, pa) = st.pop().ok_or_else(syntaxe)?;
                let op = if *tok == Tok::Star {
                    OpMultiplicatif::Fois
                } else {
                    OpMultiplicatif::Divise
                };

                match a {
                    Expr::Produit(tete, mut termes) => {
                        termes.push((op, b));
                        (Expr::Produit(tete, termes), pa.max(pb + 1))
                    }
                    a => (Expr::Produit(Box::new(a), vec![(op, b)]), pa.max(pb) + 1),
                }
            }

            Tok::Caret => {
                let (b, pb) = st.pop().ok_or_else(syntaxe)?;
                let (a, pa) = st.pop().ok_or_else(syntaxe)?;
                (Expr::Pow(Box::new(a), Box::new(b)), pa.max(pb) + 1)
            }

            Tok::LPar | Tok::RPar => return Err(syntaxe()),
        };

        if prof > PROFONDEUR_MAX {
            return Err(EvalError::NestingTooDeep {
                max: PROFONDEUR_MAX,
            });
        }
        st.push((e, prof));
    }

    match (st.pop(), st.is_empty()) {
        (Some((e, _)), true) => Ok(e),
        _ => Err(EvalError::SyntaxError { position: rpn.len() }),
    }
}
