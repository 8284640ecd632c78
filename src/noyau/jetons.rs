// src/noyau/jetons.rs

use super::erreurs::EvalError;
use super::expr::{Constante, Fonction};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Identifiants déjà résolus contre la liste blanche.
    // NOTE: un nom hors liste ne devient jamais un jeton (UnknownFunction au lexing).
    Fonction(Fonction),
    Const(Constante),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,   // ^
    Percent, // % postfixé (v/100)

    LPar,
    RPar,

    // Moins unaire : produit seulement par la conversion RPN.
    Neg,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux (ex: 12, 3.5, .5, 5.) avec au plus un '.'
/// - opérateurs + - * / ^ %
/// - parenthèses ( )
/// - identifiants (lettres, insensibles à la casse) : sin cos tan log ln exp sqrt pi e,
///   tout autre mot donne UnknownFunction
///
/// Tout autre caractère est refusé : c’est la frontière du bac à sable.
/// Un littéral hors de la plage des f64 donne NumericOverflow.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvalError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            '%' => Some(Tok::Percent),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(tok);
            i += 1;
            continue;
        }

        // Identifiants : suite de lettres (Unicode), comparée en minuscules à la liste blanche
        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            if let Some(k) = Constante::depuis_nom(&w) {
                out.push(Tok::Const(k));
            } else if let Some(f) = Fonction::depuis_nom(&w) {
                out.push(Tok::Fonction(f));
            } else {
                return Err(EvalError::UnknownFunction(w));
            }
            continue;
        }

        // Nombre décimal : chiffres avec au plus un '.'
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut points = 0usize;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    points += 1;
                    if points > 1 {
                        return Err(EvalError::MalformedNumber { position: start });
                    }
                }
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            if texte == "." {
                return Err(EvalError::MalformedNumber { position: start });
            }
            let v = texte
                .parse::<f64>()
                .map_err(|_| EvalError::MalformedNumber { position: start })?;
            if !v.is_finite() {
                return Err(EvalError::NumericOverflow);
            }
            out.push(Tok::Num(v));
            continue;
        }

        return Err(EvalError::InvalidCharacter { ch: c, position: i });
    }

    Ok(out)
}

/// Format utilitaire (journal de debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Fonction(f) => f.nom().to_string(),
            Tok::Const(k) => k.nom().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Percent => "%".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Neg => "neg".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
