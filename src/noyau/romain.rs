// src/noyau/romain.rs
//
// Chiffres romains (notation soustractive), domaine 1..=3999.
// Décodage strict : une chaîne n’est acceptée que si elle se ré-encode à l’identique.

use super::erreurs::ConvertError;

/// Table soustractive, consommée du plus grand au plus petit.
const TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

pub const ROMAIN_MIN: i64 = 1;
pub const ROMAIN_MAX: i64 = 3999;

/// Entier -> chiffres romains (forme canonique, majuscules).
pub fn to_roman(n: i64) -> Result<String, ConvertError> {
    if !(ROMAIN_MIN..=ROMAIN_MAX).contains(&n) {
        return Err(ConvertError::OutOfRomanRange(n));
    }

    let mut reste = n as u32;
    let mut out = String::new();
    for (valeur, symbole) in TABLE {
        while reste >= valeur {
            out.push_str(symbole);
            reste -= valeur;
        }
    }
    Ok(out)
}

/// Chiffres romains -> entier (insensible à la casse).
///
/// Refuse tout ce qui n’est pas la forme canonique : "IIII", "VV", "IC", "MMMM"...
pub fn from_roman(texte: &str) -> Result<u32, ConvertError> {
    let mal_forme = || ConvertError::MalformedRoman(texte.trim().to_string());

    let t = texte.trim().to_ascii_uppercase();
    if t.is_empty() {
        return Err(mal_forme());
    }

    let mut reste = t.as_str();
    let mut total: u32 = 0;
    for (valeur, symbole) in TABLE {
        while let Some(suite) = reste.strip_prefix(symbole) {
            total += valeur;
            // au-delà de la plage : inutile de lire la suite
            if i64::from(total) > ROMAIN_MAX {
                return Err(mal_forme());
            }
            reste = suite;
        }
    }
    if !reste.is_empty() {
        return Err(mal_forme());
    }

    // ré-encodage : rejette répétitions excessives et paires soustractives invalides
    match to_roman(i64::from(total)) {
        Ok(canon) if canon == t => Ok(total),
        _ => Err(mal_forme()),
    }
}
