// src/noyau/format.rs
//
// Affichage d’un résultat flottant (politique fixe, testable)
// ----------------------------------------------------------
// - arrondi à N chiffres significatifs (défaut 10)
// - zéros de fin retirés, jamais de "-0"
// - grands / petits ordres de grandeur : "m*10^k" (pas "me k") pour que le texte
//   reste une entrée valide de l’évaluateur (réutilisation depuis l’historique)

/// Chiffres significatifs par défaut.
pub const CHIFFRES_DEFAUT: usize = 10;

/// Borne haute utile pour un f64 (17 chiffres suffisent à tout distinguer).
pub const CHIFFRES_MAX: usize = 17;

/// Exposant décimal minimal affiché en notation fixe (0.00001).
const EXPOSANT_FIXE_MIN: i32 = -5;

/// Formate un résultat d’évaluation.
pub fn format_resultat(v: f64, chiffres: usize) -> String {
    let chiffres = chiffres.clamp(1, CHIFFRES_MAX);

    if v == 0.0 {
        return "0".to_string();
    }
    if !v.is_finite() {
        // l’évaluateur ne rend jamais ça en succès
        return v.to_string();
    }

    // "d.ddddde±x" : l’arrondi fixe l’exposant réel (9.9999999999 -> 1.000000000e1)
    let sci = format!("{:.*e}", chiffres - 1, v);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exposant >= chiffres as i32 || exposant < EXPOSANT_FIXE_MIN {
        return format!("{}*10^{exposant}", trim_zeros(mantisse));
    }

    let decimales = (chiffres as i32 - 1 - exposant).max(0) as usize;
    let fixe = format!("{v:.decimales$}");
    let s = trim_zeros(&fixe);
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

/// "12.3400" -> "12.34" ; "5.000" -> "5" ; "120" -> "120"
fn trim_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
