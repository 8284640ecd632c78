// src/noyau/trig.rs
//
// Trigonométrie avec mode d’angle (degrés / radians)
// -------------------------------------------------
// - Degrés : conversion en radians avant sin/cos/tan
// - Angles spéciaux en degrés (multiples entiers de 30° et 45°) : valeurs exactes
//   (sin(30) = 0.5 pile, cos(90) = 0 pile, tan(90) = indéfini)
// - Radians : passage direct

use serde::Deserialize;

use super::erreurs::EvalError;

/// Mode d’angle des fonctions trigonométriques.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum ModeAngle {
    #[default]
    #[serde(rename = "degrees")]
    Degres,
    #[serde(rename = "radians")]
    Radians,
}

impl ModeAngle {
    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Degres => "deg",
            ModeAngle::Radians => "rad",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrigOutcome {
    Valeur(f64),
    Indefini,
}

/// Applique sin/cos/tan selon le mode d’angle.
pub fn appliquer(f: TrigFn, x: f64, mode: ModeAngle) -> Result<f64, EvalError> {
    if mode == ModeAngle::Degres {
        match trig_special_degres(x, f) {
            Some(TrigOutcome::Valeur(v)) => return Ok(v),
            Some(TrigOutcome::Indefini) => {
                return Err(EvalError::DomainError("tan indéfini à 90° + k·180°"))
            }
            None => {}
        }
    }

    let rad = match mode {
        ModeAngle::Degres => x.to_radians(),
        ModeAngle::Radians => x,
    };

    Ok(match f {
        TrigFn::Sin => rad.sin(),
        TrigFn::Cos => rad.cos(),
        TrigFn::Tan => rad.tan(),
    })
}

/// Reconnaît les angles spéciaux (en degrés entiers) pour sin/cos/tan.
///
/// Retour:
/// - Some(Valeur(v)) si reconnu
/// - Some(Indefini) si tan(90° + k·180°)
/// - None si non reconnu (calcul flottant ordinaire)
pub fn trig_special_degres(x: f64, f: TrigFn) -> Option<TrigOutcome> {
    // au-delà de 2^53 les entiers f64 ne sont plus contigus : on laisse le calcul ordinaire
    if !x.is_finite() || x.fract() != 0.0 || x.abs() > 9_007_199_254_740_992.0 {
        return None;
    }

    // réduction modulo 360° (exacte sur les entiers représentables)
    let a = x.rem_euclid(360.0) as i64;

    let demi = 0.5;
    let r2 = std::f64::consts::FRAC_1_SQRT_2; // √2/2
    let r3_2 = 3f64.sqrt() / 2.0; // √3/2
    let r3 = 3f64.sqrt(); // √3
    let r3_3 = 3f64.sqrt() / 3.0; // √3/3

    let v = match f {
        TrigFn::Sin => match a {
            0 | 180 => 0.0,
            30 | 150 => demi,
            210 | 330 => -demi,
            45 | 135 => r2,
            225 | 315 => -r2,
            60 | 120 => r3_2,
            240 | 300 => -r3_2,
            90 => 1.0,
            270 => -1.0,
            _ => return None,
        },

        TrigFn::Cos => match a {
            0 => 1.0,
            180 => -1.0,
            30 | 330 => r3_2,
            150 | 210 => -r3_2,
            45 | 315 => r2,
            135 | 225 => -r2,
            60 | 300 => demi,
            120 | 240 => -demi,
            90 | 270 => 0.0,
            _ => return None,
        },

        TrigFn::Tan => match a {
            0 | 180 => 0.0,
            30 | 210 => r3_3,
            150 | 330 => -r3_3,
            45 | 225 => 1.0,
            135 | 315 => -1.0,
            60 | 240 => r3,
            120 | 300 => -r3,
            90 | 270 => return Some(TrigOutcome::Indefini),
            _ => return None,
        },
    };

    Some(TrigOutcome::Valeur(v))
}
