// src/noyau/bases.rs
//
// Conversion entre systèmes de numération positionnels (bases 2..=36)
// ------------------------------------------------------------------
// - valeur lue EXACTEMENT : BigInt (partie entière) + BigRational (partie fractionnaire)
// - partie entière : divisions successives (to_str_radix), chiffre de poids fort d’abord
// - partie fractionnaire : multiplications successives, tronquée à FRACTION_MAX chiffres
//   (terminaison garantie même pour 1/3)
// - chiffres au-delà de 9 : A..Z

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreurs::ConvertError;
use super::romain::{from_roman, to_roman};

/// Nombre maximal de chiffres après la virgule (troncature).
pub const FRACTION_MAX: usize = 12;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Base positionnelle validée (2..=36).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Base(u32);

impl Base {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    pub fn new(b: u32) -> Result<Self, ConvertError> {
        if (Self::MIN..=Self::MAX).contains(&b) {
            Ok(Base(b))
        } else {
            Err(ConvertError::UnsupportedBase(b))
        }
    }

    pub fn valeur(self) -> u32 {
        self.0
    }
}

/// Système de numération : positionnel ou romain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Systeme {
    Positionnel(Base),
    Romain,
}

impl fmt::Display for Systeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Systeme::Positionnel(b) => write!(f, "base {}", b.valeur()),
            Systeme::Romain => write!(f, "romain"),
        }
    }
}

/// API publique : `valeur` écrite en base `from` -> texte en base `to`.
pub fn to_base(valeur: &str, from: u32, to: u32) -> Result<String, ConvertError> {
    to_base_avec(valeur, from, to, FRACTION_MAX)
}

/// Comme `to_base`, avec un nombre maximal de chiffres fractionnaires explicite.
pub fn to_base_avec(
    valeur: &str,
    from: u32,
    to: u32,
    fraction_max: usize,
) -> Result<String, ConvertError> {
    let from = Base::new(from)?;
    let to = Base::new(to)?;
    let n = lire_positionnel(valeur, from)?;
    Ok(ecrire_positionnel(&n, to, fraction_max))
}

/// Conversion entre deux systèmes quelconques (romain compris).
pub fn convertir(
    valeur: &str,
    de: Systeme,
    vers: Systeme,
    fraction_max: usize,
) -> Result<String, ConvertError> {
    let n = match de {
        Systeme::Positionnel(b) => lire_positionnel(valeur, b)?,
        Systeme::Romain => BigRational::from_integer(BigInt::from(from_roman(valeur)?)),
    };

    match vers {
        Systeme::Positionnel(b) => Ok(ecrire_positionnel(&n, b, fraction_max)),
        Systeme::Romain => {
            if !n.is_integer() {
                return Err(ConvertError::NonIntegerForRoman(valeur.trim().to_string()));
            }
            let entier = n.to_integer();
            let i = entier.to_i64().unwrap_or(if entier.is_negative() {
                i64::MIN
            } else {
                i64::MAX
            });
            to_roman(i)
        }
    }
}

/// Lit "-1A.8" (base donnée, casse indifférente) en rationnel exact.
pub fn lire_positionnel(texte: &str, base: Base) -> Result<BigRational, ConvertError> {
    let t = texte.trim();
    let (negatif, corps) = match t.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, t),
    };
    if corps.is_empty() || corps == "." {
        return Err(ConvertError::EmptyInput);
    }

    let b = BigInt::from(base.valeur());
    let mut entier = BigInt::zero();
    let mut frac_num = BigInt::zero();
    let mut frac_den = BigInt::from(1);
    let mut apres_point = false;

    for c in corps.chars() {
        if c == '.' && !apres_point {
            apres_point = true;
            continue;
        }
        let d = c
            .to_digit(base.valeur())
            .ok_or(ConvertError::InvalidDigitForBase {
                digit: c,
                base: base.valeur(),
            })?;

        if apres_point {
            frac_num = frac_num * &b + d;
            frac_den *= &b;
        } else {
            entier = entier * &b + d;
        }
    }

    let v = BigRational::new(entier * &frac_den + frac_num, frac_den);
    Ok(if negatif { -v } else { v })
}

/// Écrit un rationnel en base donnée (fraction tronquée à `fraction_max` chiffres).
pub fn ecrire_positionnel(v: &BigRational, base: Base, fraction_max: usize) -> String {
    let b = BigInt::from(base.valeur());
    let abs = v.abs();
    let entier = abs.to_integer();
    let mut frac = abs.fract();

    let mut out = entier.to_str_radix(base.valeur()).to_ascii_uppercase();

    let mut chiffres = String::new();
    while !frac.is_zero() && chiffres.len() < fraction_max {
        frac *= BigRational::from_integer(b.clone());
        let d = frac.to_integer();
        frac -= BigRational::from_integer(d.clone());
        // 0 <= d < base <= 36
        let i = d.to_usize().unwrap_or(0);
        chiffres.push(char::from(ALPHABET[i]));
    }
    let chiffres = chiffres.trim_end_matches('0');
    if !chiffres.is_empty() {
        out.push('.');
        out.push_str(chiffres);
    }

    if v.is_negative() && out != "0" {
        out.insert(0, '-');
    }
    out
}
