// src/noyau/erreurs.rs
//
// Erreurs du noyau (locales, récupérables, jamais fatales).
// Les messages Display sont le texte montré à l’utilisateur.

use thiserror::Error;

/// Échec d’évaluation d’une expression.
///
/// Tout est déterministe : la même entrée redonne toujours la même variante.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /* ---- lexical / structure ---- */
    #[error("caractère inattendu '{ch}' (position {position})")]
    InvalidCharacter { ch: char, position: usize },

    #[error("nombre mal formé (position {position})")]
    MalformedNumber { position: usize },

    #[error("parenthèses non équilibrées")]
    UnbalancedParentheses,

    #[error("entrée vide")]
    EmptyExpression,

    #[error("syntaxe invalide (jeton {position})")]
    SyntaxError { position: usize },

    #[error("expression trop imbriquée (profondeur max {max})")]
    NestingTooDeep { max: usize },

    /* ---- liste blanche ---- */
    #[error("fonction inconnue: {0}")]
    UnknownFunction(String),

    /* ---- arithmétique / domaine ---- */
    #[error("division par zéro")]
    DivisionByZero,

    #[error("hors domaine: {0}")]
    DomainError(&'static str),

    #[error("dépassement numérique (résultat infini)")]
    NumericOverflow,

    #[error("résultat non défini (NaN)")]
    InvalidResult,
}

/// Échec de conversion entre systèmes de numération.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("base non supportée: {0} (attendu 2 à 36)")]
    UnsupportedBase(u32),

    #[error("chiffre '{digit}' invalide en base {base}")]
    InvalidDigitForBase { digit: char, base: u32 },

    #[error("entrée vide")]
    EmptyInput,

    #[error("hors plage romaine: {0} (attendu 1 à 3999)")]
    OutOfRomanRange(i64),

    #[error("nombre romain non entier: {0}")]
    NonIntegerForRoman(String),

    #[error("chiffres romains mal formés: {0}")]
    MalformedRoman(String),
}
