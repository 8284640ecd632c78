//! Tests scientifiques (campagne) : propriétés attendues de l’évaluateur.
//!
//! - valeurs de référence (précédence, associativité, pourcentage)
//! - erreurs typées (lexicales, structurelles, domaine)
//! - liste blanche : aucun nom hors liste n’est exécuté
//! - stress borné (profondeur, longueur) sous budget temps

use std::time::{Duration, Instant};

use super::erreurs::EvalError;
use super::eval::evaluate;
use super::format::{format_resultat, CHIFFRES_DEFAUT};
use super::trig::ModeAngle;

const TOL: f64 = 1e-9;

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr, ModeAngle::Radians).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn eval_deg(expr: &str) -> f64 {
    evaluate(expr, ModeAngle::Degres).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < TOL,
        "expr={expr:?} v={v} attendu={attendu}"
    );
}

fn assert_erreur(expr: &str, attendue: EvalError) {
    assert_eq!(
        evaluate(expr, ModeAngle::Radians),
        Err(attendue),
        "expr={expr:?}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Valeurs de référence ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(eval_ok("3+4*2"), 11.0);
    assert_eq!(eval_ok("(3+4)*2"), 14.0);
    assert_eq!(eval_ok("10-4-3"), 3.0);
    assert_eq!(eval_ok("12/3/2"), 2.0);
    assert_eq!(eval_ok("2*3^2"), 18.0);
}

#[test]
fn sci_exposant_et_moins_unaire() {
    assert_eq!(eval_ok("2^3^2"), 512.0);
    assert_eq!(eval_ok("-2^2"), 4.0);
    assert_eq!(eval_ok("2^-1"), 0.5);
    assert_eq!(eval_ok("-(2^2)"), -4.0);
    assert_eq!(eval_ok("3--2"), 5.0);
    assert_eq!(eval_ok("4*-2"), -8.0);
}

#[test]
fn sci_pourcentage() {
    assert_eq!(eval_ok("50%"), 0.5);
    assert_eq!(eval_ok("50%*2"), 1.0);
    assert_eq!(eval_ok("-5%"), -0.05);
    assert_eq!(eval_ok("200*10%"), 20.0);
    assert_eq!(eval_ok("(1+1)%"), 0.02);
}

#[test]
fn sci_constantes_et_fonctions() {
    assert_proche("pi", std::f64::consts::PI);
    assert_proche("E", std::f64::consts::E);
    assert_proche("ln(e)", 1.0);
    assert_proche("log(1000)", 3.0);
    assert_proche("exp(0)", 1.0);
    assert_proche("sqrt(16)", 4.0);
    assert_proche("SQRT(2)^2", 2.0);
    assert_proche("sin(pi/2)", 1.0);
    assert_proche("cos(pi)", -1.0);
}

#[test]
fn sci_mode_degres() {
    assert!((eval_deg("sin(30)") - 0.5).abs() < TOL);
    assert!((eval_deg("cos(60)") - 0.5).abs() < TOL);
    assert!((eval_deg("tan(45)") - 1.0).abs() < TOL);
    assert_eq!(eval_deg("sin(180)"), 0.0);
    assert!((eval_deg("sin(10)") - 10f64.to_radians().sin()).abs() < TOL);
    // π en degrés n’est pas un angle spécial
    assert!((eval_deg("sin(pi)") - std::f64::consts::PI.to_radians().sin()).abs() < TOL);
    assert!(matches!(
        evaluate("tan(90)", ModeAngle::Degres),
        Err(EvalError::DomainError(_))
    ));
}

/* ------------------------ Erreurs typées ------------------------ */

#[test]
fn sci_erreurs_arithmetiques() {
    assert_erreur("5/0", EvalError::DivisionByZero);
    assert_erreur("5/(2-2)", EvalError::DivisionByZero);
    assert_erreur("1/-0", EvalError::DivisionByZero);
    assert!(matches!(
        evaluate("ln(-1)", ModeAngle::Radians),
        Err(EvalError::DomainError(_))
    ));
    assert!(matches!(
        evaluate("log(0)", ModeAngle::Radians),
        Err(EvalError::DomainError(_))
    ));
    assert!(matches!(
        evaluate("sqrt(-4)", ModeAngle::Radians),
        Err(EvalError::DomainError(_))
    ));
    assert_erreur("exp(1000)", EvalError::NumericOverflow);
    assert_erreur("10^400", EvalError::NumericOverflow);
    assert_erreur("(-8)^(1/3)", EvalError::InvalidResult);
    assert_erreur("exp(1000)-exp(1000)", EvalError::InvalidResult);

    // littéral hors plage : refusé tel quel, jamais lu comme ∞
    let neufs = "9".repeat(400);
    assert_erreur(&format!("1/{neufs}"), EvalError::NumericOverflow);
    assert_erreur(&format!("0*{neufs}"), EvalError::NumericOverflow);
}

#[test]
fn sci_erreurs_lexicales_et_structurelles() {
    assert_erreur("3.3.3", EvalError::MalformedNumber { position: 0 });
    assert_erreur("", EvalError::EmptyExpression);
    assert_erreur("   \t ", EvalError::EmptyExpression);
    assert_erreur("(3+4", EvalError::UnbalancedParentheses);
    assert_erreur("3+4)", EvalError::UnbalancedParentheses);
    assert_erreur(
        "3 # 4",
        EvalError::InvalidCharacter {
            ch: '#',
            position: 2,
        },
    );
    assert!(matches!(
        evaluate("2(3)", ModeAngle::Radians),
        Err(EvalError::SyntaxError { .. })
    ));
    assert!(matches!(
        evaluate("+3", ModeAngle::Radians),
        Err(EvalError::SyntaxError { .. })
    ));
    assert!(matches!(
        evaluate("1e5", ModeAngle::Radians),
        Err(EvalError::SyntaxError { .. })
    ));
}

/* ------------------------ Liste blanche (bac à sable structurel) ------------------------ */

#[test]
fn sci_liste_blanche() {
    for hostile in [
        "import os",
        "__import__('os').system('ls')",
        "os.system(1)",
        "eval(1)",
        "exec(1)",
        "open(1)",
        "x+1",
        "asin(1)",
        "pow(2,3)",
        "sin(1);cos(1)",
        "[1]",
        "\"1\"",
        "2**3",
        "é+1",
        "Σx(1)",
    ] {
        match evaluate(hostile, ModeAngle::Radians) {
            Err(EvalError::UnknownFunction(_))
            | Err(EvalError::InvalidCharacter { .. })
            | Err(EvalError::SyntaxError { .. }) => {}
            autre => panic!("expr={hostile:?} devait être refusée, obtenu {autre:?}"),
        }
    }
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_idempotence() {
    for expr in ["3+4*2", "sin(30)", "5/0", "ln(-1)", "1/3", "(("] {
        for mode in [ModeAngle::Degres, ModeAngle::Radians] {
            assert_eq!(evaluate(expr, mode), evaluate(expr, mode), "expr={expr:?}");
        }
    }
}

#[test]
fn sci_resultat_formate_reevaluable() {
    for expr in ["2^70", "1/3", "-2*10^-7", "0.1+0.2", "-1/7", "123456789*1000"] {
        let texte = format_resultat(eval_ok(expr), CHIFFRES_DEFAUT);
        let relu = format_resultat(eval_ok(&texte), CHIFFRES_DEFAUT);
        assert_eq!(texte, relu, "expr={expr:?}");
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // les parenthèses seules n’approfondissent pas l’arbre
    let expr = format!("{}7{}", "(".repeat(5000), ")".repeat(5000));
    budget(t0, max);
    assert_eq!(eval_ok(&expr), 7.0);
}

#[test]
fn sci_stress_imbrication_refusee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = format!("{}1{}", "sqrt(".repeat(5000), ")".repeat(5000));
    budget(t0, max);
    assert!(matches!(
        evaluate(&expr, ModeAngle::Radians),
        Err(EvalError::NestingTooDeep { .. })
    ));
}

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // une chaîne plate n’est pas une imbrication : aucune limite de profondeur
    let expr = vec!["1/2"; 5000].join(" + ");
    assert_eq!(eval_ok(&expr), 2500.0);

    let expr = vec!["1"; 5000].join("+");
    assert_eq!(eval_ok(&expr), 5000.0);

    let expr = format!("10000{}", "-1".repeat(4000));
    assert_eq!(eval_ok(&expr), 6000.0);
    budget(t0, max);
}

#[test]
fn sci_stress_produit_long() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = vec!["1"; 5000].join("*");
    assert_eq!(eval_ok(&expr), 1.0);

    // 2*2/2*2/2... : alterne sans jamais approfondir
    let expr = format!("2{}", "*2/2".repeat(3000));
    assert_eq!(eval_ok(&expr), 2.0);

    let expr = format!("1{}/0", "*1".repeat(3000));
    assert_erreur(&expr, EvalError::DivisionByZero);
    budget(t0, max);
}
