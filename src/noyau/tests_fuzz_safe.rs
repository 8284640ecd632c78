//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : un succès est toujours fini (jamais NaN / ∞)

use std::time::{Duration, Instant};

use super::erreurs::EvalError;
use super::eval::evaluate;
use super::trig::ModeAngle;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(100)),
        2 => format!("{}.{}", rng.pick(10), rng.pick(1000)),
        3 => "pi".to_string(),
        4 => "e".to_string(),
        _ => format!("{}%", rng.pick(200)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(10) {
        0 => gen_nombre(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("({a}*{})", gen_expr(rng, depth - 1)),
        4 => format!("({a}/{})", gen_expr(rng, depth - 1)),
        5 => format!("({a})^{}", rng.pick(4)),
        6 => format!("-{a}"),
        _ => {
            let f = ["sin", "cos", "tan", "log", "ln", "exp", "sqrt"][rng.pick(7) as usize];
            format!("{f}({a})")
        }
    }
}

/// Texte quelconque sur un alphabet mêlant valide et invalide.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '1', '2', '0', '.', '+', '-', '*', '/', '^', '%', '(', ')', ' ', 's', 'i', 'n', 'p',
        'e', 'x', '_', '$', ';', 'é', 'π',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn mode(rng: &mut Rng) -> ModeAngle {
    if rng.coin() {
        ModeAngle::Degres
    } else {
        ModeAngle::Radians
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_finitude() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let m = mode(&mut rng);

        let r1 = evaluate(&expr, m);
        let r2 = evaluate(&expr, m);
        assert_eq!(r1, r2, "non déterministe: expr={expr:?}");

        match r1 {
            Ok(v) => {
                assert!(v.is_finite(), "succès non fini: expr={expr:?} v={v}");
                seen_ok += 1;
            }
            Err(e) => {
                // expressions bien formées : seules les erreurs arithmétiques sont possibles
                assert!(
                    matches!(
                        e,
                        EvalError::DivisionByZero
                            | EvalError::DomainError(_)
                            | EvalError::NumericOverflow
                            | EvalError::InvalidResult
                    ),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let len = rng.pick(24) as usize;
        let texte = gen_bruit(&mut rng, len);

        // on veut seulement : pas de panique, succès fini, erreur stable
        match evaluate(&texte, ModeAngle::Radians) {
            Ok(v) => assert!(v.is_finite(), "texte={texte:?}"),
            Err(e) => assert_eq!(
                evaluate(&texte, ModeAngle::Radians),
                Err(e),
                "texte={texte:?}"
            ),
        }
    }
}
