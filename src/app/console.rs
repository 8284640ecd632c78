// src/app/console.rs
//
// Vue texte (ligne par ligne)
// ---------------------------
// Remplace la vue egui : même Calculatrice (etat.rs), entrée = une ligne.
//
// - une ligne ordinaire est évaluée, le résultat (ou le message d’erreur) est affiché
// - les commandes commencent par ':'
//
//   :hist                      liste l’historique
//   :clear                     efface l’historique
//   :reuse <id> [expr|res]     réévalue l’expression (défaut) ou le résultat d’une entrée
//   :deg / :rad                mode d’angle
//   :conv <valeur> <de> <vers> conversion (base 2..=36 ou "roman")
//   :quit                      sortie

use std::io::{self, BufRead, Write};

use thiserror::Error;

use super::etat::Calculatrice;
use crate::noyau::historique::{EntreeId, Reutilisation};
use crate::noyau::{Base, ConvertError, ModeAngle, Systeme};

/// Ligne interprétée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commande {
    Vide,
    Calcul(String),
    Historique,
    Effacer,
    Reutiliser { id: EntreeId, quoi: Reutilisation },
    Mode(ModeAngle),
    Convertir { valeur: String, de: Systeme, vers: Systeme },
    Quitter,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandeError {
    #[error("commande inconnue ':{0}'")]
    Inconnue(String),

    #[error("usage : {0}")]
    Usage(&'static str),

    #[error("identifiant invalide '{0}'")]
    IdInvalide(String),

    #[error("système inconnu '{0}' (base 2..=36 ou roman)")]
    SystemeInconnu(String),

    #[error(transparent)]
    Base(#[from] ConvertError),
}

const USAGE_REUSE: &str = ":reuse <id> [expr|res]";
const USAGE_CONV: &str = ":conv <valeur> <de> <vers>";

/* ------------------------ Lecture d’une ligne ------------------------ */

pub fn interpreter(ligne: &str) -> Result<Commande, CommandeError> {
    let ligne = ligne.trim();

    if ligne.is_empty() {
        return Ok(Commande::Vide);
    }

    let Some(reste) = ligne.strip_prefix(':') else {
        return Ok(Commande::Calcul(ligne.to_string()));
    };

    let mut mots = reste.split_whitespace();
    let nom = mots.next().unwrap_or("");
    let args: Vec<&str> = mots.collect();

    match (nom, args.as_slice()) {
        ("hist", []) => Ok(Commande::Historique),
        ("clear", []) => Ok(Commande::Effacer),
        ("deg", []) => Ok(Commande::Mode(ModeAngle::Degres)),
        ("rad", []) => Ok(Commande::Mode(ModeAngle::Radians)),
        ("quit" | "q", []) => Ok(Commande::Quitter),

        ("reuse", [id]) => Ok(Commande::Reutiliser {
            id: lire_id(id)?,
            quoi: Reutilisation::Expression,
        }),
        ("reuse", [id, quoi]) => {
            let quoi = match *quoi {
                "expr" => Reutilisation::Expression,
                "res" => Reutilisation::Resultat,
                _ => return Err(CommandeError::Usage(USAGE_REUSE)),
            };
            Ok(Commande::Reutiliser {
                id: lire_id(id)?,
                quoi,
            })
        }
        ("reuse", _) => Err(CommandeError::Usage(USAGE_REUSE)),

        ("conv", [valeur, de, vers]) => Ok(Commande::Convertir {
            valeur: (*valeur).to_string(),
            de: lire_systeme(de)?,
            vers: lire_systeme(vers)?,
        }),
        ("conv", _) => Err(CommandeError::Usage(USAGE_CONV)),

        (autre, _) => Err(CommandeError::Inconnue(autre.to_string())),
    }
}

/// "3" ou "#3".
fn lire_id(texte: &str) -> Result<EntreeId, CommandeError> {
    texte
        .trim_start_matches('#')
        .parse::<u64>()
        .map(EntreeId)
        .map_err(|_| CommandeError::IdInvalide(texte.to_string()))
}

/// "roman" / "romain" ou une base décimale.
fn lire_systeme(texte: &str) -> Result<Systeme, CommandeError> {
    if texte.eq_ignore_ascii_case("roman") || texte.eq_ignore_ascii_case("romain") {
        return Ok(Systeme::Romain);
    }
    let b: u32 = texte
        .parse()
        .map_err(|_| CommandeError::SystemeInconnu(texte.to_string()))?;
    Ok(Systeme::Positionnel(Base::new(b)?))
}

/* ------------------------ Boucle ------------------------ */

/// Lit `entree` ligne par ligne jusqu’à `:quit` ou fin de flux.
///
/// Seules les erreurs d’E/S remontent ; les erreurs de calcul sont affichées.
pub fn run<R: BufRead, W: Write>(
    entree: R,
    mut sortie: W,
    calc: &mut Calculatrice,
) -> io::Result<()> {
    for ligne in entree.lines() {
        let ligne = ligne?;

        let commande = match interpreter(&ligne) {
            Ok(c) => c,
            Err(e) => {
                writeln!(sortie, "erreur : {e}")?;
                continue;
            }
        };

        if !executer(commande, &mut sortie, calc)? {
            break;
        }
    }
    sortie.flush()
}

/// Exécute une commande ; `false` = fin de session.
fn executer<W: Write>(commande: Commande, sortie: &mut W, calc: &mut Calculatrice) -> io::Result<bool> {
    match commande {
        Commande::Vide => {}
        Commande::Quitter => return Ok(false),

        Commande::Calcul(expr) => afficher_calcul(&expr, sortie, calc)?,

        Commande::Historique => {
            let entrees = calc.historique().list();
            if entrees.is_empty() {
                writeln!(sortie, "(historique vide)")?;
            }
            for e in entrees {
                writeln!(sortie, "{}  {}", e.id, e)?;
            }
        }

        Commande::Effacer => {
            calc.effacer_historique();
            writeln!(sortie, "historique effacé")?;
        }

        Commande::Reutiliser { id, quoi } => match calc.reutiliser(id, quoi) {
            Some(texte) => afficher_calcul(&texte, sortie, calc)?,
            None => writeln!(sortie, "erreur : aucune entrée {id}")?,
        },

        Commande::Mode(m) => {
            calc.set_mode(m);
            writeln!(sortie, "mode : {}", m.libelle())?;
        }

        Commande::Convertir { valeur, de, vers } => match calc.convertir(&valeur, de, vers) {
            Ok(r) => writeln!(sortie, "{r}")?,
            Err(e) => writeln!(sortie, "erreur : {e}")?,
        },
    }
    Ok(true)
}

fn afficher_calcul<W: Write>(expr: &str, sortie: &mut W, calc: &mut Calculatrice) -> io::Result<()> {
    match calc.calculer(expr) {
        Ok(c) => writeln!(sortie, "{}", c.texte),
        Err(e) => writeln!(sortie, "erreur : {e}"),
    }
}
