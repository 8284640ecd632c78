// src/app/etat.rs
//
// État de session (sans vue).
//
// Rôle : posséder l’historique (injecté), le mode d’angle et la politique d’affichage,
// et enchaîner noyau + historique : évaluer -> formater -> enregistrer.
//
// Contrats :
// - Un échec d’évaluation ne touche jamais l’historique.
// - Aucune nouvelle tentative automatique sur une entrée qui a échoué.
// - La conversion de base est indépendante (ni historique, ni état d’évaluation).

use tracing::debug;

use crate::config::ConfigResolue;
use crate::noyau::bases::{self, Systeme};
use crate::noyau::historique::{EntreeId, Historique, Reutilisation};
use crate::noyau::{evaluate, format_resultat, ConvertError, EvalError, ModeAngle};

/// Résultat d’un calcul réussi (déjà enregistré dans l’historique).
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub id: EntreeId,
    pub valeur: f64,
    pub texte: String,
}

#[derive(Debug)]
pub struct Calculatrice {
    historique: Historique,
    mode: ModeAngle,
    chiffres: usize,
    fraction_max: usize,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::depuis_config(&ConfigResolue::default())
    }
}

impl Calculatrice {
    pub fn depuis_config(config: &ConfigResolue) -> Self {
        Self {
            historique: Historique::avec_capacite(config.capacite_historique),
            mode: config.mode_angle,
            chiffres: config.chiffres_significatifs,
            fraction_max: config.chiffres_fraction,
        }
    }

    /// Remplace l’historique (injection : la session en devient propriétaire).
    pub fn avec_historique(mut self, historique: Historique) -> Self {
        self.historique = historique;
        self
    }

    /* ------------------------ Calcul ------------------------ */

    /// Évalue `expression` ; en cas de succès, enregistre (expression, résultat formaté).
    pub fn calculer(&mut self, expression: &str) -> Result<Calcul, EvalError> {
        let expression = expression.trim();

        let valeur = evaluate(expression, self.mode).inspect_err(|e| {
            debug!(%expression, erreur = %e, "évaluation refusée");
        })?;

        let texte = format_resultat(valeur, self.chiffres);
        let id = self.historique.record(expression, texte.clone());
        Ok(Calcul { id, valeur, texte })
    }

    /// Texte d’une entrée passée, à renvoyer vers l’entrée de la calculatrice.
    pub fn reutiliser(&self, id: EntreeId, quoi: Reutilisation) -> Option<String> {
        self.historique.reutiliser(id, quoi)
    }

    /* ------------------------ Conversion ------------------------ */

    pub fn convertir(&self, valeur: &str, de: Systeme, vers: Systeme) -> Result<String, ConvertError> {
        bases::convertir(valeur, de, vers, self.fraction_max)
    }

    /* ------------------------ Historique ------------------------ */

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    pub fn effacer_historique(&mut self) {
        self.historique.clear();
    }

    /* ------------------------ Paramètres ------------------------ */

    pub fn mode(&self) -> ModeAngle {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ModeAngle) {
        self.mode = mode;
    }

    pub fn chiffres(&self) -> usize {
        self.chiffres
    }
}
