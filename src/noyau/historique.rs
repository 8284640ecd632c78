// src/noyau/historique.rs
//
// Historique des calculs (ajout seulement, FIFO)
// ---------------------------------------------
// - une entrée ne change plus jamais après l’ajout
// - identifiants croissants, jamais réutilisés (même après clear)
// - capacité optionnelle : la plus ancienne entrée sort quand c’est plein
// - list() rend une copie : une itération n’est jamais invalidée par un ajout

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Local};
use tracing::{debug, info};

/// Identifiant d’une entrée (position dans la séquence des ajouts).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntreeId(pub u64);

impl fmt::Display for EntreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub id: EntreeId,
    pub expression: String,
    pub resultat: String,
    pub horodatage: DateTime<Local>,
}

/// Rendu "expression = résultat" (liste d’historique).
impl fmt::Display for EntreeHistorique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.resultat)
    }
}

/// Ce qu’on récupère d’une entrée pour le renvoyer vers l’entrée de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reutilisation {
    Expression,
    Resultat,
}

#[derive(Debug, Default)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
    prochain: u64,
    capacite: Option<usize>,
}

impl Historique {
    /// Historique sans limite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Historique borné (`Some(0)` est traité comme 1).
    pub fn avec_capacite(capacite: Option<usize>) -> Self {
        Self {
            capacite: capacite.map(|c| c.max(1)),
            ..Self::default()
        }
    }

    pub fn record(&mut self, expression: impl Into<String>, resultat: impl Into<String>) -> EntreeId {
        let id = EntreeId(self.prochain);
        self.prochain += 1;

        if let Some(cap) = self.capacite {
            while self.entrees.len() >= cap {
                if let Some(vieille) = self.entrees.pop_front() {
                    debug!(id = %vieille.id, "historique plein, entrée la plus ancienne retirée");
                }
            }
        }

        self.entrees.push_back(EntreeHistorique {
            id,
            expression: expression.into(),
            resultat: resultat.into(),
            horodatage: Local::now(),
        });
        debug!(%id, "entrée ajoutée à l’historique");
        id
    }

    /// Copie ordonnée, de la plus ancienne à la plus récente.
    pub fn list(&self) -> Vec<EntreeHistorique> {
        self.entrees.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        info!(entrees = self.entrees.len(), "historique effacé");
        self.entrees.clear();
    }

    pub fn get(&self, id: EntreeId) -> Option<EntreeHistorique> {
        // ids strictement croissants => recherche dichotomique
        self.entrees
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .and_then(|i| self.entrees.get(i))
            .cloned()
    }

    /// Texte à renvoyer vers l’entrée (expression ou résultat d’une entrée passée).
    pub fn reutiliser(&self, id: EntreeId, quoi: Reutilisation) -> Option<String> {
        self.get(id).map(|e| match quoi {
            Reutilisation::Expression => e.expression,
            Reutilisation::Resultat => e.resultat,
        })
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn capacite(&self) -> Option<usize> {
        self.capacite
    }
}

/// Historique partagé (variante multi-fenêtres) : un écrivain, plusieurs lecteurs.
///
/// Les entrées étant immuables, un verrou empoisonné reste lisible : on récupère la donnée.
#[derive(Clone, Debug, Default)]
pub struct HistoriquePartage {
    inner: Arc<RwLock<Historique>>,
}

impl HistoriquePartage {
    pub fn new(historique: Historique) -> Self {
        Self {
            inner: Arc::new(RwLock::new(historique)),
        }
    }

    pub fn record(&self, expression: impl Into<String>, resultat: impl Into<String>) -> EntreeId {
        let mut h = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        h.record(expression, resultat)
    }

    pub fn list(&self) -> Vec<EntreeHistorique> {
        let h = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        h.list()
    }

    pub fn clear(&self) {
        let mut h = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        h.clear();
    }

    pub fn get(&self, id: EntreeId) -> Option<EntreeHistorique> {
        let h = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        h.get(id)
    }
}
