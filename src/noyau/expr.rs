// src/noyau/expr.rs
//
// AST flottant (construit puis jeté à chaque évaluation).
// - Num   : littéral décimal
// - Const : π ou e (liste blanche fermée)
// - Appel : fonction unaire de la liste blanche
// - Somme / Produit : chaînes associatives à gauche, à plat (n termes = 1 niveau)
//
// IMPORTANT (SAFE):
// - Fonction et Constante sont des énumérations fermées.
//   Ajouter une fonction = ajouter une variante (match exhaustif vérifié à la compilation).

use std::fmt;

/// Fonctions unaires autorisées.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log, // base 10
    Ln,
    Exp,
    Sqrt,
}

impl Fonction {
    pub const TOUTES: [Fonction; 7] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Log,
        Fonction::Ln,
        Fonction::Exp,
        Fonction::Sqrt,
    ];

    /// Nom déjà normalisé en minuscules.
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        Self::TOUTES.into_iter().find(|f| f.nom() == nom)
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Exp => "exp",
            Fonction::Sqrt => "sqrt",
        }
    }

    pub fn est_trigo(self) -> bool {
        matches!(self, Fonction::Sin | Fonction::Cos | Fonction::Tan)
    }
}

/// Constantes autorisées (substituées comme littéraux).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "pi" => Some(Constante::Pi),
            "e" => Some(Constante::E),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Constante::Pi => "pi",
            Constante::E => "e",
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }
}

/// Opérateur d’une chaîne additive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpAdditif {
    Plus,
    Moins,
}

/// Opérateur d’une chaîne multiplicative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpMultiplicatif {
    Fois,
    Divise,
}

impl OpAdditif {
    pub fn symbole(self) -> char {
        match self {
            OpAdditif::Plus => '+',
            OpAdditif::Moins => '-',
        }
    }
}

impl OpMultiplicatif {
    pub fn symbole(self) -> char {
        match self {
            OpMultiplicatif::Fois => '*',
            OpMultiplicatif::Divise => '/',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Const(Constante),

    Neg(Box<Expr>),
    Pourcent(Box<Expr>), // v% => v/100

    // tête, puis termes appliqués de gauche à droite : 1 - 2 + 3 = Somme(1, [-2, +3])
    Somme(Box<Expr>, Vec<(OpAdditif, Expr)>),
    Produit(Box<Expr>, Vec<(OpMultiplicatif, Expr)>),

    Pow(Box<Expr>, Box<Expr>),

    Appel(Fonction, Box<Expr>),
}

impl Expr {
    /// Profondeur de l’arbre (bornée par la longueur de l’entrée).
    pub fn profondeur(&self) -> usize {
        use Expr::*;
        match self {
            Num(_) | Const(_) => 1,
            Neg(x) | Pourcent(x) | Appel(_, x) => 1 + x.profondeur(),
            Somme(tete, termes) => {
                1 + termes
                    .iter()
                    .map(|(_, t)| t.profondeur())
                    .fold(tete.profondeur(), usize::max)
            }
            Produit(tete, termes) => {
                1 + termes
                    .iter()
                    .map(|(_, t)| t.profondeur())
                    .fold(tete.profondeur(), usize::max)
            }
            Pow(a, b) => 1 + a.profondeur().max(b.profondeur()),
        }
    }
}

/// Affichage entièrement parenthésé (journal de debug) : la structure se lit sans ambiguïté.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;
        match self {
            Num(v) => write!(f, "{v}"),
            Const(k) => write!(f, "{}", k.nom()),
            Neg(x) => write!(f, "(-{x})"),
            Pourcent(x) => write!(f, "({x}%)"),
            Somme(tete, termes) => {
                write!(f, "({tete}")?;
                for (op, t) in termes {
                    write!(f, " {} {t}", op.symbole())?;
                }
                write!(f, ")")
            }
            Produit(tete, termes) => {
                write!(f, "({tete}")?;
                for (op, t) in termes {
                    write!(f, " {} {t}", op.symbole())?;
                }
                write!(f, ")")
            }
            Pow(a, b) => write!(f, "({a} ^ {b})"),
            Appel(fun, x) => write!(f, "{}({x})", fun.nom()),
        }
    }
}
