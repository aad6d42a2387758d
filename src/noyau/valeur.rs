// src/noyau/valeur.rs
//
// Frontière dynamique : un opérande étiqueté (fraction / entier / flottant).
// Le typage statique de Fraction suffit dans le noyau ; ici seulement,
// l’étiquette est vérifiée à l’exécution et refusée sans conversion implicite.

use num_bigint::BigInt;

use super::erreur::FractionError;
use super::fraction::Fraction;

#[derive(Clone, Debug, PartialEq)]
pub enum Nombre {
    Fraction(Fraction),
    Entier(BigInt),
    Flottant(f64),
}

impl Nombre {
    pub fn nature(&self) -> &'static str {
        match self {
            Nombre::Fraction(_) => "fraction",
            Nombre::Entier(_) => "entier",
            Nombre::Flottant(_) => "flottant",
        }
    }

    /// La fraction portée, sinon `TypeIncompatible` (pas de coercition 1 -> 1/1).
    pub fn exiger_fraction(&self, op: Operation) -> Result<&Fraction, FractionError> {
        match self {
            Nombre::Fraction(f) => Ok(f),
            autre => Err(FractionError::TypeIncompatible {
                operation: op.libelle(),
                trouve: autre.nature(),
            }),
        }
    }
}

impl From<Fraction> for Nombre {
    fn from(f: Fraction) -> Self {
        Nombre::Fraction(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Puissance,
    Egalite,
    Adjacence,
}

impl Operation {
    pub const TOUTES: [Operation; 7] = [
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Puissance,
        Operation::Egalite,
        Operation::Adjacence,
    ];

    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Soustraction => "-",
            Operation::Multiplication => "*",
            Operation::Division => "/",
            Operation::Puissance => "^",
            Operation::Egalite => "==",
            Operation::Adjacence => "adj",
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Soustraction => "soustraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Puissance => "puissance",
            Operation::Egalite => "égalité",
            Operation::Adjacence => "adjacence",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Resultat {
    Fraction(Fraction),
    Booleen(bool),
}

/// Applique `a op b` après vérification de l’étiquette de `b`.
pub fn operer(a: &Fraction, op: Operation, b: &Nombre) -> Result<Resultat, FractionError> {
    let b = b.exiger_fraction(op)?;

    let r = match op {
        Operation::Addition => Resultat::Fraction(a.add(b)),
        Operation::Soustraction => Resultat::Fraction(a.subtract(b)),
        Operation::Multiplication => Resultat::Fraction(a.multiply(b)),
        Operation::Division => Resultat::Fraction(a.divide(b)?),
        Operation::Puissance => Resultat::Fraction(a.power(b)?),
        Operation::Egalite => Resultat::Booleen(a.equals(b)),
        Operation::Adjacence => Resultat::Booleen(a.is_adjacent_to(b)),
    };
    Ok(r)
}
