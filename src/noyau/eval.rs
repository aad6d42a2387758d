//! Noyau — évaluation d’une opération `a op b`
//!
//! vérif. opérande -> formule brute (termes non réduits) -> constructeur (réduction)
//!        -> EXACT -> nombre mixte -> ΣLocal -> propriétés
//!
//! La démarche reproduit la formule utilisée avant réduction,
//! pour garder la “preuve” lisible hors du type Fraction.

use num_bigint::BigInt;
use tracing::{debug, warn};

use super::erreur::FractionError;
use super::fraction::Fraction;
use super::lecture::lecture_decimale;
use super::valeur::{operer, Nombre, Operation, Resultat};

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub operandes: String,
    pub formule: String,
    pub reduction: String,
    pub note: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Proprietes {
    pub zero: bool,
    pub entier: bool,
    pub propre: bool,
    pub unitaire: bool,
}

impl Proprietes {
    pub fn de(f: &Fraction) -> Self {
        Self {
            zero: f.is_zero(),
            entier: f.is_integer(),
            propre: f.is_proper(),
            unitaire: f.is_unit(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ResultatNoyau {
    pub exact: String,
    pub mixte: Option<String>,
    pub lecture: Option<String>,
    pub flottant: Option<f64>,
    pub proprietes: Option<Proprietes>,
}

/// API publique : évalue `a op b` et retourne:
/// - EXACT (forme réduite, ou "vrai"/"faux" pour == et adj)
/// - nombre mixte + ΣLocal (lecture tronquée à `digits`) + flottant + propriétés
/// - Démarche (opérandes, formule brute, réduction)
pub fn eval_operation(
    a: &Fraction,
    op: Operation,
    b: &Nombre,
    digits: usize,
) -> Result<(ResultatNoyau, DemarcheNoyau), FractionError> {
    let res = match operer(a, op, b) {
        Ok(r) => r,
        Err(e) => {
            warn!(a = %a, op = op.symbole(), nature = b.nature(), erreur = %e, "opération refusée");
            return Err(e);
        }
    };

    // Ici b est forcément une fraction (operer a vérifié l’étiquette).
    let fb = b.exiger_fraction(op)?;

    let sortie = match &res {
        Resultat::Fraction(r) => ResultatNoyau {
            exact: r.to_string(),
            mixte: Some(r.as_mixed_number()),
            lecture: Some(lecture_decimale(r, digits)),
            flottant: Some(r.to_f64()),
            proprietes: Some(Proprietes::de(r)),
        },
        Resultat::Booleen(v) => ResultatNoyau {
            exact: if *v { "vrai" } else { "faux" }.to_string(),
            ..ResultatNoyau::default()
        },
    };

    let d = DemarcheNoyau {
        operandes: format!("a = {a} ; b = {fb}"),
        formule: formule_brute(a, op, fb),
        reduction: format!("{a} {} {fb} = {}", op.symbole(), sortie.exact),
        note: note(op).into(),
    };

    debug!(a = %a, op = op.symbole(), b = %fb, resultat = %sortie.exact, "opération évaluée");

    Ok((sortie, d))
}

/// Formule avant réduction (termes calculés, pas encore divisés par le pgcd).
fn formule_brute(a: &Fraction, op: Operation, b: &Fraction) -> String {
    let (an, ad) = (a.numerator(), a.denominator());
    let (bn, bd) = (b.numerator(), b.denominator());

    match op {
        Operation::Addition => {
            let n: BigInt = an * bd + ad * bn;
            let d: BigInt = ad * bd;
            format!("({an}×{bd} + {ad}×{bn}) / ({ad}×{bd}) = {n}/{d}")
        }
        Operation::Soustraction => {
            let n: BigInt = an * bd - ad * bn;
            let d: BigInt = ad * bd;
            format!("({an}×{bd} − {ad}×{bn}) / ({ad}×{bd}) = {n}/{d}")
        }
        Operation::Multiplication => {
            let n: BigInt = an * bn;
            let d: BigInt = ad * bd;
            format!("({an}×{bn}) / ({ad}×{bd}) = {n}/{d}")
        }
        Operation::Division => {
            let n: BigInt = an * bd;
            let d: BigInt = ad * bn;
            format!("({an}×{bd}) / ({ad}×{bn}) = {n}/{d}")
        }
        Operation::Puissance => {
            if b.is_integer() {
                format!("({an}^{bn}) / ({ad}^{bn})")
            } else {
                format!("racine {bd}-ième de ({an}^{bn}) / ({ad}^{bn})")
            }
        }
        Operation::Egalite => {
            let g: BigInt = an * bd;
            let dr: BigInt = ad * bn;
            format!("{an}×{bd} = {g} ; {ad}×{bn} = {dr}")
        }
        Operation::Adjacence => {
            let diff = a.subtract(b);
            format!("a − b = {diff} ; |numérateur| = {}", diff.numerator().magnitude())
        }
    }
}

fn note(op: Operation) -> &'static str {
    match op {
        Operation::Egalite => "Égalité par produit en croix (formes réduites, dénominateurs > 0).",
        Operation::Adjacence => "Adjacentes si a − b est une fraction unitaire (|num| = 1).",
        Operation::Puissance => {
            "Exposant fractionnaire : racine entière exacte vérifiée (r^q = x), sinon refus."
        }
        _ => "Formule brute -> constructeur (pgcd, signe au numérateur) -> forme réduite.",
    }
}
