//! Tests scientifiques (campagne) : propriétés attendues du type Fraction.
//!
//! But : vérifier les lois de l’arithmétique exacte sur des cas choisis.
//! - formes réduites / signe au numérateur
//! - textes exacts (réduit, mixte)
//! - erreurs distinguables (argument, division, type, domaine)
//! - cohérence avec BigRational (oracle indépendant)

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::{eval_operation, operer, Fraction, FractionError, Nombre, Operation};

fn f(n: i64, d: i64) -> Fraction {
    Fraction::new(n, d).unwrap_or_else(|e| panic!("f({n},{d}) err={e}"))
}

fn assert_reduite(x: &Fraction) {
    assert!(x.denominator().is_positive(), "den <= 0 : {x}");
    let g = num_integer::gcd(x.numerator().abs(), x.denominator().clone());
    assert!(g.is_one(), "non réduite : {x}");
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Construction ------------------------ */

#[test]
fn sci_construction_invariants() {
    for (n, d) in [(4, 8), (-4, 8), (4, -8), (-4, -8), (0, 5), (0, -5), (12, 18), (-35, 49)] {
        let x = f(n, d);
        assert_reduite(&x);
        // même valeur que n/d
        assert_eq!(
            BigRational::from(x.clone()),
            BigRational::new(BigInt::from(n), BigInt::from(d)),
            "({n},{d})"
        );
    }
}

#[test]
fn sci_denominateur_nul_toujours_refuse() {
    for n in [-3, 0, 1, 42] {
        assert_eq!(Fraction::new(n, 0), Err(FractionError::ArgumentInvalide));
    }
}

#[test]
fn sci_textes() {
    assert_eq!(f(4, 8), f(1, 2));
    assert_eq!(f(-4, 8).to_string(), "-1/2");
    assert_eq!(f(3, 1).to_string(), "3");
    assert_eq!(f(7, 3).as_mixed_number(), "2 1/3");
    assert_eq!(f(4, 2).as_mixed_number(), "2");
}

/* ------------------------ Lois algébriques ------------------------ */

#[test]
fn sci_aller_retour_division() {
    let valeurs = [f(1, 2), f(-3, 4), f(5, 1), f(7, 9), f(-11, 13)];
    for a in &valeurs {
        for b in &valeurs {
            let q = a.divide(b).unwrap();
            assert_eq!(q.multiply(b), *a, "({a} / {b}) * {b}");
        }
    }
}

#[test]
fn sci_commutativite() {
    let valeurs = [f(0, 1), f(1, 2), f(-2, 3), f(9, 4)];
    for a in &valeurs {
        for b in &valeurs {
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
        }
    }
}

#[test]
fn sci_zero_algebrique() {
    // (1/2 + 1/3) - 5/6 = 0
    assert!((&f(1, 2) + &f(1, 3)).subtract(&f(5, 6)).is_zero());
    // (2/3 * 3/4) - 1/2 = 0
    assert!((&f(2, 3) * &f(3, 4)).subtract(&f(1, 2)).is_zero());
}

/* ------------------------ Erreurs distinguables ------------------------ */

#[test]
fn sci_erreurs() {
    assert_eq!(
        f(1, 2).divide(&f(0, 1)),
        Err(FractionError::DivisionParZero)
    );
    assert_eq!(f(2, 3).power(&f(2, 1)), Ok(f(4, 9)));
    assert!(matches!(
        f(-1, 2).power(&f(1, 2)),
        Err(FractionError::Domaine(_))
    ));
    assert!(matches!(
        operer(&f(1, 2), Operation::Addition, &Nombre::Entier(BigInt::one())),
        Err(FractionError::TypeIncompatible { .. })
    ));
}

#[test]
fn sci_adjacence() {
    assert!(f(1, 2).is_adjacent_to(&f(1, 3)));
    assert!(!f(2, 2).is_adjacent_to(&f(1, 3)));
    // voisins de Farey : 1/3 et 2/5 diffèrent de 1/15
    assert!(f(2, 5).is_adjacent_to(&f(1, 3)));
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_harmonique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    // H(60) exact, comparé à l’oracle BigRational
    let mut h = Fraction::default();
    let mut oracle = BigRational::zero();
    for k in 1..=60i64 {
        h = h.add(&f(1, k));
        oracle += BigRational::new(BigInt::one(), BigInt::from(k));
        budget(t0, max);
    }

    assert_reduite(&h);
    assert_eq!(BigRational::from(h.clone()), oracle);
    assert!(!h.is_integer());
}

#[test]
fn sci_stress_bigint_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    // gros numérateur contrôlé (100 chiffres)
    let big: BigInt = "9".repeat(100).parse().unwrap();
    let x = Fraction::new(big.clone(), 7).unwrap().add(&f(1, 7));
    budget(t0, max);

    // (10^100 - 1 + 1) / 7
    assert_eq!(x.numerator(), &(big + 1));
    assert_reduite(&x);
}

/* ------------------------ Pipeline : cohérence minimale ------------------------ */

#[test]
fn sci_pipeline_coherence() {
    let (r, _d) = eval_operation(&f(2, 3), Operation::Puissance, &f(2, 1).into(), 10).unwrap();
    assert_eq!(r.exact, "4/9");
    assert_eq!(r.lecture.as_deref(), Some("0.4444444444"));
    assert!(r.flottant.is_some_and(|v| (v - 4.0 / 9.0).abs() < 1e-12));
}
