//! Tests fuzz safe : robustesse + déterminisme + lois algébriques.
//!
//! But : marteler le type Fraction sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - numérateurs / dénominateurs bornés
//! - budget temps global
//! - invariant clé : toute fraction construite est réduite, dénominateur > 0

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

use super::{eval_operation, Fraction, FractionError, Nombre, Operation};

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

/* ------------------------ Helpers fuzz ------------------------ */

fn gen_i64(rng: &mut Rng, borne: u32) -> i64 {
    let v = rng.pick(borne) as i64;
    if rng.coin() {
        -v
    } else {
        v
    }
}

/// Fraction aléatoire (dénominateur jamais nul, signe des deux côtés).
fn gen_fraction(rng: &mut Rng) -> Fraction {
    let n = gen_i64(rng, 200);
    let mut d = gen_i64(rng, 60);
    if d == 0 {
        d = 1;
    }
    Fraction::new(n, d).unwrap_or_else(|e| panic!("gen ({n},{d}) err={e}"))
}

fn check_reduite(x: &Fraction) {
    assert!(x.denominator().is_positive(), "den <= 0 : {x}");
    assert!(
        num_integer::gcd(x.numerator().clone(), x.denominator().clone()).is_one(),
        "non réduite : {x}"
    );
}

fn oracle(x: &Fraction) -> BigRational {
    BigRational::from(x.clone())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_construction_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let n = gen_i64(&mut rng, 10_000);
        let d = gen_i64(&mut rng, 10_000);

        match Fraction::new(n, d) {
            Ok(x) => {
                assert_ne!(d, 0);
                check_reduite(&x);
                assert_eq!(
                    oracle(&x),
                    BigRational::new(BigInt::from(n), BigInt::from(d))
                );
            }
            Err(e) => {
                assert_eq!(d, 0, "erreur non attendue: ({n},{d}) err={e}");
                assert_eq!(e, FractionError::ArgumentInvalide);
            }
        }
    }
}

#[test]
fn fuzz_safe_lois_et_oracle() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let a = gen_fraction(&mut rng);
        let b = gen_fraction(&mut rng);

        let s = &a + &b;
        let p = &a * &b;
        check_reduite(&s);
        check_reduite(&p);

        // commutativité
        assert_eq!(s, &b + &a);
        assert_eq!(p, &b * &a);

        // oracle BigRational
        assert_eq!(oracle(&s), oracle(&a) + oracle(&b));
        assert_eq!(oracle(&(&a - &b)), oracle(&a) - oracle(&b));
        assert_eq!(oracle(&p), oracle(&a) * oracle(&b));

        // a - a == 0
        assert!(a.subtract(&a).is_zero());

        // aller-retour division
        match a.divide(&b) {
            Ok(q) => {
                check_reduite(&q);
                assert_eq!(q.multiply(&b), a, "({a} / {b}) * {b}");
            }
            Err(e) => {
                assert!(b.is_zero(), "erreur non attendue: {a} / {b} err={e}");
                assert_eq!(e, FractionError::DivisionParZero);
            }
        }

        // ordre cohérent avec l’oracle
        assert_eq!(a.cmp(&b), oracle(&a).cmp(&oracle(&b)));
    }
}

#[test]
fn fuzz_safe_puissances_entieres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..150 {
        budget(t0, max);

        let a = gen_fraction(&mut rng);
        let k = gen_i64(&mut rng, 6);

        match a.power(&Fraction::from(k)) {
            Ok(r) => {
                check_reduite(&r);
                assert_eq!(oracle(&r), oracle(&a).pow(k as i32));
            }
            Err(e) => {
                assert!(a.is_zero() && k < 0, "erreur non attendue: {a}^{k} err={e}");
                assert_eq!(e, FractionError::DivisionParZero);
            }
        }
    }
}

#[test]
fn fuzz_safe_racines_de_carres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xFEED_u64);
    let demi = Fraction::new(1, 2).unwrap();

    for _ in 0..150 {
        budget(t0, max);

        let a = gen_fraction(&mut rng);
        let carre = a.multiply(&a);

        // (a²)^(1/2) == |a|
        let r = carre.power(&demi).unwrap_or_else(|e| panic!("({carre})^(1/2) err={e}"));
        let abs_a = if a.numerator().is_negative() { -&a } else { a.clone() };
        assert_eq!(r, abs_a);

        // base négative + exposant fractionnaire => domaine
        if a.numerator().is_negative() {
            assert!(matches!(a.power(&demi), Err(FractionError::Domaine(_))));
        }
    }
}

#[test]
fn fuzz_safe_pipeline_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    // Même seed => mêmes opérations => mêmes sorties (déterminisme)
    let sorties = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        let mut out = Vec::new();
        for _ in 0..80 {
            budget(t0, max);

            let a = gen_fraction(&mut rng);
            let op = Operation::TOUTES[rng.pick(Operation::TOUTES.len() as u32) as usize];
            let b = match rng.pick(6) {
                0 => Nombre::Entier(BigInt::from(gen_i64(&mut rng, 9))),
                1 => Nombre::Flottant(0.5),
                _ => Nombre::Fraction(gen_fraction(&mut rng)),
            };

            let s = match eval_operation(&a, op, &b, 12) {
                Ok((r, _d)) => r.exact,
                Err(e) => {
                    // seules erreurs admises en fuzz
                    assert!(
                        matches!(
                            e,
                            FractionError::TypeIncompatible { .. }
                                | FractionError::DivisionParZero
                                | FractionError::Domaine(_)
                        ),
                        "erreur non attendue: {a} {} {b:?} err={e}",
                        op.symbole()
                    );
                    e.to_string()
                }
            };
            out.push(s);
        }
        out
    };

    assert_eq!(sorties(0xACE_u64), sorties(0xACE_u64));
}
