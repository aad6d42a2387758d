// src/noyau/fraction.rs
//
// Fraction exacte (valeur immuable, toujours réduite).
//
// Invariants (après CHAQUE construction) :
// - dénominateur > 0 (le signe vit dans le numérateur)
// - pgcd(|num|, den) == 1 ; zéro est toujours 0/1
//
// Toute opération passe par le constructeur : jamais de mutation des opérandes.
// Entiers BigInt : aucune opération ne déborde.

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::erreur::FractionError;

/// Garde-fou : taille estimée maximale (en bits) d’une puissance entière,
/// soit `max(bits(num), bits(den)) × |k|`. Environ 315 000 chiffres décimaux.
pub const BITS_PUISSANCE_MAX: u64 = 1 << 20;

#[derive(Clone, Debug)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Default for Fraction {
    /// 0/1
    fn default() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }
}

impl Fraction {
    /* ------------------------ Construction ------------------------ */

    /// Construit et réduit `num/den`.
    ///
    /// Erreur `ArgumentInvalide` si `den == 0`.
    pub fn new(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Result<Self, FractionError> {
        let num = num.into();
        let den = den.into();

        if den.is_zero() {
            return Err(FractionError::ArgumentInvalide);
        }

        // pgcd >= 1 ici (den != 0), et pgcd(0, d) = |d| => 0 devient 0/1
        let g = num.gcd(&den);
        let mut numerator = num / &g;
        let mut denominator = den / &g;

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// n/1 (infaillible).
    pub fn entier(n: impl Into<BigInt>) -> Self {
        Self {
            numerator: n.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /* ------------------------ Textes ------------------------ */

    /// Nombre mixte : partie entière + fraction propre ("2 1/3").
    ///
    /// Règle de signe : quotient tronqué vers zéro (BigInt), le signe est porté
    /// par la partie entière et le reste est pris en valeur absolue, donc
    /// -7/3 => "-2 1/3" (et non "-3 2/3" comme avec une division plancher).
    /// Partie entière nulle : le signe passe sur la fraction, -1/3 => "-1/3"
    /// (le simple "r/den" donnerait "1/3" et perdrait le signe).
    pub fn as_mixed_number(&self) -> String {
        let q = &self.numerator / &self.denominator;
        let r = (&self.numerator % &self.denominator).abs();

        if r.is_zero() {
            q.to_string()
        } else if q.is_zero() {
            // |num| < den : la fraction elle-même est déjà la forme mixte
            self.to_string()
        } else {
            format!("{q} {r}/{}", self.denominator)
        }
    }

    /* ------------------------ Arithmétique ------------------------ */

    pub fn add(&self, other: &Fraction) -> Fraction {
        let num = &self.numerator * &other.denominator + &self.denominator * &other.numerator;
        let den = &self.denominator * &other.denominator;
        Self::reduire(num, den)
    }

    pub fn subtract(&self, other: &Fraction) -> Fraction {
        let num = &self.numerator * &other.denominator - &self.denominator * &other.numerator;
        let den = &self.denominator * &other.denominator;
        Self::reduire(num, den)
    }

    pub fn multiply(&self, other: &Fraction) -> Fraction {
        let num = &self.numerator * &other.numerator;
        let den = &self.denominator * &other.denominator;
        Self::reduire(num, den)
    }

    /// Erreur `DivisionParZero` si `other` vaut 0.
    pub fn divide(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        if other.numerator.is_zero() {
            return Err(FractionError::DivisionParZero);
        }
        let num = &self.numerator * &other.denominator;
        let den = &self.denominator * &other.numerator;
        Fraction::new(num, den)
    }

    /// Puissance exacte `self ^ exposant`.
    ///
    /// - bases 0, 1 et -1 : résultat direct, quel que soit l’exposant
    /// - exposant entier k (k < 0 => inverse ; 0^k avec k < 0 => division par zéro)
    /// - exposant p/q : base >= 0 exigée, puis racine q-ième EXACTE du numérateur
    ///   et du dénominateur de `self^p` (racine entière vérifiée : r^q == x).
    ///   Sinon `Domaine` (résultat non représentable).
    /// - `Domaine` aussi si `self^p` dépasse `BITS_PUISSANCE_MAX`.
    pub fn power(&self, exposant: &Fraction) -> Result<Fraction, FractionError> {
        if let Some(r) = self.puissance_triviale(exposant)? {
            return Ok(r);
        }

        if exposant.denominator.is_one() {
            return self.puissance_entiere(&exposant.numerator);
        }

        if self.numerator.is_negative() {
            return Err(FractionError::domaine(
                "puissance fractionnaire d’un nombre négatif",
            ));
        }

        let non_representable =
            || FractionError::domaine("résultat non représentable comme fraction d’entiers");

        // base hors {0, 1} : une racine q-ième exacte exige au moins q bits,
        // impossible sous la borne de taille si q ne tient pas sur 32 bits
        let q = exposant.denominator.to_u32().ok_or_else(non_representable)?;

        let elevee = self.puissance_entiere(&exposant.numerator)?;

        let num = racine_exacte(&elevee.numerator, q);
        let den = racine_exacte(&elevee.denominator, q);

        match (num, den) {
            (Some(n), Some(d)) => Fraction::new(n, d),
            _ => Err(non_representable()),
        }
    }

    /// 0, 1 et -1 : pas de calcul, donc pas de garde-fou de taille.
    fn puissance_triviale(&self, exposant: &Fraction) -> Result<Option<Fraction>, FractionError> {
        if self.numerator.is_zero() {
            return match exposant.numerator.sign() {
                Sign::Minus => Err(FractionError::DivisionParZero),
                Sign::NoSign => Ok(Some(Fraction::entier(1))),
                Sign::Plus => Ok(Some(Fraction::default())),
            };
        }

        if !self.denominator.is_one() || !self.numerator.magnitude().is_one() {
            return Ok(None);
        }

        if self.numerator.is_positive() {
            return Ok(Some(Fraction::entier(1)));
        }

        // -1 : seulement pour un exposant entier (la parité décide)
        if exposant.denominator.is_one() {
            let signe = if exposant.numerator.is_even() { 1 } else { -1 };
            return Ok(Some(Fraction::entier(signe)));
        }
        Ok(None)
    }

    fn puissance_entiere(&self, k: &BigInt) -> Result<Fraction, FractionError> {
        let bits = self.numerator.bits().max(self.denominator.bits());
        let e = k
            .magnitude()
            .to_u32()
            .filter(|e| u64::from(*e).saturating_mul(bits) <= BITS_PUISSANCE_MAX)
            .ok_or_else(|| FractionError::domaine("résultat trop grand"))?;

        if k.is_negative() {
            if self.numerator.is_zero() {
                return Err(FractionError::DivisionParZero);
            }
            Fraction::new(self.denominator.pow(e), self.numerator.pow(e))
        } else {
            Fraction::new(self.numerator.pow(e), self.denominator.pow(e))
        }
    }

    /// Égalité par produit en croix.
    pub fn equals(&self, other: &Fraction) -> bool {
        &self.numerator * &other.denominator == &self.denominator * &other.numerator
    }

    /// Valeur décimale approchée.
    ///
    /// Via `BigRational` : le quotient est mis à l’échelle avant conversion,
    /// donc numérateur et dénominateur hors de la plage f64 restent corrects
    /// (10^400 + 1 / 10^400 => 1.0). Seul le quotient lui-même peut saturer.
    pub fn to_f64(&self) -> f64 {
        BigRational::new_raw(self.numerator.clone(), self.denominator.clone())
            .to_f64()
            .unwrap_or(f64::NAN)
    }

    /* ------------------------ Propriétés ------------------------ */

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// 8/4, 3, 2/2, ...
    pub fn is_integer(&self) -> bool {
        (&self.numerator % &self.denominator).is_zero()
    }

    /// |valeur| < 1
    pub fn is_proper(&self) -> bool {
        self.numerator.abs() < self.denominator
    }

    /// |numérateur| == 1 (forme réduite)
    pub fn is_unit(&self) -> bool {
        self.numerator.abs().is_one()
    }

    /// Deux fractions adjacentes diffèrent d’une fraction unitaire.
    pub fn is_adjacent_to(&self, other: &Fraction) -> bool {
        self.subtract(other).is_unit()
    }

    /* ------------------------ Interne ------------------------ */

    /// Réduction quand le dénominateur est non nul par construction
    /// (produit de deux dénominateurs > 0).
    fn reduire(num: BigInt, den: BigInt) -> Fraction {
        debug_assert!(den.is_positive());
        let g = num.gcd(&den);
        Fraction {
            numerator: num / &g,
            denominator: den / &g,
        }
    }
}

/// Racine q-ième entière exacte de x >= 0 (None si x n’est pas une puissance q-ième).
fn racine_exacte(x: &BigInt, q: u32) -> Option<BigInt> {
    if x.is_negative() {
        return None;
    }
    let r = x.nth_root(q);
    if r.pow(q) == *x {
        Some(r)
    } else {
        None
    }
}

/* ------------------------ Affichage ------------------------ */

impl fmt::Display for Fraction {
    /// "num" si den == 1, sinon "num/den"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/* ------------------------ Comparaisons ------------------------ */

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    // forme réduite canonique => cohérent avec eq
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

/* ------------------------ Conversions ------------------------ */

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Fraction::entier(n)
    }
}

impl From<BigInt> for Fraction {
    fn from(n: BigInt) -> Self {
        Fraction::entier(n)
    }
}

impl From<Fraction> for BigRational {
    fn from(f: Fraction) -> Self {
        BigRational::new_raw(f.numerator, f.denominator)
    }
}

impl TryFrom<BigRational> for Fraction {
    type Error = FractionError;

    fn try_from(r: BigRational) -> Result<Self, Self::Error> {
        let (n, d) = r.into_raw();
        Fraction::new(n, d)
    }
}

/* ------------------------ Sucre opérateurs (infaillibles seulement) ------------------------ */

impl std::ops::Add<&Fraction> for &Fraction {
    type Output = Fraction;
    fn add(self, rhs: &Fraction) -> Fraction {
        Fraction::add(self, rhs)
    }
}

impl std::ops::Add for Fraction {
    type Output = Fraction;
    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::add(&self, &rhs)
    }
}

impl std::ops::Sub<&Fraction> for &Fraction {
    type Output = Fraction;
    fn sub(self, rhs: &Fraction) -> Fraction {
        self.subtract(rhs)
    }
}

impl std::ops::Sub for Fraction {
    type Output = Fraction;
    fn sub(self, rhs: Fraction) -> Fraction {
        self.subtract(&rhs)
    }
}

impl std::ops::Mul<&Fraction> for &Fraction {
    type Output = Fraction;
    fn mul(self, rhs: &Fraction) -> Fraction {
        self.multiply(rhs)
    }
}

impl std::ops::Mul for Fraction {
    type Output = Fraction;
    fn mul(self, rhs: Fraction) -> Fraction {
        self.multiply(&rhs)
    }
}

impl std::ops::Neg for Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        Fraction {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl std::ops::Neg for &Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        -self.clone()
    }
}

/* ------------------------ Tests unitaires ------------------------ */
