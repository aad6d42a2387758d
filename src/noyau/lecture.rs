// src/noyau/lecture.rs
//
// ΣLocal : lecture décimale TRONQUÉE d’une fraction, calculée en entiers
// (aucun flottant, donc aucun arrondi caché).

use num_bigint::BigInt;
use num_traits::Signed;

use super::fraction::Fraction;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize, neg: bool) -> String {
    if scaled.is_negative() {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// trunc(f × 10^digits) rendu avec exactement `digits` décimales.
///
/// Le signe vient de la fraction (pas du quotient tronqué) : -1/3 sur 0 chiffre => "-0".
pub fn lecture_decimale(f: &Fraction, digits: usize) -> String {
    let scaled = (f.numerator() * pow10(digits)) / f.denominator();
    scaled_to_decimal(scaled, digits, f.numerator().is_negative())
}
