//! Calculatrice Fraction — fractions exactes, toujours réduites.
//!
//! Le noyau ne dépend d’aucune UI : `noyau::Fraction` s’utilise seul,
//! la calculatrice (binaire) n’en est qu’un client.

pub mod noyau;

pub use noyau::{Fraction, FractionError};
