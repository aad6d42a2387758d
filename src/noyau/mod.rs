//! Noyau exact : fractions
//!
//! Organisation interne :
//! - fraction.rs : type Fraction (réduction, 4 opérations, puissance, propriétés)
//! - erreur.rs   : taxonomie des erreurs (argument, division, type, domaine)
//! - valeur.rs   : frontière dynamique Nombre (fraction / entier / flottant) + dispatch
//! - lecture.rs  : ΣLocal (décimal tronqué, calcul entier)
//! - eval.rs     : pipeline complet a op b -> EXACT + démarche

pub mod erreur;
pub mod eval;
pub mod fraction;
pub mod lecture;
pub mod valeur;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::FractionError;
pub use eval::{eval_operation, DemarcheNoyau, Proprietes, ResultatNoyau};
pub use fraction::Fraction;
pub use valeur::{operer, Nombre, Operation, Resultat};
