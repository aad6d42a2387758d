// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Chaque violation remonte immédiatement (pas de rattrapage interne) :
// l’appelant décide quoi faire du message.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FractionError {
    /// Dénominateur nul à la construction.
    #[error("argument invalide : le dénominateur ne peut pas être nul")]
    ArgumentInvalide,

    /// Division par une fraction nulle, ou 0 élevé à une puissance négative.
    #[error("division par zéro")]
    DivisionParZero,

    /// Opérande qui n’est pas une fraction (aucune conversion implicite).
    #[error("type incompatible : {operation} exige deux fractions (reçu : {trouve})")]
    TypeIncompatible {
        operation: &'static str,
        trouve: &'static str,
    },

    /// Hors du domaine réel / non représentable en entiers.
    #[error("domaine : {0}")]
    Domaine(String),
}

impl FractionError {
    pub(crate) fn domaine(msg: impl Into<String>) -> Self {
        FractionError::Domaine(msg.into())
    }
}
