// src/noyau/erreur.rs
//
// Taxonomie des échecs du noyau.
// Le shell n’affiche que "Error", mais le genre d’échec reste disponible
// (message secondaire + journal).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationFailure {
    #[error("aucun jeton reconnu dans l’entrée")]
    Tokenization,

    #[error("parenthèses non équilibrées")]
    UnbalancedParentheses,

    #[error("expression mal formée (opérateurs / opérandes)")]
    MalformedPostfix,

    #[error("division par zéro")]
    DivisionByZero,

    #[error("hors domaine : {0}")]
    Domain(String),

    #[error("résultat non fini")]
    NonFiniteResult,

    #[error("opération inconnue : '{0}'")]
    UnknownOperation(String),
}

/// Garde-fou final : NaN / ±∞ ne sortent jamais du noyau.
pub fn fini(v: f64) -> Result<f64, EvaluationFailure> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EvaluationFailure::NonFiniteResult)
    }
}
