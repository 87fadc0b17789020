//! Noyau d’évaluation
//!
//! Organisation interne :
//! - erreur.rs       : genres d’échec (EvaluationFailure)
//! - normalise.rs    : texte brut -> forme canonique (multiplications explicites)
//! - jetons.rs       : tokenisation
//! - rpn.rs          : shunting-yard
//! - eval.rs         : pile RPN + pipeline complet
//! - scientifique.rs : opérations unaires sur la valeur courante
//! - format.rs       : affichage d’un résultat
//!
//! Aucun état entre deux appels : tout est fonction de ses arguments.

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod rpn;
pub mod scientifique;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvaluationFailure;
pub use eval::{evaluate_expression, evaluate_expression_detail, Demarche};
pub use format::format_nombre;
pub use scientifique::{apply_scientific_operation, parse_operand, OperationKind};
