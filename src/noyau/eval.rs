//! Noyau — évaluation (pipeline réel)
//!
//! normalize -> tokenize -> RPN -> pile numérique -> garde-fou “fini”
//!
//! Chaque étape échoue tôt avec un genre d’échec précis ; aucun résultat partiel.

use log::{debug, warn};

use super::erreur::{fini, EvaluationFailure};
use super::jetons::{format_tokens, tokenize, Operateur, Tok};
use super::normalise::normalize;
use super::rpn::to_rpn;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
}

/// Applique `a <op> b` (a empilé avant b).
fn applique(op: Operateur, a: f64, b: f64) -> Result<f64, EvaluationFailure> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Minus => Ok(a - b),
        Operateur::Star => Ok(a * b),
        Operateur::Slash => {
            if b == 0.0 {
                return Err(EvaluationFailure::DivisionByZero);
            }
            Ok(a / b)
        }
        // "a pour cent de b"
        Operateur::Percent => Ok(a / 100.0 * b),
        Operateur::Caret => Ok(a.powf(b)),
    }
}

/// Réduit une RPN à une seule valeur.
///
/// Échecs :
/// - RPN vide, opérateur sans deux valeurs, ou plus d’une valeur restante
///   => `MalformedPostfix`
/// - division par zéro => `DivisionByZero`
/// - parenthèse égarée (ne devrait pas sortir de `to_rpn`) => `UnbalancedParentheses`
pub fn evaluate(rpn: &[Tok]) -> Result<f64, EvaluationFailure> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match *tok {
            Tok::Num(v) => pile.push(v),
            Tok::Op(op) => {
                let b = pile.pop().ok_or(EvaluationFailure::MalformedPostfix)?;
                let a = pile.pop().ok_or(EvaluationFailure::MalformedPostfix)?;
                pile.push(applique(op, a, b)?);
            }
            Tok::LPar | Tok::RPar => return Err(EvaluationFailure::UnbalancedParentheses),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvaluationFailure::MalformedPostfix),
    }
}

/// Pipeline complet + démarche (texte normalisé, jetons, RPN).
pub fn evaluate_expression_detail(expr: &str) -> Result<(f64, Demarche), EvaluationFailure> {
    let resultat = pipeline(expr);
    if let Err(e) = &resultat {
        warn!("évaluation de {expr:?} : {e}");
    }
    resultat
}

fn pipeline(expr: &str) -> Result<(f64, Demarche), EvaluationFailure> {
    // 1) Normalisation
    let normalisee = normalize(expr);
    debug!("normalisée: {normalisee:?}");

    // 2) Jetons
    let jetons = tokenize(&normalisee)?;
    let jetons_txt = format_tokens(&jetons);
    debug!("jetons: {jetons_txt}");

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    debug!("rpn: {rpn_txt}");

    // 4) Pile + garde-fou
    let v = fini(evaluate(&rpn)?)?;

    let d = Demarche {
        normalisee,
        jetons: jetons_txt,
        rpn: rpn_txt,
    };
    Ok((v, d))
}

/// API publique : texte libre -> valeur numérique (ou genre d’échec).
pub fn evaluate_expression(expr: &str) -> Result<f64, EvaluationFailure> {
    evaluate_expression_detail(expr).map(|(v, _)| v)
}
