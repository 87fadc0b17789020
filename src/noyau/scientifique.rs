// src/noyau/scientifique.rs
//
// Opérations scientifiques unaires : appliquées directement à la valeur
// courante, hors pipeline d’expression.
// - trig : la valeur est en DEGRÉS (convertie en radians avant sin/cos/tan)
// - pow  : l’exposant vient d’une saisie secondaire (None => invalide)

use std::f64::consts::PI;
use std::str::FromStr;

use log::warn;

use super::erreur::{fini, EvaluationFailure};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    SquareRoot,
    Power,
    Exp,
    Log10,
    Sin,
    Cos,
    Tan,
    Percentage,
    Pi,
}

impl FromStr for OperationKind {
    type Err = EvaluationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqrt" | "√" => Ok(OperationKind::SquareRoot),
            "pow" => Ok(OperationKind::Power),
            "exp" => Ok(OperationKind::Exp),
            "log" => Ok(OperationKind::Log10),
            "sin" => Ok(OperationKind::Sin),
            "cos" => Ok(OperationKind::Cos),
            "tan" => Ok(OperationKind::Tan),
            "percent" | "%" => Ok(OperationKind::Percentage),
            "pi" | "π" => Ok(OperationKind::Pi),
            _ => Err(EvaluationFailure::UnknownOperation(s.to_string())),
        }
    }
}

fn radians(degres: f64) -> f64 {
    degres * (PI / 180.0)
}

/// API publique : applique `kind` à `valeur` (et à l’opérande auxiliaire pour `Power`).
pub fn apply_scientific_operation(
    kind: OperationKind,
    valeur: f64,
    auxiliaire: Option<f64>,
) -> Result<f64, EvaluationFailure> {
    let resultat = calcule(kind, valeur, auxiliaire).and_then(fini);
    if let Err(e) = &resultat {
        warn!("{kind:?}({valeur}) : {e}");
    }
    resultat
}

fn calcule(
    kind: OperationKind,
    valeur: f64,
    auxiliaire: Option<f64>,
) -> Result<f64, EvaluationFailure> {
    match kind {
        OperationKind::SquareRoot => {
            if valeur < 0.0 {
                return Err(EvaluationFailure::Domain(format!("racine de {valeur}")));
            }
            Ok(valeur.sqrt())
        }
        OperationKind::Power => {
            let exposant = auxiliaire
                .filter(|e| e.is_finite())
                .ok_or_else(|| EvaluationFailure::Domain("exposant invalide".into()))?;
            Ok(valeur.powf(exposant))
        }
        OperationKind::Exp => Ok(valeur.exp()),
        OperationKind::Log10 => {
            if valeur <= 0.0 {
                return Err(EvaluationFailure::Domain(format!("log de {valeur}")));
            }
            Ok(valeur.log10())
        }
        OperationKind::Sin => Ok(radians(valeur).sin()),
        OperationKind::Cos => Ok(radians(valeur).cos()),
        OperationKind::Tan => Ok(radians(valeur).tan()),
        OperationKind::Percentage => Ok(valeur / 100.0),
        OperationKind::Pi => Ok(PI),
    }
}

/// Lecture stricte de l’opérande secondaire (exposant) :
/// `-`? chiffres (`.` chiffres)? et rien d’autre (pas de "1e5", "inf", vide).
pub fn parse_operand(texte: &str) -> Option<f64> {
    let t = texte.trim();
    let corps = t.strip_prefix('-').unwrap_or(t);

    let (entier, fraction) = match corps.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (corps, None),
    };

    let chiffres = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !chiffres(entier) || fraction.is_some_and(|f| !chiffres(f)) {
        return None;
    }
    t.parse::<f64>().ok()
}
