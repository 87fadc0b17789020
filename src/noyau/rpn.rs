// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - Précédence plate à deux niveaux : + - => 1 ; * / % ^ => 2
// - Tout est associatif à gauche (on dépile sur >=), y compris '^' :
//   "2^3^2" = (2^3)^2 = 64. Comportement conservé volontairement.
// - Moins unaire : seulement en tête d’expression ou juste après '(' ;
//   on injecte 0 : "-x" => "0 x -"
// - ')' sans '(' correspondante, ou '(' restée ouverte => erreur.

use log::debug;

use super::erreur::EvaluationFailure;
use super::jetons::{Operateur, Tok};

fn precedence(op: Operateur) -> u8 {
    match op {
        Operateur::Plus | Operateur::Minus => 1,
        Operateur::Star | Operateur::Slash | Operateur::Percent | Operateur::Caret => 2,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
/// La sortie ne contient que des `Tok::Num` et `Tok::Op`.
///
/// Exemple:
///   tokens: [Num(3), Plus, Num(4), Star, Num(2)]
///   rpn:    [Num(3), Num(4), Num(2), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, EvaluationFailure> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    let mut prec: Option<Tok> = None;

    for &tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vidée sans '(' => déséquilibre
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(EvaluationFailure::UnbalancedParentheses),
                    }
                }
            }

            Tok::Op(op) => {
                if op == Operateur::Minus && matches!(prec, None | Some(Tok::LPar)) {
                    out.push(Tok::Num(0.0));
                }

                while let Some(&Tok::Op(top)) = ops.last() {
                    if precedence(top) >= precedence(op) {
                        out.push(Tok::Op(top));
                        ops.pop();
                    } else {
                        break;
                    }
                }

                ops.push(tok);
            }
        }
        prec = Some(tok);
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar) {
            debug!("rpn: '(' non fermée en fin d’entrée");
            return Err(EvaluationFailure::UnbalancedParentheses);
        }
        out.push(top);
    }

    Ok(out)
}
