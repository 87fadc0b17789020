// src/noyau/jetons.rs

use std::fmt;

use super::erreur::EvaluationFailure;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
    Percent, // %
    Caret,   // ^
}

impl Operateur {
    fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Minus),
            '*' => Some(Operateur::Star),
            '/' => Some(Operateur::Slash),
            '%' => Some(Operateur::Percent),
            '^' => Some(Operateur::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Minus => '-',
            Operateur::Star => '*',
            Operateur::Slash => '/',
            Operateur::Percent => '%',
            Operateur::Caret => '^',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::LPar => write!(f, "("),
            Tok::RPar => write!(f, ")"),
        }
    }
}

/// Tokenize une chaîne (déjà normalisée) en jetons.
/// Reconnaît, de gauche à droite :
/// - nombres `\d+(\.\d+)?` (jamais signés, jamais d’exposant)
/// - opérateurs + - * / % ^
/// - parenthèses ( )
///
/// Tout autre caractère est ignoré en silence ; un point sans chiffre
/// derrière n’appartient pas au nombre ("3." => 3, puis '.' ignoré).
/// Erreur seulement si AUCUN jeton n’a été trouvé.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvaluationFailure> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        if let Some(op) = Operateur::depuis_char(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        // Nombre : partie entière puis fraction optionnelle (au moins un chiffre après '.')
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let txt: String = chars[start..i].iter().collect();
            let v = txt
                .parse::<f64>()
                .map_err(|_| EvaluationFailure::Tokenization)?;
            out.push(Tok::Num(v));
            continue;
        }

        // caractère inconnu : ignoré
        i += 1;
    }

    if out.is_empty() {
        return Err(EvaluationFailure::Tokenization);
    }
    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
