// src/noyau/normalise.rs
//
// Normalisation du texte brut (aucune erreur ici, best-effort).
// Ordre fixe, chaque étape peut créer des voisinages consommés par la suivante :
//   1) retrait des espaces
//   2) chiffre + '('  => chiffre*(
//   3) ')' + chiffre  => )*chiffre
//   4) ')('           => )*(
//   5) '(('          => '('   (paires sans chevauchement : "(((" => "((")
//   6) '))'          => ')'

/// Réécrit `input` en forme canonique (multiplications explicites, sans espaces).
pub fn normalize(input: &str) -> String {
    let s: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let s = insere_mul(&s, |a, b| a.is_ascii_digit() && b == '(');
    let s = insere_mul(&s, |a, b| a == ')' && b.is_ascii_digit());
    let s = insere_mul(&s, |a, b| a == ')' && b == '(');
    let s = s.replace("((", "(");
    s.replace("))", ")")
}

/// Insère '*' entre deux caractères voisins quand `colle(a, b)` est vrai.
fn insere_mul(s: &str, colle: impl Fn(char, char) -> bool) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prec: Option<char> = None;

    for c in s.chars() {
        if let Some(p) = prec {
            if colle(p, c) {
                out.push('*');
            }
        }
        out.push(c);
        prec = Some(c);
    }
    out
}
