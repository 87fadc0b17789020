// src/noyau/format.rs
//
// Affichage d’un résultat numérique : au plus `decimales` chiffres après la
// virgule, zéros finaux retirés, "-0" ramené à "0".

/// Formate `v` pour l’afficheur.
pub fn format_nombre(v: f64, decimales: usize) -> String {
    let brut = format!("{v:.decimales$}");

    let txt = if brut.contains('.') {
        brut.trim_end_matches('0').trim_end_matches('.')
    } else {
        brut.as_str()
    };

    if txt == "-0" {
        "0".to_string()
    } else {
        txt.to_string()
    }
}
