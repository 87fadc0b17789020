//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : posséder l’unique cellule mutable de la calculatrice (l’afficheur)
//! et offrir des opérations simples (saisie, C, DEL) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Un échec s’affiche "Error" ; le détail reste dans `erreur`.
//! - Garde-fou : bornes sur la précision d’affichage.
//! - Le dernier résultat est gardé en f64 : tant que l’afficheur n’a pas été
//!   retouché, il reste la valeur courante (pas de relecture du texte arrondi).

use crate::noyau::{format_nombre, Demarche, EvaluationFailure};

/// Précision d’affichage par défaut (chiffres après la virgule).
const DECIMALES_DEFAUT: usize = 10;

/// Garde-fou : au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub(crate) const DECIMALES_MAX: usize = 15;

/// Libellé unique affiché pour tout échec.
pub const ERREUR: &str = "Error";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- afficheur (entrée ET résultat, comme une calculatrice de poche) ---
    pub affichage: String,

    // --- saisie secondaire : exposant de x^y ---
    pub exposant: String,

    // --- sorties ---
    pub erreur: String, // détail du dernier échec (vide si aucun)
    pub demarche: Demarche,

    // --- dernier résultat exact + texte affiché pour lui ---
    resultat: Option<(f64, String)>,

    // --- paramètres ---
    pub decimales: usize,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: String::new(),
            exposant: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            resultat: None,
            decimales: DECIMALES_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Ajoute un symbole du pavé. Après "Error", on repart d’un afficheur vide.
    pub fn ajoute(&mut self, symbole: &str) {
        if self.affichage == ERREUR {
            self.affichage.clear();
        }
        self.affichage.push_str(symbole);
        self.focus_entree = true;
    }

    /// C : efface l’afficheur, l’erreur et la démarche.
    pub fn clear_affichage(&mut self) {
        self.affichage.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.resultat = None;
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère ("Error" part d’un coup).
    pub fn backspace(&mut self) {
        if self.affichage == ERREUR {
            self.affichage.clear();
        } else {
            self.affichage.pop();
        }
        self.focus_entree = true;
    }

    /// Dépose un résultat : l’afficheur est remplacé par la valeur formatée.
    pub fn set_resultat(&mut self, valeur: f64, demarche: Option<Demarche>) {
        self.affichage = format_nombre(valeur, self.decimales);
        self.resultat = Some((valeur, self.affichage.clone()));
        self.erreur.clear();
        self.demarche = demarche.unwrap_or_default();
        self.focus_entree = true;
    }

    /// Dépose un échec : "Error" à l’afficheur, détail à part.
    pub fn set_erreur(&mut self, e: &EvaluationFailure) {
        self.affichage = ERREUR.to_string();
        self.erreur = e.to_string();
        self.demarche = Demarche::default();
        self.resultat = None;
        self.focus_entree = true;
    }

    /// Valeur exacte du dernier résultat, si l’afficheur le montre encore tel quel.
    pub fn valeur_courante(&self) -> Option<f64> {
        match &self.resultat {
            Some((v, texte)) if *texte == self.affichage => Some(*v),
            _ => None,
        }
    }

    /// Garde-fou : limite la précision d’affichage.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
        self.focus_entree = true;
    }
}
