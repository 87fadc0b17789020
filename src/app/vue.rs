// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand l’afficheur a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Opérations scientifiques : appliquées à la valeur courante de l’afficheur
//
// Note :
// - x^y : le champ "exposant" remplace la boîte de dialogue de saisie.

use eframe::egui;
use log::debug;

use super::etat::{AppCalc, DECIMALES_MAX};
use crate::noyau::{
    apply_scientific_operation, evaluate_expression, evaluate_expression_detail, parse_operand,
    OperationKind,
};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_afficheur(ui);

                ui.add_space(8.0);
                self.ui_pave_numerique(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_scientifique(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_afficheur(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.affichage)
                .desired_width(ui.available_width())
                .hint_text("Ex: 3+4*(2-1), 2(3+4), 2^10")
                .id_source("afficheur_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface l’afficheur", Action::Clear);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
            self.bouton_action(ui, "=", "Évalue l’expression", Action::Evalue);

            ui.separator();

            ui.label("Affichage :");
            let mut d = self.decimales as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DECIMALES_MAX as u32)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
            }
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [
                    ["7", "8", "9", "/", "("],
                    ["4", "5", "6", "*", ")"],
                    ["1", "2", "3", "-", "^"],
                    ["0", ".", "%", "+", ""],
                ] {
                    for symbole in ligne {
                        if symbole.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton_insert(ui, symbole);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            self.bouton_operation(ui, "sqrt", "sqrt");
            self.bouton_operation(ui, "e^x", "exp");
            self.bouton_operation(ui, "log", "log");
            self.bouton_operation(ui, "sin", "sin");
            self.bouton_operation(ui, "cos", "cos");
            self.bouton_operation(ui, "tan", "tan");
            self.bouton_operation(ui, "x%", "percent");
            self.bouton_operation(ui, "pi", "pi");
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            self.bouton_operation(ui, "x^y", "pow");
            ui.label("exposant :");
            ui.add(
                egui::TextEdit::singleline(&mut self.exposant)
                    .desired_width(80.0)
                    .id_source("exposant_edit"),
            );
        });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisée", "demarche_norm", &self.demarche.normalisee);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Clear => self.clear_affichage(),
                Action::Backspace => self.backspace(),
                Action::Evalue => self.eval_via_noyau(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let resp = ui.add_sized([46.0, 32.0], egui::Button::new(symbole));
        if resp.clicked() {
            self.ajoute(symbole);
        }
    }

    fn bouton_operation(&mut self, ui: &mut egui::Ui, label: &str, nom: &str) {
        let resp = ui.add_sized([46.0, 30.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }
        match nom.parse::<OperationKind>() {
            Ok(kind) => self.operation_via_noyau(kind),
            Err(e) => self.set_erreur(&e),
        }
    }

    /// Évalue l’afficheur via le noyau, puis remplace l’afficheur par le résultat.
    fn eval_via_noyau(&mut self) {
        match evaluate_expression_detail(&self.affichage) {
            Ok((v, d)) => {
                debug!("{:?} = {v}", self.affichage);
                self.set_resultat(v, Some(d));
            }
            Err(e) => self.set_erreur(&e),
        }
    }

    /// Applique une opération scientifique à la valeur courante.
    /// La valeur courante est le dernier résultat exact si l’afficheur n’a pas
    /// été retouché, sinon l’afficheur évalué (une expression en cours est donc
    /// d’abord calculée) ; π l’ignore.
    fn operation_via_noyau(&mut self, kind: OperationKind) {
        let valeur = if kind == OperationKind::Pi {
            0.0
        } else if let Some(v) = self.valeur_courante() {
            v
        } else {
            match evaluate_expression(&self.affichage) {
                Ok(v) => v,
                Err(e) => {
                    self.set_erreur(&e);
                    return;
                }
            }
        };

        let auxiliaire = match kind {
            OperationKind::Power => parse_operand(&self.exposant),
            _ => None,
        };

        match apply_scientific_operation(kind, valeur, auxiliaire) {
            Ok(v) => {
                debug!("{kind:?}({valeur}) = {v}");
                self.set_resultat(v, None);
            }
            Err(e) => self.set_erreur(&e),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Clear,
    Backspace,
    Evalue,
}
