// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Saisie NUMÉRIQUE seulement (DragValue) : aucune chaîne à analyser
// - Opérande B étiqueté (fraction / entier / flottant) : le noyau refuse
//   tout ce qui n’est pas une fraction, la vue affiche l’erreur telle quelle

use eframe::egui;
use num_bigint::BigInt;
use tracing::{debug, warn};

use calculatrice_fraction::noyau::{eval_operation, Fraction, FractionError, Nombre, Operation};

use super::etat::{AppCalc, Demarche, NatureB, DIGITS_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Fraction");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("operandes_fraction")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                ui.label("A :");
                ui.add(egui::DragValue::new(&mut self.a_num).speed(1));
                ui.label("/");
                ui.add(egui::DragValue::new(&mut self.a_den).speed(1));
                ui.end_row();

                ui.label("Opération :");
                egui::ComboBox::from_id_salt("operation_fraction")
                    .selected_text(format!("{}  {}", self.op.symbole(), self.op.libelle()))
                    .show_ui(ui, |ui| {
                        for op in Operation::TOUTES {
                            ui.selectable_value(
                                &mut self.op,
                                op,
                                format!("{}  {}", op.symbole(), op.libelle()),
                            );
                        }
                    });
                ui.label("");
                ui.label("");
                ui.end_row();

                ui.label("B :");
                egui::ComboBox::from_id_salt("nature_b")
                    .selected_text(self.nature_b.libelle())
                    .show_ui(ui, |ui| {
                        for n in [NatureB::Fraction, NatureB::Entier, NatureB::Flottant] {
                            ui.selectable_value(&mut self.nature_b, n, n.libelle());
                        }
                    });
                match self.nature_b {
                    NatureB::Fraction => {
                        ui.add(egui::DragValue::new(&mut self.b_num).speed(1));
                        ui.label("/");
                        ui.add(egui::DragValue::new(&mut self.b_den).speed(1));
                    }
                    NatureB::Entier => {
                        ui.add(egui::DragValue::new(&mut self.b_num).speed(1));
                        ui.label("");
                        ui.label("");
                    }
                    NatureB::Flottant => {
                        ui.add(egui::DragValue::new(&mut self.b_flottant).speed(0.01));
                        ui.label("");
                        ui.label("");
                    }
                }
                ui.end_row();
            });

        ui.add_space(6.0);

        // Actions + ΣLocal
        ui.horizontal(|ui| {
            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }

            // Contrat: CLR = résultats seulement ; AC = tout ; A↔B = échange
            self.bouton_action(ui, "A↔B", "Échange A et B", Action::Echanger);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("ΣLocal :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        // Enter = "=" (clavier PC)
        if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.eval_via_noyau();
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("EXACT :");
        Self::champ_monospace(ui, "exact_out", &self.exact, 1);

        ui.add_space(6.0);

        ui.label("Nombre mixte :");
        Self::champ_monospace(ui, "mixte_out", &self.mixte, 1);

        ui.add_space(6.0);

        ui.label("ΣLocal :");
        if self.lecture_dispo {
            Self::champ_monospace(ui, "socal_out", &self.lecture, 2);
        } else {
            ui.monospace("indisponible");
        }

        ui.add_space(6.0);

        ui.label("Flottant (approché) :");
        Self::champ_monospace(ui, "flottant_out", &self.flottant, 1);

        if let Some(p) = self.proprietes {
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(format!("zéro : {}", oui_non(p.zero)));
                ui.label(format!("entier : {}", oui_non(p.entier)));
                ui.label(format!("propre : {}", oui_non(p.propre)));
                ui.label(format!("unitaire : {}", oui_non(p.unitaire)));
            });
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Opérandes", "demarche_operandes", &self.demarche.operandes);
                Self::champ_demarche(ui, "Formule", "demarche_formule", &self.demarche.formule);
                Self::champ_demarche(ui, "Réduction", "demarche_reduction", &self.demarche.reduction);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
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
                Action::Echanger => self.echanger(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }

    /// Opérande B selon son étiquette (la fraction peut échouer : dénominateur nul).
    fn operande_b(&self) -> Result<Nombre, FractionError> {
        Ok(match self.nature_b {
            NatureB::Fraction => Nombre::Fraction(Fraction::new(self.b_num, self.b_den)?),
            NatureB::Entier => Nombre::Entier(BigInt::from(self.b_num)),
            NatureB::Flottant => Nombre::Flottant(self.b_flottant),
        })
    }

    /// Évalue A op B via le noyau, puis dépose EXACT/ΣLocal/Démarche dans l’état UI.
    pub(crate) fn eval_via_noyau(&mut self) {
        let operandes = Fraction::new(self.a_num, self.a_den)
            .map_err(|e| format!("A : {e}"))
            .and_then(|a| self.operande_b().map(|b| (a, b)).map_err(|e| format!("B : {e}")));

        let (a, b) = match operandes {
            Ok(ab) => ab,
            Err(msg) => {
                warn!(erreur = %msg, "opérande invalide");
                self.set_erreur(msg);
                return;
            }
        };

        match eval_operation(&a, self.op, &b, self.digits) {
            Ok((r, d_noyau)) => {
                debug!(exact = %r.exact, digits = self.digits, "résultat déposé");
                let d_ui = Demarche {
                    operandes: d_noyau.operandes,
                    formule: d_noyau.formule,
                    reduction: d_noyau.reduction,
                    note: d_noyau.note,
                };
                self.set_resultats(r.exact, r.mixte, r.lecture, r.flottant, r.proprietes, d_ui);
            }
            Err(e) => {
                self.set_erreur(e.to_string());
            }
        }
    }
}

fn oui_non(v: bool) -> &'static str {
    if v {
        "oui"
    } else {
        "non"
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Echanger,
    ClearResultats,
    ResetTotal,
}
