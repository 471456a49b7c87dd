// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : chiffres/opérateurs tapés = mêmes événements que les boutons,
//   Enter = "=" (Escape est géré globalement dans app.rs)
// - Tactile : gros boutons, grille 4 colonnes
//
// Note :
// - L’affichage est en lecture seule : seule la machine écrit dedans.
// - La modale (division par zéro) bloque la saisie tant qu’elle est ouverte.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Operateur;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice de bureau");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        if self.erreur.is_none() {
            self.clavier(ui);
        }

        self.ui_pave(ui);

        self.ui_modale(ui);
    }

    /* ------------------------ Affichage ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // Lecture seule “stable”, sans TextEdit interactif.
        // Cadre visuel via Frame + Label monospace, aligné à droite.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let texte = if self.machine.affichage.is_empty() {
                        "0"
                    } else {
                        self.machine.affichage.as_str()
                    };
                    ui.label(egui::RichText::new(texte).monospace().size(26.0));
                });
            });

        // Rappel discret de l’opérateur en attente.
        if let Some(op) = self.machine.operateur {
            ui.weak(format!("en attente : {}", op.etiquette()));
        }
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let c = ui
                .add_sized([ui.available_width(), 32.0], egui::Button::new("C"))
                .on_hover_text("Remise à zéro totale");
            if c.clicked() {
                self.effacer();
            }
        });

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", Touche::Chiffre('9'));
                self.bouton(ui, "/", Touche::Op(Operateur::Division));
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", Touche::Chiffre('6'));
                self.bouton(ui, "*", Touche::Op(Operateur::Fois));
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", Touche::Chiffre('3'));
                self.bouton(ui, "-", Touche::Op(Operateur::Moins));
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Chiffre('.'));
                self.bouton(ui, "=", Touche::Egal);
                self.bouton(ui, "+", Touche::Op(Operateur::Plus));
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([56.0, 40.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }
        match touche {
            Touche::Chiffre(c) => self.chiffre(c),
            Touche::Op(op) => self.operateur(op),
            Touche::Egal => self.egal(),
        }
    }

    /* ------------------------ Clavier ------------------------ */

    /// Clavier physique : mêmes événements que les boutons.
    /// Enter = "=", le texte tapé passe par la même validation de saisie.
    fn clavier(&mut self, ui: &mut egui::Ui) {
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter {
            self.egal();
        }

        let textes: Vec<String> = ui.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect()
        });

        for t in textes {
            for c in t.chars() {
                match c {
                    '0'..='9' | '.' => self.chiffre(c),
                    '+' => self.operateur(Operateur::Plus),
                    '-' => self.operateur(Operateur::Moins),
                    '*' => self.operateur(Operateur::Fois),
                    '/' => self.operateur(Operateur::Division),
                    '=' => self.egal(),
                    _ => {}
                }
            }
        }
    }

    /* ------------------------ Modale ------------------------ */

    /// Notification bloquante : division par zéro.
    fn ui_modale(&mut self, ui: &mut egui::Ui) {
        let Some(erreur) = self.erreur else {
            return;
        };

        let modale = egui::Modal::new(egui::Id::new("modale_erreur")).show(ui.ctx(), |ui| {
            ui.set_width(220.0);
            ui.label(erreur.to_string());
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                ui.close();
            }
        });

        if modale.should_close() {
            self.fermer_modale();
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Op(Operateur),
    Egal,
}
