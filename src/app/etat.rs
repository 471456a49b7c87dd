//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la machine à états du noyau et le petit état propre à
//! l’interface (la modale de division par zéro). Aucune arithmétique ici :
//! chaque action “bouton” est transmise telle quelle à la machine.
//!
//! Contrats :
//! - Actions déterministes, sans effet de bord caché.
//! - Une seule erreur visible à la fois : la modale bloque jusqu’à fermeture.

use crate::noyau::{ErreurCalc, Machine, Operateur};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- noyau ---
    pub machine: Machine,

    // --- UX ---
    // Some(..) tant que la modale d’erreur est ouverte.
    pub erreur: Option<ErreurCalc>,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Chiffre ou point décimal.
    pub fn chiffre(&mut self, symbole: char) {
        self.machine.touche_chiffre(symbole);
    }

    /// Opérateur binaire.
    pub fn operateur(&mut self, op: Operateur) {
        self.machine.touche_operateur(op);
    }

    /// "=" : une division par zéro ouvre la modale, l’état du noyau
    /// reste intact (garanti par la machine).
    pub fn egal(&mut self) {
        if let Err(e) = self.machine.touche_egal() {
            self.erreur = Some(e);
        }
    }

    /// C : remise à zéro totale (machine + modale).
    pub fn effacer(&mut self) {
        self.machine.touche_effacer();
        self.erreur = None;
    }

    /// Fermeture de la modale (bouton OK ou clic à l’extérieur).
    pub fn fermer_modale(&mut self) {
        self.erreur = None;
    }
}
