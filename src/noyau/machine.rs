//! src/noyau/machine.rs
//!
//! Machine à états de la calculatrice (sans vue, sans egui).
//!
//! Rôle : contenir les quatre morceaux d’état (affichage, premier, second,
//! opérateur en attente + drapeau de saisie fraîche) et traiter les quatre
//! événements (chiffre, opérateur, égal, effacer).
//!
//! Contrats :
//! - Aucun affichage ici (la vue lit `affichage` et rend la modale).
//! - Chaque événement est tout-ou-rien : soit il commet tous ses changements
//!   d’état, soit il n’en fait aucun.
//! - `affichage` est toujours vide ou parsable en f64 (garanti par saisie.rs).

use tracing::debug;

use super::format::format_nombre;
use super::saisie;

/* ------------------------ Opérateur (énumération fermée) ------------------------ */

/// Les quatre opérateurs binaires. Énumération fermée : pas de dispatch sur
/// texte, donc pas de chemin “opérateur inconnu => résultat 0”.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
}

impl Operateur {
    /// Étiquette du bouton correspondant ("+", "-", "*", "/").
    pub fn etiquette(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Division => "/",
        }
    }
}

/* ------------------------ Erreurs ------------------------ */

/// Seule erreur visible de l’utilisateur : la division par zéro.
/// Tout le reste (affichage vide au moment d’un opérateur ou de "=")
/// est ignoré silencieusement, sans toucher à l’état.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErreurCalc {
    #[error("Division par zéro impossible.")]
    DivisionParZero,
}

/* ------------------------ Machine ------------------------ */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Machine {
    /// Tampon visible : écho de saisie ET affichage du résultat.
    pub affichage: String,

    /// Premier opérande, capturé au clic d’un opérateur.
    pub premier: f64,

    /// Second opérande, capturé au clic de "=".
    pub second: f64,

    /// Opérateur en attente d’application (None = au repos).
    pub operateur: Option<Operateur>,

    /// Saisie fraîche : le prochain chiffre remplace l’affichage au lieu
    /// de s’y ajouter. Vrai seulement entre un clic opérateur et le chiffre
    /// suivant (ou un effacement).
    pub attente_saisie: bool,
}

impl Machine {
    /* ------------------------ Événements “boutons” ------------------------ */

    /// Chiffre ou point décimal (`0`-`9`, `.`).
    ///
    /// Si une saisie fraîche est attendue, l’affichage est d’abord vidé.
    /// La validation incrémentale (second point, zéros de tête) est déléguée
    /// à saisie.rs ; un symbole refusé ne change rien.
    pub fn touche_chiffre(&mut self, symbole: char) {
        if self.attente_saisie {
            self.affichage.clear();
            self.attente_saisie = false;
        }
        saisie::ajouter(&mut self.affichage, symbole);
    }

    /// Opérateur binaire (+, -, *, /).
    ///
    /// Capture l’affichage comme premier opérande et arme `attente_saisie`.
    /// Affichage non numérique (vide) : clic ignoré, zéro changement d’état.
    pub fn touche_operateur(&mut self, op: Operateur) {
        match self.affichage.parse::<f64>() {
            Ok(v) => {
                self.premier = v;
                self.operateur = Some(op);
                self.attente_saisie = true;
            }
            Err(_) => {
                debug!(op = op.etiquette(), "opérateur ignoré (affichage non numérique)");
            }
        }
    }

    /// "=" : applique l’opérateur en attente.
    ///
    /// - Affichage non numérique : no-op.
    /// - Aucun opérateur en attente : no-op (choix documenté, la source
    ///   d’origine retombait sur 0).
    /// - Division par `0` : Err(DivisionParZero), état strictement inchangé
    ///   (ni `affichage`, ni `premier`).
    /// - Sinon : le résultat devient l’affichage ET le premier opérande,
    ///   ce qui permet d’enchaîner ("=" répété ou opérateur suivant).
    pub fn touche_egal(&mut self) -> Result<(), ErreurCalc> {
        let Ok(second) = self.affichage.parse::<f64>() else {
            return Ok(());
        };
        let Some(op) = self.operateur else {
            return Ok(());
        };

        let resultat = match op {
            Operateur::Plus => self.premier + second,
            Operateur::Moins => self.premier - second,
            Operateur::Fois => self.premier * second,
            Operateur::Division => {
                if second == 0.0 {
                    debug!(premier = self.premier, "division par zéro refusée");
                    return Err(ErreurCalc::DivisionParZero);
                }
                self.premier / second
            }
        };

        // Commit seulement ici : tout a réussi.
        self.second = second;
        self.affichage = format_nombre(resultat);
        self.premier = resultat;
        Ok(())
    }

    /// C : remise à zéro totale, inconditionnelle.
    pub fn touche_effacer(&mut self) {
        *self = Machine::default();
    }
}
