//! Tests de scénarios : suites de touches complètes, comme tapées au pavé.
//!
//! Convention : une chaîne décrit la suite de touches, un caractère = une
//! touche (`C` = effacer, `=` = égal). Le helper compte les notifications
//! (divisions par zéro) levées en route.

use super::machine::{Machine, Operateur};

/// Rejoue `touches` sur la machine, renvoie le nombre de notifications.
fn tape(m: &mut Machine, touches: &str) -> usize {
    let mut notifications = 0;
    for c in touches.chars() {
        match c {
            '0'..='9' | '.' => m.touche_chiffre(c),
            '+' => m.touche_operateur(Operateur::Plus),
            '-' => m.touche_operateur(Operateur::Moins),
            '*' => m.touche_operateur(Operateur::Fois),
            '/' => m.touche_operateur(Operateur::Division),
            '=' => {
                if m.touche_egal().is_err() {
                    notifications += 1;
                }
            }
            'C' => m.touche_effacer(),
            autre => panic!("touche inconnue dans le scénario: {autre:?}"),
        }
    }
    notifications
}

fn affichage_apres(touches: &str) -> String {
    let mut m = Machine::default();
    let notifs = tape(&mut m, touches);
    assert_eq!(notifs, 0, "notification inattendue pour {touches:?}");
    m.affichage
}

/* ------------------------ Les quatre opérations ------------------------ */

#[test]
fn seq_addition_simple() {
    assert_eq!(affichage_apres("5+3="), "8");
}

#[test]
fn seq_soustraction_resultat_negatif() {
    assert_eq!(affichage_apres("3-5="), "-2");
}

#[test]
fn seq_multiplication() {
    assert_eq!(affichage_apres("2*3="), "6");
}

#[test]
fn seq_division_normale() {
    assert_eq!(affichage_apres("8/2="), "4");
    assert_eq!(affichage_apres("1/4="), "0.25");
}

#[test]
fn seq_decimales() {
    assert_eq!(affichage_apres("1.5+2.25="), "3.75");
    assert_eq!(affichage_apres(".5*4="), "2");
}

/* ------------------------ Enchaînements ------------------------ */

#[test]
fn seq_enchainement_apres_egal() {
    // le résultat du premier "=" devient le premier opérande du suivant
    assert_eq!(affichage_apres("5+3=+2="), "10");
}

#[test]
fn seq_egal_repete() {
    // l’opérateur reste en attente après "=" : chaque "=" réapplique
    // l’opération au dernier résultat (8+8, puis 16+16).
    assert_eq!(affichage_apres("5+3=="), "16");
    assert_eq!(affichage_apres("5+3==="), "32");
}

#[test]
fn seq_operateur_sans_egal_recapture() {
    // sans "=", un second opérateur recapture l’affichage courant comme
    // premier opérande (pas d’évaluation intermédiaire, fidèle à la source) :
    // 5, +, 3, + => premier = 3 ; 2, = => 3+2
    assert_eq!(affichage_apres("5+3+2="), "5");
}

#[test]
fn seq_operateur_remplace_operateur() {
    // deux opérateurs de suite : le second gagne (l’affichage re-parse)
    assert_eq!(affichage_apres("5+-3="), "2");
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn seq_division_par_zero_notifie_une_fois() {
    let mut m = Machine::default();
    let notifs = tape(&mut m, "5/0=");

    assert_eq!(notifs, 1, "exactement une notification");
    assert_eq!(m.affichage, "0", "l’affichage garde le second opérande");
    assert_eq!(m.premier, 5.0);
    assert_eq!(m.operateur, Some(Operateur::Division));
}

#[test]
fn seq_division_par_zero_puis_correction() {
    let mut m = Machine::default();
    let notifs = tape(&mut m, "5/0=C8/2=");

    assert_eq!(notifs, 1);
    assert_eq!(m.affichage, "4");
}

#[test]
fn seq_division_par_zero_point_zero() {
    // "0.0" est aussi un zéro
    let mut m = Machine::default();
    let notifs = tape(&mut m, "5/0.0=");
    assert_eq!(notifs, 1);
    assert_eq!(m.premier, 5.0);
}

/* ------------------------ Effacer / états limites ------------------------ */

#[test]
fn seq_effacer_remet_a_neuf() {
    let mut m = Machine::default();
    tape(&mut m, "9*9=+1=C");

    assert_eq!(m, Machine::default());

    // "=" sur machine neuve : no-op (pas de retombée sur 0)
    assert_eq!(tape(&mut m, "="), 0);
    assert_eq!(m, Machine::default());
}

#[test]
fn seq_operateur_apres_effacer_ignore() {
    let mut m = Machine::default();
    tape(&mut m, "5+3=C");
    let avant = m.clone();

    tape(&mut m, "+");
    assert_eq!(m, avant, "affichage vide : opérateur ignoré");
}

#[test]
fn seq_accumulation_de_chiffres() {
    // pas d’opérateur intercalé => concaténation littérale
    assert_eq!(affichage_apres("123456789"), "123456789");
    assert_eq!(affichage_apres("3.14159"), "3.14159");
}

#[test]
fn seq_zeros_de_tete_normalises() {
    assert_eq!(affichage_apres("07+1="), "8");
    assert_eq!(affichage_apres("007"), "7");
}
