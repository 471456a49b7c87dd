//! src/noyau/saisie.rs
//!
//! Validation incrémentale du tampon d’affichage.
//!
//! La source d’origine concaténait tout et laissait le parse (au clic d’un
//! opérateur) masquer les saisies malformées. Ici on valide symbole par
//! symbole : le tampon reste en permanence vide ou parsable en f64.
//!
//! Règles :
//! - seuls `0`-`9` et `.` sont acceptés ;
//! - un second `.` est refusé (symbole ignoré) ;
//! - `.` sur tampon vide donne `0.` ;
//! - un chiffre après un `0` isolé le remplace (pas de zéros de tête) ;
//! - un tampon hors forme saisissable (résultat "inf", notation
//!   exponentielle) est remplacé, comme une saisie fraîche.

/// Forme saisissable : chiffres et au plus un point, signe de tête admis
/// (un résultat négatif reste prolongeable). Tout le reste — "inf", "NaN",
/// "1e300" — ne supporte pas l’ajout de symboles sans casser le parse.
fn forme_saisissable(tampon: &str) -> bool {
    let chiffres = tampon.strip_prefix('-').unwrap_or(tampon);
    chiffres.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Ajoute `symbole` au tampon en respectant les règles ci-dessus.
/// Un symbole refusé laisse le tampon strictement inchangé.
pub fn ajouter(tampon: &mut String, symbole: char) {
    if !symbole.is_ascii_digit() && symbole != '.' {
        return;
    }

    // Remplacement avant ajout : un résultat hors forme ne se prolonge pas.
    if !tampon.is_empty() && !forme_saisissable(tampon) {
        tampon.clear();
    }

    match symbole {
        '.' => {
            if tampon.contains('.') {
                return; // déjà un point
            }
            if tampon.is_empty() {
                tampon.push('0');
            }
            tampon.push('.');
        }
        c if c.is_ascii_digit() => {
            // "0" + chiffre => chiffre (mais "0." + chiffre reste intact)
            if tampon == "0" {
                tampon.clear();
            }
            tampon.push(c);
        }
        _ => {}
    }
}
