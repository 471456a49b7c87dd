//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - machine.rs : machine à états (opérandes, opérateur en attente, "=")
//! - saisie.rs  : validation incrémentale du tampon d’affichage
//! - format.rs  : formatage déterministe du résultat

pub mod format;
pub mod machine;
pub mod saisie;


#[cfg(test)]
mod tests_sequences;

// API publique minimale
pub use machine::{ErreurCalc, Machine, Operateur};
