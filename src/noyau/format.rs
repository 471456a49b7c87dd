// src/noyau/format.rs
//
// Formatage déterministe du résultat.
//
// Politique (fixée, testable) :
// - Display de Rust pour f64 : représentation la plus courte qui re-parse
//   à l’identique, sans zéros traînants ("6", "0.25", pas "6.0").
// - Indépendant de la locale (toujours `.` comme séparateur décimal).
// - Zéro négatif normalisé en "0" (un résultat de -0 à l’écran surprend).

/// Rend `v` sous forme de texte selon la politique ci-dessus.
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        // couvre 0.0 et -0.0
        return "0".to_string();
    }
    format!("{v}")
}
