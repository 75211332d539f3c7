// src/app.rs
//
// Calculatrice Z-pur — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + repl.rs)
// - Ré-exporter Session et run_repl (pour main.rs)
//
// Important:
// - etat.rs ne fait aucune E/S, repl.rs ne fait aucun calcul (tout passe par le noyau).

pub mod etat;
pub mod repl;

// Ré-export pratique : `use crate::app::{Session, run_repl};`
pub use etat::Session;
pub use repl::run_repl;
