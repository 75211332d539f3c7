//! Noyau exact Z-pur
//!
//! Organisation interne :
//! - erreur.rs      : CalcError (messages utilisateur)
//! - jetons.rs      : tokenisation (paresseuse)
//! - operateur.rs   : opérateurs + réduction des suites (`--+-`)
//! - rpn.rs         : shunting-yard -> postfix
//! - eval.rs        : évaluation postfix + pipeline complet
//! - affectation.rs : `nom = terme`
//! - variables.rs   : accès à la table (Lookup / Store)

pub mod affectation;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod operateur;
pub mod rpn;
pub mod variables;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use affectation::process_assignment;
pub use erreur::{CalcError, CalcResult};
pub use eval::eval_expression;
pub use variables::{Lookup, Store};
