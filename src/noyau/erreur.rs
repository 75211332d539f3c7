// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Chaque variante correspond à un message affiché tel quel par la boucle
// (une ligne en échec n’interrompt jamais la session).

use std::fmt;

pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcError {
    /// Jeton mal formé, parenthèses non appariées, suite d’opérateurs invalide,
    /// pile incohérente en fin d’évaluation.
    InvalidExpression,
    /// Identifiant absent de la table des variables.
    UnknownVariable,
    /// Partie gauche d’une affectation non alphabétique.
    InvalidIdentifier,
    /// Partie droite mal formée ou mauvais nombre de `=`.
    InvalidAssignment,
    DivisionByZero,
    /// Ligne `/...` qui n’est ni `/help` ni `/exit`.
    UnknownCommand,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            CalcError::InvalidExpression => "Invalid expression",
            CalcError::UnknownVariable => "Unknown variable",
            CalcError::InvalidIdentifier => "Invalid identifier",
            CalcError::InvalidAssignment => "Invalid assignment",
            CalcError::DivisionByZero => "Division by zero",
            CalcError::UnknownCommand => "Unknown command",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CalcError {}
