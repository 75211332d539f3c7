// src/noyau/operateur.rs
//
// Opérateurs binaires + résolution des suites d’opérateurs.
//
// Règles (suite = OperatorRun brut, ex: "--+-") :
// - une suite de `+`/`-` se réduit à un seul opérateur : chaque `-` inverse le signe
// - `*` et `/` ne sont acceptés que seuls (suite d’un caractère)
// - tout mélange (`+*`, `*-`, `**`, ...) => InvalidExpression

use std::fmt;

use num_bigint::BigInt;
use num_traits::CheckedDiv;

use super::erreur::{CalcError, CalcResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Précédence globale et fixe.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    /// Applique l’opérateur (gauche, droite).
    /// Division tronquée vers zéro ; diviseur nul => DivisionByZero (jamais de panique).
    pub fn apply(self, a: &BigInt, b: &BigInt) -> CalcResult<BigInt> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide => a.checked_div(b).ok_or(CalcError::DivisionByZero),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// État du balayage d’une suite.
#[derive(Clone, Copy)]
enum Etat {
    Vide,
    Signe(Operator), // Add ou Subtract
    Seul(Operator),  // Multiply ou Divide, rien ne peut suivre
}

/// Réduit une suite d’opérateurs à un seul opérateur effectif.
pub fn resolve_run(run: &str) -> CalcResult<Operator> {
    let mut etat = Etat::Vide;

    for c in run.chars() {
        etat = match (etat, c) {
            (Etat::Vide, '+') => Etat::Signe(Operator::Add),
            (Etat::Vide, '-') => Etat::Signe(Operator::Subtract),
            (Etat::Vide, '*') => Etat::Seul(Operator::Multiply),
            (Etat::Vide, '/') => Etat::Seul(Operator::Divide),

            (Etat::Signe(op), '+') => Etat::Signe(op),
            (Etat::Signe(Operator::Add), '-') => Etat::Signe(Operator::Subtract),
            (Etat::Signe(_), '-') => Etat::Signe(Operator::Add),

            _ => return Err(CalcError::InvalidExpression),
        };
    }

    match etat {
        Etat::Signe(op) | Etat::Seul(op) => Ok(op),
        Etat::Vide => Err(CalcError::InvalidExpression),
    }
}
