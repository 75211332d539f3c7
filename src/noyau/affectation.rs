// src/noyau/affectation.rs
//
// Affectation `nom = terme`.
// Ordre des contrôles :
// 1) partie gauche alphabétique            sinon InvalidIdentifier
// 2) exactement deux parties               sinon InvalidAssignment
// 3) partie droite = un seul terme         sinon InvalidAssignment
// 4) terme résolu (variable connue)        sinon UnknownVariable
// La table n’est modifiée qu’après résolution complète.

use lazy_static::lazy_static;
use log::debug;
use num_bigint::BigInt;
use regex::Regex;

use super::erreur::{CalcError, CalcResult};
use super::variables::Store;

lazy_static! {
    static ref EGAL: Regex = Regex::new(r"\s*=\s*").unwrap();
    static ref IDENTIFIANT: Regex = Regex::new(r"^[a-zA-Z]+$").unwrap();
    static ref LITTERAL: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
}

pub fn is_valid_identifier(s: &str) -> bool {
    IDENTIFIANT.is_match(s)
}

/// Traite une ligne d’affectation (elle contient au moins un `=`).
pub fn process_assignment<S: Store + ?Sized>(line: &str, vars: &mut S) -> CalcResult<()> {
    let parties: Vec<&str> = EGAL.split(line.trim()).collect();

    if !is_valid_identifier(parties[0]) {
        return Err(CalcError::InvalidIdentifier);
    }
    if parties.len() != 2 {
        return Err(CalcError::InvalidAssignment);
    }

    let nom = parties[0];
    let valeur = term_value(parties[1], &*vars)?;

    debug!("affectation: {nom} = {valeur}");
    vars.store(nom, valeur);
    Ok(())
}

/// Valeur d’un terme isolé (identifiant ou littéral signé).
fn term_value<S: Store + ?Sized>(terme: &str, vars: &S) -> CalcResult<BigInt> {
    if is_valid_identifier(terme) {
        return vars.resolve(terme);
    }
    if LITTERAL.is_match(terme) {
        return BigInt::parse_bytes(terme.as_bytes(), 10).ok_or(CalcError::InvalidAssignment);
    }
    Err(CalcError::InvalidAssignment)
}
