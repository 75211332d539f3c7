// src/noyau/variables.rs
//
// Accès aux variables depuis le noyau.
// La table elle-même appartient à la session (app/etat.rs) : le noyau ne fait
// que lire (Lookup) et, pour l’affectation seulement, écrire (Store).

use std::collections::HashMap;

use num_bigint::BigInt;

use super::erreur::{CalcError, CalcResult};

pub trait Lookup {
    fn lookup(&self, name: &str) -> Option<&BigInt>;

    /// Résout un identifiant ou échoue avec `UnknownVariable`.
    fn resolve(&self, name: &str) -> CalcResult<BigInt> {
        self.lookup(name).cloned().ok_or(CalcError::UnknownVariable)
    }
}

pub trait Store: Lookup {
    /// Crée ou écrase.
    fn store(&mut self, name: &str, value: BigInt);
}

impl Lookup for HashMap<String, BigInt> {
    fn lookup(&self, name: &str) -> Option<&BigInt> {
        self.get(name)
    }
}

impl Store for HashMap<String, BigInt> {
    fn store(&mut self, name: &str, value: BigInt) {
        self.insert(name.to_string(), value);
    }
}
