//! src/app/etat.rs
//!
//! État de session (sans boucle, sans E/S).
//!
//! Rôle : posséder la table des variables pour toute la durée du processus
//! et la prêter au noyau (lecture pour les expressions, écriture pour les affectations).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Une affectation en échec ne laisse aucune trace (le noyau ne stocke qu’en fin de succès).

use std::collections::HashMap;

use num_bigint::BigInt;

use crate::noyau::{Lookup, Store};

#[derive(Clone, Default, Debug)]
pub struct Session {
    // identifiant (sensible à la casse, lettres seulement) -> valeur
    variables: HashMap<String, BigInt>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }
}

impl Lookup for Session {
    fn lookup(&self, name: &str) -> Option<&BigInt> {
        self.variables.get(name)
    }
}

impl Store for Session {
    fn store(&mut self, name: &str, value: BigInt) {
        self.variables.insert(name.to_string(), value);
    }
}
