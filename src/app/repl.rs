// src/app/repl.rs
//
// Boucle lecture-évaluation-affichage
// -----------------------------------
// Classement d’une ligne (après trim) :
// - vide            => ignorée
// - commence par /  => commande (/help, /exit)
// - contient =      => affectation
// - sinon           => expression
//
// Une erreur n’interrompt jamais la boucle : message sur la sortie, ligne suivante.
// Générique sur BufRead / Write (stdin/stdout en vrai, Cursor/Vec en test).

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};
use num_bigint::BigInt;

use super::etat::Session;
use crate::noyau::{eval_expression, process_assignment, CalcError, CalcResult};

pub const HELP_TEXT: &str = "\
The program evaluates integer expressions of any size.
Operators: + - * / and parentheses; runs of + and - collapse (-- is +, --- is -).
Division is integer division, truncated toward zero.
Assign with `name = value` (latin letters only); use the name in later expressions.
Commands: /help shows this text, /exit quits.";

pub const BYE_TEXT: &str = "Bye!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ligne<'a> {
    Vide,
    Commande(&'a str),
    Affectation(&'a str),
    Expression(&'a str),
}

pub fn classify_line(line: &str) -> Ligne<'_> {
    let s = line.trim();
    if s.is_empty() {
        Ligne::Vide
    } else if s.starts_with('/') {
        Ligne::Commande(s)
    } else if s.contains('=') {
        Ligne::Affectation(s)
    } else {
        Ligne::Expression(s)
    }
}

/// Ce que la boucle doit afficher après une ligne réussie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reponse {
    Rien,
    Valeur(BigInt),
    Texte(&'static str),
    Fin,
}

impl Session {
    /// Traite une ligne brute.
    pub fn handle_line(&mut self, line: &str) -> CalcResult<Reponse> {
        match classify_line(line) {
            Ligne::Vide => Ok(Reponse::Rien),
            Ligne::Commande(cmd) => command(cmd),
            Ligne::Affectation(s) => {
                process_assignment(s, self)?;
                Ok(Reponse::Rien)
            }
            Ligne::Expression(s) => eval_expression(s, &*self).map(Reponse::Valeur),
        }
    }
}

fn command(cmd: &str) -> CalcResult<Reponse> {
    match cmd {
        "/help" => Ok(Reponse::Texte(HELP_TEXT)),
        "/exit" => Ok(Reponse::Fin),
        _ => Err(CalcError::UnknownCommand),
    }
}

/// Boucle complète. Se termine sur `/exit` (affiche Bye!) ou en fin d’entrée.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
) -> io::Result<()> {
    info!("session ouverte");

    for line in input.lines() {
        let line = line?;

        match session.handle_line(&line) {
            Ok(Reponse::Rien) => {}
            Ok(Reponse::Valeur(v)) => writeln!(output, "{v}")?,
            Ok(Reponse::Texte(t)) => writeln!(output, "{t}")?,
            Ok(Reponse::Fin) => {
                writeln!(output, "{BYE_TEXT}")?;
                output.flush()?;
                info!("session fermée par /exit");
                return Ok(());
            }
            Err(e) => {
                warn!("ligne rejetée {:?}: {e}", line.trim());
                writeln!(output, "{e}")?;
            }
        }
        output.flush()?;
    }

    debug!("fin d’entrée ({} variables)", session.variable_count());
    info!("session fermée (fin d’entrée)");
    Ok(())
}
