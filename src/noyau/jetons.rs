// src/noyau/jetons.rs
//
// Tokenisation.
// Principe : on entoure d’espaces chaque terme (identifiant, entier signé ou non)
// et chaque parenthèse, puis on découpe sur les blancs. Chaque morceau est classé
// à la demande (itérateur paresseux).
//
// NOTE: le signe d’un littéral est conservé tel qu’écrit. C’est rpn.rs qui décide
// si "-3" est un littéral négatif (`2 * -3`) ou un opérateur suivi de 3 (`10 -3`).

use std::fmt;

use lazy_static::lazy_static;
use num_bigint::BigInt;
use regex::Regex;

use super::erreur::{CalcError, CalcResult};
use super::operateur::Operator;

lazy_static! {
    static ref TERME: Regex = Regex::new(r"[a-zA-Z]+|[+-]?[0-9]+").unwrap();
    static ref PARENTHESE: Regex = Regex::new(r"[()]").unwrap();
    static ref IDENTIFIANT: Regex = Regex::new(r"^[a-zA-Z]+$").unwrap();
    static ref LITTERAL: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    static ref SUITE_OPERATEURS: Regex = Regex::new(r"^[-+*/]+$").unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Identifier(String),
    /// `sign` : Add / Subtract si le signe est écrit explicitement.
    Literal {
        value: BigInt,
        sign: Option<Operator>,
    },
    OperatorRun(String),
    OpenParen,
    CloseParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => f.write_str(name),
            Token::Literal {
                value,
                sign: Some(Operator::Add),
            } => write!(f, "+{value}"),
            Token::Literal { value, .. } => write!(f, "{value}"),
            Token::OperatorRun(run) => f.write_str(run),
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
        }
    }
}

/// Suite paresseuse de jetons.
#[derive(Debug)]
pub struct Tokens {
    morceaux: std::vec::IntoIter<String>,
}

impl Iterator for Tokens {
    type Item = CalcResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.morceaux.next().map(|m| classify(&m))
    }
}

/// Découpe une ligne en jetons.
/// Ligne vide ou blanche => InvalidExpression (la boucle filtre déjà les lignes vides).
pub fn tokenize(line: &str) -> CalcResult<Tokens> {
    if line.trim().is_empty() {
        return Err(CalcError::InvalidExpression);
    }

    let espace = TERME.replace_all(line, " $0 ");
    let espace = PARENTHESE.replace_all(&espace, " $0 ");

    let morceaux: Vec<String> = espace.split_whitespace().map(str::to_string).collect();

    Ok(Tokens {
        morceaux: morceaux.into_iter(),
    })
}

/// Classe un morceau (déjà séparé, sans blanc).
fn classify(m: &str) -> CalcResult<Token> {
    match m {
        "(" => return Ok(Token::OpenParen),
        ")" => return Ok(Token::CloseParen),
        _ => {}
    }

    if IDENTIFIANT.is_match(m) {
        return Ok(Token::Identifier(m.to_string()));
    }

    if LITTERAL.is_match(m) {
        let value = BigInt::parse_bytes(m.as_bytes(), 10).ok_or(CalcError::InvalidExpression)?;
        let sign = match m.as_bytes()[0] {
            b'+' => Some(Operator::Add),
            b'-' => Some(Operator::Subtract),
            _ => None,
        };
        return Ok(Token::Literal { value, sign });
    }

    if SUITE_OPERATEURS.is_match(m) {
        return Ok(Token::OperatorRun(m.to_string()));
    }

    Err(CalcError::InvalidExpression)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
