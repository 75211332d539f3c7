// src/noyau/rpn.rs
//
// Shunting-yard -> postfix (RPN)
// Objectif:
// - Convertir une suite de Token en suite postfixée d’opérandes (déjà résolus) et d’opérateurs
// - Refuser dès la conversion tout ce qui ferait sous-déborder la pile d’évaluation
//
// Règles:
// - Identifier : résolu immédiatement via Lookup (UnknownVariable sinon)
// - OperatorRun : réduit à un Operator (operateur.rs), associativité à gauche
//   (précédence égale => on dépile avant d’empiler)
// - Adjacence : on alterne strictement opérande / opérateur ; un littéral signé
//   à une place d’opérateur est coupé en (signe, valeur absolue) : "10 -3" => 10 - 3

use std::fmt;

use log::trace;
use num_bigint::BigInt;
use num_traits::Signed;

use super::erreur::{CalcError, CalcResult};
use super::jetons::Token;
use super::operateur::{resolve_run, Operator};
use super::variables::Lookup;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostfixItem {
    Operand(BigInt),
    Operator(Operator),
}

impl fmt::Display for PostfixItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixItem::Operand(v) => write!(f, "{v}"),
            PostfixItem::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Élément de la pile d’opérateurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StackEntry {
    Operator(Operator),
    ParenMarker,
}

/// Format utilitaire (journal) : suite postfixée en texte.
pub fn format_postfix(items: &[PostfixItem]) -> String {
    items
        .iter()
        .map(PostfixItem::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

struct Convertisseur<'a, L: Lookup + ?Sized> {
    vars: &'a L,
    ops: Vec<StackEntry>,
    out: Vec<PostfixItem>,
    // true : le prochain jeton doit être une valeur (atome ou '(')
    attend_operande: bool,
}

impl<'a, L: Lookup + ?Sized> Convertisseur<'a, L> {
    fn new(vars: &'a L) -> Self {
        Self {
            vars,
            ops: Vec::new(),
            out: Vec::new(),
            attend_operande: true,
        }
    }

    fn operande(&mut self, value: BigInt) {
        trace!("rpn: opérande {value}");
        self.out.push(PostfixItem::Operand(value));
        self.attend_operande = false;
    }

    fn operateur(&mut self, op: Operator) {
        // dépile tant que le sommet est un opérateur de précédence >= (gauche-associatif)
        while let Some(StackEntry::Operator(top)) = self.ops.last().copied() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.ops.pop();
            self.out.push(PostfixItem::Operator(top));
        }
        trace!("rpn: empile {op}");
        self.ops.push(StackEntry::Operator(op));
        self.attend_operande = true;
    }

    fn fermante(&mut self) -> CalcResult<()> {
        loop {
            match self.ops.pop() {
                Some(StackEntry::Operator(op)) => self.out.push(PostfixItem::Operator(op)),
                Some(StackEntry::ParenMarker) => break,
                // ')' sans '(' correspondante
                None => return Err(CalcError::InvalidExpression),
            }
        }
        self.attend_operande = false;
        Ok(())
    }

    fn jeton(&mut self, tok: Token) -> CalcResult<()> {
        trace!("rpn: jeton {tok}");

        if self.attend_operande {
            match tok {
                Token::Identifier(name) => {
                    let v = self.vars.resolve(&name)?;
                    self.operande(v);
                }
                Token::Literal { value, .. } => self.operande(value),
                Token::OpenParen => self.ops.push(StackEntry::ParenMarker),
                Token::OperatorRun(_) | Token::CloseParen => {
                    return Err(CalcError::InvalidExpression)
                }
            }
        } else {
            match tok {
                Token::OperatorRun(run) => {
                    let op = resolve_run(&run)?;
                    self.operateur(op);
                }
                Token::CloseParen => self.fermante()?,
                // signe collé au littéral suivant une valeur : c’est l’opérateur
                Token::Literal {
                    value,
                    sign: Some(signe),
                } => {
                    self.operateur(signe);
                    self.operande(value.abs());
                }
                Token::Identifier(_) | Token::Literal { sign: None, .. } | Token::OpenParen => {
                    return Err(CalcError::InvalidExpression)
                }
            }
        }

        Ok(())
    }

    fn fin(mut self) -> CalcResult<Vec<PostfixItem>> {
        // entrée vide, opérateur final, "()"...
        if self.attend_operande {
            return Err(CalcError::InvalidExpression);
        }

        while let Some(entry) = self.ops.pop() {
            match entry {
                StackEntry::Operator(op) => self.out.push(PostfixItem::Operator(op)),
                // '(' jamais fermée
                StackEntry::ParenMarker => return Err(CalcError::InvalidExpression),
            }
        }

        Ok(self.out)
    }
}

/// Convertit une suite de jetons (paresseuse) en suite postfixée.
///
/// Exemple:
///   jetons:  [Literal(2), OperatorRun("*"), OpenParen, Identifier("x"), OperatorRun("--"), Literal(1), CloseParen]
///   postfix: [2, x, 1, +, *]            (x résolu via `vars`)
pub fn to_postfix<I, L>(tokens: I, vars: &L) -> CalcResult<Vec<PostfixItem>>
where
    I: IntoIterator<Item = CalcResult<Token>>,
    L: Lookup + ?Sized,
{
    let mut conv = Convertisseur::new(vars);
    for tok in tokens {
        conv.jeton(tok?)?;
    }
    conv.fin()
}
