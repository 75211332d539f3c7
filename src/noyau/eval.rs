//! Noyau — évaluation (pipeline réel)
//!
//! ligne -> jetons (paresseux) -> postfix (variables résolues) -> entier
//!
//! Remarque : l’évaluation ne modifie jamais la table des variables ;
//! réévaluer la même ligne avec la même table donne toujours le même résultat.

use log::{debug, log_enabled, trace, Level};
use num_bigint::BigInt;

use super::erreur::{CalcError, CalcResult};
use super::jetons::{format_tokens, tokenize, Token};
use super::rpn::{format_postfix, to_postfix, PostfixItem};
use super::variables::Lookup;

/// API publique : évalue une expression et retourne sa valeur entière exacte.
pub fn eval_expression<L: Lookup + ?Sized>(line: &str, vars: &L) -> CalcResult<BigInt> {
    // 1) Jetons
    let jetons = tokenize(line)?;
    if log_enabled!(Level::Debug) {
        // journal seulement ; l’erreur lexicale éventuelle remonte par to_postfix
        if let Ok(j) = tokenize(line)?.collect::<CalcResult<Vec<Token>>>() {
            debug!("jetons: {}", format_tokens(&j));
        }
    }

    // 2) Postfix
    let rpn = to_postfix(jetons, vars)?;
    debug!("postfix: {}", format_postfix(&rpn));

    // 3) Valeur
    eval_postfix(&rpn)
}

/// Évalue une suite postfixée.
/// Opérateur : le premier dépilé est l’opérande DROIT.
pub fn eval_postfix(rpn: &[PostfixItem]) -> CalcResult<BigInt> {
    let mut pile: Vec<BigInt> = Vec::with_capacity(rpn.len() / 2 + 1);

    for item in rpn {
        match item {
            PostfixItem::Operand(v) => pile.push(v.clone()),
            PostfixItem::Operator(op) => {
                let b = pile.pop().ok_or(CalcError::InvalidExpression)?;
                let a = pile.pop().ok_or(CalcError::InvalidExpression)?;
                let r = op.apply(&a, &b)?;
                trace!("eval: {a} {op} {b} = {r}");
                pile.push(r);
            }
        }
    }

    // garde-fou : le convertisseur ne produit jamais autre chose qu’une valeur finale
    match (pile.pop(), pile.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(CalcError::InvalidExpression),
    }
}
