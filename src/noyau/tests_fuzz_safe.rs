//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - arbres entièrement parenthésés comparés à un calcul direct num-bigint
//! - lignes “poubelle” : erreur ou valeur, jamais de panique

use std::collections::HashMap;
use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_traits::{CheckedDiv, Zero};

use super::{eval_expression, CalcError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

/// Entier aléatoire, jusqu’à ~40 chiffres, parfois négatif, parfois nul.
fn gen_entier(rng: &mut Rng) -> BigInt {
    if rng.pick(8) == 0 {
        return BigInt::zero();
    }
    let longueur = 1 + rng.pick(40) as usize;
    let mut s = String::with_capacity(longueur + 1);
    if rng.coin() {
        s.push('-');
    }
    s.push(char::from(b'1' + rng.pick(9) as u8));
    for _ in 1..longueur {
        s.push(char::from(b'0' + rng.pick(10) as u8));
    }
    BigInt::parse_bytes(s.as_bytes(), 10).unwrap()
}

/// Suite de `+`/`-` dont la parité de `-` donne l’opérateur voulu.
fn gen_suite_signes(rng: &mut Rng, negatif: bool) -> String {
    let longueur = 1 + rng.pick(5) as usize;
    let mut suite = String::new();
    let mut moins = 0;
    for _ in 0..longueur - 1 {
        if rng.coin() {
            suite.push('-');
            moins += 1;
        } else {
            suite.push('+');
        }
    }
    let dernier_moins = (moins % 2 == 1) != negatif;
    suite.push(if dernier_moins { '-' } else { '+' });
    suite
}

/// Arbre entièrement parenthésé : (texte, valeur attendue ou None si division par zéro).
fn gen_expr(rng: &mut Rng, profondeur: u32) -> (String, Option<BigInt>) {
    if profondeur == 0 || rng.pick(3) == 0 {
        let n = gen_entier(rng);
        return (n.to_string(), Some(n));
    }

    let (ta, va) = gen_expr(rng, profondeur - 1);
    let (tb, vb) = gen_expr(rng, profondeur - 1);

    let (op, valeur) = match rng.pick(4) {
        0 => (gen_suite_signes(rng, false), va.zip(vb).map(|(a, b)| a + b)),
        1 => (gen_suite_signes(rng, true), va.zip(vb).map(|(a, b)| a - b)),
        2 => ("*".to_string(), va.zip(vb).map(|(a, b)| a * b)),
        _ => (
            "/".to_string(),
            va.zip(vb).and_then(|(a, b)| a.checked_div(&b)),
        ),
    };

    let espace = if rng.coin() { " " } else { "" };
    (format!("({ta}{espace}{op} {tb})"), valeur)
}

/// Ligne quelconque tirée d’un alphabet proche de la grammaire.
fn gen_ligne_poubelle(rng: &mut Rng) -> String {
    const ALPHABET: &[u8] = b"0123456789abxyXY+-*/()  =%._";
    let longueur = 1 + rng.pick(24) as usize;
    (0..longueur)
        .map(|_| char::from(ALPHABET[rng.pick(ALPHABET.len() as u32) as usize]))
        .collect()
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_arbres_parentheses() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0x5eed_2024);
    let vide: HashMap<String, BigInt> = HashMap::new();

    for _ in 0..2_000 {
        budget(start, max);

        let (texte, attendu) = gen_expr(&mut rng, 4);
        let obtenu = eval_expression(&texte, &vide);

        match attendu {
            Some(v) => assert_eq!(obtenu, Ok(v), "expr={texte:?}"),
            None => assert_eq!(obtenu, Err(CalcError::DivisionByZero), "expr={texte:?}"),
        }
    }
}

#[test]
fn fuzz_chaines_additives_gauche() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(42);
    let vide: HashMap<String, BigInt> = HashMap::new();

    for _ in 0..1_000 {
        budget(start, max);

        let mut acc = gen_entier(&mut rng);
        let mut texte = acc.to_string();

        for _ in 0..1 + rng.pick(8) {
            let b = gen_entier(&mut rng);
            let negatif = rng.coin();
            texte.push(' ');
            texte.push_str(&gen_suite_signes(&mut rng, negatif));
            texte.push(' ');
            texte.push_str(&b.to_string());
            acc = if negatif { acc - b } else { acc + b };
        }

        assert_eq!(eval_expression(&texte, &vide), Ok(acc), "expr={texte:?}");
    }
}

#[test]
fn fuzz_lignes_poubelle_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(7);
    let mut vars: HashMap<String, BigInt> = HashMap::new();
    vars.insert("x".into(), BigInt::from(3));
    vars.insert("Y".into(), BigInt::from(-4));

    for _ in 0..5_000 {
        budget(start, max);

        let ligne = gen_ligne_poubelle(&mut rng);
        let premier = eval_expression(&ligne, &vars);
        // déterminisme : même ligne, même table => même résultat
        assert_eq!(eval_expression(&ligne, &vars), premier, "ligne={ligne:?}");
    }
}
