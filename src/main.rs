// src/main.rs
//
// Calculatrice Z-pur — point d’entrée (terminal)
// ----------------------------------------------
// But:
// - Options (-v, --script)
// - Journal sur stderr (stdout reste réservé aux résultats)
// - Boucle sur stdin, ou sur un fichier script
//
// IMPORTANT (structure projet):
// - La boucle et l’état vivent dans src/app/
// - Tout le calcul vit dans src/noyau/

#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use log::info;
use structopt::StructOpt;

mod app;
mod noyau;
mod options;

use app::{run_repl, Session};
use options::Options;

fn main() -> Result<()> {
    let options = Options::from_args();

    let env = env_logger::Env::default().default_filter_or(options.filter_level());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();

    let mut session = Session::new();
    let stdout = io::stdout();

    match &options.script {
        Some(path) => {
            info!("lecture du script {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Impossible d’ouvrir le script {}", path.display()))?;
            run_repl(&mut session, BufReader::new(file), stdout.lock())
                .context("Échec d’E/S pendant la session")?;
        }
        None => {
            let stdin = io::stdin();
            run_repl(&mut session, stdin.lock(), stdout.lock())
                .context("Échec d’E/S pendant la session")?;
        }
    }

    Ok(())
}
