use std::path::PathBuf;

use structopt::StructOpt;

/// Calculatrice Z-pur : expressions entières exactes, variables, /help, /exit.
#[derive(StructOpt, Debug)]
#[structopt(name = "calculatrice_zpur")]
pub struct Options {
    /// Journalisation sur stderr : -v warn, -vv info, -vvv debug, -vvvv trace.
    /// RUST_LOG a priorité.
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    pub verbosity: u8,

    /// Lit les lignes depuis ce fichier au lieu de l’entrée standard.
    #[structopt(short = "s", long = "script", parse(from_os_str))]
    pub script: Option<PathBuf>,
}

impl Options {
    pub fn filter_level(&self) -> &'static str {
        match self.verbosity {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
    }
}
