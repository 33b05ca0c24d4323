//! Fairgame CLI
//!
//! Single-round, provably-fair generalized rock-paper-scissors against the
//! computer. The computer commits to its move (HMAC-SHA3-256 under a fresh
//! random key) before the player chooses, and reveals the key afterwards so
//! the digest can be independently rechecked.

use clap::Parser;
use fairgame_cli::session::Session;
use fairgame_core::MoveSet;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Provably-fair generalized rock-paper-scissors
#[derive(Parser)]
#[command(name = "fairgame", version, about)]
struct Cli {
    /// Move names: an odd number of distinct entries, at least 3
    #[arg(value_name = "MOVE", required = true)]
    moves: Vec<String>,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the game text.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Validate before any randomness or key material is generated.
    let moves = match MoveSet::parse(cli.moves) {
        Ok(moves) => moves,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Example: fairgame rock paper scissors");
            return ExitCode::FAILURE;
        }
    };

    let session = match Session::start(moves) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match session.run(stdin.lock(), stdout.lock()) {
        Ok(end) => {
            debug!(?end, "session finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
