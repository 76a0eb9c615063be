//! Command-line front end for pwd-guard.

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pwd_guard::{
    BreachChecker, Denylist, GenerationRequest, SecretString, evaluate_with_denylist, generate,
};
use secrecy::ExposeSecret;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwd-guard", version, about = "Generate, score and breach-check passwords")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a password
    Generate {
        /// Number of characters (8-128)
        #[arg(short, long, default_value_t = 16)]
        length: usize,

        /// Leave symbols out of the alphabet
        #[arg(long)]
        no_symbols: bool,

        /// Keep look-alike characters (0 O 1 l I |)
        #[arg(long)]
        allow_ambiguous: bool,

        /// Extra characters to leave out
        #[arg(long, default_value = "")]
        exclude: String,
    },

    /// Score a password read from stdin
    Score,

    /// Check a password read from stdin against known breaches
    Breach,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            length,
            no_symbols,
            allow_ambiguous,
            exclude,
        } => {
            let request = GenerationRequest::new(length, !no_symbols, !allow_ambiguous).excluding(exclude);
            match generate(&request) {
                Ok(password) => {
                    println!("{}", password.expose_secret());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::from(2)
                }
            }
        }
        Command::Score => {
            let denylist = match Denylist::from_env() {
                Ok(denylist) => denylist,
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            let Some(password) = read_password() else {
                return ExitCode::FAILURE;
            };

            let report = evaluate_with_denylist(&password, &denylist);
            println!("length:   {}", report.length);
            println!("score:    {}/{}", report.score, pwd_guard::MAX_SCORE);
            println!("label:    {}", report.label);
            println!("common:   {}", report.is_common);
            for hint in report.messages() {
                println!("  - {hint}");
            }
            ExitCode::SUCCESS
        }
        Command::Breach => {
            let checker = match BreachChecker::from_env() {
                Ok(checker) => checker,
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            let Some(password) = read_password() else {
                return ExitCode::FAILURE;
            };

            match checker.check(&password).await.count {
                Some(0) => println!("not found in known breaches"),
                Some(n) => println!("found {n} times in known breaches"),
                None => {
                    println!("breach status unknown (service unavailable)");
                    return ExitCode::from(3);
                }
            }
            ExitCode::SUCCESS
        }
    }
}

/// Reads one line from stdin, prompting when attached to a terminal.
fn read_password() -> Option<SecretString> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("password: ");
        let _ = io::stderr().flush();
    }

    let mut line = String::new();
    if let Err(e) = stdin.lock().read_line(&mut line) {
        eprintln!("error: failed to read password: {e}");
        return None;
    }
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    zeroize::Zeroize::zeroize(&mut line);

    Some(SecretString::new(password.into_boxed_str()))
}
