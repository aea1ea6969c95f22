//! Cryptext command line tool

mod commands;
mod error;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use error::CliResult;

#[derive(Parser)]
#[command(name = "cryptext")]
#[command(about = "Cryptext - Base64, hashing, AES and hybrid AES+RSA text conversion")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Base64 encode or decode text
    Base64 {
        /// encode or decode
        #[arg(short, long)]
        action: String,

        /// Input text (read from stdin when omitted)
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Hash text
    Hash {
        /// Hash algorithm (md5, sha1, sha224, sha256, sha384, sha512, sha3_256, ...)
        #[arg(short, long, default_value = "sha256")]
        algorithm: String,

        /// Input text (read from stdin when omitted)
        #[arg(short, long)]
        text: Option<String>,
    },

    /// AES-256-CBC with a passphrase-derived key
    Aes {
        /// encrypt or decrypt
        #[arg(short, long)]
        action: String,

        /// Passphrase
        #[arg(short, long)]
        key: String,

        /// Input text (read from stdin when omitted)
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Hybrid AES+RSA envelope encryption
    Hybrid {
        /// encrypt or decrypt
        #[arg(short, long)]
        action: String,

        /// Recipient public key PEM file (encrypt)
        #[arg(long)]
        public_key: Option<String>,

        /// Private key PEM file (decrypt)
        #[arg(long)]
        private_key: Option<String>,

        /// Input text (read from stdin when omitted)
        #[arg(short, long)]
        text: Option<String>,
    },
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Base64 { action, text } => commands::base64::handle(action, text),
        Commands::Hash { algorithm, text } => commands::hash::handle(algorithm, text),
        Commands::Aes { action, key, text } => commands::aes::handle(action, key, text),
        Commands::Hybrid {
            action,
            public_key,
            private_key,
            text,
        } => commands::hybrid::handle(action, public_key, private_key, text),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
