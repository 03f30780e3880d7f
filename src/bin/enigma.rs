//! `enigma` — Encrypts or decrypts text with a configured Enigma machine.
//!
//! **Usage:**
//! ```text
//! enigma [--rotors III,II,I] [--reflector UKW-B] [--plugboard "AB CD"]
//!        [--positions AAA] [--rings AAA] [--config settings.json] [MESSAGE]
//! ```
//!
//! Without `MESSAGE`, every line of stdin is processed in turn on the same
//! machine. Logging goes to stderr and is controlled by `RUST_LOG` or `-v`.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use enigma::{historical, MachineConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Encrypt or decrypt text with an Enigma machine. The cipher is
/// reciprocal: run the ciphertext through the same settings to decrypt.
#[derive(Parser, Debug)]
#[command(name = "enigma", version, about)]
struct Args {
    /// Rotor names, rightmost first.
    #[arg(long, value_delimiter = ',', default_value = "III,II,I")]
    rotors: Vec<String>,

    /// Reflector name.
    #[arg(long, default_value = "UKW-B")]
    reflector: String,

    /// Plugboard cable pairs, e.g. "AB CD EF".
    #[arg(long, default_value = "")]
    plugboard: String,

    /// Start position letters, rightmost first.
    #[arg(long, default_value = "")]
    positions: String,

    /// Ring setting letters, rightmost first.
    #[arg(long, default_value = "")]
    rings: String,

    /// JSON settings file; overrides the component flags.
    #[arg(long)]
    config: Option<PathBuf>,

    /// List the available rotors and reflectors and exit.
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Text to process. Reads stdin when omitted.
    message: Option<String>,
}

impl Args {
    fn machine_config(&self) -> Result<MachineConfig> {
        match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Ok(MachineConfig::from_json(&json)?)
            }
            None => Ok(MachineConfig {
                rotors: self.rotors.clone(),
                reflector: self.reflector.clone(),
                plugboard: self.plugboard.clone(),
                positions: self.positions.clone(),
                ring_settings: self.rings.clone(),
            }),
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut stdout = io::stdout().lock();

    if args.list {
        writeln!(
            stdout,
            "Rotors: {}",
            historical::rotor_names().collect::<Vec<_>>().join(", ")
        )?;
        writeln!(
            stdout,
            "Reflectors: {}",
            historical::reflector_names().collect::<Vec<_>>().join(", ")
        )?;
        return Ok(());
    }

    let config = args.machine_config()?;
    let mut machine = config.build().context("invalid machine settings")?;
    info!(positions = %machine.position_letters(), "machine ready");

    match &args.message {
        Some(message) => writeln!(stdout, "{}", machine.encrypt(message)?)?,
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("reading stdin")?;
                writeln!(stdout, "{}", machine.encrypt(&line)?)?;
            }
        }
    }

    info!(positions = %machine.position_letters(), "final rotor positions");
    Ok(())
}
