// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zkv_cli::commands;
use zkv_cli::config::Settings;
use zkv_cli::output;

#[derive(Parser)]
#[command(name = "zkvconv", about = "Convert gnark Groth16 artifacts to zkVerify hex format")]
struct Cli {
    /// Curve name as used by the prover (bn254, bn128, bls12-381, ...) [env: ZKV_CURVE]
    #[arg(long, global = true)]
    curve: Option<String>,
    /// Override the curve's point endianness (LE or BE) [env: ZKV_POINT_ENDIANNESS]
    #[arg(long, global = true)]
    endianness: Option<String>,
    /// Write JSON to this file instead of stdout
    #[arg(long, short, global = true)]
    out: Option<PathBuf>,
    /// Suppress status messages
    #[arg(long, short, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Convert a gnark proof JSON
    Proof {
        file: PathBuf,
    },
    /// Convert a gnark verification key JSON
    Vk {
        file: PathBuf,
    },
    /// Convert a JSON array of public inputs
    Pubs {
        file: PathBuf,
    },
    /// Decode a gnark binary public witness into a JSON array of public inputs
    Witness {
        file: PathBuf,
    },
    /// List supported curves
    Curves,
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let sub = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(sub);
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);

    let settings = Settings::resolve(cli.curve.as_deref(), cli.endianness.as_deref())?;
    let out = cli.out.as_deref();
    match cli.command {
        Cmd::Proof { file } => commands::proof::run(&settings, &file, out)?,
        Cmd::Vk { file } => commands::vk::run(&settings, &file, out)?,
        Cmd::Pubs { file } => commands::pubs::run(&settings, &file, out)?,
        Cmd::Witness { file } => commands::witness::run(&settings, &file, out)?,
        Cmd::Curves => commands::curves::run(out)?,
    }
    Ok(())
}
