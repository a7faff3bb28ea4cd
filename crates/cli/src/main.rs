//! MU-MIPS simulator CLI.
//!
//! This binary loads a program image and hands control to the interactive shell. It performs:
//! 1. **Setup:** Parses arguments, reads an optional JSON config, and installs the `tracing` subscriber.
//! 2. **Load:** Reads the hexadecimal program file into the text segment.
//! 3. **Shell:** Runs the command loop on stdin/stdout until `quit` or end of input.
//! 4. **Summary:** With `--json`, prints the final snapshot and statistics on exit.

mod shell;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, ValueEnum};
use mips_core::{Config, ExecutionMode, Simulator};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "mips-sim",
    author,
    version,
    about = "Simplified five-stage MIPS simulator",
    long_about = "Load a hexadecimal program image and drive it from the MU-MIPS command shell.\n\nEach line of the program file holds one 32-bit word in hex; '#' starts a comment.\n\nExamples:\n  mips-sim prog.hex\n  mips-sim --mode single-cycle prog.hex\n  mips-sim --config sim.json --trace prog.hex < script.txt"
)]
struct Cli {
    /// Program image: one hexadecimal word per line.
    program: PathBuf,

    /// Execution mode (overrides the config file).
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every stage at debug level.
    #[arg(short, long)]
    trace: bool,

    /// Bound for the `sim` command (overrides the config file).
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Print a JSON summary on exit.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Pipelined,
    SingleCycle,
}

impl From<ModeArg> for ExecutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pipelined => Self::Pipelined,
            ModeArg::SingleCycle => Self::SingleCycle,
        }
    }
}

#[derive(Serialize)]
struct Summary<'a> {
    snapshot: mips_core::Snapshot,
    stats: &'a mips_core::stats::SimStats,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut sim = match Simulator::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match sim.load_program_file(&cli.program) {
        Ok(words) => tracing::info!(
            "loaded {words} words from {} ({:?} mode)",
            cli.program.display(),
            sim.mode()
        ),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    if let Err(e) = run(&mut sim, &cli.program, cli.json) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--trace`.
fn init_tracing(trace: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if trace { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Builds the configuration from the optional file and the command-line overrides.
fn load_config(cli: &Cli) -> mips_core::SimResult<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if let Some(mode) = cli.mode {
        config.general.mode = mode.into();
    }
    if cli.trace {
        config.general.trace_instructions = true;
    }
    if cli.max_cycles.is_some() {
        config.general.max_cycles = cli.max_cycles;
    }
    Ok(config)
}

fn run(sim: &mut Simulator, program: &Path, json: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "**************************")?;
    writeln!(out, "Welcome to MU-MIPS SIM...")?;
    writeln!(out, "**************************")?;
    writeln!(out, "Program: {}", program.display())?;
    writeln!(out)?;
    shell::help(&mut out)?;

    shell::run_shell(sim, &mut input, &mut out)?;

    if json {
        let summary = Summary {
            snapshot: sim.snapshot(),
            stats: sim.stats(),
        };
        serde_json::to_writer_pretty(&mut out, &summary).map_err(io::Error::other)?;
        writeln!(out)?;
    }
    out.flush()
}
