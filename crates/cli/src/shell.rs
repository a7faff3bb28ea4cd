//! Interactive Command Shell.
//!
//! This module implements the MU-MIPS command loop. It performs:
//! 1. **Parsing:** Turns one input line into a `Command`, rejecting bad arguments.
//! 2. **Dispatch:** Runs the command against the `Simulator` and writes its report.
//! 3. **Recovery:** Prints parse and execution errors and keeps the shell alive.
//!
//! The loop reads from any `BufRead` and writes to any `Write`, so it runs the same
//! against stdin/stdout and against scripted input in tests.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use mips_core::isa::abi;
use mips_core::sim::report;
use mips_core::{SimError, Simulator};
use thiserror::Error;

/// Prompt printed before each command.
pub const PROMPT: &str = "MU-MIPS SIM:> ";

/// One shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run until halted or the configured cycle bound is hit.
    Sim,
    /// Run for the given number of cycles.
    Run(u64),
    /// Dump registers.
    Rdump,
    /// Dump memory from `start` to `stop` inclusive.
    Mdump {
        /// First address.
        start: u32,
        /// Last address.
        stop: u32,
    },
    /// Zero the machine and reload the program.
    Reset,
    /// Set a general-purpose register.
    Input {
        /// Register index (validated by the simulator).
        reg: usize,
        /// New value.
        value: u32,
    },
    /// Set HI.
    High(u32),
    /// Set LO.
    Low(u32),
    /// List the loaded program.
    Print,
    /// Show the pipeline latches.
    Show,
    /// Write the program listing to a file.
    File(PathBuf),
    /// Print statistics.
    Stats,
    /// Print the help menu.
    Help,
    /// Leave the shell.
    Quit,
}

/// Errors reported to the shell user. None of them end the session.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The first word is not a command.
    #[error("unknown command '{0}' (type ? for help)")]
    UnknownCommand(String),

    /// A required argument is missing.
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        /// Command name.
        command: &'static str,
        /// Usage of the missing arguments.
        expected: &'static str,
    },

    /// An argument could not be parsed.
    #[error("invalid {what} '{text}'")]
    InvalidArgument {
        /// What the argument should have been.
        what: &'static str,
        /// Offending text.
        text: String,
    },

    /// The simulator rejected the request.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// Writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Leave the loop.
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// # Returns
    ///
    /// `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns a [`ShellError`] describing the first problem found.
    pub fn parse(line: &str) -> Result<Option<Self>, ShellError> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(None);
        };
        let mut arg = |command: &'static str, expected: &'static str| {
            parts
                .next()
                .ok_or(ShellError::MissingArgument { command, expected })
        };

        let cmd = match name.to_ascii_lowercase().as_str() {
            "sim" => Self::Sim,
            "run" => {
                let text = arg("run", "<cycles>")?;
                Self::Run(text.parse().map_err(|_| invalid("cycle count", text))?)
            }
            "rdump" => Self::Rdump,
            "mdump" => {
                let start = parse_hex(arg("mdump", "<start> <stop>")?)?;
                let stop = parse_hex(arg("mdump", "<start> <stop>")?)?;
                Self::Mdump { start, stop }
            }
            "reset" => Self::Reset,
            "input" => {
                let reg = parse_register(arg("input", "<reg> <value>")?)?;
                let value = parse_value(arg("input", "<reg> <value>")?)?;
                Self::Input { reg, value }
            }
            "high" => Self::High(parse_value(arg("high", "<value>")?)?),
            "low" => Self::Low(parse_value(arg("low", "<value>")?)?),
            "print" => Self::Print,
            "show" => Self::Show,
            "file" => Self::File(PathBuf::from(arg("file", "<path>")?)),
            "stats" => Self::Stats,
            "?" | "help" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };
        Ok(Some(cmd))
    }
}

fn invalid(what: &'static str, text: &str) -> ShellError {
    ShellError::InvalidArgument {
        what,
        text: text.to_string(),
    }
}

/// Parses an address; hexadecimal with or without `0x`.
fn parse_hex(text: &str) -> Result<u32, ShellError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16).map_err(|_| invalid("address", text))
}

/// Parses a register value: `0x`-prefixed hex, or a decimal that may be negative.
fn parse_value(text: &str) -> Result<u32, ShellError> {
    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return u32::from_str_radix(digits, 16).map_err(|_| invalid("value", text));
    }
    match text.parse::<i64>() {
        Ok(v) if (i64::from(i32::MIN)..=i64::from(u32::MAX)).contains(&v) => Ok(v as u32),
        _ => Err(invalid("value", text)),
    }
}

/// Parses a register as a number (`8`, `$8`) or an ABI name (`$t0`, `t0`).
///
/// Numbers are passed through unchecked so the simulator can reject them.
fn parse_register(text: &str) -> Result<usize, ShellError> {
    let bare = text.trim_start_matches('$');
    bare.parse::<usize>()
        .ok()
        .or_else(|| abi::parse_reg(text))
        .ok_or_else(|| invalid("register", text))
}

/// Writes the help menu.
///
/// # Errors
///
/// Propagates any write failure from `out`.
pub fn help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "------------------------------------------------------------------")?;
    writeln!(out, "\t**********MU-MIPS Help MENU**********")?;
    writeln!(out)?;
    for (usage, what) in [
        ("sim", "simulate program to completion"),
        ("run <n>", "simulate program for <n> cycles"),
        ("rdump", "dump register values"),
        ("reset", "clears all registers/memory and re-loads the program"),
        ("input <reg> <val>", "set GPR <reg> to <val>"),
        ("mdump <start> <stop>", "dump memory from <start> to <stop> address (hex)"),
        ("high <val>", "set the HI register to <val>"),
        ("low <val>", "set the LO register to <val>"),
        ("print", "print the program loaded into memory"),
        ("show", "print the current content of the pipeline registers"),
        ("file <path>", "write the program listing to <path>"),
        ("stats", "print simulation statistics"),
        ("?", "display help menu"),
        ("quit", "exit the simulator"),
    ] {
        writeln!(out, "{usage:<22}-- {what}")?;
    }
    writeln!(out, "------------------------------------------------------------------")
}

/// Executes one command.
///
/// # Errors
///
/// Returns [`ShellError::Sim`] for a rejected register index and
/// [`ShellError::Io`] for output or file failures.
pub fn execute(sim: &mut Simulator, cmd: &Command, out: &mut dyn Write) -> Result<Flow, ShellError> {
    match cmd {
        Command::Sim => {
            writeln!(out, "Simulating...")?;
            let cycles = sim.run_all();
            writeln!(out, "Simulation finished after {cycles} cycles.")?;
            if sim.is_running() {
                writeln!(out, "Stopped at the configured cycle limit; the run flag is still set.")?;
            }
        }
        Command::Run(n) => {
            writeln!(out, "Simulating for {n} cycles...")?;
            let cycles = sim.run(*n);
            if cycles < *n {
                writeln!(out, "Halted after {cycles} cycles.")?;
            }
        }
        Command::Rdump => report::write_registers(sim, out)?,
        Command::Mdump { start, stop } => report::write_memory(sim, *start, *stop, out)?,
        Command::Reset => {
            sim.reset();
            writeln!(out, "Machine reset; program reloaded.")?;
        }
        Command::Input { reg, value } => sim.set_register(*reg, *value)?,
        Command::High(value) => sim.set_hi(*value),
        Command::Low(value) => sim.set_lo(*value),
        Command::Print => report::write_program(sim, out)?,
        Command::Show => report::write_pipeline(sim, out)?,
        Command::File(path) => {
            let mut file = BufWriter::new(File::create(path)?);
            report::write_program(sim, &mut file)?;
            file.flush()?;
            writeln!(out, "Program listing written to {}", path.display())?;
        }
        Command::Stats => report::write_stats(sim, out)?,
        Command::Help => help(out)?,
        Command::Quit => {
            writeln!(out, "Bye.")?;
            return Ok(Flow::Quit);
        }
    }
    Ok(Flow::Continue)
}

/// Runs the command loop until `quit` or end of input.
///
/// # Errors
///
/// Returns an error only if reading input or writing the prompt fails.
/// Command errors are printed and the loop continues.
pub fn run_shell(sim: &mut Simulator, input: &mut dyn BufRead, out: &mut dyn Write) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let result = Command::parse(&line).and_then(|cmd| match cmd {
            Some(cmd) => execute(sim, &cmd, out),
            None => Ok(Flow::Continue),
        });
        match result {
            Ok(Flow::Quit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }
}
