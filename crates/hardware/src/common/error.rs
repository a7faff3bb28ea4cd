//! Simulator error definitions.
//!
//! This module defines the recoverable failures of the simulator. It provides:
//! 1. **Resource Errors:** Program files that cannot be read or parsed.
//! 2. **Validation Errors:** Out-of-range register indices supplied by collaborators.
//! 3. **Configuration Errors:** Malformed JSON and inconsistent memory maps.
//!
//! Decode and execute problems have no variant. An unsupported instruction is
//! reported through `tracing` and treated as a no-op.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the simulator library.
#[derive(Debug, Error)]
pub enum SimError {
    /// A register index outside `0..32` was supplied by a caller.
    #[error("register index {0} is out of range (expected 0..32)")]
    InvalidRegister(usize),

    /// The program file could not be opened or read.
    #[error("could not read program file '{}': {source}", path.display())]
    ProgramIo {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line of a program file is not a 32-bit hexadecimal word.
    #[error("line {line}: '{text}' is not a 32-bit hexadecimal word")]
    MalformedWord {
        /// One-based line number.
        line: usize,
        /// Offending text, trimmed.
        text: String,
    },

    /// The program does not fit in the region that holds the text segment base.
    #[error("program of {words} words does not fit in the text segment ({capacity} words)")]
    ProgramTooLarge {
        /// Number of words in the program.
        words: usize,
        /// Number of words that fit between the text base and the region end.
        capacity: usize,
    },

    /// Two configured memory regions share at least one address.
    #[error("memory regions '{first}' and '{second}' overlap")]
    OverlappingRegions {
        /// Name of the earlier region.
        first: String,
        /// Name of the later region.
        second: String,
    },

    /// The configured text segment base lies outside every memory region.
    #[error("no memory region contains the text segment base {0:#010x}")]
    NoTextSegment(u32),

    /// The configuration document could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A report sink failed while being written.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result alias used throughout the simulator.
pub type SimResult<T> = Result<T, SimError>;
