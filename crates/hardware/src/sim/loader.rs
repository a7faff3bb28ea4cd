//! Program Loader.
//!
//! This module reads MU-MIPS program images. It performs:
//! 1. **Parsing:** One 32-bit hexadecimal word per line, with an optional `0x` prefix.
//! 2. **Filtering:** Blank lines and `#` comments (whole-line or trailing) are skipped.
//! 3. **File access:** Reads an image from disk, attaching the path to any I/O failure.
//!
//! Placing the words in memory is the simulator's job (`Simulator::load_program`).

use std::fs;
use std::path::Path;

use crate::common::{SimError, SimResult};

/// Parses a program image into instruction words.
///
/// # Arguments
///
/// * `text` - The image contents.
///
/// # Returns
///
/// The words in file order.
///
/// # Errors
///
/// Returns [`SimError::MalformedWord`] for the first line that is not a 32-bit
/// hexadecimal number.
///
/// # Examples
///
/// ```
/// use mips_core::sim::loader::parse_program;
///
/// let words = parse_program("24040005\n0x3c081234  # lui\n\n").unwrap();
/// assert_eq!(words, vec![0x24040005, 0x3c081234]);
/// ```
pub fn parse_program(text: &str) -> SimResult<Vec<u32>> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let digits = line
            .strip_prefix("0x")
            .or_else(|| line.strip_prefix("0X"))
            .unwrap_or(line);
        let word = u32::from_str_radix(digits, 16).map_err(|_| SimError::MalformedWord {
            line: idx + 1,
            text: line.to_string(),
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Reads and parses a program image from disk.
///
/// # Errors
///
/// Returns [`SimError::ProgramIo`] if the file cannot be read, or
/// [`SimError::MalformedWord`] if it cannot be parsed.
pub fn read_program(path: impl AsRef<Path>) -> SimResult<Vec<u32>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::ProgramIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&text)
}
