//! Configuration system for the MIPS simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** The MU-MIPS memory map and run bounds.
//! 2. **Structures:** Hierarchical config for general options and the memory map.
//! 3. **Enums:** Execution mode selection (single-cycle or pipelined).
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.

use serde::{Deserialize, Serialize};

use crate::common::{SimError, SimResult};

/// Default configuration constants for the simulator.
///
/// These values reproduce the classic MU-MIPS address space when not
/// overridden in a configuration file.
mod defaults {
    /// Base address of the user text segment.
    pub const TEXT_BASE: u32 = 0x0040_0000;

    /// Base address of the user data segment.
    pub const DATA_BASE: u32 = 0x1000_0000;

    /// Base address of the kernel data segment.
    pub const KDATA_BASE: u32 = 0x9000_0000;

    /// Base address of the kernel text segment.
    pub const KTEXT_BASE: u32 = 0x8000_0000;

    /// Base address of the stack segment.
    pub const STACK_BASE: u32 = 0x7FF0_0000;

    /// Size of every default segment (1 MiB).
    pub const SEGMENT_SIZE: u32 = 0x0010_0000;

    /// Cycle bound applied to `run_all` so an unterminated program cannot hang the shell.
    pub const MAX_CYCLES: u64 = 1_000_000;
}

/// Which executor advances the machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// One instruction completes fully per cycle; branches and jumps redirect the PC.
    SingleCycle,
    /// Five overlapped stages per cycle; control flow is not resolved.
    #[default]
    Pipelined,
}

/// Root simulator configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation options.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Memory map.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a JSON configuration document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] for malformed JSON, or a validation error
    /// from [`Config::validate`].
    pub fn from_json(text: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the memory map is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OverlappingRegions`] if two regions share an address, or
    /// [`SimError::NoTextSegment`] if no region contains the text base.
    pub fn validate(&self) -> SimResult<()> {
        let regions = &self.memory.regions;
        for (i, first) in regions.iter().enumerate() {
            for second in &regions[i + 1..] {
                if first.overlaps(second) {
                    return Err(SimError::OverlappingRegions {
                        first: first.name.clone(),
                        second: second.name.clone(),
                    });
                }
            }
        }

        if !regions.iter().any(|r| r.contains(self.memory.text_base)) {
            return Err(SimError::NoTextSegment(self.memory.text_base));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage debug events through `tracing`.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Executor selection.
    #[serde(default)]
    pub mode: ExecutionMode,

    /// Upper bound on cycles executed by `run_all`. `None` runs until halted externally.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default `run_all` cycle bound.
    #[allow(clippy::unnecessary_wraps)]
    const fn default_max_cycles() -> Option<u64> {
        Some(defaults::MAX_CYCLES)
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            mode: ExecutionMode::default(),
            max_cycles: Self::default_max_cycles(),
        }
    }
}

/// Memory map configuration.
///
/// Regions must be disjoint. Lookups scan them in the listed order.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Address the PC is reset to and where programs are loaded.
    #[serde(default = "MemoryConfig::default_text_base")]
    pub text_base: u32,

    /// Mapped regions.
    #[serde(default = "MemoryConfig::default_regions")]
    pub regions: Vec<RegionConfig>,
}

impl MemoryConfig {
    /// Returns the default text segment base.
    const fn default_text_base() -> u32 {
        defaults::TEXT_BASE
    }

    /// Returns the MU-MIPS segment layout.
    fn default_regions() -> Vec<RegionConfig> {
        [
            ("text", defaults::TEXT_BASE),
            ("data", defaults::DATA_BASE),
            ("kdata", defaults::KDATA_BASE),
            ("ktext", defaults::KTEXT_BASE),
            ("stack", defaults::STACK_BASE),
        ]
        .into_iter()
        .map(|(name, begin)| RegionConfig {
            name: name.to_string(),
            begin,
            size: defaults::SEGMENT_SIZE,
        })
        .collect()
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            text_base: defaults::TEXT_BASE,
            regions: Self::default_regions(),
        }
    }
}

/// One contiguous mapped region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionConfig {
    /// Human-readable name, used in diagnostics.
    pub name: String,
    /// First mapped address.
    pub begin: u32,
    /// Size in bytes.
    pub size: u32,
}

impl RegionConfig {
    /// Last mapped address (inclusive).
    pub const fn end(&self) -> u32 {
        self.begin.saturating_add(self.size.saturating_sub(1))
    }

    /// Returns whether `addr` falls inside this region.
    pub const fn contains(&self, addr: u32) -> bool {
        self.size > 0 && addr >= self.begin && addr <= self.end()
    }

    fn overlaps(&self, other: &Self) -> bool {
        self.size > 0 && other.size > 0 && self.begin <= other.end() && other.begin <= self.end()
    }
}
