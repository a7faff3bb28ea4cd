//! Segmented System Memory.
//!
//! This module implements the byte-addressable store behind every load, store and
//! instruction fetch. It provides:
//! 1. **Regions:** Disjoint owned segments (`MemoryRegion`) composing the address space.
//! 2. **Word Access:** Little-endian 32-bit reads and writes routed by a linear region scan.
//!
//! Unmapped reads return zero and unmapped writes are dropped. Neither is a fault.
//! Alignment is not checked.

/// Contiguous memory segment with owned backing bytes.
pub mod region;

pub use region::MemoryRegion;

use crate::config::MemoryConfig;

/// The simulated address space.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    regions: Vec<MemoryRegion>,
}

impl Memory {
    /// Creates an address space from explicit regions.
    ///
    /// Lookup order is the order given here.
    pub const fn new(regions: Vec<MemoryRegion>) -> Self {
        Self { regions }
    }

    /// Creates the address space described by a memory configuration.
    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::new(config.regions.iter().map(MemoryRegion::from).collect())
    }

    /// Returns the region owning `addr`, if any. First match wins.
    pub fn region_for(&self, addr: u32) -> Option<&MemoryRegion> {
        self.regions.iter().find(|r| r.contains(addr))
    }

    /// Returns all regions in lookup order.
    pub fn regions(&self) -> &[MemoryRegion] {
        &self.regions
    }

    /// Reads a 32-bit little-endian word. Unmapped addresses read as zero.
    pub fn read_word(&self, addr: u32) -> u32 {
        self.region_for(addr).map_or(0, |r| r.read_word(addr))
    }

    /// Writes a 32-bit little-endian word. Writes to unmapped addresses are dropped.
    pub fn write_word(&mut self, addr: u32, value: u32) {
        if let Some(region) = self.regions.iter_mut().find(|r| r.contains(addr)) {
            region.write_word(addr, value);
        }
    }

    /// Returns whether `addr` lies in some region.
    pub fn is_mapped(&self, addr: u32) -> bool {
        self.region_for(addr).is_some()
    }

    /// Zeroes every region.
    pub fn clear(&mut self) {
        for region in &mut self.regions {
            region.clear();
        }
    }
}
