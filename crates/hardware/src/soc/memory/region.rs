//! Memory Region.
//!
//! A region is one contiguous, byte-addressable segment of the address space
//! (text, data, stack, ...). It owns its backing bytes and knows its own bounds.

use crate::config::RegionConfig;

/// A contiguous mapped segment with owned backing storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryRegion {
    name: String,
    begin: u32,
    /// Last mapped address (inclusive).
    end: u32,
    bytes: Vec<u8>,
}

impl MemoryRegion {
    /// Creates a zero-filled region of `size` bytes starting at `begin`.
    ///
    /// A region extending past the top of the address space is clipped at `0xFFFF_FFFF`.
    pub fn new(name: impl Into<String>, begin: u32, size: u32) -> Self {
        let end = begin.saturating_add(size.saturating_sub(1));
        let len = if size == 0 { 0 } else { (end - begin) as usize + 1 };
        Self {
            name: name.into(),
            begin,
            end,
            bytes: vec![0; len],
        }
    }

    /// Region name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First mapped address.
    pub const fn begin(&self) -> u32 {
        self.begin
    }

    /// Last mapped address (inclusive).
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Size of the region in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-sized region.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns whether `addr` falls inside this region.
    #[inline]
    pub fn contains(&self, addr: u32) -> bool {
        !self.bytes.is_empty() && addr >= self.begin && addr <= self.end
    }

    /// Reads four bytes starting at `addr` as a little-endian word.
    ///
    /// Bytes past the end of the region read as zero, so a word straddling the
    /// region boundary returns only its mapped low bytes.
    pub fn read_word(&self, addr: u32) -> u32 {
        let offset = (addr - self.begin) as usize;
        let mut raw = [0u8; 4];
        for (i, byte) in raw.iter_mut().enumerate() {
            *byte = self.bytes.get(offset + i).copied().unwrap_or(0);
        }
        u32::from_le_bytes(raw)
    }

    /// Writes `value` as four little-endian bytes starting at `addr`.
    ///
    /// Bytes that would land past the end of the region are dropped.
    pub fn write_word(&mut self, addr: u32, value: u32) {
        let offset = (addr - self.begin) as usize;
        for (i, byte) in value.to_le_bytes().into_iter().enumerate() {
            if let Some(slot) = self.bytes.get_mut(offset + i) {
                *slot = byte;
            }
        }
    }

    /// Zeroes the backing storage.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}

impl From<&RegionConfig> for MemoryRegion {
    fn from(cfg: &RegionConfig) -> Self {
        Self::new(cfg.name.clone(), cfg.begin, cfg.size)
    }
}
