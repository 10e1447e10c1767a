use serde::Deserialize;

use crate::DEFAULT_START_ADDRESS;

/// Power-on settings of a [`CPU`](crate::CPU).
///
/// Every field falls back to its default when missing from a deserialized
/// document, so an empty mapping is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CPUConfiguration {
    /// Initial value of the program counter.
    pub start_address: u16,
    /// Whether the processor is runnable right after creation.
    pub running: bool,
    /// When false, ADC and SBC ignore the D flag (2A03 behavior).
    pub decimal_mode: bool,
    /// When false, undocumented opcodes fault as unknown.
    pub illegal_opcodes: bool,
}

impl Default for CPUConfiguration {
    fn default() -> Self {
        Self {
            start_address: DEFAULT_START_ADDRESS,
            running: false,
            decimal_mode: true,
            illegal_opcodes: true,
        }
    }
}
