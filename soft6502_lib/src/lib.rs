mod addressing_mode;
mod config;
mod cpu_instruction;
mod error;
pub mod memory;
mod processing_unit;
mod registers;

/// Where execution begins instead of fetching the reset vector.
pub const DEFAULT_START_ADDRESS: u16 = 0x0600;

pub use addressing_mode::{AddressingMode, AddressingModeResolution};
pub use config::CPUConfiguration;
pub use cpu_instruction::{CPUInstruction, Instruction, LogLine, Microcode, OPCODES};
pub use error::{CPUError, Result};
pub use memory::AddressableIO;
pub use memory::RAM as Memory;
pub use processing_unit::CPU;
pub use registers::{Registers, STACK_BASE_ADDR};
