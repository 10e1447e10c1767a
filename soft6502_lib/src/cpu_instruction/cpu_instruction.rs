use crate::addressing_mode::*;
use crate::error::Result;
use crate::processing_unit::CPU;
use std::cell::Cell;
use std::fmt;

/// Operation of an instruction, run once the addressing mode is solved.
pub type Microcode = fn(&mut CPU, &CPUInstruction) -> Result<LogLine>;

/// Static description of what an opcode does.
#[derive(Clone, Copy, Debug)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub cycles: u8,
    pub addressing_mode: AddressingMode,
    /// `None` is a true no-op.
    pub microcode: Option<Microcode>,
    /// Undocumented NMOS opcode.
    pub illegal: bool,
}

/// A decoded instruction: the opcode fetched at `address` with its operands
/// already consumed.
#[derive(Debug)]
pub struct CPUInstruction {
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub resolution: AddressingModeResolution,
    pub cycles: Cell<u8>,
}

impl CPUInstruction {
    pub fn new(
        address: u16,
        opcode: u8,
        instruction: &Instruction,
        resolution: AddressingModeResolution,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic: instruction.mnemonic,
            resolution,
            cycles: Cell::new(instruction.cycles),
        }
    }

    pub fn target_address(&self) -> Option<u16> {
        self.resolution.target_address
    }

    // Read instructions pay one cycle when indexing crosses a page.
    pub fn adjust_base_cycles(&self) {
        if self.resolution.page_crossed {
            self.cycles.set(self.cycles.get() + 1);
        }
    }

    // Taken branch: one more cycle, another one if the target is on another page.
    pub fn add_branch_cycles(&self) {
        let extra = if self.resolution.page_crossed { 2 } else { 1 };
        self.cycles.set(self.cycles.get() + extra);
    }

    fn byte_sequence(&self) -> String {
        format_bytes(self.opcode, &self.resolution.operands)
    }
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#0x{:04X}: {: <14}{: <4} {: <15}",
            self.address,
            self.byte_sequence(),
            self.mnemonic,
            self.resolution
        )
    }
}

fn format_bytes(opcode: u8, operands: &[u8]) -> String {
    format!(
        "({})",
        std::iter::once(&opcode)
            .chain(operands.iter())
            .fold(String::new(), |acc, s| format!("{} {:02x}", acc, s))
            .trim()
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: String,
    pub resolution: AddressingModeResolution,
    pub outcome: String,
    pub cycles: u8,
}

impl LogLine {
    pub fn new(cpu_instruction: &CPUInstruction, outcome: String) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            opcode: cpu_instruction.opcode,
            mnemonic: cpu_instruction.mnemonic.to_owned(),
            resolution: cpu_instruction.resolution.clone(),
            outcome,
            cycles: cpu_instruction.cycles.get(),
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#0x{:04X}: {: <14}{: <4} {: <15}  {}[{}]",
            self.address,
            format_bytes(self.opcode, &self.resolution.operands),
            self.mnemonic,
            self.resolution,
            self.outcome,
            self.cycles
        )
    }
}
