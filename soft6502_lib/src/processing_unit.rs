use super::config::CPUConfiguration;
use super::cpu_instruction::{CPUInstruction, Instruction, LogLine, OPCODES};
use super::error::{CPUError, Result};
use super::memory::{AddressableIO, RAM as Memory};
use super::registers::Registers;
use log::{debug, trace};
use std::ops::ControlFlow;

/*
 * CPU
 * Owns the registers and the memory for the whole session. Nothing outside
 * the processor writes to them while it runs.
 *
 * idle (running = false) -> start() -> running -> halted (running = false)
 * The processor halts on BRK, on a fault or when the host asks to stop
 * between two instructions.
 */
#[derive(Debug)]
pub struct CPU {
    pub registers: Registers,
    pub memory: Memory,
    configuration: CPUConfiguration,
    running: bool,
    cycles: u64,
}

impl CPU {
    pub fn new(memory: Memory) -> CPU {
        CPU::with_configuration(memory, CPUConfiguration::default())
    }

    pub fn with_configuration(memory: Memory, configuration: CPUConfiguration) -> CPU {
        CPU {
            registers: Registers::new(configuration.start_address),
            memory,
            configuration,
            running: configuration.running,
            cycles: 0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn configuration(&self) -> &CPUConfiguration {
        &self.configuration
    }

    /// Read the byte at PC and advance PC.
    pub fn fetch(&mut self) -> u8 {
        self.registers.fetch(&self.memory)
    }

    pub fn decode(&self, opcode: u8) -> Option<&'static Instruction> {
        let instruction = &OPCODES[opcode as usize];

        if instruction.illegal && !self.configuration.illegal_opcodes {
            None
        } else {
            Some(instruction)
        }
    }

    /// Execute exactly one instruction.
    ///
    /// An opcode the processor does not know halts it and leaves every
    /// register but PC untouched.
    pub fn step(&mut self) -> Result<LogLine> {
        let address = self.registers.command_pointer;
        let opcode = self.fetch();
        let instruction = match self.decode(opcode) {
            Some(instruction) => instruction,
            None => {
                self.running = false;
                return Err(CPUError::UnknownOpcode(opcode, address));
            }
        };
        let resolution = instruction
            .addressing_mode
            .solve(&mut self.registers, &self.memory);
        let cpu_instruction = CPUInstruction::new(address, opcode, instruction, resolution);
        let result = match instruction.microcode {
            Some(microcode) => microcode(self, &cpu_instruction),
            None => Ok(LogLine::new(&cpu_instruction, String::new())),
        };
        self.cycles += cpu_instruction.cycles.get() as u64;

        result
    }

    pub fn run(&mut self) -> Result<()> {
        self.run_with(|_, _| ControlFlow::Continue(()))
    }

    /// Run until the processor halts. The observer is called after each
    /// instruction and may ask for a stop by returning `ControlFlow::Break`.
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<()>
    where
        F: FnMut(&CPU, &LogLine) -> ControlFlow<()>,
    {
        while self.running {
            let log_line = self.step().inspect_err(|e| debug!("fault: {}", e))?;
            trace!("{}", log_line);

            if observer(self, &log_line).is_break() {
                debug!(
                    "stop requested at #0x{:04X}",
                    self.registers.command_pointer
                );
                self.running = false;
            }
        }
        debug!(
            "halted at #0x{:04X} after {} cycles",
            self.registers.command_pointer, self.cycles
        );

        Ok(())
    }

    /// Whether ADC and SBC apply the BCD correction.
    pub fn decimal_enabled(&self) -> bool {
        self.configuration.decimal_mode && self.registers.d_flag_is_set()
    }

    /// Operand value: the accumulator when the instruction has no target.
    pub fn read_operand(&self, cpu_instruction: &CPUInstruction) -> u8 {
        match cpu_instruction.target_address() {
            Some(addr) => self.memory.read_byte(addr),
            None => self.registers.accumulator,
        }
    }

    pub fn write_operand(&mut self, cpu_instruction: &CPUInstruction, value: u8) {
        match cpu_instruction.target_address() {
            Some(addr) => self.memory.write_byte(addr, value),
            None => self.registers.accumulator = value,
        }
    }
}
