use std::fmt;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use log::info;
use soft6502_lib::{CPUConfiguration, LogLine, Memory, Registers, CPU};

use crate::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// BRK was executed.
    Halted,
    /// The host asked for a stop (CTRL-C).
    Interrupted,
    /// The cycle budget is spent.
    CycleLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StopReason::Halted => write!(f, "halted by BRK"),
            StopReason::Interrupted => write!(f, "interrupted"),
            StopReason::CycleLimit => write!(f, "cycle limit reached"),
        }
    }
}

/// State of the processor once the session is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub reason: StopReason,
    pub registers: Registers,
    pub cycles: u64,
    pub instructions: u64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", format_registers(&self.registers))?;
        write!(
            f,
            "{} after {} instructions and {} cycles",
            self.reason, self.instructions, self.cycles
        )
    }
}

pub fn format_registers(registers: &Registers) -> String {
    format!(
        "A=0x{:02x} X=0x{:02x} Y=0x{:02x} SP=0x{:02x} CP=0x{:04X} S={}",
        registers.accumulator,
        registers.register_x,
        registers.register_y,
        registers.stack_pointer,
        registers.command_pointer,
        registers.format_status()
    )
}

/*
 * Session
 * One processor, one memory image, run until BRK, a fault, the cycle budget
 * or a stop request from the host.
 */
pub struct Session {
    cpu: CPU,
    max_cycles: Option<u64>,
}

impl Session {
    pub fn new(memory: Memory, configuration: CPUConfiguration, max_cycles: Option<u64>) -> Self {
        Self {
            cpu: CPU::with_configuration(memory, configuration),
            max_cycles,
        }
    }

    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    /// Run the processor. `on_line` sees every executed instruction and
    /// `stop` is checked between two instructions.
    pub fn run<F>(&mut self, stop: &AtomicBool, mut on_line: F) -> AppResult<Report>
    where
        F: FnMut(&LogLine),
    {
        let max_cycles = self.max_cycles;
        let mut reason = StopReason::Halted;
        let mut instructions: u64 = 0;

        info!("starting at #0x{:04X}", self.cpu.registers.command_pointer);
        self.cpu.start();
        let result = self.cpu.run_with(|cpu, log_line| {
            instructions += 1;
            on_line(log_line);

            if stop.load(Ordering::Relaxed) {
                reason = StopReason::Interrupted;
                ControlFlow::Break(())
            } else if max_cycles.is_some_and(|max| cpu.cycles() >= max) {
                reason = StopReason::CycleLimit;
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        result.with_context(|| {
            format!(
                "execution aborted after {} cycles, {}",
                self.cpu.cycles(),
                format_registers(&self.cpu.registers)
            )
        })?;

        Ok(Report {
            reason,
            registers: self.cpu.registers,
            cycles: self.cpu.cycles(),
            instructions,
        })
    }
}
