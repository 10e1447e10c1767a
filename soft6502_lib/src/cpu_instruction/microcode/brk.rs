use super::*;

/// # BRK
///
/// Software stop of the processor. The B flag is set to tell why the
/// processor halted and the run loop ends after this instruction. No interrupt
/// sequence takes place: nothing is pushed and the IRQ vector is not read.
pub fn brk(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu.registers.set_b_flag(true);
    cpu.stop();

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[CP=0x{:04X}][S={}]",
            cpu.registers.command_pointer,
            cpu.registers.format_status()
        ),
    ))
}
