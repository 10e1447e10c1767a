use super::*;

/// # RTI - return from interrupt
///
/// Pulls the status (as PLP does) then the command pointer. Unlike RTS the
/// pulled address is not incremented.
pub fn rti(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let status = cpu.registers.stack_pull(&cpu.memory);
    super::plp::restore_status(&mut cpu.registers, status);
    let low = cpu.registers.stack_pull(&cpu.memory);
    let high = cpu.registers.stack_pull(&cpu.memory);
    cpu.registers.command_pointer = little_endian(low, high);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[CP=0x{:04X}][SP=0x{:02x}][S={}]",
            cpu.registers.command_pointer,
            cpu.registers.stack_pointer,
            cpu.registers.format_status()
        ),
    ))
}
