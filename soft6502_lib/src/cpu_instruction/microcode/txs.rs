use super::*;

/// TXS is the only transfer that leaves the flags alone.
pub fn txs(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu.registers.stack_pointer = cpu.registers.register_x;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[SP=0x{:02x}][S={}]",
            cpu.registers.stack_pointer,
            cpu.registers.format_status()
        ),
    ))
}
