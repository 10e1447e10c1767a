use super::*;

/// # LAX - LDA and LDX at once (undocumented)
pub fn lax(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu_instruction.adjust_base_cycles();
    let byte = cpu.read_operand(cpu_instruction);
    let byte = load(&mut cpu.registers, byte);
    cpu.registers.accumulator = byte;
    cpu.registers.register_x = byte;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][X=0x{:02x}][S={}]",
            cpu.registers.accumulator,
            cpu.registers.register_x,
            cpu.registers.format_status()
        ),
    ))
}
