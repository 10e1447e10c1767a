use super::*;

/// # RLA - ROL then AND (undocumented)
pub fn rla(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let (byte, _) = modify(cpu, cpu_instruction, alu::rotate_left);
    let result = cpu.registers.accumulator & byte;
    cpu.registers.accumulator = load(&mut cpu.registers, result);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "(0x{:02x})[A=0x{:02x}][S={}]",
            byte,
            cpu.registers.accumulator,
            cpu.registers.format_status()
        ),
    ))
}
