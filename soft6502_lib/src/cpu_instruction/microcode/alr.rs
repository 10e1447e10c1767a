use super::*;

/// # ALR - AND immediate then LSR A (undocumented)
pub fn alr(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.read_operand(cpu_instruction);
    let result = cpu.registers.accumulator & byte;
    cpu.registers.accumulator = alu::shift_right(&mut cpu.registers, result);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            cpu.registers.accumulator,
            cpu.registers.format_status()
        ),
    ))
}
