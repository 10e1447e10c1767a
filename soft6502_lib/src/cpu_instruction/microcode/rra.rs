use super::*;

/// # RRA - ROR then ADC (undocumented)
///
/// The carry shifted out by ROR feeds the addition.
pub fn rra(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let (byte, _) = modify(cpu, cpu_instruction, alu::rotate_right);
    let decimal = cpu.decimal_enabled();
    alu::add_with_carry(&mut cpu.registers, byte, decimal);

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
