use super::*;

/// # SBX - X = (A & X) - M (undocumented)
///
/// Works like CMP for the flags, neither the carry nor D are used.
pub fn sbx(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.read_operand(cpu_instruction);
    let anded = cpu.registers.accumulator & cpu.registers.register_x;
    alu::compare(&mut cpu.registers, anded, byte);
    cpu.registers.register_x = anded.wrapping_sub(byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[X=0x{:02x}][S={}]",
            cpu.registers.register_x,
            cpu.registers.format_status()
        ),
    ))
}
