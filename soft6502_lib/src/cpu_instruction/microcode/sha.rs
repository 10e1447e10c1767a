use super::*;

/// # SHA - store A & X & (H + 1) (undocumented, unstable)
pub fn sha(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let value = cpu.registers.accumulator & cpu.registers.register_x;
    let index = cpu.registers.register_y;
    let (address, byte) = store_high_and(cpu, cpu_instruction, value, index);

    Ok(LogLine::new(
        cpu_instruction,
        format!("0x{:02x}(#0x{:04X})", byte, address),
    ))
}
