use super::*;

/// # SHY - store Y & (H + 1) (undocumented, unstable)
pub fn shy(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let (value, index) = (cpu.registers.register_y, cpu.registers.register_x);
    let (address, byte) = store_high_and(cpu, cpu_instruction, value, index);

    Ok(LogLine::new(
        cpu_instruction,
        format!("0x{:02x}(#0x{:04X})", byte, address),
    ))
}
