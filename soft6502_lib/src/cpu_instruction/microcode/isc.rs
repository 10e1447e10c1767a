use super::*;

/// # ISC - INC then SBC (undocumented)
pub fn isc(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let (byte, _) = modify(cpu, cpu_instruction, |_, byte| byte.wrapping_add(1));
    let decimal = cpu.decimal_enabled();
    alu::subtract_with_borrow(&mut cpu.registers, byte, decimal);

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
