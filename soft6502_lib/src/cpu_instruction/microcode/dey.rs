use super::*;

pub fn dey(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.registers.register_y.wrapping_sub(1);
    cpu.registers.register_y = load(&mut cpu.registers, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[Y=0x{:02x}][S={}]",
            cpu.registers.register_y,
            cpu.registers.format_status()
        ),
    ))
}
