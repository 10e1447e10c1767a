use super::*;

pub fn dex(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.registers.register_x.wrapping_sub(1);
    cpu.registers.register_x = load(&mut cpu.registers, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[X=0x{:02x}][S={}]",
            cpu.registers.register_x,
            cpu.registers.format_status()
        ),
    ))
}
