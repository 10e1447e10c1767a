use super::*;

pub fn tya(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.registers.register_y;
    cpu.registers.accumulator = load(&mut cpu.registers, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            cpu.registers.accumulator,
            cpu.registers.format_status()
        ),
    ))
}
