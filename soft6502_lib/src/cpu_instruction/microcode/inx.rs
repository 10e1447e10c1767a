use super::*;

pub fn inx(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.registers.register_x.wrapping_add(1);
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
