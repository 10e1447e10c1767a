use super::*;

pub fn sei(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu.registers.set_i_flag(true);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[S={}]", cpu.registers.format_status()),
    ))
}
