use super::*;

pub fn cld(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu.registers.set_d_flag(false);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[S={}]", cpu.registers.format_status()),
    ))
}
