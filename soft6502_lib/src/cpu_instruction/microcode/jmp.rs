use super::*;

pub fn jmp(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    if let Some(target) = cpu_instruction.target_address() {
        cpu.registers.command_pointer = target;
    }

    Ok(LogLine::new(
        cpu_instruction,
        format!("[CP=0x{:04X}]", cpu.registers.command_pointer),
    ))
}
