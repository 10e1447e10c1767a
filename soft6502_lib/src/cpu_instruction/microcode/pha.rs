use super::*;

pub fn pha(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.registers.accumulator;
    cpu.registers.stack_push(&mut cpu.memory, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[SP=0x{:02x}]", cpu.registers.stack_pointer),
    ))
}
