use super::*;

pub fn rol(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let (_, outcome) = modify(cpu, cpu_instruction, alu::rotate_left);

    Ok(LogLine::new(cpu_instruction, outcome))
}
