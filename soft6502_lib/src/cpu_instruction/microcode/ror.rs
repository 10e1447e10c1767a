use super::*;

pub fn ror(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let (_, outcome) = modify(cpu, cpu_instruction, alu::rotate_right);

    Ok(LogLine::new(cpu_instruction, outcome))
}
