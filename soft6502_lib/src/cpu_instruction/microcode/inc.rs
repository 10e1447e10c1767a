use super::*;

pub fn inc(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let (_, outcome) = modify(cpu, cpu_instruction, |registers, byte| {
        load(registers, byte.wrapping_add(1))
    });

    Ok(LogLine::new(cpu_instruction, outcome))
}
