use super::*;

/// Undocumented NOPs that read an operand. The implied ones have no
/// microcode at all.
pub fn nop(_cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu_instruction.adjust_base_cycles();

    Ok(LogLine::new(cpu_instruction, String::new()))
}
