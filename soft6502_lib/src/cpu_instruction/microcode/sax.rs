use super::*;

/// # SAX - store A AND X (undocumented), flags untouched
pub fn sax(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.registers.accumulator & cpu.registers.register_x;
    cpu.write_operand(cpu_instruction, byte);

    Ok(LogLine::new(cpu_instruction, format!("(0x{:02x})", byte)))
}
