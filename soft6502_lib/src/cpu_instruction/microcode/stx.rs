use super::*;

pub fn stx(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.registers.register_x;
    cpu.write_operand(cpu_instruction, byte);

    Ok(LogLine::new(cpu_instruction, format!("(0x{:02x})", byte)))
}
