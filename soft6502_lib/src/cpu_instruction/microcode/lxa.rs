use super::ane::MAGIC;
use super::*;

/// # LXA - A = X = (A | MAGIC) & M (undocumented, unstable)
pub fn lxa(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.read_operand(cpu_instruction);
    let value = (cpu.registers.accumulator | MAGIC) & byte;
    let result = load(&mut cpu.registers, value);
    cpu.registers.accumulator = result;
    cpu.registers.register_x = result;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][X=0x{:02x}][S={}]",
            cpu.registers.accumulator,
            cpu.registers.register_x,
            cpu.registers.format_status()
        ),
    ))
}
