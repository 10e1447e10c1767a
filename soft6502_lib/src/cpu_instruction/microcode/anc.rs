use super::*;

/// # ANC - AND immediate, C copies N (undocumented)
pub fn anc(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.read_operand(cpu_instruction);
    let result = cpu.registers.accumulator & byte;
    cpu.registers.accumulator = load(&mut cpu.registers, result);
    cpu.registers.set_c_flag(result & 0x80 != 0);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            cpu.registers.accumulator,
            cpu.registers.format_status()
        ),
    ))
}
