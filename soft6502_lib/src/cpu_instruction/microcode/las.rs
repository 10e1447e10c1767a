use super::*;

/// # LAS - A = X = SP = M & SP (undocumented)
pub fn las(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu_instruction.adjust_base_cycles();
    let byte = cpu.read_operand(cpu_instruction) & cpu.registers.stack_pointer;
    let byte = load(&mut cpu.registers, byte);
    cpu.registers.accumulator = byte;
    cpu.registers.register_x = byte;
    cpu.registers.stack_pointer = byte;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][SP=0x{:02x}][S={}]",
            byte,
            byte,
            cpu.registers.format_status()
        ),
    ))
}
