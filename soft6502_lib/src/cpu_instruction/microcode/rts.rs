use super::*;

pub fn rts(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let low = cpu.registers.stack_pull(&cpu.memory);
    let high = cpu.registers.stack_pull(&cpu.memory);
    cpu.registers.command_pointer = little_endian(low, high).wrapping_add(1);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[CP=0x{:04X}][SP=0x{:02x}]",
            cpu.registers.command_pointer, cpu.registers.stack_pointer
        ),
    ))
}
