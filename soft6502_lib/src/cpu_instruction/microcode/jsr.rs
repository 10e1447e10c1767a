use super::*;

/// # JSR - jump to subroutine
///
/// Pushes the address of the last byte of the instruction (high byte first)
/// then jumps. RTS adds one to the pulled address.
pub fn jsr(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let [low, high] = cpu.registers.command_pointer.wrapping_sub(1).to_le_bytes();
    cpu.registers.stack_push(&mut cpu.memory, high);
    cpu.registers.stack_push(&mut cpu.memory, low);
    if let Some(target) = cpu_instruction.target_address() {
        cpu.registers.command_pointer = target;
    }

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[CP=0x{:04X}][SP=0x{:02x}]",
            cpu.registers.command_pointer, cpu.registers.stack_pointer
        ),
    ))
}
