use super::*;

/// B and bit 5 do not exist in the processor, they keep their current value.
pub fn plp(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let status = cpu.registers.stack_pull(&cpu.memory);
    restore_status(&mut cpu.registers, status);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[SP=0x{:02x}][S={}]",
            cpu.registers.stack_pointer,
            cpu.registers.format_status()
        ),
    ))
}

pub(super) fn restore_status(registers: &mut Registers, status: u8) {
    let kept = B_FLAG | UNUSED_FLAG;
    registers.status_register = (status & !kept) | (registers.status_register & kept);
}
