use super::*;

/// # SBC - Subtract with borrow
///
/// The borrow is the complement of the carry flag: C set means no borrow.
/// After the operation C is set when no borrow occurred. Opcode 0xEB is an
/// undocumented duplicate of the immediate form.
pub fn sbc(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu_instruction.adjust_base_cycles();
    let byte = cpu.read_operand(cpu_instruction);
    let decimal = cpu.decimal_enabled();
    alu::subtract_with_borrow(&mut cpu.registers, byte, decimal);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "(0x{:02x})[A=0x{:02x}][S={}]",
            byte,
            cpu.registers.accumulator,
            cpu.registers.format_status()
        ),
    ))
}
