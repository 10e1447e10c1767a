use super::*;

/// # BIT - test bits
///
/// Z is set when A AND M is zero. N and V are copied from bits 7 and 6 of the
/// memory operand. The accumulator is not modified.
pub fn bit(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.read_operand(cpu_instruction);
    let registers = &mut cpu.registers;
    registers.set_z_flag(registers.accumulator & byte);
    registers.set_n_flag(byte);
    registers.set_v_flag(byte & V_FLAG != 0);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "(0x{:02x})[A=0x{:02x}][S={}]",
            byte,
            registers.accumulator,
            registers.format_status()
        ),
    ))
}
