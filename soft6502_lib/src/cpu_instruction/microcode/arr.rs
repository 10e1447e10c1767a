use super::*;

/// # ARR - AND immediate then ROR A (undocumented)
///
/// C takes bit 6 of the result and V is bit 6 XOR bit 5. The decimal
/// variant of the NMOS is not emulated.
pub fn arr(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.read_operand(cpu_instruction);
    let anded = cpu.registers.accumulator & byte;
    let result = (anded >> 1) | ((cpu.registers.c_flag_is_set() as u8) << 7);
    cpu.registers.accumulator = load(&mut cpu.registers, result);
    cpu.registers.set_c_flag(result & 0x40 != 0);
    cpu.registers.set_v_flag(((result >> 6) ^ (result >> 5)) & 0x01 != 0);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            cpu.registers.accumulator,
            cpu.registers.format_status()
        ),
    ))
}
