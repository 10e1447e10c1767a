use super::*;

/// # ADC - Add with carry
///
/// The 6502 has only one instruction for addition, an addition with carry.
/// When the D flag is set (and the processor honors it), the accumulator and
/// the operand are treated as packed BCD values. On the NMOS chip the N, V
/// and Z flags are then not meaningful, they are reproduced as the silicon
/// computes them.
pub fn adc(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu_instruction.adjust_base_cycles();
    let byte = cpu.read_operand(cpu_instruction);
    let decimal = cpu.decimal_enabled();
    alu::add_with_carry(&mut cpu.registers, byte, decimal);

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
