use super::*;

pub fn cpx(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu_instruction.adjust_base_cycles();
    let byte = cpu.read_operand(cpu_instruction);
    let register = cpu.registers.register_x;
    alu::compare(&mut cpu.registers, register, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "(0x{:02x})[X=0x{:02x}][S={}]",
            byte,
            register,
            cpu.registers.format_status()
        ),
    ))
}
