use super::*;

/// # BCC - branch if carry clear
///
/// Branches cost 2 cycles, one more when taken and another one when the
/// target sits in a different page than the next instruction.
pub fn bcc(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let condition = !cpu.registers.c_flag_is_set();
    branch(cpu, cpu_instruction, condition)
}
