use super::*;

pub fn beq(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let condition = cpu.registers.z_flag_is_set();
    branch(cpu, cpu_instruction, condition)
}
