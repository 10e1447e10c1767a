use super::*;

pub fn bmi(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let condition = cpu.registers.n_flag_is_set();
    branch(cpu, cpu_instruction, condition)
}
