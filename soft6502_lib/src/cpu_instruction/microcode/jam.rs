use super::*;

/// # JAM - locks the NMOS processor
///
/// The processor stops and only a reset would bring it back, registers
/// other than PC are left as they were.
pub fn jam(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu.stop();

    Err(CPUError::Jammed(
        cpu_instruction.opcode,
        cpu_instruction.address,
    ))
}
