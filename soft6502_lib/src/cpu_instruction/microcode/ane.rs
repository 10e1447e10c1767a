use super::*;

/// Bits the NMOS forces in A before ANE and LXA. Chips disagree, 0xEE is
/// the most common value.
pub(super) const MAGIC: u8 = 0xee;

/// # ANE - (A | MAGIC) & X & M (undocumented, unstable)
pub fn ane(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.read_operand(cpu_instruction);
    let result = (cpu.registers.accumulator | MAGIC) & cpu.registers.register_x & byte;
    cpu.registers.accumulator = load(&mut cpu.registers, result);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            cpu.registers.accumulator,
            cpu.registers.format_status()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_ane() {
        let mut cpu = get_stuff(0x1000, &[0x8b, 0xff]);
        cpu.registers.register_x = 0xff;
        let log_line = cpu.step().unwrap();
        assert_eq!("ANE".to_owned(), log_line.mnemonic);
        assert_eq!(0xee, cpu.registers.accumulator);
        assert!(cpu.registers.n_flag_is_set());
        assert_eq!(2, log_line.cycles);
    }
}
