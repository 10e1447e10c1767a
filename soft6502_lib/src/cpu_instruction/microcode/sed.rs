use super::*;

pub fn sed(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu.registers.set_d_flag(true);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[S={}]", cpu.registers.format_status()),
    ))
}

#[cfg(test)]
mod tests {
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_sed() {
        let mut cpu = get_stuff(0x1000, &[0xf8]);
        cpu.registers.set_d_flag(false);
        let log_line = cpu.step().unwrap();
        assert_eq!("SED".to_owned(), log_line.mnemonic);
        assert!(cpu.registers.d_flag_is_set());
        assert_eq!(0x1001, cpu.registers.command_pointer);
        assert_eq!(2, log_line.cycles);
    }

    #[test]
    fn test_sed_keeps_other_flags() {
        let mut cpu = get_stuff(0x1000, &[0xf8]);
        cpu.registers.status_register = 0b11000011;
        cpu.step().unwrap();
        assert_eq!(0b11001011, cpu.registers.status_register);
    }
}
