use super::*;

pub fn cli(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu.registers.set_i_flag(false);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[S={}]", cpu.registers.format_status()),
    ))
}

#[cfg(test)]
mod tests {
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_cli() {
        let mut cpu = get_stuff(0x1000, &[0x58]);
        cpu.registers.set_i_flag(true);
        let log_line = cpu.step().unwrap();
        assert_eq!("CLI".to_owned(), log_line.mnemonic);
        assert!(!cpu.registers.i_flag_is_set());
        assert_eq!(0x1001, cpu.registers.command_pointer);
        assert_eq!(2, log_line.cycles);
    }
}
