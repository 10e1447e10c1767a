use super::*;

pub fn clc(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu.registers.set_c_flag(false);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[S={}]", cpu.registers.format_status()),
    ))
}

#[cfg(test)]
mod tests {
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_clc() {
        let mut cpu = get_stuff(0x1000, &[0x18]);
        cpu.registers.set_c_flag(true);
        let log_line = cpu.step().unwrap();
        assert_eq!("CLC".to_owned(), log_line.mnemonic);
        assert!(!cpu.registers.c_flag_is_set());
        assert_eq!(0x1001, cpu.registers.command_pointer);
        assert_eq!(
            "#0x1000: (18)          CLC                      [S=nv-bdizc][2]",
            log_line.to_string()
        );
    }
}
