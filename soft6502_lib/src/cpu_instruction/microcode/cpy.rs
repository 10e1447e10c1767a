use super::*;

pub fn cpy(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu_instruction.adjust_base_cycles();
    let byte = cpu.read_operand(cpu_instruction);
    let register = cpu.registers.register_y;
    alu::compare(&mut cpu.registers, register, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "(0x{:02x})[Y=0x{:02x}][S={}]",
            byte,
            register,
            cpu.registers.format_status()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_cpy() {
        let mut cpu = get_stuff(0x1000, &[0xc0, 0x10]);
        cpu.registers.register_y = 0x20;
        let log_line = cpu.step().unwrap();
        assert_eq!("CPY".to_owned(), log_line.mnemonic);
        assert!(cpu.registers.c_flag_is_set());
        assert!(!cpu.registers.z_flag_is_set());
        assert!(!cpu.registers.n_flag_is_set());
        assert_eq!(
            "#0x1000: (c0 10)       CPY  #$10     (#0x1001)  (0x10)[Y=0x20][S=nv-bdizC][2]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_cpy_absolute() {
        let mut cpu = get_stuff(0x1000, &[0xcc, 0x00, 0x20]);
        cpu.memory.write(0x2000, &[0x20]);
        cpu.registers.register_y = 0x20;
        let log_line = cpu.step().unwrap();
        assert!(cpu.registers.z_flag_is_set());
        assert_eq!(4, log_line.cycles);
    }
}
