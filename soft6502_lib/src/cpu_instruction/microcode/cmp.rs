use super::*;

pub fn cmp(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu_instruction.adjust_base_cycles();
    let byte = cpu.read_operand(cpu_instruction);
    let register = cpu.registers.accumulator;
    alu::compare(&mut cpu.registers, register, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "(0x{:02x})[A=0x{:02x}][S={}]",
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
    fn test_cmp_equal() {
        let mut cpu = get_stuff(0x1000, &[0xc9, 0x10]);
        cpu.registers.accumulator = 0x10;
        let log_line = cpu.step().unwrap();
        assert_eq!("CMP".to_owned(), log_line.mnemonic);
        assert_eq!(0x10, cpu.registers.accumulator);
        assert!(cpu.registers.z_flag_is_set());
        assert!(cpu.registers.c_flag_is_set());
        assert!(!cpu.registers.n_flag_is_set());
        assert_eq!(
            "#0x1000: (c9 10)       CMP  #$10     (#0x1001)  (0x10)[A=0x10][S=nv-bdiZC][2]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_cmp_lower() {
        let mut cpu = get_stuff(0x1000, &[0xc5, 0x20]);
        cpu.memory.write(0x20, &[0x30]);
        cpu.registers.accumulator = 0x10;
        let log_line = cpu.step().unwrap();
        assert!(!cpu.registers.z_flag_is_set());
        assert!(!cpu.registers.c_flag_is_set());
        assert!(cpu.registers.n_flag_is_set());
        assert_eq!(3, log_line.cycles);
    }

    #[test]
    fn test_cmp_leaves_overflow() {
        let mut cpu = get_stuff(0x1000, &[0xc9, 0x01]);
        cpu.registers.accumulator = 0x80;
        cpu.registers.set_v_flag(true);
        cpu.step().unwrap();
        assert!(cpu.registers.v_flag_is_set());
        assert!(cpu.registers.c_flag_is_set());
        assert!(!cpu.registers.n_flag_is_set());
    }
}
