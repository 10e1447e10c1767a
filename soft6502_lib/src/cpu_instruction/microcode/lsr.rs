use super::*;

pub fn lsr(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let (_, outcome) = modify(cpu, cpu_instruction, alu::shift_right);

    Ok(LogLine::new(cpu_instruction, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_lsr_accumulator() {
        let mut cpu = get_stuff(0x1000, &[0x4a]);
        cpu.registers.accumulator = 0x01;
        let log_line = cpu.step().unwrap();
        assert_eq!("LSR".to_owned(), log_line.mnemonic);
        assert_eq!(0x00, cpu.registers.accumulator);
        assert!(cpu.registers.c_flag_is_set());
        assert!(cpu.registers.z_flag_is_set());
        assert_eq!(
            "#0x1000: (4a)          LSR  A                   [A=0x00][S=nv-bdiZC][2]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_lsr_absolute() {
        let mut cpu = get_stuff(0x1000, &[0x4e, 0x00, 0x20]);
        cpu.memory.write(0x2000, &[0x80]);
        cpu.registers.set_n_flag(0x80);
        let log_line = cpu.step().unwrap();
        assert_eq!(0x40, cpu.memory.read_byte(0x2000));
        assert!(!cpu.registers.n_flag_is_set());
        assert!(!cpu.registers.c_flag_is_set());
        assert_eq!(6, log_line.cycles);
    }
}
