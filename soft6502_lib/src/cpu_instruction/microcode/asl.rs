use super::*;

pub fn asl(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let (_, outcome) = modify(cpu, cpu_instruction, alu::shift_left);

    Ok(LogLine::new(cpu_instruction, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_asl_accumulator() {
        let mut cpu = get_stuff(0x1000, &[0x0a]);
        cpu.registers.accumulator = 0x81;
        let log_line = cpu.step().unwrap();
        assert_eq!("ASL".to_owned(), log_line.mnemonic);
        assert_eq!(0x02, cpu.registers.accumulator);
        assert!(cpu.registers.c_flag_is_set());
        assert!(!cpu.registers.n_flag_is_set());
        assert_eq!(0x1001, cpu.registers.command_pointer);
        assert_eq!(
            "#0x1000: (0a)          ASL  A                   [A=0x02][S=nv-bdizC][2]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_asl_zero_page() {
        let mut cpu = get_stuff(0x1000, &[0x06, 0x20]);
        cpu.memory.write(0x20, &[0x40]);
        cpu.registers.set_c_flag(true);
        let log_line = cpu.step().unwrap();
        assert_eq!(0x80, cpu.memory.read_byte(0x20));
        assert_eq!(0x00, cpu.registers.accumulator);
        assert!(!cpu.registers.c_flag_is_set());
        assert!(cpu.registers.n_flag_is_set());
        assert_eq!(
            "#0x1000: (06 20)       ASL  $20      (#0x0020)  0x80[S=Nv-bdizc][5]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_asl_absolute_x_always_7_cycles() {
        let mut cpu = get_stuff(0x1000, &[0x1e, 0x00, 0x20]);
        cpu.memory.write(0x2001, &[0x01]);
        cpu.registers.register_x = 0x01;
        let log_line = cpu.step().unwrap();
        assert_eq!(0x02, cpu.memory.read_byte(0x2001));
        assert_eq!(7, log_line.cycles);
    }
}
