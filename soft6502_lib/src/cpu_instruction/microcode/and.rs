use super::*;

pub fn and(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu_instruction.adjust_base_cycles();
    let byte = cpu.read_operand(cpu_instruction);
    let result = cpu.registers.accumulator & byte;
    cpu.registers.accumulator = load(&mut cpu.registers, result);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "(0x{:02x})[A=0x{:02x}][S={}]",
            byte,
            cpu.registers.accumulator,
            cpu.registers.format_status()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_and() {
        let mut cpu = get_stuff(0x1000, &[0x29, 0x0f]);
        cpu.registers.accumulator = 0xfa;
        let log_line = cpu.step().unwrap();
        assert_eq!("AND".to_owned(), log_line.mnemonic);
        assert_eq!(0x0a, cpu.registers.accumulator);
        assert!(!cpu.registers.z_flag_is_set());
        assert!(!cpu.registers.n_flag_is_set());
        assert_eq!(
            "#0x1000: (29 0f)       AND  #$0f     (#0x1001)  (0x0f)[A=0x0a][S=nv-bdizc][2]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_and_zero_page_x() {
        let mut cpu = get_stuff(0x1000, &[0x35, 0x10]);
        cpu.memory.write(0x15, &[0xf0]);
        cpu.registers.register_x = 0x05;
        cpu.registers.accumulator = 0x0f;
        let log_line = cpu.step().unwrap();
        assert_eq!(0x00, cpu.registers.accumulator);
        assert!(cpu.registers.z_flag_is_set());
        assert_eq!(4, log_line.cycles);
    }
}
