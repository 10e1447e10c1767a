use super::*;

pub fn ldy(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu_instruction.adjust_base_cycles();
    let byte = cpu.read_operand(cpu_instruction);
    cpu.registers.register_y = load(&mut cpu.registers, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[Y=0x{:02x}][S={}]",
            cpu.registers.register_y,
            cpu.registers.format_status()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_ldy() {
        let mut cpu = get_stuff(0x1000, &[0xa0, 0x80]);
        let log_line = cpu.step().unwrap();
        assert_eq!("LDY".to_owned(), log_line.mnemonic);
        assert_eq!(0x80, cpu.registers.register_y);
        assert!(cpu.registers.n_flag_is_set());
        assert_eq!(
            "#0x1000: (a0 80)       LDY  #$80     (#0x1001)  [Y=0x80][S=Nv-bdizc][2]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_ldy_absolute_x() {
        let mut cpu = get_stuff(0x1000, &[0xbc, 0x00, 0x20]);
        cpu.memory.write(0x2004, &[0x44]);
        cpu.registers.register_x = 0x04;
        let log_line = cpu.step().unwrap();
        assert_eq!(0x44, cpu.registers.register_y);
        assert_eq!(4, log_line.cycles);
    }
}
