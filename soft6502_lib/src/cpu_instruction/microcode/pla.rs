use super::*;

pub fn pla(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.registers.stack_pull(&cpu.memory);
    cpu.registers.accumulator = load(&mut cpu.registers, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][SP=0x{:02x}][S={}]",
            cpu.registers.accumulator,
            cpu.registers.stack_pointer,
            cpu.registers.format_status()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_pla() {
        let mut cpu = get_stuff(0x1000, &[0x68]);
        cpu.memory.write(0x01ff, &[0x80]);
        cpu.registers.stack_pointer = 0xfe;
        let log_line = cpu.step().unwrap();
        assert_eq!("PLA".to_owned(), log_line.mnemonic);
        assert_eq!(0x80, cpu.registers.accumulator);
        assert_eq!(0xff, cpu.registers.stack_pointer);
        assert!(cpu.registers.n_flag_is_set());
        assert_eq!(
            "#0x1000: (68)          PLA                      [A=0x80][SP=0xff][S=Nv-bdizc][4]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_pla_wraps_stack_pointer() {
        let mut cpu = get_stuff(0x1000, &[0x68]);
        cpu.memory.write(0x0100, &[0x00]);
        cpu.registers.accumulator = 0x12;
        cpu.step().unwrap();
        assert_eq!(0x00, cpu.registers.stack_pointer);
        assert_eq!(0x00, cpu.registers.accumulator);
        assert!(cpu.registers.z_flag_is_set());
    }
}
