use super::*;

pub fn tay(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.registers.accumulator;
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
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_tay() {
        let mut cpu = get_stuff(0x1000, &[0xa8]);
        cpu.registers.register_y = 0x12;
        let log_line = cpu.step().unwrap();
        assert_eq!("TAY".to_owned(), log_line.mnemonic);
        assert_eq!(0x00, cpu.registers.register_y);
        assert!(cpu.registers.z_flag_is_set());
        assert_eq!(2, log_line.cycles);
    }
}
