use super::*;

/// # DCP - DEC then CMP (undocumented)
pub fn dcp(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let (byte, _) = modify(cpu, cpu_instruction, |_, byte| byte.wrapping_sub(1));
    let accumulator = cpu.registers.accumulator;
    alu::compare(&mut cpu.registers, accumulator, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "(0x{:02x})[A=0x{:02x}][S={}]",
            byte,
            accumulator,
            cpu.registers.format_status()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_dcp() {
        let mut cpu = get_stuff(0x1000, &[0xc7, 0x20]);
        cpu.memory.write(0x20, &[0x11]);
        cpu.registers.accumulator = 0x10;
        let log_line = cpu.step().unwrap();
        assert_eq!("DCP".to_owned(), log_line.mnemonic);
        assert_eq!(0x10, cpu.memory.read_byte(0x20));
        assert!(cpu.registers.z_flag_is_set());
        assert!(cpu.registers.c_flag_is_set());
        assert_eq!(5, log_line.cycles);
    }

    #[test]
    fn test_dcp_absolute_x() {
        let mut cpu = get_stuff(0x1000, &[0xdf, 0x00, 0x20]);
        cpu.registers.register_x = 0x01;
        cpu.registers.accumulator = 0x01;
        let log_line = cpu.step().unwrap();
        assert_eq!(0xff, cpu.memory.read_byte(0x2001));
        assert!(!cpu.registers.c_flag_is_set());
        assert_eq!(7, log_line.cycles);
    }
}
