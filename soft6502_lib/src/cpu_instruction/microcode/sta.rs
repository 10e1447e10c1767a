use super::*;

pub fn sta(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let byte = cpu.registers.accumulator;
    cpu.write_operand(cpu_instruction, byte);

    Ok(LogLine::new(cpu_instruction, format!("(0x{:02x})", byte)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_sta() {
        let mut cpu = get_stuff(0x1000, &[0x8d, 0x00, 0x20]);
        cpu.registers.accumulator = 0x42;
        let status = cpu.registers.status_register;
        let log_line = cpu.step().unwrap();
        assert_eq!("STA".to_owned(), log_line.mnemonic);
        assert_eq!(0x42, cpu.memory.read_byte(0x2000));
        assert_eq!(status, cpu.registers.status_register);
        assert_eq!(0x1003, cpu.registers.command_pointer);
        assert_eq!(
            "#0x1000: (8d 00 20)    STA  $2000    (#0x2000)  (0x42)[4]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_sta_absolute_x_no_page_penalty() {
        let mut cpu = get_stuff(0x1000, &[0x9d, 0xff, 0x10]);
        cpu.registers.accumulator = 0x42;
        cpu.registers.register_x = 0x01;
        let log_line = cpu.step().unwrap();
        assert_eq!(0x42, cpu.memory.read_byte(0x1100));
        assert_eq!(5, log_line.cycles);
    }

    #[test]
    fn test_sta_indirect_x() {
        let mut cpu = get_stuff(0x1000, &[0x81, 0x20]);
        cpu.memory.write(0x24, &[0x34, 0x12]);
        cpu.registers.register_x = 0x04;
        cpu.registers.accumulator = 0x99;
        let log_line = cpu.step().unwrap();
        assert_eq!(0x99, cpu.memory.read_byte(0x1234));
        assert_eq!(6, log_line.cycles);
    }
}
