use super::*;

/// The pushed copy always has B and bit 5 set.
pub fn php(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let status = cpu.registers.get_status_register() | B_FLAG | UNUSED_FLAG;
    cpu.registers.stack_push(&mut cpu.memory, status);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[SP=0x{:02x}]", cpu.registers.stack_pointer),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::STACK_BASE_ADDR;

    #[test]
    fn test_php() {
        let mut cpu = get_stuff(0x1000, &[0x08]);
        cpu.registers.set_d_flag(true);
        let log_line = cpu.step().unwrap();
        assert_eq!("PHP".to_owned(), log_line.mnemonic);
        assert_eq!(0b00111000, cpu.memory.read_byte(STACK_BASE_ADDR + 0xff));
        assert_eq!(0b00001000, cpu.registers.status_register);
        assert_eq!(0xfe, cpu.registers.stack_pointer);
        assert_eq!(0x1001, cpu.registers.command_pointer);
        assert_eq!(
            "#0x1000: (08)          PHP                      [SP=0xfe][3]",
            log_line.to_string()
        );
    }
}
