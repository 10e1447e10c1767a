use super::*;

/// # TAS - SP = A & X then store SP & (H + 1) (undocumented, unstable)
pub fn tas(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    cpu.registers.stack_pointer = cpu.registers.accumulator & cpu.registers.register_x;
    let (stack_pointer, index) = (cpu.registers.stack_pointer, cpu.registers.register_y);
    let (address, byte) = store_high_and(cpu, cpu_instruction, stack_pointer, index);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "0x{:02x}(#0x{:04X})[SP=0x{:02x}]",
            byte, address, cpu.registers.stack_pointer
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_tas() {
        let mut cpu = get_stuff(0x1000, &[0x9b, 0x00, 0x20]);
        cpu.registers.accumulator = 0xf0;
        cpu.registers.register_x = 0x3f;
        let log_line = cpu.step().unwrap();
        assert_eq!("TAS".to_owned(), log_line.mnemonic);
        assert_eq!(0x30, cpu.registers.stack_pointer);
        assert_eq!(0x20, cpu.memory.read_byte(0x2000));
        assert_eq!(5, log_line.cycles);
    }
}
