use super::*;

pub fn bcs(cpu: &mut CPU, cpu_instruction: &CPUInstruction) -> Result<LogLine> {
    let condition = cpu.registers.c_flag_is_set();
    branch(cpu, cpu_instruction, condition)
}

#[cfg(test)]
mod tests {
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_bcs_not_branching() {
        let mut cpu = get_stuff(0x1000, &[0xb0, 0x0a]);
        cpu.registers.set_c_flag(false);
        let log_line = cpu.step().unwrap();
        assert_eq!("BCS".to_owned(), log_line.mnemonic);
        assert_eq!(0x1002, cpu.registers.command_pointer);
        assert_eq!(2, log_line.cycles);
    }

    #[test]
    fn test_bcs_branching_no_page_cross() {
        let mut cpu = get_stuff(0x1000, &[0xb0, 0x0a]);
        cpu.registers.set_c_flag(true);
        let log_line = cpu.step().unwrap();
        assert_eq!(0x100c, cpu.registers.command_pointer);
        assert_eq!(3, log_line.cycles);
    }

    #[test]
    fn test_bcs_branching_page_cross() {
        let mut cpu = get_stuff(0x10f0, &[0xb0, 0x20]);
        cpu.registers.set_c_flag(true);
        let log_line = cpu.step().unwrap();
        assert_eq!(0x1112, cpu.registers.command_pointer);
        assert_eq!(4, log_line.cycles);
    }
}
