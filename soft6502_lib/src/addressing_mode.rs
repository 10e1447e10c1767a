use super::memory::{little_endian, AddressableIO};
use super::registers::Registers;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressingModeResolution {
    pub operands: Vec<u8>,
    pub addressing_mode: AddressingMode,
    pub target_address: Option<u16>,
    pub page_crossed: bool,
}

impl AddressingModeResolution {
    fn new(
        operands: Vec<u8>,
        addressing_mode: AddressingMode,
        target_address: Option<u16>,
        page_crossed: bool,
    ) -> Self {
        AddressingModeResolution {
            operands,
            addressing_mode,
            target_address,
            page_crossed,
        }
    }

    fn format_operands(&self) -> String {
        match (self.addressing_mode, self.operands.as_slice()) {
            (AddressingMode::Accumulator, _) => "A".to_owned(),
            (AddressingMode::Immediate, [v]) => format!("#${:02x}", v),
            (AddressingMode::ZeroPage, [v]) => format!("${:02x}", v),
            (AddressingMode::ZeroPageXIndexed, [v]) => format!("${:02x},X", v),
            (AddressingMode::ZeroPageYIndexed, [v]) => format!("${:02x},Y", v),
            (AddressingMode::ZeroPageXIndexedIndirect, [v]) => format!("(${:02x},X)", v),
            (AddressingMode::ZeroPageIndirectYIndexed, [v]) => format!("(${:02x}),Y", v),
            (AddressingMode::Absolute, [low, high]) => format!("${:02X}{:02X}", high, low),
            (AddressingMode::AbsoluteXIndexed, [low, high]) => {
                format!("${:02X}{:02X},X", high, low)
            }
            (AddressingMode::AbsoluteYIndexed, [low, high]) => {
                format!("${:02X}{:02X},Y", high, low)
            }
            (AddressingMode::Indirect, [low, high]) => format!("(${:02X}{:02X})", high, low),
            (AddressingMode::Relative, _) => match self.target_address {
                Some(addr) => format!("${:04X}", addr),
                None => String::new(),
            },
            _ => String::new(),
        }
    }
}

impl fmt::Display for AddressingModeResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.addressing_mode, self.target_address) {
            (AddressingMode::Relative, _) | (_, None) => {
                write!(f, "{: <9}         ", self.format_operands())
            }
            (_, Some(addr)) => write!(f, "{: <9}(#0x{:04X})", self.format_operands(), addr),
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageXIndexed,
    ZeroPageYIndexed,
    ZeroPageXIndexedIndirect,
    ZeroPageIndirectYIndexed,
    Absolute,
    AbsoluteXIndexed,
    AbsoluteYIndexed,
    Indirect,
    Relative,
}

impl AddressingMode {
    /*
     * solve
     * Consume the operand bytes following the opcode (the command pointer
     * must point right after the opcode) and compute the effective address.
     */
    pub fn solve(
        &self,
        registers: &mut Registers,
        memory: &impl AddressableIO,
    ) -> AddressingModeResolution {
        match *self {
            AddressingMode::Implied | AddressingMode::Accumulator => {
                AddressingModeResolution::new(vec![], *self, None, false)
            }
            AddressingMode::Immediate => {
                let operand_address = registers.command_pointer;
                let byte = registers.fetch(memory);
                AddressingModeResolution::new(vec![byte], *self, Some(operand_address), false)
            }
            AddressingMode::ZeroPage => {
                let byte = registers.fetch(memory);
                AddressingModeResolution::new(vec![byte], *self, Some(byte as u16), false)
            }
            AddressingMode::ZeroPageXIndexed => {
                let byte = registers.fetch(memory);
                let dst_addr = byte.wrapping_add(registers.register_x) as u16;
                AddressingModeResolution::new(vec![byte], *self, Some(dst_addr), false)
            }
            AddressingMode::ZeroPageYIndexed => {
                let byte = registers.fetch(memory);
                let dst_addr = byte.wrapping_add(registers.register_y) as u16;
                AddressingModeResolution::new(vec![byte], *self, Some(dst_addr), false)
            }
            AddressingMode::ZeroPageXIndexedIndirect => {
                let byte = registers.fetch(memory);
                let dst_addr = zero_page_word(memory, byte.wrapping_add(registers.register_x));
                AddressingModeResolution::new(vec![byte], *self, Some(dst_addr), false)
            }
            AddressingMode::ZeroPageIndirectYIndexed => {
                let byte = registers.fetch(memory);
                let base_addr = zero_page_word(memory, byte);
                let dst_addr = base_addr.wrapping_add(registers.register_y as u16);
                AddressingModeResolution::new(
                    vec![byte],
                    *self,
                    Some(dst_addr),
                    crosses_page_boundary(base_addr, dst_addr),
                )
            }
            AddressingMode::Absolute => {
                let (low, high) = (registers.fetch(memory), registers.fetch(memory));
                let dst_addr = little_endian(low, high);
                AddressingModeResolution::new(vec![low, high], *self, Some(dst_addr), false)
            }
            AddressingMode::AbsoluteXIndexed => {
                let (low, high) = (registers.fetch(memory), registers.fetch(memory));
                let base_addr = little_endian(low, high);
                let dst_addr = base_addr.wrapping_add(registers.register_x as u16);
                AddressingModeResolution::new(
                    vec![low, high],
                    *self,
                    Some(dst_addr),
                    crosses_page_boundary(base_addr, dst_addr),
                )
            }
            AddressingMode::AbsoluteYIndexed => {
                let (low, high) = (registers.fetch(memory), registers.fetch(memory));
                let base_addr = little_endian(low, high);
                let dst_addr = base_addr.wrapping_add(registers.register_y as u16);
                AddressingModeResolution::new(
                    vec![low, high],
                    *self,
                    Some(dst_addr),
                    crosses_page_boundary(base_addr, dst_addr),
                )
            }
            AddressingMode::Indirect => {
                let (low, high) = (registers.fetch(memory), registers.fetch(memory));
                let pointer = little_endian(low, high);
                // NMOS bug: the high byte is read without carrying into the pointer page.
                let high_pointer = (pointer & 0xff00) | (pointer.wrapping_add(1) & 0x00ff);
                let dst_addr = little_endian(memory.read_byte(pointer), memory.read_byte(high_pointer));
                AddressingModeResolution::new(vec![low, high], *self, Some(dst_addr), false)
            }
            AddressingMode::Relative => {
                let offset = registers.fetch(memory);
                let next_instruction = registers.command_pointer;
                let dst_addr = resolve_relative(next_instruction, offset);
                AddressingModeResolution::new(
                    vec![offset],
                    *self,
                    Some(dst_addr),
                    crosses_page_boundary(next_instruction, dst_addr),
                )
            }
        }
    }

    pub fn operands_len(&self) -> usize {
        match *self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteXIndexed
            | AddressingMode::AbsoluteYIndexed
            | AddressingMode::Indirect => 2,
            _ => 1,
        }
    }
}

fn zero_page_word(memory: &impl AddressableIO, pointer: u8) -> u16 {
    little_endian(
        memory.read_byte(pointer as u16),
        memory.read_byte(pointer.wrapping_add(1) as u16),
    )
}

fn crosses_page_boundary(base_addr: u16, indexed_addr: u16) -> bool {
    base_addr & 0xff00 != indexed_addr & 0xff00
}

/// Branch target from the address following the offset byte.
pub fn resolve_relative(next_instruction: u16, offset: u8) -> u16 {
    next_instruction.wrapping_add_signed(offset as i8 as i16)
}
