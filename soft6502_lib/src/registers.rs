use super::memory::AddressableIO;
use std::fmt;
/*
 * 6502 registers
 * accumulator, X & Y registers are 8 bits general purpose registers.
 * status flags register :
 * bit 8: Negative flag
 * bit 7: oVerflow flag
 * bit 6: not used
 * bit 5: Break flag
 * bit 4: Decimal mode
 * bit 3: Interrupt disable
 * bit 2: Zero flag
 * bit 1: Carry flag
 *
 * command pointer: 16 bit address register
 * stack pointer: 8 bits at page 0x0100, set at 0xff at start.
 *
 * Every write through a setter is reduced to the width of the register.
 */
pub const STACK_BASE_ADDR: u16 = 0x0100;

pub const N_FLAG: u8 = 0b10000000;
pub const V_FLAG: u8 = 0b01000000;
pub const UNUSED_FLAG: u8 = 0b00100000;
pub const B_FLAG: u8 = 0b00010000;
pub const D_FLAG: u8 = 0b00001000;
pub const I_FLAG: u8 = 0b00000100;
pub const Z_FLAG: u8 = 0b00000010;
pub const C_FLAG: u8 = 0b00000001;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub accumulator: u8,
    pub register_x: u8,
    pub register_y: u8,
    pub status_register: u8,
    pub command_pointer: u16,
    pub stack_pointer: u8,
}

impl Registers {
    pub fn new(init_address: u16) -> Registers {
        Registers {
            accumulator: 0x00,
            register_x: 0x00,
            register_y: 0x00,
            status_register: 0x00,
            command_pointer: init_address,
            stack_pointer: 0xff,
        }
    }

    pub fn set_accumulator(&mut self, value: usize) {
        self.accumulator = (value & 0xff) as u8;
    }

    pub fn set_register_x(&mut self, value: usize) {
        self.register_x = (value & 0xff) as u8;
    }

    pub fn set_register_y(&mut self, value: usize) {
        self.register_y = (value & 0xff) as u8;
    }

    pub fn set_stack_pointer(&mut self, value: usize) {
        self.stack_pointer = (value & 0xff) as u8;
    }

    pub fn set_command_pointer(&mut self, value: usize) {
        self.command_pointer = (value & 0xffff) as u16;
    }

    /// Read the byte under the command pointer and move past it.
    pub fn fetch(&mut self, memory: &impl AddressableIO) -> u8 {
        let byte = memory.read_byte(self.command_pointer);
        self.set_command_pointer(self.command_pointer as usize + 1);

        byte
    }

    pub fn stack_push(&mut self, memory: &mut impl AddressableIO, byte: u8) {
        memory.write_byte(STACK_BASE_ADDR + self.stack_pointer as u16, byte);
        self.set_stack_pointer((self.stack_pointer as usize).wrapping_sub(1));
    }

    pub fn stack_pull(&mut self, memory: &impl AddressableIO) -> u8 {
        self.set_stack_pointer(self.stack_pointer as usize + 1);
        memory.read_byte(STACK_BASE_ADDR + self.stack_pointer as u16)
    }

    pub fn get_status_register(&self) -> u8 {
        self.status_register
    }

    pub fn n_flag_is_set(&self) -> bool {
        self.status_register & N_FLAG == N_FLAG
    }

    pub fn v_flag_is_set(&self) -> bool {
        self.status_register & V_FLAG == V_FLAG
    }

    pub fn b_flag_is_set(&self) -> bool {
        self.status_register & B_FLAG == B_FLAG
    }

    pub fn d_flag_is_set(&self) -> bool {
        self.status_register & D_FLAG == D_FLAG
    }

    pub fn i_flag_is_set(&self) -> bool {
        self.status_register & I_FLAG == I_FLAG
    }

    pub fn z_flag_is_set(&self) -> bool {
        self.status_register & Z_FLAG == Z_FLAG
    }

    pub fn c_flag_is_set(&self) -> bool {
        self.status_register & C_FLAG == C_FLAG
    }

    fn set_flag(&mut self, mask: u8, flag: bool) {
        if flag {
            self.status_register |= mask;
        } else {
            self.status_register &= !mask;
        }
    }

    /// Takes the byte an operation just produced, the flag mirrors its bit 7.
    pub fn set_n_flag(&mut self, value: u8) {
        self.set_flag(N_FLAG, value & 0x80 != 0);
    }

    pub fn set_v_flag(&mut self, flag: bool) {
        self.set_flag(V_FLAG, flag);
    }

    pub fn set_b_flag(&mut self, flag: bool) {
        self.set_flag(B_FLAG, flag);
    }

    pub fn set_d_flag(&mut self, flag: bool) {
        self.set_flag(D_FLAG, flag);
    }

    pub fn set_i_flag(&mut self, flag: bool) {
        self.set_flag(I_FLAG, flag);
    }

    /// Takes the byte an operation just produced, the flag is set when it is 0.
    pub fn set_z_flag(&mut self, value: u8) {
        self.set_flag(Z_FLAG, value == 0);
    }

    pub fn set_c_flag(&mut self, flag: bool) {
        self.set_flag(C_FLAG, flag);
    }

    pub fn format_status(&self) -> String {
        format!(
            "{}{}-{}{}{}{}{}",
            if self.n_flag_is_set() { "N" } else { "n" },
            if self.v_flag_is_set() { "V" } else { "v" },
            if self.b_flag_is_set() { "B" } else { "b" },
            if self.d_flag_is_set() { "D" } else { "d" },
            if self.i_flag_is_set() { "I" } else { "i" },
            if self.z_flag_is_set() { "Z" } else { "z" },
            if self.c_flag_is_set() { "C" } else { "c" },
        )
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers [A:0x{:02x}, X:0x{:02x}, Y:0x{:02x} | SP:0x{:02x} CP:0x{:04x} | {}]",
            self.accumulator,
            self.register_x,
            self.register_y,
            self.stack_pointer,
            self.command_pointer,
            self.format_status()
        )
    }
}
