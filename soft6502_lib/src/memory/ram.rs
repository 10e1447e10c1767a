use std::fmt;

use super::*;

pub struct RAM {
    ram: Box<[u8; MEMMAX + 1]>,
}

impl RAM {
    pub fn new() -> RAM {
        RAM {
            ram: Box::new([0x00; MEMMAX + 1]),
        }
    }
}

impl Default for RAM {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressableIO for RAM {
    fn read_byte(&self, addr: u16) -> u8 {
        self.ram[addr as usize]
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        self.ram[addr as usize] = value;
    }

    fn get_size(&self) -> usize {
        self.ram.len()
    }
}

impl fmt::Debug for RAM {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RAM, size = {} bytes", self.get_size())
    }
}
