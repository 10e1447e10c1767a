mod ram;

pub use ram::RAM;

pub const MEMMAX: usize = 65535;

pub fn little_endian(low: u8, high: u8) -> u16 {
    (high as u16) << 8 | low as u16
}

/*
 * AddressableIO
 * this trait defines the interface for all memory systems.
 * Addresses are 16 bits wide so every address is valid, word and block
 * accesses wrap around from 0xFFFF to 0x0000.
 */
pub trait AddressableIO {
    fn read_byte(&self, addr: u16) -> u8;
    fn write_byte(&mut self, addr: u16, value: u8);
    fn get_size(&self) -> usize;

    fn read_word(&self, addr: u16) -> u16 {
        little_endian(self.read_byte(addr), self.read_byte(addr.wrapping_add(1)))
    }

    fn write_word(&mut self, addr: u16, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.write_byte(addr, low);
        self.write_byte(addr.wrapping_add(1), high);
    }

    fn read(&self, addr: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.read_byte(addr.wrapping_add(offset as u16)))
            .collect()
    }

    fn write(&mut self, location: u16, data: &[u8]) {
        for (offset, byte) in data.iter().enumerate() {
            self.write_byte(location.wrapping_add(offset as u16), *byte);
        }
    }
}
