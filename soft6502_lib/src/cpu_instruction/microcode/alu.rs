use super::*;

/*
 * Arithmetic shared by the instructions.
 * The overflow formula comes from
 * http://www.righto.com/2012/12/the-6502-overflow-flag-explained.html
 * Decimal mode follows the NMOS behavior described in
 * http://www.6502.org/tutorials/decimal_mode.html (appendix A)
 */

/// ADC: A + M + C stored in A.
pub fn add_with_carry(registers: &mut Registers, operand: u8, decimal: bool) {
    let a = registers.accumulator as u16;
    let m = operand as u16;
    let carry = registers.c_flag_is_set() as u16;
    let raw = a + m + carry;

    if decimal {
        let mut low = (a & 0x0f) + (m & 0x0f) + carry;
        if low > 0x09 {
            low += 0x06;
        }
        let mut high = (a >> 4) + (m >> 4) + (low > 0x0f) as u16;
        // NMOS: Z comes from the binary sum, N and V from the unadjusted high nibble.
        registers.set_z_flag((raw & 0xff) as u8);
        registers.set_n_flag((high << 4) as u8);
        registers.set_v_flag((a ^ (high << 4)) & 0x80 != 0 && (a ^ m) & 0x80 == 0);
        if high > 0x09 {
            high += 0x06;
        }
        registers.set_c_flag(high > 0x0f);
        registers.accumulator = (((high << 4) | (low & 0x0f)) & 0xff) as u8;
    } else {
        let result = (raw & 0xff) as u8;
        registers.set_c_flag(raw > 0xff);
        registers.set_v_flag(!(a ^ m) & (a ^ result as u16) & 0x80 != 0);
        registers.accumulator = result;
        registers.set_n_flag(result);
        registers.set_z_flag(result);
    }
}

/// SBC: A - M - !C stored in A.
pub fn subtract_with_borrow(registers: &mut Registers, operand: u8, decimal: bool) {
    let a = registers.accumulator as i16;
    let m = operand as i16;
    let borrow = !registers.c_flag_is_set() as i16;
    let raw = a - m - borrow;
    let result = (raw & 0xff) as u8;

    // flags always come from the binary difference
    registers.set_c_flag(raw >= 0);
    registers.set_v_flag((a ^ m) & (a ^ result as i16) & 0x80 != 0);
    registers.set_n_flag(result);
    registers.set_z_flag(result);

    registers.accumulator = if decimal {
        let mut low = (a & 0x0f) - (m & 0x0f) - borrow;
        let mut high = (a >> 4) - (m >> 4);
        if low < 0 {
            low -= 0x06;
            high -= 1;
        }
        if high < 0 {
            high -= 0x06;
        }
        (((high << 4) | (low & 0x0f)) & 0xff) as u8
    } else {
        result
    };
}

/// CMP, CPX, CPY: register - M without storing.
pub fn compare(registers: &mut Registers, register: u8, operand: u8) {
    let result = register.wrapping_sub(operand);
    registers.set_c_flag(register >= operand);
    registers.set_n_flag(result);
    registers.set_z_flag(result);
}

pub fn shift_left(registers: &mut Registers, byte: u8) -> u8 {
    let result = byte << 1;
    registers.set_c_flag(byte & 0x80 != 0);
    registers.set_n_flag(result);
    registers.set_z_flag(result);

    result
}

pub fn shift_right(registers: &mut Registers, byte: u8) -> u8 {
    let result = byte >> 1;
    registers.set_c_flag(byte & 0x01 != 0);
    registers.set_n_flag(result);
    registers.set_z_flag(result);

    result
}

pub fn rotate_left(registers: &mut Registers, byte: u8) -> u8 {
    let result = (byte << 1) | registers.c_flag_is_set() as u8;
    registers.set_c_flag(byte & 0x80 != 0);
    registers.set_n_flag(result);
    registers.set_z_flag(result);

    result
}

pub fn rotate_right(registers: &mut Registers, byte: u8) -> u8 {
    let result = (byte >> 1) | ((registers.c_flag_is_set() as u8) << 7);
    registers.set_c_flag(byte & 0x01 != 0);
    registers.set_n_flag(result);
    registers.set_z_flag(result);

    result
}
