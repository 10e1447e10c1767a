use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum CPUError {
    // opcode, address
    UnknownOpcode(u8, u16),
    // opcode, address
    Jammed(u8, u16),
}

pub type Result<T> = std::result::Result<T, CPUError>;

impl fmt::Display for CPUError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CPUError::UnknownOpcode(opcode, address) => write!(
                f,
                "unknown opcode 0x{:02x} at address #0x{:04X}",
                opcode, address
            ),
            CPUError::Jammed(opcode, address) => write!(
                f,
                "processor jammed by opcode 0x{:02x} at address #0x{:04X}",
                opcode, address
            ),
        }
    }
}

impl error::Error for CPUError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
