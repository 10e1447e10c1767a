use std::path::Path;

use anyhow::{anyhow, bail, Context};
use soft6502_lib::{AddressableIO, Memory};

use crate::AppResult;

/// Parse an address written as `0x0600`, `#0x0600`, `$0600` or `1536`.
pub fn parse_address(input: &str) -> AppResult<u16> {
    let input = input.trim();
    let hexa = input
        .strip_prefix("#0x")
        .or_else(|| input.strip_prefix("0x"))
        .or_else(|| input.strip_prefix('$'));

    match hexa {
        Some(digits) => u16::from_str_radix(digits, 16),
        None => input.parse::<u16>(),
    }
    .map_err(|e| anyhow!("invalid address '{}': {}", input, e))
}

/// Decode an inline program like `a9 01 69 02 00`.
pub fn parse_hex(input: &str) -> AppResult<Vec<u8>> {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    hex::decode(&digits).with_context(|| format!("invalid hexadecimal program '{}'", input))
}

pub fn read_program(path: &Path) -> AppResult<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Could not read program {}", path.display()))
}

/// Write the image at `origin`, bytes past 0xFFFF land at the bottom of
/// memory.
pub fn load_program(memory: &mut Memory, origin: u16, program: &[u8]) -> AppResult<()> {
    if program.is_empty() {
        bail!("the program is empty");
    }
    if program.len() > memory.get_size() {
        bail!(
            "the program ({} bytes) does not fit in memory ({} bytes)",
            program.len(),
            memory.get_size()
        );
    }
    memory.write(origin, program);

    Ok(())
}
