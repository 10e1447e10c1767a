use crate::cpu_instruction::{CPUInstruction, LogLine};
use crate::error::{CPUError, Result};
use crate::memory::{little_endian, AddressableIO};
use crate::processing_unit::CPU;
use crate::registers::{Registers, B_FLAG, UNUSED_FLAG, V_FLAG};

mod alu;

mod adc;
mod and;
mod asl;
mod bcc;
mod bcs;
mod beq;
mod bit;
mod bmi;
mod bne;
mod bpl;
mod brk;
mod bvc;
mod bvs;
mod clc;
mod cld;
mod cli;
mod clv;
mod cmp;
mod cpx;
mod cpy;
mod dec;
mod dex;
mod dey;
mod eor;
mod inc;
mod inx;
mod iny;
mod jmp;
mod jsr;
mod lda;
mod ldx;
mod ldy;
mod lsr;
mod nop;
mod ora;
mod pha;
mod php;
mod pla;
mod plp;
mod rol;
mod ror;
mod rti;
mod rts;
mod sbc;
mod sec;
mod sed;
mod sei;
mod sta;
mod stx;
mod sty;
mod tax;
mod tay;
mod tsx;
mod txa;
mod txs;
mod tya;

// undocumented NMOS opcodes
mod alr;
mod anc;
mod ane;
mod arr;
mod dcp;
mod isc;
mod jam;
mod las;
mod lax;
mod lxa;
mod rla;
mod rra;
mod sax;
mod sbx;
mod sha;
mod shx;
mod shy;
mod slo;
mod sre;
mod tas;

pub use self::adc::adc;
pub use self::and::and;
pub use self::asl::asl;
pub use self::bcc::bcc;
pub use self::bcs::bcs;
pub use self::beq::beq;
pub use self::bit::bit;
pub use self::bmi::bmi;
pub use self::bne::bne;
pub use self::bpl::bpl;
pub use self::brk::brk;
pub use self::bvc::bvc;
pub use self::bvs::bvs;
pub use self::clc::clc;
pub use self::cld::cld;
pub use self::cli::cli;
pub use self::clv::clv;
pub use self::cmp::cmp;
pub use self::cpx::cpx;
pub use self::cpy::cpy;
pub use self::dec::dec;
pub use self::dex::dex;
pub use self::dey::dey;
pub use self::eor::eor;
pub use self::inc::inc;
pub use self::inx::inx;
pub use self::iny::iny;
pub use self::jmp::jmp;
pub use self::jsr::jsr;
pub use self::lda::lda;
pub use self::ldx::ldx;
pub use self::ldy::ldy;
pub use self::lsr::lsr;
pub use self::nop::nop;
pub use self::ora::ora;
pub use self::pha::pha;
pub use self::php::php;
pub use self::pla::pla;
pub use self::plp::plp;
pub use self::rol::rol;
pub use self::ror::ror;
pub use self::rti::rti;
pub use self::rts::rts;
pub use self::sbc::sbc;
pub use self::sec::sec;
pub use self::sed::sed;
pub use self::sei::sei;
pub use self::sta::sta;
pub use self::stx::stx;
pub use self::sty::sty;
pub use self::tax::tax;
pub use self::tay::tay;
pub use self::tsx::tsx;
pub use self::txa::txa;
pub use self::txs::txs;
pub use self::tya::tya;

pub use self::alr::alr;
pub use self::anc::anc;
pub use self::ane::ane;
pub use self::arr::arr;
pub use self::dcp::dcp;
pub use self::isc::isc;
pub use self::jam::jam;
pub use self::las::las;
pub use self::lax::lax;
pub use self::lxa::lxa;
pub use self::rla::rla;
pub use self::rra::rra;
pub use self::sax::sax;
pub use self::sbx::sbx;
pub use self::sha::sha;
pub use self::shx::shx;
pub use self::shy::shy;
pub use self::slo::slo;
pub use self::sre::sre;
pub use self::tas::tas;

/// Common body of the conditional branches.
fn branch(cpu: &mut CPU, cpu_instruction: &CPUInstruction, condition: bool) -> Result<LogLine> {
    if condition {
        if let Some(target) = cpu_instruction.target_address() {
            cpu.registers.command_pointer = target;
            cpu_instruction.add_branch_cycles();
        }
    }

    Ok(LogLine::new(
        cpu_instruction,
        format!("[CP=0x{:04X}]", cpu.registers.command_pointer),
    ))
}

/// Load a value in a register the way LDA, TAX and friends do.
fn load(registers: &mut Registers, value: u8) -> u8 {
    registers.set_n_flag(value);
    registers.set_z_flag(value);

    value
}

/*
 * Unstable stores of the NMOS (SHA, SHX, SHY, TAS)
 * The stored value is ANDed with the high byte of the base address plus one.
 * When indexing crosses a page, that value also replaces the high byte of
 * the effective address.
 */
fn store_high_and(cpu: &mut CPU, cpu_instruction: &CPUInstruction, value: u8, index: u8) -> (u16, u8) {
    let target = cpu_instruction.target_address().unwrap_or_default();
    let base = target.wrapping_sub(index as u16);
    let value = value & ((base >> 8) as u8).wrapping_add(1);
    let address = if cpu_instruction.resolution.page_crossed {
        ((value as u16) << 8) | (target & 0x00ff)
    } else {
        target
    };
    cpu.memory.write_byte(address, value);

    (address, value)
}

/// Read-modify-write on the operand (memory or accumulator), returns the
/// written value and the outcome text.
fn modify<F>(cpu: &mut CPU, cpu_instruction: &CPUInstruction, operation: F) -> (u8, String)
where
    F: FnOnce(&mut Registers, u8) -> u8,
{
    let byte = cpu.read_operand(cpu_instruction);
    let result = operation(&mut cpu.registers, byte);
    cpu.write_operand(cpu_instruction, result);
    let outcome = match cpu_instruction.target_address() {
        Some(_) => format!("0x{:02x}[S={}]", result, cpu.registers.format_status()),
        None => format!("[A=0x{:02x}][S={}]", result, cpu.registers.format_status()),
    };

    (result, outcome)
}
