use super::microcode;
use super::{Instruction, Microcode};
use crate::addressing_mode::AddressingMode;

const IMP: AddressingMode = AddressingMode::Implied;
const ACC: AddressingMode = AddressingMode::Accumulator;
const IMM: AddressingMode = AddressingMode::Immediate;
const ZP: AddressingMode = AddressingMode::ZeroPage;
const ZPX: AddressingMode = AddressingMode::ZeroPageXIndexed;
const ZPY: AddressingMode = AddressingMode::ZeroPageYIndexed;
const IZX: AddressingMode = AddressingMode::ZeroPageXIndexedIndirect;
const IZY: AddressingMode = AddressingMode::ZeroPageIndirectYIndexed;
const ABS: AddressingMode = AddressingMode::Absolute;
const ABX: AddressingMode = AddressingMode::AbsoluteXIndexed;
const ABY: AddressingMode = AddressingMode::AbsoluteYIndexed;
const IND: AddressingMode = AddressingMode::Indirect;
const REL: AddressingMode = AddressingMode::Relative;

macro_rules! op {
    ($mnemonic:literal, $mode:ident, $cycles:literal) => {
        Instruction {
            mnemonic: $mnemonic,
            cycles: $cycles,
            addressing_mode: $mode,
            microcode: None,
            illegal: false,
        }
    };
    ($mnemonic:literal, $mode:ident, $cycles:literal, $microcode:ident) => {
        Instruction {
            mnemonic: $mnemonic,
            cycles: $cycles,
            addressing_mode: $mode,
            microcode: Some(microcode::$microcode as Microcode),
            illegal: false,
        }
    };
}

macro_rules! illegal {
    ($mnemonic:literal, $mode:ident, $cycles:literal) => {
        Instruction {
            mnemonic: $mnemonic,
            cycles: $cycles,
            addressing_mode: $mode,
            microcode: None,
            illegal: true,
        }
    };
    ($mnemonic:literal, $mode:ident, $cycles:literal, $microcode:ident) => {
        Instruction {
            mnemonic: $mnemonic,
            cycles: $cycles,
            addressing_mode: $mode,
            microcode: Some(microcode::$microcode as Microcode),
            illegal: true,
        }
    };
}

/// NMOS 6502 opcode matrix, documented and undocumented.
/// Base cycle counts exclude page crossing and taken branch penalties.
pub static OPCODES: [Instruction; 256] = [
    // 0x00
    op!("BRK", IMP, 7, brk),
    op!("ORA", IZX, 6, ora),
    illegal!("JAM", IMP, 2, jam),
    illegal!("SLO", IZX, 8, slo),
    illegal!("NOP", ZP, 3, nop),
    op!("ORA", ZP, 3, ora),
    op!("ASL", ZP, 5, asl),
    illegal!("SLO", ZP, 5, slo),
    op!("PHP", IMP, 3, php),
    op!("ORA", IMM, 2, ora),
    op!("ASL", ACC, 2, asl),
    illegal!("ANC", IMM, 2, anc),
    illegal!("NOP", ABS, 4, nop),
    op!("ORA", ABS, 4, ora),
    op!("ASL", ABS, 6, asl),
    illegal!("SLO", ABS, 6, slo),
    // 0x10
    op!("BPL", REL, 2, bpl),
    op!("ORA", IZY, 5, ora),
    illegal!("JAM", IMP, 2, jam),
    illegal!("SLO", IZY, 8, slo),
    illegal!("NOP", ZPX, 4, nop),
    op!("ORA", ZPX, 4, ora),
    op!("ASL", ZPX, 6, asl),
    illegal!("SLO", ZPX, 6, slo),
    op!("CLC", IMP, 2, clc),
    op!("ORA", ABY, 4, ora),
    illegal!("NOP", IMP, 2),
    illegal!("SLO", ABY, 7, slo),
    illegal!("NOP", ABX, 4, nop),
    op!("ORA", ABX, 4, ora),
    op!("ASL", ABX, 7, asl),
    illegal!("SLO", ABX, 7, slo),
    // 0x20
    op!("JSR", ABS, 6, jsr),
    op!("AND", IZX, 6, and),
    illegal!("JAM", IMP, 2, jam),
    illegal!("RLA", IZX, 8, rla),
    op!("BIT", ZP, 3, bit),
    op!("AND", ZP, 3, and),
    op!("ROL", ZP, 5, rol),
    illegal!("RLA", ZP, 5, rla),
    op!("PLP", IMP, 4, plp),
    op!("AND", IMM, 2, and),
    op!("ROL", ACC, 2, rol),
    illegal!("ANC", IMM, 2, anc),
    op!("BIT", ABS, 4, bit),
    op!("AND", ABS, 4, and),
    op!("ROL", ABS, 6, rol),
    illegal!("RLA", ABS, 6, rla),
    // 0x30
    op!("BMI", REL, 2, bmi),
    op!("AND", IZY, 5, and),
    illegal!("JAM", IMP, 2, jam),
    illegal!("RLA", IZY, 8, rla),
    illegal!("NOP", ZPX, 4, nop),
    op!("AND", ZPX, 4, and),
    op!("ROL", ZPX, 6, rol),
    illegal!("RLA", ZPX, 6, rla),
    op!("SEC", IMP, 2, sec),
    op!("AND", ABY, 4, and),
    illegal!("NOP", IMP, 2),
    illegal!("RLA", ABY, 7, rla),
    illegal!("NOP", ABX, 4, nop),
    op!("AND", ABX, 4, and),
    op!("ROL", ABX, 7, rol),
    illegal!("RLA", ABX, 7, rla),
    // 0x40
    op!("RTI", IMP, 6, rti),
    op!("EOR", IZX, 6, eor),
    illegal!("JAM", IMP, 2, jam),
    illegal!("SRE", IZX, 8, sre),
    illegal!("NOP", ZP, 3, nop),
    op!("EOR", ZP, 3, eor),
    op!("LSR", ZP, 5, lsr),
    illegal!("SRE", ZP, 5, sre),
    op!("PHA", IMP, 3, pha),
    op!("EOR", IMM, 2, eor),
    op!("LSR", ACC, 2, lsr),
    illegal!("ALR", IMM, 2, alr),
    op!("JMP", ABS, 3, jmp),
    op!("EOR", ABS, 4, eor),
    op!("LSR", ABS, 6, lsr),
    illegal!("SRE", ABS, 6, sre),
    // 0x50
    op!("BVC", REL, 2, bvc),
    op!("EOR", IZY, 5, eor),
    illegal!("JAM", IMP, 2, jam),
    illegal!("SRE", IZY, 8, sre),
    illegal!("NOP", ZPX, 4, nop),
    op!("EOR", ZPX, 4, eor),
    op!("LSR", ZPX, 6, lsr),
    illegal!("SRE", ZPX, 6, sre),
    op!("CLI", IMP, 2, cli),
    op!("EOR", ABY, 4, eor),
    illegal!("NOP", IMP, 2),
    illegal!("SRE", ABY, 7, sre),
    illegal!("NOP", ABX, 4, nop),
    op!("EOR", ABX, 4, eor),
    op!("LSR", ABX, 7, lsr),
    illegal!("SRE", ABX, 7, sre),
    // 0x60
    op!("RTS", IMP, 6, rts),
    op!("ADC", IZX, 6, adc),
    illegal!("JAM", IMP, 2, jam),
    illegal!("RRA", IZX, 8, rra),
    illegal!("NOP", ZP, 3, nop),
    op!("ADC", ZP, 3, adc),
    op!("ROR", ZP, 5, ror),
    illegal!("RRA", ZP, 5, rra),
    op!("PLA", IMP, 4, pla),
    op!("ADC", IMM, 2, adc),
    op!("ROR", ACC, 2, ror),
    illegal!("ARR", IMM, 2, arr),
    op!("JMP", IND, 5, jmp),
    op!("ADC", ABS, 4, adc),
    op!("ROR", ABS, 6, ror),
    illegal!("RRA", ABS, 6, rra),
    // 0x70
    op!("BVS", REL, 2, bvs),
    op!("ADC", IZY, 5, adc),
    illegal!("JAM", IMP, 2, jam),
    illegal!("RRA", IZY, 8, rra),
    illegal!("NOP", ZPX, 4, nop),
    op!("ADC", ZPX, 4, adc),
    op!("ROR", ZPX, 6, ror),
    illegal!("RRA", ZPX, 6, rra),
    op!("SEI", IMP, 2, sei),
    op!("ADC", ABY, 4, adc),
    illegal!("NOP", IMP, 2),
    illegal!("RRA", ABY, 7, rra),
    illegal!("NOP", ABX, 4, nop),
    op!("ADC", ABX, 4, adc),
    op!("ROR", ABX, 7, ror),
    illegal!("RRA", ABX, 7, rra),
    // 0x80
    illegal!("NOP", IMM, 2, nop),
    op!("STA", IZX, 6, sta),
    illegal!("NOP", IMM, 2, nop),
    illegal!("SAX", IZX, 6, sax),
    op!("STY", ZP, 3, sty),
    op!("STA", ZP, 3, sta),
    op!("STX", ZP, 3, stx),
    illegal!("SAX", ZP, 3, sax),
    op!("DEY", IMP, 2, dey),
    illegal!("NOP", IMM, 2, nop),
    op!("TXA", IMP, 2, txa),
    illegal!("ANE", IMM, 2, ane),
    op!("STY", ABS, 4, sty),
    op!("STA", ABS, 4, sta),
    op!("STX", ABS, 4, stx),
    illegal!("SAX", ABS, 4, sax),
    // 0x90
    op!("BCC", REL, 2, bcc),
    op!("STA", IZY, 6, sta),
    illegal!("JAM", IMP, 2, jam),
    illegal!("SHA", IZY, 6, sha),
    op!("STY", ZPX, 4, sty),
    op!("STA", ZPX, 4, sta),
    op!("STX", ZPY, 4, stx),
    illegal!("SAX", ZPY, 4, sax),
    op!("TYA", IMP, 2, tya),
    op!("STA", ABY, 5, sta),
    op!("TXS", IMP, 2, txs),
    illegal!("TAS", ABY, 5, tas),
    illegal!("SHY", ABX, 5, shy),
    op!("STA", ABX, 5, sta),
    illegal!("SHX", ABY, 5, shx),
    illegal!("SHA", ABY, 5, sha),
    // 0xa0
    op!("LDY", IMM, 2, ldy),
    op!("LDA", IZX, 6, lda),
    op!("LDX", IMM, 2, ldx),
    illegal!("LAX", IZX, 6, lax),
    op!("LDY", ZP, 3, ldy),
    op!("LDA", ZP, 3, lda),
    op!("LDX", ZP, 3, ldx),
    illegal!("LAX", ZP, 3, lax),
    op!("TAY", IMP, 2, tay),
    op!("LDA", IMM, 2, lda),
    op!("TAX", IMP, 2, tax),
    illegal!("LXA", IMM, 2, lxa),
    op!("LDY", ABS, 4, ldy),
    op!("LDA", ABS, 4, lda),
    op!("LDX", ABS, 4, ldx),
    illegal!("LAX", ABS, 4, lax),
    // 0xb0
    op!("BCS", REL, 2, bcs),
    op!("LDA", IZY, 5, lda),
    illegal!("JAM", IMP, 2, jam),
    illegal!("LAX", IZY, 5, lax),
    op!("LDY", ZPX, 4, ldy),
    op!("LDA", ZPX, 4, lda),
    op!("LDX", ZPY, 4, ldx),
    illegal!("LAX", ZPY, 4, lax),
    op!("CLV", IMP, 2, clv),
    op!("LDA", ABY, 4, lda),
    op!("TSX", IMP, 2, tsx),
    illegal!("LAS", ABY, 4, las),
    op!("LDY", ABX, 4, ldy),
    op!("LDA", ABX, 4, lda),
    op!("LDX", ABY, 4, ldx),
    illegal!("LAX", ABY, 4, lax),
    // 0xc0
    op!("CPY", IMM, 2, cpy),
    op!("CMP", IZX, 6, cmp),
    illegal!("NOP", IMM, 2, nop),
    illegal!("DCP", IZX, 8, dcp),
    op!("CPY", ZP, 3, cpy),
    op!("CMP", ZP, 3, cmp),
    op!("DEC", ZP, 5, dec),
    illegal!("DCP", ZP, 5, dcp),
    op!("INY", IMP, 2, iny),
    op!("CMP", IMM, 2, cmp),
    op!("DEX", IMP, 2, dex),
    illegal!("SBX", IMM, 2, sbx),
    op!("CPY", ABS, 4, cpy),
    op!("CMP", ABS, 4, cmp),
    op!("DEC", ABS, 6, dec),
    illegal!("DCP", ABS, 6, dcp),
    // 0xd0
    op!("BNE", REL, 2, bne),
    op!("CMP", IZY, 5, cmp),
    illegal!("JAM", IMP, 2, jam),
    illegal!("DCP", IZY, 8, dcp),
    illegal!("NOP", ZPX, 4, nop),
    op!("CMP", ZPX, 4, cmp),
    op!("DEC", ZPX, 6, dec),
    illegal!("DCP", ZPX, 6, dcp),
    op!("CLD", IMP, 2, cld),
    op!("CMP", ABY, 4, cmp),
    illegal!("NOP", IMP, 2),
    illegal!("DCP", ABY, 7, dcp),
    illegal!("NOP", ABX, 4, nop),
    op!("CMP", ABX, 4, cmp),
    op!("DEC", ABX, 7, dec),
    illegal!("DCP", ABX, 7, dcp),
    // 0xe0
    op!("CPX", IMM, 2, cpx),
    op!("SBC", IZX, 6, sbc),
    illegal!("NOP", IMM, 2, nop),
    illegal!("ISC", IZX, 8, isc),
    op!("CPX", ZP, 3, cpx),
    op!("SBC", ZP, 3, sbc),
    op!("INC", ZP, 5, inc),
    illegal!("ISC", ZP, 5, isc),
    op!("INX", IMP, 2, inx),
    op!("SBC", IMM, 2, sbc),
    op!("NOP", IMP, 2),
    illegal!("USBC", IMM, 2, sbc),
    op!("CPX", ABS, 4, cpx),
    op!("SBC", ABS, 4, sbc),
    op!("INC", ABS, 6, inc),
    illegal!("ISC", ABS, 6, isc),
    // 0xf0
    op!("BEQ", REL, 2, beq),
    op!("SBC", IZY, 5, sbc),
    illegal!("JAM", IMP, 2, jam),
    illegal!("ISC", IZY, 8, isc),
    illegal!("NOP", ZPX, 4, nop),
    op!("SBC", ZPX, 4, sbc),
    op!("INC", ZPX, 6, inc),
    illegal!("ISC", ZPX, 6, isc),
    op!("SED", IMP, 2, sed),
    op!("SBC", ABY, 4, sbc),
    illegal!("NOP", IMP, 2),
    illegal!("ISC", ABY, 7, isc),
    illegal!("NOP", ABX, 4, nop),
    op!("SBC", ABX, 4, sbc),
    op!("INC", ABX, 7, inc),
    illegal!("ISC", ABX, 7, isc),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcodes_count() {
        assert_eq!(151, OPCODES.iter().filter(|i| !i.illegal).count());
    }

    #[test]
    fn test_jam_opcodes() {
        let jams: Vec<usize> = OPCODES
            .iter()
            .enumerate()
            .filter(|(_, i)| i.mnemonic == "JAM")
            .map(|(opcode, _)| opcode)
            .collect();
        assert_eq!(
            vec![0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xb2, 0xd2, 0xf2],
            jams
        );
    }

    #[test]
    fn test_only_nop_has_no_microcode() {
        for instruction in OPCODES.iter().filter(|i| i.microcode.is_none()) {
            assert_eq!("NOP", instruction.mnemonic);
            assert_eq!(AddressingMode::Implied, instruction.addressing_mode);
        }
        assert!(OPCODES[0xea].microcode.is_none());
        assert!(!OPCODES[0xea].illegal);
    }

    #[test]
    fn test_branches_use_relative_mode() {
        for opcode in [0x10, 0x30, 0x50, 0x70, 0x90, 0xb0, 0xd0, 0xf0] {
            assert_eq!(AddressingMode::Relative, OPCODES[opcode].addressing_mode);
            assert_eq!(2, OPCODES[opcode].cycles);
        }
    }
}
