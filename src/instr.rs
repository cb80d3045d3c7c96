//! Instruction records
//!
//! Classifies a fetched 32-bit word into one of the recognised
//! operations and assembles its operands into a single ephemeral
//! `Decoded` record (spec.md 3, 4.6). `cpu` matches on `Operation` to
//! execute; this module only decides whether the word is recognised
//! and which fields it carries.

use crate::errors::DecodeError;
use crate::fields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Xor,
    Or,
    And,
    Sll,
    Srl,
    Sra,
    Slt,
    Sltu,
    Addi,
    Xori,
    Ori,
    Andi,
    Slti,
    Sltiu,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Lui,
    Jal,
    Jalr,
}

/// A decoded instruction. Not every field is meaningful for every
/// operation (e.g. `rs2` is unused by `Addi`); handlers in `cpu` only
/// read the fields their operation actually needs.
#[derive(Debug, Clone, Copy)]
pub struct Decoded {
    pub instr: u32,
    pub op: Operation,
    pub rd: u8,
    pub rs1: u8,
    pub rs2: u8,
    /// The operand immediate, already in the units the handler
    /// consumes directly: byte offsets for loads/stores/I-type
    /// arithmetic, the raw 20-bit upper value for `lui`, and the
    /// *halfword* offset (not yet doubled) for branches and jumps.
    pub imm: i32,
}

const OPCODE_RTYPE: u8 = 0b011_0011;
const OPCODE_ITYPE_ARITH: u8 = 0b001_0011;
const OPCODE_LOAD: u8 = 0b000_0011;
const OPCODE_STORE: u8 = 0b010_0011;
const OPCODE_BRANCH: u8 = 0b110_0011;
const OPCODE_LUI: u8 = 0b011_0111;
const OPCODE_JAL: u8 = 0b110_1111;
const OPCODE_JALR: u8 = 0b110_0111;

const FUNCT7_ALT: u8 = 0b010_0000;

pub fn decode(instr: u32) -> Result<Decoded, DecodeError> {
    let opcode = fields::opcode(instr);
    let rd = fields::rd(instr);
    let rs1 = fields::rs1(instr);
    let rs2 = fields::rs2(instr);
    let funct3 = fields::funct3(instr);
    let funct7 = fields::funct7(instr);

    let unknown = || DecodeError::UnknownOperation {
        instr,
        opcode,
        funct3,
        funct7,
    };

    let (op, imm) = match opcode {
        OPCODE_RTYPE => {
            let op = match (funct3, funct7) {
                (0b000, 0) => Operation::Add,
                (0b000, FUNCT7_ALT) => Operation::Sub,
                (0b001, 0) => Operation::Sll,
                (0b010, 0) => Operation::Slt,
                (0b011, 0) => Operation::Sltu,
                (0b100, 0) => Operation::Xor,
                (0b101, 0) => Operation::Srl,
                (0b101, FUNCT7_ALT) => Operation::Sra,
                (0b110, 0) => Operation::Or,
                (0b111, 0) => Operation::And,
                _ => return Err(unknown()),
            };
            (op, 0)
        }
        OPCODE_ITYPE_ARITH => {
            let op = match funct3 {
                0b000 => Operation::Addi,
                0b010 => Operation::Slti,
                0b011 => Operation::Sltiu,
                0b100 => Operation::Xori,
                0b110 => Operation::Ori,
                0b111 => Operation::Andi,
                _ => return Err(unknown()),
            };
            (op, fields::imm_itype(instr))
        }
        OPCODE_LOAD => {
            let op = match funct3 {
                0b000 => Operation::Lb,
                0b001 => Operation::Lh,
                0b010 => Operation::Lw,
                0b100 => Operation::Lbu,
                0b101 => Operation::Lhu,
                _ => return Err(unknown()),
            };
            (op, fields::imm_itype(instr))
        }
        OPCODE_STORE => {
            let op = match funct3 {
                0b000 => Operation::Sb,
                0b001 => Operation::Sh,
                0b010 => Operation::Sw,
                _ => return Err(unknown()),
            };
            (op, fields::imm_stype(instr))
        }
        OPCODE_BRANCH => {
            let op = match funct3 {
                0b000 => Operation::Beq,
                0b001 => Operation::Bne,
                0b100 => Operation::Blt,
                0b101 => Operation::Bge,
                0b110 => Operation::Bltu,
                0b111 => Operation::Bgeu,
                _ => return Err(unknown()),
            };
            (op, fields::imm_btype(instr))
        }
        OPCODE_LUI => (Operation::Lui, fields::imm_utype(instr) as i32),
        OPCODE_JAL => (Operation::Jal, fields::imm_ujtype(instr)),
        OPCODE_JALR => {
            if funct3 != 0 {
                return Err(unknown());
            }
            (Operation::Jalr, fields::imm_itype(instr))
        }
        _ => {
            return Err(DecodeError::UnknownOpcode { instr, opcode });
        }
    };

    Ok(Decoded {
        instr,
        op,
        rd,
        rs1,
        rs2,
        imm,
    })
}
