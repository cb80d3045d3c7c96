//! Error types for decode failure, illegal operation, and startup
//! failure (spec.md 7). Each subsystem gets its own `thiserror`-derived
//! enum, as the teacher does for register/memory/decode errors;
//! `Fault` is the small wrapper `cpu::Cpu::step` returns so the caller
//! can tell the two in-engine failure kinds apart and print the right
//! diagnostic.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unrecognised opcode 0x{opcode:02x} in instruction 0x{instr:08x}")]
    UnknownOpcode { instr: u32, opcode: u8 },
    #[error("no handler for opcode 0x{opcode:02x} funct3 0x{funct3:x} funct7 0x{funct7:x} in instruction 0x{instr:08x}")]
    UnknownOperation {
        instr: u32,
        opcode: u8,
        funct3: u8,
        funct7: u8,
    },
}

impl DecodeError {
    /// The instruction word that failed to decode, for the
    /// "Instruction Not Implemented: 0x..." diagnostic.
    pub fn instr(&self) -> u32 {
        match self {
            DecodeError::UnknownOpcode { instr, .. } => *instr,
            DecodeError::UnknownOperation { instr, .. } => *instr,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapError {
    #[error("heap address 0x{0:08x} is outside the heap bank region or not bank-aligned")]
    InvalidAddress(u32),
    #[error("heap address 0x{0:08x} targets a free bank")]
    UnallocatedBank(u32),
}

/// A terminal engine fault: either the fetched word didn't decode to
/// a known operation, or an effective address resolved into an
/// illegal heap-bank access. Both terminate the fetch-execute loop
/// (spec.md 7); the caller is responsible for printing the
/// corresponding diagnostic and choosing a process exit code.
#[derive(Debug, Error)]
pub enum Fault {
    #[error("decode failure: {0}")]
    Decode(#[from] DecodeError),
    #[error("illegal operation at instruction 0x{instr:08x}: {source}")]
    IllegalOperation { instr: u32, source: HeapError },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open image file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
