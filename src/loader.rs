//! Flat binary image loader (spec.md 6.2).
//!
//! A RISKXVII image is a flat little-endian byte stream: bytes
//! `0..1023` fill instruction memory, bytes `1024..2047` fill data
//! memory, four bytes to a word, low byte first. Anything past byte
//! 2047 is ignored.

use crate::errors::LoadError;
use crate::word_memory::{self, WordMemory};

const INSTRUCTION_BYTES: usize = word_memory::REGION_BYTES as usize;
const DATA_BYTES: usize = word_memory::REGION_BYTES as usize;

pub struct Image {
    pub instruction_memory: WordMemory,
    pub data_memory: WordMemory,
}

/// Read `path` and split it into instruction/data memory images.
pub fn load(path: &str) -> Result<Image, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Open {
        path: path.to_string(),
        source,
    })?;

    let instruction_end = bytes.len().min(INSTRUCTION_BYTES);
    let data_end = bytes.len().min(INSTRUCTION_BYTES + DATA_BYTES);
    let instruction_memory = words_from_bytes(&bytes[..instruction_end]);
    let data_memory = words_from_bytes(if bytes.len() > INSTRUCTION_BYTES {
        &bytes[INSTRUCTION_BYTES..data_end]
    } else {
        &[]
    });

    let mut instruction = WordMemory::new();
    instruction.load_image(&instruction_memory);
    let mut data = WordMemory::new();
    data.load_image(&data_memory);

    Ok(Image {
        instruction_memory: instruction,
        data_memory: data,
    })
}

/// Pack a byte slice into little-endian 32-bit words, zero-padding a
/// trailing partial word.
fn words_from_bytes(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|chunk| {
            let mut word_bytes = [0u8; 4];
            word_bytes[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(word_bytes)
        })
        .collect()
}
