//! The byte addressable ram of the chipset.
//!
//! - `0x000-0x1FF` - Chip 8 interpreter (contains font set in emu)
//! - `0x050-0x0A0` - Used for the built in `4x5` pixel font set (`0-F`)
//! - `0x200-0xFFF` - Program ROM and work RAM
use std::ops::Range;

use crate::{
    definitions::{cpu, display::fontset, memory},
    opcode::{self, Opcode},
    resources::Rom,
    MemoryError, OpcodeError,
};

/// Represents the ram of the chipset.
///
/// Every access is bounds checked, an out of range address will never
/// panic, but is reported as a [`MemoryError`](MemoryError).
#[derive(Clone, PartialEq)]
pub struct Memory {
    data: Box<[u8; memory::SIZE]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Will create a new memory with the font set loaded and the
    /// rest initialized with 0.
    pub fn new() -> Self {
        let mut data = Box::new([0; memory::SIZE]);

        // load fonts
        data[fontset::LOCATION..(fontset::LOCATION + fontset::FONTSET.len())]
            .copy_from_slice(&fontset::FONTSET);

        Self { data }
    }

    /// Will create a new memory and write the rom into the program area.
    pub fn with_rom(rom: &Rom) -> Result<Self, MemoryError> {
        let mut mem = Self::new();
        mem.load_program(rom.get_data())?;
        Ok(mem)
    }

    /// Writes the program data starting at the program counter base `0x200`.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), MemoryError> {
        self.write_slice(cpu::PROGRAM_COUNTER, program)
    }

    /// The amount of addressable bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn read_byte(&self, address: usize) -> Result<u8, MemoryError> {
        self.data
            .get(address)
            .copied()
            .ok_or_else(|| self.out_of_range(address))
    }

    pub fn write_byte(&mut self, address: usize, value: u8) -> Result<(), MemoryError> {
        let err = self.out_of_range(address);
        let cell = self.data.get_mut(address).ok_or(err)?;
        *cell = value;
        Ok(())
    }

    /// Will return the `len` bytes starting at `address`, if all of them
    /// are inside of the memory.
    pub fn read_slice(&self, address: usize, len: usize) -> Result<&[u8], MemoryError> {
        let range = self.range(address, len)?;
        Ok(&self.data[range])
    }

    /// Will write all of `data` starting at `address`. Nothing is written if
    /// any part of the data would end up outside of the memory.
    pub fn write_slice(&mut self, address: usize, data: &[u8]) -> Result<(), MemoryError> {
        let range = self.range(address, data.len())?;
        self.data[range].copy_from_slice(data);
        Ok(())
    }

    /// Will build the big-endian opcode at `pointer` and `pointer + 1`.
    pub fn read_opcode(&self, pointer: usize) -> Result<Opcode, OpcodeError> {
        opcode::build_opcode(&self.data[..], pointer)
    }

    /// Returns the base address of the `5` byte glyph for the given hex digit.
    /// Only the low nibble of `digit` is taken into account.
    pub fn glyph_address(digit: u8) -> usize {
        fontset::LOCATION + fontset::GLYPH_SIZE * (digit & 0xF) as usize
    }

    /// The complete memory content
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    fn range(&self, address: usize, len: usize) -> Result<Range<usize>, MemoryError> {
        let end = address
            .checked_add(len)
            .ok_or_else(|| self.out_of_range(address))?;
        if end > self.data.len() {
            // report the first byte that is actually outside of the memory
            Err(self.out_of_range(address.max(self.data.len())))
        } else {
            Ok(address..end)
        }
    }

    fn out_of_range(&self, address: usize) -> MemoryError {
        MemoryError::OutOfRange {
            address,
            len: self.data.len(),
        }
    }
}
