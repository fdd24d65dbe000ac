use std::{fs, path::Path};

use crate::{
    definitions::{cpu, memory},
    RomError,
};

/// The largest program that fits between the program counter base and the
/// end of the memory.
pub const MAX_ROM_SIZE: usize = memory::SIZE - cpu::PROGRAM_COUNTER;

#[derive(Clone, Debug)]
/// Represents a single rom with it's information
pub struct Rom {
    /// The rom name
    name: String,
    /// The raw program bytes, big-endian opcodes without any header
    data: Box<[u8]>,
}

impl Rom {
    /// Will generate a new rom based of the given data
    pub fn new(name: &str, data: &[u8]) -> Result<Self, RomError> {
        if data.len() > MAX_ROM_SIZE {
            return Err(RomError::TooLarge {
                size: data.len(),
                max: MAX_ROM_SIZE,
            });
        }

        Ok(Rom {
            name: name.to_string(),
            data: data.into(),
        })
    }

    /// Will read the whole file as program, the file name is used as rom name.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RomError> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        log::debug!("read {} bytes from {}", data.len(), path.display());
        Self::new(&name, &data)
    }

    /// Will return a slice internal values of the given data
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// Will return the name of the rom.
    pub fn get_name(&self) -> &str {
        &self.name
    }
}
