use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ProcessError {
    #[error("Invalid opcode state '{0}'.")]
    Opcode(#[from] OpcodeError),
    #[error("Invalid stack state '{0}'.")]
    Stack(#[from] StackError),
    #[error("Invalid memory access '{0}'.")]
    Memory(#[from] MemoryError),
    #[error("The program was halted after a fatal fault and can not continue.")]
    Halted,
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum OpcodeError {
    #[error(
        "Pointer location invalid there can not be an opcode at {pointer:#06X}, if data len is {len:#06X}"
    )]
    MemoryInvalid { pointer: usize, len: usize },
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Full,
    #[error("Stack is empty!")]
    Empty,
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum MemoryError {
    #[error("Address {address:#06X} is out of range for a memory of {len:#06X} bytes")]
    OutOfRange { address: usize, len: usize },
}

#[derive(Error, Debug)]
pub enum RomError {
    #[error("Unable to read the program: {0}")]
    Io(#[from] std::io::Error),
    #[error("The program is {size} bytes long, but at most {max} bytes fit into memory.")]
    TooLarge { size: usize, max: usize },
}
