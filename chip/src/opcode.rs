//! Opcode abstractions, functionality and constants.
use std::convert::TryFrom;

use crate::{
    definitions::memory,
    MemoryError, OpcodeError, ProcessError,
};

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bits
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bits
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bits
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bits
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bits
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bits
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the size of a nibble
const NIBBLE: u16 = 0x4;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// will build an opcode from data and the given point
/// # Arguments
///
/// - `data` - A slice of u8 data entries used to generate the opcodes
/// - `pointer` - Where in the data the opcode shall be extracted, so `pointer` and `pointer + 1` make
/// the opcode up
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
///  const OPCODES: [Opcode; 2] = [0x00EE, 0x1EDA];
///  const SPLIT_OPCODE: [u8; 4] = [0x00, 0xEE, 0x1E, 0xDA];
///  for (i, val) in OPCODES.iter().enumerate() {
///      let opcode = build_opcode(&SPLIT_OPCODE, i * 2).expect("This will work.");
///      assert_eq!(opcode, *val);
///  }
/// # let err = build_opcode(&SPLIT_OPCODE, 3).unwrap_err();
/// # assert_eq!(
/// #   "Pointer location invalid there can not be an opcode at 0x0003, if data len is 0x0004".to_string(),
/// #   format!("{}", err),
/// # );
/// ```
pub fn build_opcode(data: &[u8], pointer: usize) -> Result<Opcode, OpcodeError> {
    // controlling that there is no illegal access here
    match (data.get(pointer), pointer.checked_add(1).and_then(|p| data.get(p))) {
        (Some(&high), Some(&low)) => Ok(Opcode::from_be_bytes([high, low])),
        _ => Err(OpcodeError::MemoryInvalid {
            pointer,
            len: data.len(),
        }),
    }
}

/// These are special traits used to filter out information
/// from opcodes. All of them are total over every possible opcode.
pub trait OpcodeTrait {
    /// the opcode class, so the top most nibble
    fn class(&self) -> u8;

    /// the `X` register index in `TXTT`
    fn x(&self) -> usize;

    /// the `Y` register index in `TTYT`
    fn y(&self) -> usize;

    /// the `N` constant in `TTTN`
    fn n(&self) -> u8;

    /// the `NN` constant in `TTNN`
    fn nn(&self) -> u8;

    /// the `NNN` address in `TNNN`
    fn nnn(&self) -> usize;

    /// this is an opcode extractor for the opcode type `TXNN`
    fn xnn(&self) -> (usize, u8) {
        (self.x(), self.nn())
    }

    /// this is an opcode extractor for the opcode type `TXYN`
    fn xyn(&self) -> (usize, usize, u8) {
        (self.x(), self.y(), self.n())
    }
}

impl OpcodeTrait for Opcode {
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.class(), 0x1);
    /// ```
    fn class(&self) -> u8 {
        ((self & OPCODE_MASK_F000) >> (3 * NIBBLE)) as u8
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.x(), 0xE);
    /// ```
    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0FFF & OPCODE_MASK_FF00) >> (2 * NIBBLE)) as usize
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.y(), 0xD);
    /// ```
    fn y(&self) -> usize {
        const MASK: u16 = OPCODE_MASK_00FF ^ OPCODE_MASK_000F;
        ((self & MASK) >> NIBBLE) as usize
    }

    fn n(&self) -> u8 {
        (self & OPCODE_MASK_000F) as u8
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xnn(), (0xE, 0xDA));
    /// ```
    fn nn(&self) -> u8 {
        (self & OPCODE_MASK_00FF) as u8
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.nnn(), 0xEDA)
    /// ```
    fn nnn(&self) -> usize {
        (self & OPCODE_MASK_0FFF) as usize
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents the program steps that the chip
/// can take.
pub enum ProgramCounterStep {
    /// Will not change the program counter
    None,
    /// Will move the program counter to the next opcode
    Next,
    /// Will skip the next opcode
    Skip,
    /// Will simply move the program counter to the given location.
    Jump(usize),
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::Next
        }
    }

    /// Maps the step onto the program counter `pc`.
    ///
    /// A target outside of the memory is not checked here, the following
    /// fetch will report it.
    #[inline]
    pub fn apply(&self, pc: usize) -> usize {
        match *self {
            ProgramCounterStep::None => pc,
            ProgramCounterStep::Next => pc + memory::opcodes::SIZE,
            ProgramCounterStep::Skip => pc + 2 * memory::opcodes::SIZE,
            ProgramCounterStep::Jump(pointer) => pointer,
        }
    }
}

/// Generates the `TryFrom` conversion for the sub opcode enums, the
/// selector is either the `N` or the `NN` part of the opcode.
macro_rules! impl_try_from_selector {
    ($type_name:ty : $type_from:ty : $( $key:literal => $val:expr ),+ $(,)? ) => {
        impl TryFrom<$type_from> for $type_name {
            type Error = $type_from;

            fn try_from(value: $type_from) -> Result<Self, Self::Error> {
                match value {
                    $(
                        $key => Ok($val),
                    )+
                    _ => Err(value),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zero {
    /// Clears the display
    Clear,
    /// Returns from the subroutine
    Return,
}

impl_try_from_selector!(Zero : Opcode :
    // 00E0
    // clear display
    0x00E0 => Zero::Clear,
    // 00EE
    // Return from sub routine => pop from stack
    0x00EE => Zero::Return,
);

/// `TNNN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub nnn: usize,
}

/// `TXNN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterConst {
    pub x: usize,
    pub nn: u8,
}

/// `TXY0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterPair {
    pub x: usize,
    pub y: usize,
}

/// `DXYN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub x: usize,
    pub y: usize,
    pub n: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOpcode {
    Assign,
    Or,
    And,
    Xor,
    Add,
    Sub,
    ShiftRight,
    SubReverse,
    ShiftLeft,
}

impl_try_from_selector!(ArithmeticOpcode : u8 :
    // 8XY0
    // Sets VX to the value of VY.
    0x0 => ArithmeticOpcode::Assign,
    // 8XY1
    // Sets VX to VX or VY. (Bitwise OR operation)
    0x1 => ArithmeticOpcode::Or,
    // 8XY2
    // Sets VX to VX and VY. (Bitwise AND operation)
    0x2 => ArithmeticOpcode::And,
    // 8XY3
    // Sets VX to VX xor VY.
    0x3 => ArithmeticOpcode::Xor,
    // 8XY4
    // Adds VY to VX. VF is set to 1 when there's a carry, and to 0 when there isn't.
    0x4 => ArithmeticOpcode::Add,
    // 8XY5
    // VY is subtracted from VX. VF is set to 0 when there's a borrow, and 1 when there
    // isn't.
    0x5 => ArithmeticOpcode::Sub,
    // 8XY6
    // Stores VY shifted right by one in VX, VF receives the shifted out bit.
    0x6 => ArithmeticOpcode::ShiftRight,
    // 8XY7
    // Sets VX to VY minus VX. VF is set to 0 when there's a borrow, and 1 when there
    // isn't.
    0x7 => ArithmeticOpcode::SubReverse,
    // 8XYE
    // Stores VY shifted left by one in VX, VF receives the shifted out bit.
    0xE => ArithmeticOpcode::ShiftLeft,
);

/// `8XYT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arithmetic {
    pub ops: ArithmeticOpcode,
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOpcode {
    Pressed,
    NotPressed,
}

impl_try_from_selector!(KeyOpcode : u8 :
    // EX9E
    // Skips the next instruction if the key stored in VX is pressed.
    0x9E => KeyOpcode::Pressed,
    // EXA1
    // Skips the next instruction if the key stored in VX isn't pressed.
    0xA1 => KeyOpcode::NotPressed,
);

/// `EXTT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub ops: KeyOpcode,
    pub x: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiscOpcode {
    GetDelayTimer,
    AwaitKeyPress,
    SetDelayTimer,
    SetSoundTimer,
    AddVxToI,
    SetIToSprite,
    StoreBCD,
    StoreV0ToVx,
    FillV0ToVx,
}

impl_try_from_selector!(MiscOpcode : u8 :
    // FX07
    // Sets VX to the value of the delay timer.
    0x07 => MiscOpcode::GetDelayTimer,
    // FX0A
    // A key press is awaited, and then stored in VX.
    0x0A => MiscOpcode::AwaitKeyPress,
    // FX15
    // Sets the delay timer to VX.
    0x15 => MiscOpcode::SetDelayTimer,
    // FX18
    // Sets the sound timer to VX.
    0x18 => MiscOpcode::SetSoundTimer,
    // FX1E
    // Adds VX to I. VF is not affected.
    0x1E => MiscOpcode::AddVxToI,
    // FX29
    // Sets I to the location of the sprite for the character in VX.
    0x29 => MiscOpcode::SetIToSprite,
    // FX33
    // Stores the binary-coded decimal representation of VX at I, I + 1 and I + 2.
    0x33 => MiscOpcode::StoreBCD,
    // FX55
    // Stores V0 to VX (including VX) in memory starting at address I.
    0x55 => MiscOpcode::StoreV0ToVx,
    // FX65
    // Fills V0 to VX (including VX) with values from memory starting at address I.
    0x65 => MiscOpcode::FillV0ToVx,
);

/// `FXTT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Misc {
    pub ops: MiscOpcode,
    pub x: usize,
}

/// The decoded form of an opcode, one variant per opcode class.
///
/// Every opcode decodes, combinations without a meaning end up as
/// [`Unknown`](Opcodes::Unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcodes {
    Zero(Zero),
    One(Address),
    Two(Address),
    Three(RegisterConst),
    Four(RegisterConst),
    Five(RegisterPair),
    Six(RegisterConst),
    Seven(RegisterConst),
    Eight(Arithmetic),
    Nine(RegisterPair),
    A(Address),
    B(Address),
    C(RegisterConst),
    D(Sprite),
    E(Key),
    F(Misc),
    Unknown(Opcode),
}

impl From<Opcode> for Opcodes {
    fn from(value: Opcode) -> Self {
        let address = || Address { nnn: value.nnn() };
        let register_const = || {
            let (x, nn) = value.xnn();
            RegisterConst { x, nn }
        };
        // only defined for TXY0
        let register_pair = |build: fn(RegisterPair) -> Opcodes| match value.xyn() {
            (x, y, 0) => build(RegisterPair { x, y }),
            _ => Opcodes::Unknown(value),
        };

        match value.class() {
            0x0 => Zero::try_from(value).map_or(Opcodes::Unknown(value), Opcodes::Zero),
            0x1 => Opcodes::One(address()),
            0x2 => Opcodes::Two(address()),
            0x3 => Opcodes::Three(register_const()),
            0x4 => Opcodes::Four(register_const()),
            0x5 => register_pair(Opcodes::Five),
            0x6 => Opcodes::Six(register_const()),
            0x7 => Opcodes::Seven(register_const()),
            0x8 => {
                let (x, y, n) = value.xyn();
                ArithmeticOpcode::try_from(n)
                    .map_or(Opcodes::Unknown(value), |ops| {
                        Opcodes::Eight(Arithmetic { ops, x, y })
                    })
            }
            0x9 => register_pair(Opcodes::Nine),
            0xA => Opcodes::A(address()),
            0xB => Opcodes::B(address()),
            0xC => Opcodes::C(register_const()),
            0xD => {
                let (x, y, n) = value.xyn();
                Opcodes::D(Sprite { x, y, n })
            }
            0xE => {
                let (x, nn) = value.xnn();
                KeyOpcode::try_from(nn)
                    .map_or(Opcodes::Unknown(value), |ops| Opcodes::E(Key { ops, x }))
            }
            0xF => {
                let (x, nn) = value.xnn();
                MiscOpcode::try_from(nn)
                    .map_or(Opcodes::Unknown(value), |ops| Opcodes::F(Misc { ops, x }))
            }
            // class is a single nibble
            _ => Opcodes::Unknown(value),
        }
    }
}

/// Represents a step of the program counter
/// this requires the enum ProgramCounterStep
/// to work.
pub trait ProgramCounter {
    /// will move the program counter forward by a step.
    fn step_counter(&mut self, step: ProgramCounterStep);
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents the outcome of a single executed opcode for the host.
pub enum Operation {
    /// If no action has to be taken.
    None,
    /// The opcode waits for the next key press and will be repeated.
    Wait,
    /// The display was changed.
    Draw,
    /// The opcode has no meaning and was skipped.
    Unimplemented(Opcode),
    /// The opcode would have accessed memory out of range, it was skipped
    /// without any effect.
    Rejected(MemoryError),
}

/// These are the traits that have to be full filled for a working opcode
/// table.
///
/// This trait requires the implementation of the  [`ProgramCounter`](ProgramCounter) trait for the step
/// functionality has to be implemented as well.
pub trait ChipOpcodes: ProgramCounter {
    /// will execute the decoded opcode and move the program counter
    ///
    /// Memory errors are recoverable, the opcode is skipped and reported as
    /// [`Operation::Rejected`](Operation::Rejected). All other errors are
    /// returned without touching the program counter.
    fn calc(&mut self, opcode: &Opcodes) -> Result<Operation, ProcessError> {
        let mut operation = Operation::None;
        let step_op = |(step, op): (ProgramCounterStep, Operation)| {
            operation = op;
            step
        };

        let result = match opcode {
            Opcodes::Zero(opcode) => self.zero(opcode).map(step_op),
            Opcodes::One(opcode) => self.one(opcode),
            Opcodes::Two(opcode) => self.two(opcode),
            Opcodes::Three(opcode) => self.three(opcode),
            Opcodes::Four(opcode) => self.four(opcode),
            Opcodes::Five(opcode) => self.five(opcode),
            Opcodes::Six(opcode) => self.six(opcode),
            Opcodes::Seven(opcode) => self.seven(opcode),
            Opcodes::Eight(opcode) => self.eight(opcode),
            Opcodes::Nine(opcode) => self.nine(opcode),
            Opcodes::A(opcode) => self.a(opcode),
            Opcodes::B(opcode) => self.b(opcode),
            Opcodes::C(opcode) => self.c(opcode),
            Opcodes::D(opcode) => self.d(opcode).map(step_op),
            Opcodes::E(opcode) => self.e(opcode),
            Opcodes::F(opcode) => self.f(opcode).map(step_op),
            Opcodes::Unknown(value) => {
                log::warn!("An unsupported opcode was used {:#06X}", value);
                operation = Operation::Unimplemented(*value);
                Ok(ProgramCounterStep::Next)
            }
        };

        let step = match result {
            Ok(step) => step,
            Err(ProcessError::Memory(err)) => {
                log::warn!("Rejected opcode {:?}: {}", opcode, err);
                operation = Operation::Rejected(err);
                ProgramCounterStep::Next
            }
            Err(err) => return Err(err),
        };

        self.step_counter(step);
        Ok(operation)
    }

    /// A multiuse opcode base for type `0NNN`
    ///
    /// - `00E0` - Display  - `disp_clear()`        - Clears the screen.
    /// - `00EE` - Flow     - `return;`             - Returns from a subroutine.
    fn zero(&mut self, opcode: &Zero) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `1NNN` - Flow     - `goto NNN;`           - Jumps to address `NNN`.
    fn one(&self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `2NNN` - Flow     - `*(0xNNN)()`          - Calls subroutine at `NNN`.
    fn two(&mut self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `3XNN` - Cond    - `if(Vx==NN)`          - Skips the next instruction if `VX` equals `NN`.
    fn three(&self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError>;

    /// - `4XNN` - Cond     - `if(Vx!=NN)`          - Skips the next instruction if `VX` doesn't equal `NN`.
    fn four(&self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError>;

    /// - `5XY0` - Cond     - `if(Vx==Vy)`          - Skips the next instruction if `VX` equals `VY`.
    fn five(&self, opcode: &RegisterPair) -> Result<ProgramCounterStep, ProcessError>;

    /// - `6XNN` - Const    - `Vx = NN`             - Sets `VX` to `NN`.
    fn six(&mut self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError>;

    /// - `7XNN` - Const    - `Vx += NN`            - Adds `NN` to `VX`. (Carry flag is not changed)
    fn seven(&mut self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError>;

    /// A mutiuse opcode base for type `8XYT` (T is a sub opcode)
    ///
    /// - `8XY0` - Assign   - `Vx=Vy`               - Sets `VX` to the value of `VY`.
    /// - `8XY1` - BitOp    - `Vx=Vx|Vy`            - Sets `VX` to `VX` or `VY`.
    /// - `8XY2` - BitOp    - `Vx=Vx&Vy`            - Sets `VX` to `VX` and `VY`.
    /// - `8XY3` - BitOp    - `Vx=Vx^Vy`            - Sets `VX` to `VX` xor `VY`.
    /// - `8XY4` - Math     - `Vx += Vy`            - Adds `VY` to `VX`. `VF` is set to `1` when there's a carry, and to `0` when there isn't.
    /// - `8XY5` - Math     - `Vx -= Vy`            - `VY` is subtracted from `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XY6` - BitOp    - `Vx=Vy>>1`            - Stores `VY` shifted right by `1` in `VX`. `VF` receives the least significant bit of `VY`.
    /// - `8XY7` - Math     - `Vx=Vy-Vx`            - Sets `VX` to `VY` minus `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XYE` - BitOp    - `Vx=Vy<<1`            - Stores `VY` shifted left by `1` in `VX`. `VF` receives the most significant bit of `VY`.
    fn eight(&mut self, opcode: &Arithmetic) -> Result<ProgramCounterStep, ProcessError>;

    /// - `9XY0` - Cond     - `if(Vx!=Vy)`          - Skips the next instruction if `VX` doesn't equal `VY`.
    fn nine(&self, opcode: &RegisterPair) -> Result<ProgramCounterStep, ProcessError>;

    /// - `ANNN` - MEM    - `I = NNN`             - Sets `I` to the address `NNN`.
    fn a(&mut self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `BNNN` - Flow    - `PC=V0+NNN`           - Jumps to the address `NNN` plus `V0`.
    fn b(&self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `CXNN` - Rand     - `Vx=rand()&NN`        - Sets `VX` to the result of a bitwise and operation on a random number and `NN`.
    fn c(&mut self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError>;

    /// - `DXYN` - Disp     - `draw(Vx,Vy,N)`       - Draws a sprite at coordinate `(VX, VY)` that has a width of `8` pixels and a height of `N` pixels, read from memory location `I`. `VF` is set to `1` if any screen pixels are flipped from set to unset, and to `0` if that doesn't happen.
    fn d(&mut self, opcode: &Sprite) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// A multiuse opcode base for type `EXTT` (T is a sub opcode)
    ///
    /// - `EX9E` - KeyOp    - `if(key()==Vx)`       - Skips the next instruction if the key stored in `VX` is pressed.
    /// - `EXA1` - KeyOp    - `if(key()!=Vx)`       - Skips the next instruction if the key stored in `VX` isn't pressed.
    fn e(&self, opcode: &Key) -> Result<ProgramCounterStep, ProcessError>;

    /// A multiuse opcode base for type `FXTT` (T is a sub opcode)
    ///
    /// - `FX07` - Timer    - `Vx = get_delay()`    - Sets `VX` to the value of the delay timer.
    /// - `FX0A` - KeyOp    - `Vx = get_key()`      - A key press is awaited, and then stored in `VX`.
    /// - `FX15` - Timer    - `delay_timer(Vx)`     - Sets the delay timer to `VX`.
    /// - `FX18` - Sound    - `sound_timer(Vx)`     - Sets the sound timer to `VX`.
    /// - `FX1E` - MEM      - `I +=Vx`              - Adds `VX` to `I`. `VF` is not affected.
    /// - `FX29` - MEM      - `I=sprite_addr[Vx]`   - Sets `I` to the location of the sprite for the character in `VX`.
    /// - `FX33` - BCD      - `246 / 100 => 2` `246 / 10 => 24 % 10 => 4` `246 % 10 => 6` - Stores the [binary-coded decimal](https://en.wikipedia.org/wiki/Binary-coded_decimal) representation of `VX` at `I`, `I+1` and `I+2`.
    /// - `FX55` - MEM      - `reg_dump(Vx,&I)`     - Stores `V0` to `VX`  (including `VX`) in memory starting at address `I`. `I` itself is left unmodified.
    /// - `FX65` - MEM      - `reg_load(Vx,&I)`     - Fills `V0` to `VX` (including `VX`) with values from memory starting at address `I`. `I` itself is left unmodified.
    fn f(&mut self, opcode: &Misc) -> Result<(ProgramCounterStep, Operation), ProcessError>;
}
