use rand::RngCore;
use tinyvec::ArrayVec;

use crate::{
    definitions::{cpu, memory},
    devices::Keyboard,
    display::Display,
    memory::Memory,
    opcode::{ChipOpcodes, Opcode, Opcodes, Operation, ProgramCounter, ProgramCounterStep},
    timer::Timer,
    ProcessError, StackError,
};

/// The ChipSet struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instant on the
/// Chip8 CPU.
///
/// The memory and the display are owned by the caller and only borrowed
/// for the lifetime of the chipset.
pub struct ChipSet<'a, R> {
    /// the last fetched opcode, all two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    /// - `0x000-0x1FF` - Chip 8 interpreter (contains font set in emu)
    /// - `0x050-0x0A0` - Used for the built in `4x5` pixel font set (`0-F`)
    /// - `0x200-0xFFF` - Program ROM and work RAM
    pub(super) memory: &'a mut Memory,
    /// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
    /// `(64 x 32)`.
    pub(super) display: &'a mut Display,
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles as a flag for some
    /// instructions; thus, it should be avoided. In an addition operation, `VF` is the carry flag,
    /// while in subtraction, it is the "no borrow" flag. In the draw instruction `VF` is set upon
    /// pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index for the register, this is a special register entry
    /// called index `I`
    pub(super) index_register: usize,
    /// The program counter is a CPU register in the computer processor which has the address of the
    /// next instruction to be executed from memory.
    pub(super) program_counter: usize,
    /// The stack is only used to store return addresses when subroutines are called. The original
    /// [RCA 1802](https://de.wikipedia.org/wiki/RCA1802) version allocated `48` bytes for up to
    /// `12` levels of nesting; modern implementations usually have more.
    /// (here we are using `16`)
    pub(super) stack: ArrayVec<[usize; cpu::stack::SIZE]>,
    /// Delay timer: This timer is intended to be used for timing the events of games. Its value
    /// can be set and read.
    pub(super) delay_timer: Timer,
    /// Sound timer: This timer is used for sound effects. When its value is nonzero, a beeping
    /// sound is made.
    pub(super) sound_timer: Timer,
    /// The snapshot of the keyboard the current step runs with.
    pub(super) keyboard: Keyboard,
    /// This stores the random number generator, used by the chipset.
    /// It is stored into the chipset, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: R,
    /// The fatal fault that halted the program, if any.
    pub(super) fault: Option<ProcessError>,
}

impl<'a, R: RngCore> ChipSet<'a, R> {
    /// will create a new chipset object
    pub fn new(memory: &'a mut Memory, display: &'a mut Display, rng: R) -> Self {
        Self {
            opcode: 0,
            memory,
            display,
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER,
            stack: ArrayVec::new(),
            delay_timer: Timer::default(),
            sound_timer: Timer::default(),
            keyboard: Keyboard::new(),
            rng,
            fault: None,
        }
    }

    /// will get the next opcode from memory
    pub(super) fn set_opcode(&mut self) -> Result<(), ProcessError> {
        // will build the opcode given from the pointer
        self.opcode = self.memory.read_opcode(self.program_counter)?;
        Ok(())
    }

    /// will advance the program by a single step
    ///
    /// The keyboard is only read from the given snapshot. After a fatal error
    /// the chipset stays halted and every further step returns
    /// [`ProcessError::Halted`](ProcessError::Halted).
    pub fn step(&mut self, keys: &Keyboard) -> Result<Operation, ProcessError> {
        if self.fault.is_some() {
            return Err(ProcessError::Halted);
        }
        self.keyboard = *keys;

        let res = self.set_opcode().and_then(|_| {
            log::debug!(
                "opcode {:#06X} at {:#06X}",
                self.opcode,
                self.program_counter
            );
            let opcode = Opcodes::from(self.opcode);
            self.calc(&opcode)
        });

        if let Err(err) = &res {
            log::error!(
                "Halting at {:#06X} after a fatal error: {}",
                self.program_counter,
                err
            );
            log::error!("{}", self);
            self.fault = Some(err.clone());
        }
        res
    }

    /// Counts both timers down by one, has to be called at `60` hertz.
    pub fn tick_timers(&mut self) {
        self.delay_timer.tick();
        self.sound_timer.tick();
    }

    /// Will push the current pointer to the stack
    pub(super) fn push_stack(&mut self, pointer: usize) -> Result<(), StackError> {
        match self.stack.try_push(pointer) {
            None => Ok(()),
            Some(_) => Err(StackError::Full),
        }
    }

    /// Will check that a whole opcode can be fetched from the jump target
    pub(super) fn jump_to(&self, target: usize) -> Result<ProgramCounterStep, ProcessError> {
        self.memory.read_slice(target, memory::opcodes::SIZE)?;
        Ok(ProgramCounterStep::Jump(target))
    }

    /// Will pop from the stack
    pub(super) fn pop_stack(&mut self) -> Result<usize, StackError> {
        self.stack.pop().ok_or(StackError::Empty)
    }

    /// will return the sound timer
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer.get_value()
    }

    /// will return the delay timer
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer.get_value()
    }

    /// `true` as long as the sound timer is running
    pub fn sound_active(&self) -> bool {
        self.sound_timer.is_active()
    }

    pub fn get_registers(&self) -> &[u8] {
        &self.registers
    }

    pub fn get_index_register(&self) -> usize {
        self.index_register
    }

    pub fn get_program_counter(&self) -> usize {
        self.program_counter
    }

    pub fn get_stack(&self) -> &[usize] {
        &self.stack
    }

    pub fn get_memory(&self) -> &Memory {
        &*self.memory
    }

    pub fn get_display(&self) -> &Display {
        &*self.display
    }

    /// Will return the pixels for rendering and mark the display as presented.
    pub fn present(&mut self) -> &[bool] {
        self.display.present()
    }

    pub fn is_halted(&self) -> bool {
        self.fault.is_some()
    }

    /// The fatal error that halted the program.
    pub fn get_fault(&self) -> Option<&ProcessError> {
        self.fault.as_ref()
    }
}

impl<R: RngCore> ProgramCounter for ChipSet<'_, R> {
    fn step_counter(&mut self, step: ProgramCounterStep) {
        self.program_counter = step.apply(self.program_counter);
    }
}
