use rand::{Rng, RngCore};

use crate::{
    definitions::cpu,
    memory::Memory,
    opcode::{
        Address, Arithmetic, ArithmeticOpcode, ChipOpcodes, Key, KeyOpcode, Misc, MiscOpcode,
        Operation, ProgramCounterStep, RegisterConst, RegisterPair, Sprite, Zero,
    },
    ProcessError,
};

use super::ChipSet;

impl<R: RngCore> ChipOpcodes for ChipSet<'_, R> {
    fn zero(&mut self, opcode: &Zero) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        match opcode {
            Zero::Clear => {
                // 00E0
                // clear display
                self.display.clear();
                Ok((ProgramCounterStep::Next, Operation::Draw))
            }
            Zero::Return => {
                // 00EE
                // Return from sub routine => pop from stack
                let pc = self.pop_stack()?;
                log::debug!("return to {:#06X}", pc);
                Ok((ProgramCounterStep::Jump(pc), Operation::None))
            }
        }
    }

    fn one(&self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError> {
        // 1NNN
        // Jumps to address NNN.
        self.jump_to(opcode.nnn)
    }

    fn two(&mut self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError> {
        // 2NNN
        // Calls subroutine at NNN
        // and set's the program counter to the next opcode after the given stack push
        let step = self.jump_to(opcode.nnn)?;
        self.push_stack(ProgramCounterStep::Next.apply(self.program_counter))?;
        Ok(step)
    }

    fn three(&self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError> {
        // 3XNN
        // Skips the next instruction if VX equals NN.
        let RegisterConst { x, nn } = *opcode;
        Ok(ProgramCounterStep::cond(self.registers[x] == nn))
    }

    fn four(&self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError> {
        // 4XNN
        // Skips the next instruction if VX doesn't equal NN.
        let RegisterConst { x, nn } = *opcode;
        Ok(ProgramCounterStep::cond(self.registers[x] != nn))
    }

    fn five(&self, opcode: &RegisterPair) -> Result<ProgramCounterStep, ProcessError> {
        // 5XY0
        // Skips the next instruction if VX equals VY.
        let RegisterPair { x, y } = *opcode;
        Ok(ProgramCounterStep::cond(
            self.registers[x] == self.registers[y],
        ))
    }

    fn six(&mut self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError> {
        // 6XNN
        // Sets VX to NN.
        let RegisterConst { x, nn } = *opcode;
        self.registers[x] = nn;
        Ok(ProgramCounterStep::Next)
    }

    fn seven(&mut self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError> {
        // 7XNN
        // Adds NN to VX. (Carry flag is not changed)
        let RegisterConst { x, nn } = *opcode;
        self.registers[x] = self.registers[x].wrapping_add(nn);
        Ok(ProgramCounterStep::Next)
    }

    fn eight(&mut self, opcode: &Arithmetic) -> Result<ProgramCounterStep, ProcessError> {
        let Arithmetic { ops, x, y } = *opcode;
        let vx = self.registers[x];
        let vy = self.registers[y];

        // the flag is written after VX, so that it wins if X is F
        let (res, flag) = match ops {
            ArithmeticOpcode::Assign => (vy, None),
            ArithmeticOpcode::Or => (vx | vy, None),
            ArithmeticOpcode::And => (vx & vy, None),
            ArithmeticOpcode::Xor => (vx ^ vy, None),
            ArithmeticOpcode::Add => {
                let (res, carry) = vx.overflowing_add(vy);
                (res, Some(carry as u8))
            }
            ArithmeticOpcode::Sub => {
                let (res, borrow) = vx.overflowing_sub(vy);
                (res, Some(!borrow as u8))
            }
            ArithmeticOpcode::SubReverse => {
                let (res, borrow) = vy.overflowing_sub(vx);
                (res, Some(!borrow as u8))
            }
            ArithmeticOpcode::ShiftRight => (vy >> 1, Some(vy & 0x01)),
            ArithmeticOpcode::ShiftLeft => (vy << 1, Some((vy & 0x80) >> 7)),
        };

        self.registers[x] = res;
        if let Some(flag) = flag {
            self.registers[cpu::register::LAST] = flag;
        }
        Ok(ProgramCounterStep::Next)
    }

    fn nine(&self, opcode: &RegisterPair) -> Result<ProgramCounterStep, ProcessError> {
        // 9XY0
        // Skips the next instruction if VX doesn't equal VY.
        let RegisterPair { x, y } = *opcode;
        Ok(ProgramCounterStep::cond(
            self.registers[x] != self.registers[y],
        ))
    }

    fn a(&mut self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError> {
        // ANNN
        // Sets I to the address NNN.
        self.index_register = opcode.nnn;
        Ok(ProgramCounterStep::Next)
    }

    fn b(&self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError> {
        // BNNN
        // Jumps to the address NNN plus V0.
        let v0 = self.registers[0] as usize;
        self.jump_to(opcode.nnn + v0)
    }

    fn c(&mut self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError> {
        // CXNN
        // Sets VX to the result of a bitwise and operation on a random number (Typically: 0 to 255)
        // and NN.
        let RegisterConst { x, nn } = *opcode;
        let rand: u8 = self.rng.gen();
        self.registers[x] = rand & nn;
        Ok(ProgramCounterStep::Next)
    }

    fn d(&mut self, opcode: &Sprite) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        // DXYN
        // Draws a sprite at coordinate (VX, VY) that has a width of 8 pixels and a height of N
        // pixels. Each row of 8 pixels is read as bit-coded starting from memory location I; I
        // value doesn't change after the execution of this instruction. VF is set to 1 if any
        // screen pixels are flipped from set to unset when the sprite is drawn, and to 0 if that
        // doesn't happen
        let Sprite { x, y, n } = *opcode;

        let rows = self.memory.read_slice(self.index_register, n as usize)?;
        let coorx = self.registers[x] as usize;
        let coory = self.registers[y] as usize;

        let collision = self.display.draw_sprite(coorx, coory, rows);
        self.registers[cpu::register::LAST] = collision as u8;

        Ok((ProgramCounterStep::Next, Operation::Draw))
    }

    fn e(&self, opcode: &Key) -> Result<ProgramCounterStep, ProcessError> {
        let Key { ops, x } = *opcode;
        let pressed = self.keyboard.is_pressed(self.registers[x] as usize);
        let step = match ops {
            // EX9E
            // Skips the next instruction if the key stored in VX is pressed.
            KeyOpcode::Pressed => ProgramCounterStep::cond(pressed),
            // EXA1
            // Skips the next instruction if the key stored in VX isn't pressed.
            KeyOpcode::NotPressed => ProgramCounterStep::cond(!pressed),
        };
        Ok(step)
    }

    fn f(&mut self, opcode: &Misc) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        let Misc { ops, x } = *opcode;
        let mut op = Operation::None;
        let mut pcs = ProgramCounterStep::Next;
        match ops {
            MiscOpcode::GetDelayTimer => {
                // FX07
                // Sets VX to the value of the delay timer.
                self.registers[x] = self.get_delay_timer();
            }
            MiscOpcode::AwaitKeyPress => {
                // FX0A
                // A key press is awaited, and then stored in VX. The opcode is
                // repeated until the snapshot contains a pressed key.
                match self.keyboard.first_pressed() {
                    Some(key) => self.registers[x] = key as u8,
                    None => {
                        op = Operation::Wait;
                        pcs = ProgramCounterStep::None;
                    }
                }
            }
            MiscOpcode::SetDelayTimer => {
                // FX15
                // Sets the delay timer to VX.
                self.delay_timer.set_value(self.registers[x]);
            }
            MiscOpcode::SetSoundTimer => {
                // FX18
                // Sets the sound timer to VX.
                self.sound_timer.set_value(self.registers[x]);
            }
            MiscOpcode::AddVxToI => {
                // FX1E
                // Adds VX to I. VF is not affected.
                let xi = self.registers[x] as usize;
                self.index_register = (self.index_register + xi) & 0xFFFF;
            }
            MiscOpcode::SetIToSprite => {
                // FX29
                // Sets I to the location of the sprite for the character in VX. Characters 0-F (in
                // hexadecimal) are represented by a 4x5 font.
                self.index_register = Memory::glyph_address(self.registers[x]);
            }
            MiscOpcode::StoreBCD => {
                // FX33
                // Stores the binary-coded decimal representation of VX, with the most significant
                // of three digits at the address in I, the middle digit at I plus 1, and the least
                // significant digit at I plus 2.
                let r = self.registers[x];
                let bcd = [
                    r / 100,     // 246u8 / 100 => 2
                    r / 10 % 10, // 246u8 / 10 => 24 % 10 => 4
                    r % 10,      // 246u8 % 10 => 6
                ];
                self.memory.write_slice(self.index_register, &bcd)?;
            }
            MiscOpcode::StoreV0ToVx => {
                // FX55
                // Stores V0 to VX (including VX) in memory starting at address I. The offset from I
                // is increased by 1 for each value written, but I itself is left unmodified.
                self.memory
                    .write_slice(self.index_register, &self.registers[..=x])?;
            }
            MiscOpcode::FillV0ToVx => {
                // FX65
                // Fills V0 to VX (including VX) with values from memory starting at address I. The
                // offset from I is increased by 1 for each value written, but I itself is left
                // unmodified.
                let data = self.memory.read_slice(self.index_register, x + 1)?;
                self.registers[..=x].copy_from_slice(data);
            }
        }
        Ok((pcs, op))
    }
}
