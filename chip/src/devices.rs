use std::io;

use crate::definitions::keyboard;

#[cfg_attr(test, mockall::automock)]
/// The traits responsible for the display based code
pub trait DisplayCommands {
    /// Will display all the pixels, stored row by row.
    fn display(&mut self, pixels: &[bool]) -> io::Result<()>;
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for reading the keyboard data
pub trait KeyboardCommands {
    /// Will take a snapshot of the currently pressed keys, or
    /// report that the user wants to quit.
    fn poll(&mut self) -> io::Result<Input>;
}

/// What the host input reported since the last poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Keys(Keyboard),
    Quit,
}

/// Will store the state of the hex keyboard.
///
/// Input is done with a hex keyboard that has 16 keys ranging `0-F`. The `8`, `4`, `6`, and
/// `2` keys are typically used for directional input. Three opcodes are used to detect input.
/// One skips an instruction if a specific key is pressed, while another does the same if a
/// specific key is not pressed. The third waits for a key press, and then stores it in one of
/// the data registers.
///
/// The chipset only ever reads a snapshot of it, once per step.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyboard {
    keys: [bool; keyboard::SIZE],
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    pub fn from_keys(keys: [bool; keyboard::SIZE]) -> Self {
        Self { keys }
    }

    /// Will set the value of the given key, keys outside of `0-F` are ignored.
    pub fn set_key(&mut self, key: usize, to: bool) {
        if let Some(entry) = self.keys.get_mut(key) {
            *entry = to;
        }
    }

    /// Keys outside of `0-F` are never pressed.
    pub fn is_pressed(&self, key: usize) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// The lowest key index that is currently pressed.
    pub fn first_pressed(&self) -> Option<usize> {
        self.keys.iter().position(|&pressed| pressed)
    }

    pub fn get_keys(&self) -> &[bool] {
        &self.keys
    }
}
