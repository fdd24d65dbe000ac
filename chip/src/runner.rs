//! The host loop that drives the chipset with real time.
use std::{
    io, thread,
    time::{Duration, Instant},
};

use rand::RngCore;

use crate::{
    chip8::ChipSet,
    definitions::{cpu, runner, timer},
    devices::{DisplayCommands, Input, KeyboardCommands, Keyboard},
    opcode::Operation,
    timer::Ticker,
};

/// The rates the host loop runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// The instructions executed per second.
    pub cpu_hertz: u64,
    /// How often the delay and sound timers count down per second.
    pub timer_hertz: u64,
    /// How often a changed display is presented per second.
    pub frame_hertz: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            cpu_hertz: cpu::HERTZ,
            timer_hertz: timer::HERTZ,
            frame_hertz: runner::FRAME_HERTZ,
        }
    }
}

/// Connects the chipset with the display and keyboard of the host.
pub struct Runner<'a, R, D, K> {
    chip: ChipSet<'a, R>,
    display: D,
    keyboard: K,
    keys: Keyboard,
    cpu: Ticker,
    timer: Ticker,
    frame: Ticker,
}

impl<'a, R, D, K> Runner<'a, R, D, K>
where
    R: RngCore,
    D: DisplayCommands,
    K: KeyboardCommands,
{
    pub fn new(chip: ChipSet<'a, R>, display: D, keyboard: K, config: RunnerConfig) -> Self {
        Self {
            chip,
            display,
            keyboard,
            keys: Keyboard::new(),
            cpu: Ticker::from_hertz(config.cpu_hertz),
            timer: Ticker::from_hertz(config.timer_hertz),
            frame: Ticker::from_hertz(config.frame_hertz),
        }
    }

    /// Runs everything that is due for the elapsed wall clock time.
    ///
    /// Returns `false` as soon as the keyboard reports that the user wants to quit.
    pub fn advance(&mut self, elapsed: Duration) -> io::Result<bool> {
        match self.keyboard.poll()? {
            Input::Quit => return Ok(false),
            Input::Keys(keys) => self.keys = keys,
        }

        let steps = self.cpu.due(elapsed);
        if !self.chip.is_halted() {
            for _ in 0..steps {
                match self.chip.step(&self.keys) {
                    // no need to repeat the opcode until the keys changed
                    Ok(Operation::Wait) => break,
                    Ok(_) => {}
                    Err(err) => {
                        log::info!("Stopped executing: {}", err);
                        break;
                    }
                }
            }
        }

        for _ in 0..self.timer.due(elapsed) {
            self.chip.tick_timers();
        }

        if self.frame.due(elapsed) > 0 && self.chip.get_display().is_dirty() {
            self.display.display(self.chip.present())?;
        }

        Ok(true)
    }

    /// Will drive the chipset with real time until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut last = Instant::now();
        loop {
            let now = Instant::now();
            if !self.advance(now - last)? {
                log::debug!("quit requested");
                return Ok(());
            }
            last = now;

            let wait = self
                .cpu
                .until_next()
                .min(self.timer.until_next())
                .min(self.frame.until_next());
            thread::sleep(wait);
        }
    }

    pub fn chipset(&self) -> &ChipSet<'a, R> {
        &self.chip
    }
}
