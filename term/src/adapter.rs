use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use hashbrown::HashMap;
use once_cell::sync::Lazy;

use chip::{
    definitions::{display, keyboard as chip_keyboard},
    devices::{DisplayCommands, Input, Keyboard, KeyboardCommands},
};

use crate::definitions::{field, keyboard};

/// Puts the terminal into raw mode on the alternate screen, and restores it
/// again when dropped.
pub(crate) struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        crossterm::execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = crossterm::execute!(out, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Translates the row major pixels into lines of half blocks, every
/// character cell holds two rows of pixels.
pub(crate) fn render_lines(pixels: &[bool]) -> Vec<String> {
    pixels
        .chunks(2 * display::WIDTH)
        .map(|rows| {
            let (upper, lower) = rows.split_at(display::WIDTH.min(rows.len()));
            (0..display::WIDTH)
                .map(|x| {
                    let up = upper.get(x).copied().unwrap_or(false);
                    let down = lower.get(x).copied().unwrap_or(false);
                    match (up, down) {
                        (true, true) => field::FULL,
                        (true, false) => field::UPPER,
                        (false, true) => field::LOWER,
                        (false, false) => field::EMPTY,
                    }
                })
                .collect()
        })
        .collect()
}

/// Draws the display onto the terminal.
pub(crate) struct DisplayAdapter<W: Write> {
    out: W,
}

impl<W: Write> DisplayAdapter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> DisplayCommands for DisplayAdapter<W> {
    fn display(&mut self, pixels: &[bool]) -> io::Result<()> {
        log::trace!("Drawing the display");

        for (row, line) in render_lines(pixels).iter().enumerate() {
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush()
    }
}

/// Reads the terminal key events and turns them into keyboard snapshots.
#[derive(Debug, Clone)]
pub(crate) struct KeyboardAdapter {
    /// The last time each chipset key was reported as pressed.
    pressed: [Option<Instant>; chip_keyboard::SIZE],
    hold: Duration,
}

impl Default for KeyboardAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardAdapter {
    pub fn new() -> Self {
        Self {
            pressed: [None; chip_keyboard::SIZE],
            hold: Duration::from_millis(keyboard::HOLD_MILLIS),
        }
    }

    /// maps the host key onto the key of the chipset.
    pub fn map_key(key: char) -> Option<usize> {
        /// maps the external keyboard layout to the internaly given.
        static LAYOUT_MAP: Lazy<HashMap<char, usize>> = Lazy::new(|| {
            let mut map = HashMap::new();

            for (host_row, chip_row) in keyboard::HOST_LAYOUT
                .iter()
                .zip(chip_keyboard::LAYOUT.iter())
            {
                for (&host, &chip) in host_row.iter().zip(chip_row.iter()) {
                    map.insert(host, chip);
                }
            }

            map
        });

        LAYOUT_MAP.get(&key.to_ascii_lowercase()).copied()
    }

    /// Handles a single key event, returns `true` if the user wants to quit.
    fn handle(&mut self, event: KeyEvent, now: Instant) -> bool {
        if event.kind == KeyEventKind::Release {
            return false;
        }

        match event.code {
            KeyCode::Esc => true,
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Char(key) => {
                match Self::map_key(key) {
                    Some(index) => self.pressed[index] = Some(now),
                    None => log::debug!("can't map {:?} to a chipset key", key),
                }
                false
            }
            _ => false,
        }
    }

    /// The keys that are still held at `now`.
    fn snapshot(&self, now: Instant) -> Keyboard {
        let mut keys = Keyboard::new();
        for (index, pressed) in self.pressed.iter().enumerate() {
            if let Some(at) = pressed {
                keys.set_key(index, now.duration_since(*at) < self.hold);
            }
        }
        keys
    }
}

impl KeyboardCommands for KeyboardAdapter {
    fn poll(&mut self) -> io::Result<Input> {
        let now = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if self.handle(key, now) {
                    return Ok(Input::Quit);
                }
            }
        }
        Ok(Input::Keys(self.snapshot(now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_map_key() {
        let expected = [
            ('1', 0x1),
            ('2', 0x2),
            ('3', 0x3),
            ('4', 0xC),
            ('q', 0x4),
            ('w', 0x5),
            ('e', 0x6),
            ('r', 0xD),
            ('a', 0x7),
            ('s', 0x8),
            ('d', 0x9),
            ('f', 0xE),
            ('z', 0xA),
            ('x', 0x0),
            ('c', 0xB),
            ('v', 0xF),
        ];
        for (key, index) in expected.iter() {
            assert_eq!(Some(*index), KeyboardAdapter::map_key(*key), "{}", key);
        }
        assert_eq!(Some(0xF), KeyboardAdapter::map_key('V'));
        assert_eq!(None, KeyboardAdapter::map_key('p'));
    }

    #[test]
    fn test_hold_window() {
        let mut adapter = KeyboardAdapter::new();
        let start = Instant::now();

        assert!(!adapter.handle(press(KeyCode::Char('w')), start));
        let keys = adapter.snapshot(start);
        assert!(keys.is_pressed(0x5));
        assert_eq!(Some(0x5), keys.first_pressed());

        let later = start + Duration::from_millis(keyboard::HOLD_MILLIS);
        assert_eq!(None, adapter.snapshot(later).first_pressed());

        // a repeat event keeps the key held
        assert!(!adapter.handle(press(KeyCode::Char('w')), later));
        assert!(adapter.snapshot(later).is_pressed(0x5));
    }

    #[test]
    fn test_quit_keys() {
        let mut adapter = KeyboardAdapter::new();
        let now = Instant::now();
        assert!(adapter.handle(press(KeyCode::Esc), now));
        assert!(adapter.handle(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            now
        ));
        // a plain c is a key of the chipset
        assert!(!adapter.handle(press(KeyCode::Char('c')), now));
        assert!(adapter.snapshot(now).is_pressed(0xB));
    }

    #[test]
    fn test_render_lines() {
        let mut pixels = vec![false; display::RESOLUTION];
        // (0, 0) upper only, (1, 1) lower only, (2, 0) and (2, 1) both
        pixels[0] = true;
        pixels[display::WIDTH + 1] = true;
        pixels[2] = true;
        pixels[display::WIDTH + 2] = true;

        let lines = render_lines(&pixels);
        assert_eq!(display::HEIGHT / 2, lines.len());
        assert!(lines.iter().all(|line| line.chars().count() == display::WIDTH));

        let first: Vec<char> = lines[0].chars().take(4).collect();
        assert_eq!(vec![field::UPPER, field::LOWER, field::FULL, field::EMPTY], first);
        assert!(lines[1..]
            .iter()
            .all(|line| line.chars().all(|c| c == field::EMPTY)));
    }

    #[test]
    fn test_display_adapter_writes() {
        let mut adapter = DisplayAdapter::new(Vec::new());
        let pixels = vec![true; display::RESOLUTION];
        adapter.display(&pixels).unwrap();

        let output = String::from_utf8(adapter.out).unwrap();
        assert_eq!(
            display::RESOLUTION / 2,
            output.chars().filter(|&c| c == field::FULL).count()
        );
    }
}
