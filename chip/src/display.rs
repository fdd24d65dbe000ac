//! The monochrome framebuffer of the chipset.
use crate::definitions::display::{HEIGHT, RESOLUTION, SPRITE_WIDTH, WIDTH};

/// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
/// `(64 x 32)`. The pixels are stored row by row, every coordinate wraps around the edges
/// of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pixels: Box<[bool; RESOLUTION]>,
    /// Set when the pixels changed since the last call to [`present`](Display::present).
    dirty: bool,
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Display {
    pub fn new() -> Self {
        Self {
            pixels: Box::new([false; RESOLUTION]),
            dirty: true,
        }
    }

    #[inline]
    fn index(x: usize, y: usize) -> usize {
        (y % HEIGHT) * WIDTH + (x % WIDTH)
    }

    /// Will clear the display
    pub fn clear(&mut self) {
        self.pixels.fill(false);
        self.dirty = true;
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, value: bool) {
        self.pixels[Self::index(x, y)] = value;
        self.dirty = true;
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[Self::index(x, y)]
    }

    /// Draws the sprite rows at coordinate `(x, y)`. Each row is `8` pixels wide with the
    /// most significant bit being the leftmost pixel. Every set bit is XORed onto the screen.
    ///
    /// Returns `true` if any pixel was flipped from set to unset.
    pub fn draw_sprite(&mut self, x: usize, y: usize, rows: &[u8]) -> bool {
        let mut collision = false;

        for (i, row) in rows.iter().enumerate() {
            for j in 0..SPRITE_WIDTH {
                let mask: u8 = 0x80 >> j;
                if row & mask == 0 {
                    continue;
                }

                let index = Self::index(x + j, y + i);
                let pixel = self.pixels[index];
                if pixel {
                    collision = true;
                }
                self.pixels[index] = !pixel;
            }
        }

        self.dirty = true;
        collision
    }

    /// Returns `true` if the display changed since it was last presented.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Will return the row major pixels for rendering and mark them as presented.
    pub fn present(&mut self) -> &[bool] {
        self.dirty = false;
        &self.pixels[..]
    }

    /// Read only view of the pixels, without changing the dirty state.
    pub fn pixels(&self) -> &[bool] {
        &self.pixels[..]
    }

    /// Iterates over the rows of the display from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.pixels.chunks(WIDTH)
    }
}
