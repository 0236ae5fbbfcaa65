use crate::{
    consts::SIDE,
    pixel::Pixel,
};

/// A fixed 32x32 grid of pixels. Row 0 is the top row.
///
/// A canvas is built by chaining the const fill operations, each of which
/// consumes the canvas and returns the painted result.
#[derive(Clone, Copy)]
pub struct Canvas {
    pixels: [Pixel; SIDE * SIDE],
}

impl Canvas {
    /// Creates a canvas with every pixel set to `colour`.
    #[must_use]
    pub const fn filled(colour: Pixel) -> Self {
        Self {pixels: [colour; SIDE * SIDE]}
    }
    /// The pixel at column `x`, row `y`. Both must be below the side length (32).
    #[must_use]
    pub const fn pixel(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y * SIDE + x]
    }
    /// Overwrites the outermost one pixel ring with `colour`.
    #[must_use]
    pub const fn outline(mut self, colour: Pixel) -> Self {
        let mut index = 0;
        while index != SIDE {
            self.pixels[index] = colour;                     // top row
            self.pixels[(SIDE - 1) * SIDE + index] = colour; // bottom row
            self.pixels[index * SIDE] = colour;              // left column
            self.pixels[index * SIDE + SIDE - 1] = colour;   // right column
            index += 1;
        }
        self
    }
    /// Overwrites the rectangle from (`x0`, `y0`) inclusive to (`x1`, `y1`) exclusive with `colour`.
    ///
    /// Coordinates outside the canvas are silently skipped, so a rectangle may
    /// hang off any edge (or miss the canvas entirely) and only the pixels
    /// inside the canvas are painted.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)] // SIDE fits in i32, x and y checked non-negative
    pub const fn fill_rect(mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Pixel) -> Self {
        let mut y = y0;
        while y < y1 {
            let mut x = x0;
            while x < x1 {
                if 0 <= x && x < SIDE as i32 && 0 <= y && y < SIDE as i32 {
                    self.pixels[y as usize * SIDE + x as usize] = colour;
                }
                x += 1;
            }
            y += 1;
        }
        self
    }
}
