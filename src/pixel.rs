#[derive(Clone, Copy, Debug)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {red, green, blue, alpha}
    }
    // puts pixel data in output buffer in BGRA order and increments output index. used only in encoder.
    #[inline]
    pub const fn bgra_to_output<const N: usize>(self, mut output: [u8; N], mut index: usize) -> ([u8; N], usize) {
        output[index] = self.blue; index += 1;  // BLUE:  8bit data (0..=255)
        output[index] = self.green; index += 1; // GREEN: 8bit data (0..=255)
        output[index] = self.red; index += 1;   // RED:   8bit data (0..=255)
        output[index] = self.alpha; index += 1; // ALPHA: 8bit data (0..=255)
        (output, index)
    }
    #[inline]
    pub const fn is_same(self, other: Self) -> bool {
        self.red == other.red && self.green == other.green && self.blue == other.blue && self.alpha == other.alpha
    }
}
