pub const SIDE: usize = 32;
pub const BACKGROUND: crate::pixel::Pixel = crate::pixel::Pixel::new(0x3B, 0x82, 0xF6, 0xFF);
pub const BORDER: crate::pixel::Pixel = crate::pixel::Pixel::new(0x1E, 0x40, 0xAF, 0xFF);
pub const GLYPH: crate::pixel::Pixel = crate::pixel::Pixel::new(0xFF, 0xFF, 0xFF, 0xFF);
pub const PIXEL_BYTES: usize = SIDE * SIDE * 4; // 4 byte BGRA pixels
pub const MASK_BYTES: usize = SIDE * SIDE / 8;  // 1 bit per pixel AND mask
pub const IMAGE_BYTES: usize = PIXEL_BYTES + MASK_BYTES;
pub const INFO_HEADER_BYTES: usize = 40;
pub const DATA_OFFSET: usize = 6 + 16; // icon directory + one directory entry
pub const FILE_BYTES: usize = DATA_OFFSET + INFO_HEADER_BYTES + IMAGE_BYTES;
