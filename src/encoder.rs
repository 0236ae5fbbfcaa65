use crate::{
    canvas::Canvas,
    consts::{DATA_OFFSET, FILE_BYTES, IMAGE_BYTES, INFO_HEADER_BYTES, MASK_BYTES, SIDE},
    header::{IconDir, IconDirEntry, InfoHeader},
    utils::splice,
};

/// Encodes a canvas as a complete single image ICO file.
///
/// Layout, with every multi byte field little endian and no padding anywhere:
/// the 6 byte icon directory, one 16 byte directory entry, the 40 byte bitmap
/// info header, the 32bit pixel data (BGRA, bottom row first) and the 1 bit
/// per pixel AND mask. The mask is all zeroes (fully opaque); the alpha
/// channel says the same thing but consumers may read either, so both stay.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // all sizes are small fixed constants
pub const fn encode(canvas: Canvas) -> [u8; FILE_BYTES] {
    let (output, index) = splice([0; FILE_BYTES], IconDir::new(1).to_u8(), 0);
    let entry = IconDirEntry::new(SIDE as u8,
                                  SIDE as u8,
                                  (INFO_HEADER_BYTES + IMAGE_BYTES) as u32,
                                  DATA_OFFSET as u32);
    let (output, index) = splice(output, entry.to_u8(), index);
    let info = InfoHeader::new(SIDE as i32, (SIDE * 2) as i32, IMAGE_BYTES as u32);
    let (mut output, mut index) = splice(output, info.to_u8(), index);
    let mut y = SIDE;
    while y != 0 { // the bitmap is stored bottom up
        y -= 1;
        let mut x = 0;
        while x != SIDE {
            let (filled, next) = canvas.pixel(x, y).bgra_to_output(output, index);
            output = filled;
            index = next;
            x += 1;
        }
    }
    let mut mask = 0;
    while mask != MASK_BYTES {
        output[index] = 0x00; // a zero bit marks the pixel opaque
        index += 1;
        mask += 1;
    }
    output
}
