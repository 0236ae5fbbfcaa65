use crate::utils::splice;

/// The 6 byte directory that opens an ICO file.
///
/// All fields are little endian, as everywhere else in the format.
#[derive(Clone, Copy)]
pub struct IconDir {
    pub reserved: u16,
    pub image_type: u16,
    pub count: u16,
}

impl IconDir {
    /// An icon directory holding `count` images. The image type is always 1 (icon, not cursor).
    #[must_use]
    pub const fn new(count: u16) -> Self {
        Self {reserved: 0, image_type: 1, count}
    }
    #[must_use]
    pub const fn to_u8(self) -> [u8; 6] {
        let (output, index) = splice([0; 6], self.reserved.to_le_bytes(), 0);
        let (output, index) = splice(output, self.image_type.to_le_bytes(), index);
        let (output, _) = splice(output, self.count.to_le_bytes(), index);
        output
    }
}

/// One 16 byte directory entry describing an embedded image.
///
/// A stored width or height of 0 would mean 256; the real 32 here fits in the
/// byte so it is stored literally.
#[derive(Clone, Copy)]
pub struct IconDirEntry {
    pub width: u8,
    pub height: u8,
    pub colour_count: u8,
    pub reserved: u8,
    pub planes: u16,
    pub bit_count: u16,
    pub bytes_in_res: u32,
    pub image_offset: u32,
}

impl IconDirEntry {
    /// An entry for a 32bit image of `bytes_in_res` bytes starting `image_offset` bytes into the file.
    #[must_use]
    pub const fn new(width: u8, height: u8, bytes_in_res: u32, image_offset: u32) -> Self {
        Self {width, height, colour_count: 0, reserved: 0, planes: 1, bit_count: 32, bytes_in_res, image_offset}
    }
    #[must_use]
    pub const fn to_u8(self) -> [u8; 16] {
        let mut output = [0; 16];
        output[0] = self.width;
        output[1] = self.height;
        output[2] = self.colour_count;
        output[3] = self.reserved;
        let (output, index) = splice(output, self.planes.to_le_bytes(), 4);
        let (output, index) = splice(output, self.bit_count.to_le_bytes(), index);
        let (output, index) = splice(output, self.bytes_in_res.to_le_bytes(), index);
        let (output, _) = splice(output, self.image_offset.to_le_bytes(), index);
        output
    }
}

/// The 40 byte bitmap info header in front of the pixel data.
///
/// `height` must be double the real image height because the format counts the
/// rows of the AND mask that follows the pixel data. The four trailing fields
/// (pixels per meter and palette counts) are meaningless for an icon and stay 0.
#[derive(Clone, Copy)]
pub struct InfoHeader {
    pub size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub size_image: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colours_used: u32,
    pub colours_important: u32,
}

impl InfoHeader {
    /// An uncompressed 32bit header for `size_image` bytes of pixel and mask data.
    #[must_use]
    pub const fn new(width: i32, height: i32, size_image: u32) -> Self {
        Self {
            size: 40,
            width,
            height,
            planes: 1,
            bit_count: 32,
            compression: 0,
            size_image,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colours_used: 0,
            colours_important: 0,
        }
    }
    #[must_use]
    pub const fn to_u8(self) -> [u8; 40] {
        let (output, index) = splice([0; 40], self.size.to_le_bytes(), 0);
        let (output, index) = splice(output, self.width.to_le_bytes(), index);
        let (output, index) = splice(output, self.height.to_le_bytes(), index);
        let (output, index) = splice(output, self.planes.to_le_bytes(), index);
        let (output, index) = splice(output, self.bit_count.to_le_bytes(), index);
        let (output, index) = splice(output, self.compression.to_le_bytes(), index);
        let (output, index) = splice(output, self.size_image.to_le_bytes(), index);
        let (output, index) = splice(output, self.x_pixels_per_meter.to_le_bytes(), index);
        let (output, index) = splice(output, self.y_pixels_per_meter.to_le_bytes(), index);
        let (output, index) = splice(output, self.colours_used.to_le_bytes(), index);
        let (output, _) = splice(output, self.colours_important.to_le_bytes(), index);
        output
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::is_identical;
    use super::{IconDir, IconDirEntry, InfoHeader};
    #[test]
    const fn infallible_icon_dir_to_u8() {
        let output = IconDir::new(1).to_u8();
        assert!(is_identical(&output, &[0, 0,       // reserved
                                        1, 0,       // image type (icon)
                                        1, 0]));    // image count
    }
    #[test]
    const fn infallible_icon_dir_entry_to_u8() {
        let output = IconDirEntry::new(32, 32, 4264, 22).to_u8();
        assert!(is_identical(&output, &[32,             // width
                                        32,             // height
                                        0,              // colour count (no palette)
                                        0,              // reserved
                                        1, 0,           // colour planes
                                        32, 0,          // bits per pixel
                                        0xA8, 0x10, 0, 0, // bytes in resource (4264)
                                        22, 0, 0, 0])); // image data offset
    }
    #[test]
    const fn infallible_info_header_to_u8() {
        let output = InfoHeader::new(32, 64, 4224).to_u8();
        assert!(is_identical(&output, &[40, 0, 0, 0,      // header size
                                        32, 0, 0, 0,      // width
                                        64, 0, 0, 0,      // height (doubled for the AND mask)
                                        1, 0,             // colour planes
                                        32, 0,            // bits per pixel
                                        0, 0, 0, 0,       // compression (none)
                                        0x80, 0x10, 0, 0, // image data size (4224)
                                        0, 0, 0, 0,       // x pixels per meter
                                        0, 0, 0, 0,       // y pixels per meter
                                        0, 0, 0, 0,       // colours used
                                        0, 0, 0, 0]));    // important colours
    }
}
