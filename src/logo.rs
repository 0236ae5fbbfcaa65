use crate::{
    canvas::Canvas,
    consts::{BACKGROUND, BORDER, GLYPH},
};

// Rectangles as (x0, y0, x1, y1) with x1/y1 exclusive, painted in order.
const P_RECTS: [(i32, i32, i32, i32); 4] = [
    (4, 6, 7, 25),   // vertical stem
    (7, 6, 13, 9),   // top bar
    (11, 9, 14, 14), // right bump
    (7, 14, 13, 17), // middle bar
];
const S_RECTS: [(i32, i32, i32, i32); 5] = [
    (18, 6, 27, 9),   // top bar
    (18, 9, 21, 14),  // left upper
    (18, 14, 27, 17), // middle bar
    (24, 17, 27, 22), // right lower
    (18, 22, 27, 25), // bottom bar
];

/// Rasterizes the logo: white "PS" block letters on a blue background inside a darker blue border.
///
/// The recipe is fixed, so the returned canvas is identical on every call.
#[must_use]
pub const fn render() -> Canvas {
    let mut canvas = Canvas::filled(BACKGROUND).outline(BORDER);
    let mut index = 0;
    while index != P_RECTS.len() {
        let (x0, y0, x1, y1) = P_RECTS[index];
        canvas = canvas.fill_rect(x0, y0, x1, y1, GLYPH);
        index += 1;
    }
    index = 0;
    while index != S_RECTS.len() {
        let (x0, y0, x1, y1) = S_RECTS[index];
        canvas = canvas.fill_rect(x0, y0, x1, y1, GLYPH);
        index += 1;
    }
    canvas
}
