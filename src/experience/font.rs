//! 5×5 block glyphs for the heading letters.

pub const GLYPH_W: u16 = 5;
pub const GLYPH_H: u16 = 5;

const E: [&str; 5] = ["#####", "#    ", "#### ", "#    ", "#####"];
const X: [&str; 5] = ["#   #", " # # ", "  #  ", " # # ", "#   #"];
const P: [&str; 5] = ["#### ", "#   #", "#### ", "#    ", "#    "];
const R: [&str; 5] = ["#### ", "#   #", "#### ", "#  # ", "#   #"];
const I: [&str; 5] = ["#####", "  #  ", "  #  ", "  #  ", "#####"];
const N: [&str; 5] = ["#   #", "##  #", "# # #", "#  ##", "#   #"];
const C: [&str; 5] = [" ####", "#    ", "#    ", "#    ", " ####"];

/// Bitmap rows for `ch`, or `None` for letters the heading never uses.
pub fn glyph(ch: char) -> Option<&'static [&'static str; 5]> {
    match ch.to_ascii_uppercase() {
        'E' => Some(&E),
        'X' => Some(&X),
        'P' => Some(&P),
        'R' => Some(&R),
        'I' => Some(&I),
        'N' => Some(&N),
        'C' => Some(&C),
        _ => None,
    }
}

/// Filled cells of `ch` as `(dx, dy)` offsets from the glyph's top-left.
pub fn filled_cells(ch: char) -> impl Iterator<Item = (u16, u16)> {
    glyph(ch).into_iter().flat_map(|rows| {
        rows.iter().enumerate().flat_map(|(dy, row)| {
            row.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'#')
                .map(move |(dx, _)| (dx as u16, dy as u16))
        })
    })
}
