//! Terminal preview of a raw module matrix.

use qrglyph_core::ModuleMatrix;

/// Print a module matrix to the terminal.
///
/// Uses Unicode half-block characters so each text row covers two
/// module rows, with a quiet zone around the symbol.
pub fn print_matrix(matrix: &ModuleMatrix) {
    let width = matrix.width();
    let quiet = "  ";

    println!("{}{}", quiet, " ".repeat(width + 4));

    for y in (0..width).step_by(2) {
        print!("{quiet}  ");
        for x in 0..width {
            let top = matrix.get(x, y);
            let bottom = y + 1 < width && matrix.get(x, y + 1);

            let ch = match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            };
            print!("{ch}");
        }
        println!("  ");
    }

    println!("{}{}", quiet, " ".repeat(width + 4));
}
