//! Terminal output helpers.

mod preview;

pub use preview::print_matrix;
