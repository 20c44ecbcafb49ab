pub mod color;
pub mod color_space;
pub mod error;
mod string;
mod swatch;
mod swatch_file;

pub use swatch::*;
pub use swatch_file::*;
