mod atis;
mod coordinate;
mod enums;
mod warning;

pub use atis::*;
pub use coordinate::*;
pub use enums::*;
pub use warning::*;
