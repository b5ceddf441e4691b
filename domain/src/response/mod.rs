//! Response shaping into the uniform entry vocabulary.

pub mod entry;
pub mod number;
pub mod shaper;

pub use entry::{ResponseEntry, ResponseValue};
pub use number::format_significant;
pub use shaper::{ASSIGNMENT_URL_PREFIX, PLACEHOLDER_IMAGE, shape};
