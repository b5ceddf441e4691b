//! Clock adapters

mod system;

pub use system::SystemClock;
