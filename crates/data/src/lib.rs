//! Level definitions and session saves on disk.

pub mod load;
pub mod persistence;

pub use load::*;
pub use persistence::*;
