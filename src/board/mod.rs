pub mod board;
pub use board::*;

pub mod voice;
pub use voice::*;
