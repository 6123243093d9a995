pub mod player;
pub use player::*;

pub mod random;
pub use random::*;

pub mod robot;
pub use robot::*;
