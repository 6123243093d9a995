pub mod approximator;
pub use approximator::*;

pub mod enumerator;
pub use enumerator::*;

pub mod histogram;
pub use histogram::*;

pub mod outcome;
pub use outcome::*;
