pub mod camel;
pub use camel::*;

pub mod die;
pub use die::*;

pub mod roster;
pub use roster::*;
