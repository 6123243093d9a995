pub mod action;
pub use action::*;

pub mod catalog;
pub use catalog::*;

pub mod illegal;
pub use illegal::*;
