pub mod hazard;
pub use hazard::*;

pub mod spot;
pub use spot::*;

pub mod track;
pub use track::*;
