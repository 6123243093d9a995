pub mod ladder;
pub use ladder::*;

pub mod ledger;
pub use ledger::*;

pub mod wager;
pub use wager::*;

pub mod settlement;
pub use settlement::*;
