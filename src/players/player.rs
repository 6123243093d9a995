use crate::board::Board;
use crate::moves::Illegal;
use crate::moves::Move;

/// A decision policy seated at the table.
///
/// Called only when it is this player's turn on a board whose round is
/// still running. The returned move is validated again when applied.
pub trait Player {
    fn decide(&mut self, board: &Board) -> Result<Move, Illegal>;
}
