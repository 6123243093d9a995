use crate::camels::Camel;
use crate::Field;
use crate::Position;

/// Why a move cannot be built or applied.
///
/// Every variant but [`Illegal::DieFace`] is an availability failure:
/// the move is well formed but the board does not allow it right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Illegal {
    #[error("it is not player {0}'s turn")]
    WrongTurn(Position),
    #[error("{0} has already rolled this round")]
    NotToRoll(Camel),
    #[error("no hazard may go on field {0}")]
    HazardSpot(Field),
    #[error("no round bets left on {0}")]
    LadderEmpty(Camel),
    #[error("player {0} holds no {1} card")]
    NoCard(Position, Camel),
    #[error("the round is over and awaits settlement")]
    RoundOver,
    #[error("the race is over")]
    GameOver,
    #[error("die face {0} is outside 1..=3")]
    DieFace(u8),
}
