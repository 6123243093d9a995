use crate::bets::Ladder;
use crate::bets::Side;
use crate::board::Board;
use crate::camels::Camel;
use crate::moves::Illegal;
use crate::moves::Move;
use crate::search::Histogram;
use crate::Coins;
use crate::Utility;
use crate::FLOOR;
use crate::PENALTY;

/// Expected monetary value of moves against an outcome distribution.
///
/// Pair a round histogram with round bets and a game histogram with game
/// bets. Truncated samples are left out of every total.
#[derive(Debug, Clone, Copy)]
pub struct Valuation<'a> {
    board: &'a Board,
    histogram: &'a Histogram,
}

impl<'a> Valuation<'a> {
    pub fn new(board: &'a Board, histogram: &'a Histogram) -> Self {
        Self { board, histogram }
    }

    /// - rolls are worth a flat 1
    /// - hazards are worth 0, left to outside heuristics
    /// - round bets pay the ladder top for first, 1 for second, -1 otherwise
    /// - game bets assume the next open rung of their side's queue
    pub fn value(&self, m: &Move) -> Result<Utility, Illegal> {
        m.check(self.board)?;
        match *m {
            Move::Roll { .. } => Ok(1.),
            Move::Hazard { .. } => Ok(0.),
            Move::RoundBet { camel, .. } => {
                let value = self
                    .board
                    .ledger()
                    .ladder(camel)
                    .peek()
                    .ok_or(Illegal::LadderEmpty(camel))?;
                Ok(self.round_bet(camel, value))
            }
            Move::GameBet { camel, side, .. } => {
                let slot = self.board.ledger().queue(side).len();
                Ok(self.game_bet(camel, side, Ladder::game().nth(slot)))
            }
        }
    }
    /// legal moves paired with their values, best first.
    /// ties keep their given order.
    pub fn rank(&self, moves: &[Move]) -> Result<Vec<(Move, Utility)>, Illegal> {
        let mut ranked = moves
            .iter()
            .map(|m| self.value(m).map(|v| (*m, v)))
            .collect::<Result<Vec<_>, _>>()?;
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(ranked)
    }

    fn round_bet(&self, camel: Camel, value: Coins) -> Utility {
        let total = self.histogram.finished();
        if total == 0 {
            return 0.;
        }
        let first = self.histogram.placing(camel, 0);
        let second = self.histogram.placing(camel, 1);
        let rest = total - first - second;
        let gain = value as Utility * first as Utility + FLOOR as Utility * second as Utility;
        let loss = PENALTY as Utility * rest as Utility;
        (gain - loss) / total as Utility
    }
    /// conservative: prices the bet at the rung it would get if every
    /// earlier bet on this side turns out right
    fn game_bet(&self, camel: Camel, side: Side, value: Coins) -> Utility {
        let total = self.histogram.finished();
        if total == 0 {
            return 0.;
        }
        let hits = self.histogram.tally(|order| side.pick(order) == camel);
        let misses = total - hits;
        let gain = value as Utility * hits as Utility;
        let loss = PENALTY as Utility * misses as Utility;
        (gain - loss) / total as Utility
    }
}
