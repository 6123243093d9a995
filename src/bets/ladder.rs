use crate::Coins;
use crate::FLOOR;
use crate::GAME_LADDER;
use crate::ROUND_LADDER;

/// A descending run of payouts, consumed from the top.
///
/// Round bets draw from one ladder per camel and cannot be placed once it
/// runs dry. Game bets walk a fresh ladder at settlement and fall back to
/// [`FLOOR`] past its last rung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ladder {
    rungs: &'static [Coins],
    taken: usize,
}

impl Ladder {
    pub fn round() -> Self {
        Self {
            rungs: &ROUND_LADDER,
            taken: 0,
        }
    }
    pub fn game() -> Self {
        Self {
            rungs: &GAME_LADDER,
            taken: 0,
        }
    }
    /// best payout still on offer
    pub fn peek(&self) -> Option<Coins> {
        self.rungs.get(self.taken).copied()
    }
    /// consume the best payout still on offer
    pub fn take(&mut self) -> Option<Coins> {
        let top = self.peek()?;
        self.taken += 1;
        Some(top)
    }
    /// payout of the i-th rung from the top, floored once exhausted
    pub fn nth(&self, i: usize) -> Coins {
        self.rungs.get(i).copied().unwrap_or(FLOOR)
    }
    /// consume the top rung, or pay the floor if none are left
    pub fn step(&mut self) -> Coins {
        self.take().unwrap_or(FLOOR)
    }
    pub fn is_empty(&self) -> bool {
        self.peek().is_none()
    }
    pub fn remaining(&self) -> &'static [Coins] {
        &self.rungs[self.taken.min(self.rungs.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_ladder_runs_dry() {
        let mut ladder = Ladder::round();
        assert_eq!(ladder.take(), Some(5));
        assert_eq!(ladder.take(), Some(3));
        assert_eq!(ladder.remaining(), &[2]);
        assert_eq!(ladder.take(), Some(2));
        assert_eq!(ladder.take(), None);
        assert!(ladder.is_empty());
    }

    #[test]
    fn game_ladder_floors() {
        let mut ladder = Ladder::game();
        let paid = (0..6).map(|_| ladder.step()).collect::<Vec<_>>();
        assert_eq!(paid, vec![8, 5, 3, 2, 1, 1]);
        assert_eq!(Ladder::game().nth(1), 5);
        assert_eq!(Ladder::game().nth(9), FLOOR);
    }
}
