use super::player::Player;
use crate::board::Board;
use crate::evaluation::Valuation;
use crate::moves::Catalog;
use crate::moves::Illegal;
use crate::moves::Move;
use crate::search::Approximator;
use crate::search::Enumerator;
use crate::Utility;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Greedy expected-value player.
///
/// Round bets are priced against the exhaustive round histogram, game bets
/// against a sampled game histogram, which is only drawn when a game bet is
/// on offer. Rolling is worth a flat 1, so the robot only bets when a bet
/// beats that. Ties go to the earlier option.
#[derive(Debug, Clone)]
pub struct Robot {
    rng: SmallRng,
    approximator: Approximator,
}

impl Robot {
    pub fn new(seed: u64, approximator: Approximator) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            approximator,
        }
    }
}

impl Player for Robot {
    fn decide(&mut self, board: &Board) -> Result<Move, Illegal> {
        let options = Catalog::from(board).options(&mut self.rng);
        let round = Enumerator::from(board).histogram()?;
        let game = match options.iter().any(|m| matches!(m, Move::GameBet { .. })) {
            true => Some(self.approximator.histogram(board, &mut self.rng)?),
            false => None,
        };
        let mut best: Option<(Move, Utility)> = None;
        for option in options {
            let histogram = match (option, game.as_ref()) {
                (Move::GameBet { .. }, Some(game)) => game,
                _ => &round,
            };
            let value = Valuation::new(board, histogram).value(&option)?;
            if best.is_none_or(|(_, top)| value > top) {
                best = Some((option, value));
            }
        }
        let (choice, value) = best.ok_or(Illegal::RoundOver)?;
        if board.voice().is_loud() {
            log::debug!("P{} picks {} worth {:.2}", board.current(), choice.label(), value);
        }
        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camels::Camel;
    use crate::camels::Roster;
    use crate::track::Spot;
    use crate::track::Track;
    use crate::CAMELS;

    #[test]
    fn bets_on_a_sure_thing() {
        // white is far ahead with a single camel left to roll,
        // so backing white beats rolling
        let mut spots = [Spot::default(); CAMELS];
        for (i, spot) in spots.iter_mut().enumerate() {
            *spot = Spot::new(1 + i, 0);
        }
        spots[Camel::White.index()] = Spot::new(12, 0);
        let track = Track::try_from(spots).unwrap();
        let board = Board::new(2)
            .with_track(track)
            .with_pending([Camel::Yellow].into_iter().collect::<Roster>());
        let mut robot = Robot::new(0, Approximator::new(16, 4));
        let choice = robot.decide(&board).unwrap();
        assert!(matches!(
            choice,
            Move::RoundBet {
                camel: Camel::White,
                ..
            } | Move::GameBet {
                camel: Camel::White,
                side: crate::bets::Side::Winner,
                ..
            }
        ));
    }

    #[test]
    fn rolls_when_nothing_pays() {
        // every round ladder is gone and every card is spent
        let mut board = Board::new(1);
        for camel in Camel::all() {
            for _ in 0..3 {
                board = Move::RoundBet { player: 0, camel }.apply(&board).unwrap();
            }
            board = Move::GameBet {
                player: 0,
                camel,
                side: crate::bets::Side::Winner,
            }
            .apply(&board)
            .unwrap();
        }
        let mut robot = Robot::new(1, Approximator::new(16, 4));
        let choice = robot.decide(&board).unwrap();
        assert!(choice.is_roll());
    }
}
