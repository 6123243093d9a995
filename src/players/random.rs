use super::player::Player;
use crate::board::Board;
use crate::moves::Catalog;
use crate::moves::Illegal;
use crate::moves::Move;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Picks uniformly among the available options.
#[derive(Debug, Clone)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Player for Random {
    fn decide(&mut self, board: &Board) -> Result<Move, Illegal> {
        let options = Catalog::from(board).options(&mut self.rng);
        options
            .choose(&mut self.rng)
            .copied()
            .ok_or(Illegal::RoundOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_legal() {
        let mut player = Random::new(5);
        let mut board = Board::new(1);
        while !board.is_round_over() {
            let choice = player.decide(&board).unwrap();
            assert!(choice.available(&board));
            board = choice.apply(&board).unwrap();
        }
    }
}
