use super::action::Move;
use crate::bets::Side;
use crate::board::Board;
use crate::camels::Camel;
use crate::camels::Die;
use crate::track::Effect;
use crate::FINISH;
use crate::HAZARD_MIN;
use rand::Rng;
use rand::seq::IndexedRandom;

/// The legal moves open to whoever is to act on a board.
///
/// Every generated move has already passed [`Move::check`]; the board is
/// still free to reject it later if it goes stale.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    board: &'a Board,
}

impl<'a> From<&'a Board> for Catalog<'a> {
    fn from(board: &'a Board) -> Self {
        Self { board }
    }
}

impl Catalog<'_> {
    /// rolls, hazards, round bets, game bets, in that order
    pub fn moves(&self) -> Vec<Move> {
        let mut moves = self.rolls();
        moves.extend(self.hazards());
        moves.extend(self.round_bets());
        moves.extend(self.game_bets());
        moves
    }
    /// every (camel, face) still to be rolled this round
    pub fn rolls(&self) -> Vec<Move> {
        let player = self.board.current();
        self.board
            .pending()
            .iter()
            .flat_map(|camel| Die::faces().map(move |die| Move::Roll { player, camel, die }))
            .filter(|m| m.available(self.board))
            .collect()
    }
    pub fn hazards(&self) -> Vec<Move> {
        let player = self.board.current();
        (HAZARD_MIN..=FINISH)
            .flat_map(|field| {
                Effect::all().map(|effect| Move::Hazard {
                    player,
                    field,
                    effect,
                })
            })
            .filter(|m| m.available(self.board))
            .collect()
    }
    pub fn round_bets(&self) -> Vec<Move> {
        let player = self.board.current();
        Camel::all()
            .into_iter()
            .map(|camel| Move::RoundBet { player, camel })
            .filter(|m| m.available(self.board))
            .collect()
    }
    pub fn game_bets(&self) -> Vec<Move> {
        let player = self.board.current();
        Camel::all()
            .into_iter()
            .flat_map(|camel| {
                Side::all().map(|side| Move::GameBet {
                    player,
                    camel,
                    side,
                })
            })
            .filter(|m| m.available(self.board))
            .collect()
    }
    /// a uniformly random roll, or nothing if the round is over
    pub fn shake<R: Rng>(&self, rng: &mut R) -> Option<Move> {
        self.rolls().choose(rng).copied()
    }
    /// what a player really chooses between: players don't pick the
    /// camel or the face, so all rolls collapse into one random roll.
    pub fn options<R: Rng>(&self, rng: &mut R) -> Vec<Move> {
        let mut options = self.shake(rng).into_iter().collect::<Vec<_>>();
        options.extend(self.hazards());
        options.extend(self.round_bets());
        options.extend(self.game_bets());
        options
    }
    /// read a label for whoever is to act. a bare `r` rolls whichever
    /// pending camel and face chance picks.
    pub fn resolve<R: Rng>(&self, label: &str, rng: &mut R) -> anyhow::Result<Move> {
        match label.trim() {
            "r" => self
                .shake(rng)
                .ok_or_else(|| anyhow::anyhow!("nothing left to roll")),
            label => Move::parse(self.board.current(), label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camels::Roster;
    use crate::CAMELS;
    use crate::FACES;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fresh_board_offers_everything() {
        let board = Board::new(2);
        let catalog = Catalog::from(&board);
        assert_eq!(catalog.rolls().len(), CAMELS * FACES);
        assert_eq!(catalog.hazards().len(), (FINISH - HAZARD_MIN + 1) * 2);
        assert_eq!(catalog.round_bets().len(), CAMELS);
        assert_eq!(catalog.game_bets().len(), CAMELS * 2);
        assert!(catalog.moves().iter().all(|m| m.player() == 0));
    }

    #[test]
    fn spent_stock_disappears() {
        let board = Board::new(1);
        let board = Move::GameBet {
            player: 0,
            camel: Camel::Green,
            side: Side::Winner,
        }
        .apply(&board)
        .unwrap();
        let board = Move::Hazard {
            player: 0,
            field: 9,
            effect: Effect::Oasis,
        }
        .apply(&board)
        .unwrap();
        let catalog = Catalog::from(&board);
        assert_eq!(catalog.game_bets().len(), (CAMELS - 1) * 2);
        // own hazard may be moved anywhere, including next to itself
        assert_eq!(catalog.hazards().len(), (FINISH - HAZARD_MIN + 1) * 2);
    }

    #[test]
    fn nothing_after_the_round() {
        let board = Board::new(2).with_pending(Roster::empty());
        let catalog = Catalog::from(&board);
        assert!(catalog.moves().is_empty());
        assert_eq!(catalog.shake(&mut SmallRng::seed_from_u64(0)), None);
    }

    #[test]
    fn options_hold_a_single_roll() {
        let board = Board::new(2);
        let ref mut rng = SmallRng::seed_from_u64(3);
        let options = Catalog::from(&board).options(rng);
        assert_eq!(options.iter().filter(|m| m.is_roll()).count(), 1);
        assert!(options[0].is_roll());
        assert_eq!(options.len(), 1 + Catalog::from(&board).moves().len() - CAMELS * FACES);
    }

    #[test]
    fn shaking_picks_a_pending_camel() {
        let board = Board::new(2).with_pending([Camel::Blue].into_iter().collect());
        let ref mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..16 {
            match Catalog::from(&board).shake(rng) {
                Some(Move::Roll { camel, .. }) => assert_eq!(camel, Camel::Blue),
                other => panic!("expected a roll, got {:?}", other),
            }
        }
    }

    #[test]
    fn resolving_labels() {
        let board = Board::new(2);
        let ref mut rng = SmallRng::seed_from_u64(11);
        let catalog = Catalog::from(&board);
        assert!(catalog.resolve("r", rng).unwrap().is_roll());
        assert_eq!(
            catalog.resolve("eo", rng).unwrap(),
            Move::RoundBet {
                player: 0,
                camel: Camel::Orange
            }
        );
        let over = Board::new(2).with_pending(Roster::empty());
        assert!(Catalog::from(&over).resolve("r", rng).is_err());
    }
}
