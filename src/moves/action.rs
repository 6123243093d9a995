use super::illegal::Illegal;
use crate::bets::Side;
use crate::board::Board;
use crate::camels::Camel;
use crate::camels::Die;
use crate::track::Effect;
use crate::track::Hazard;
use crate::Field;
use crate::Position;

/// Everything a player may do on their turn.
///
/// A move names the player making it and is checked against the board
/// every time it is applied, so a move built for an older board is
/// rejected rather than misapplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Roll {
        player: Position,
        camel: Camel,
        die: Die,
    },
    Hazard {
        player: Position,
        field: Field,
        effect: Effect,
    },
    RoundBet {
        player: Position,
        camel: Camel,
    },
    GameBet {
        player: Position,
        camel: Camel,
        side: Side,
    },
}

impl Move {
    /// a roll with an explicit face, rejected unless it is 1..=3
    pub fn roll(player: Position, camel: Camel, face: u8) -> Result<Self, Illegal> {
        Ok(Self::Roll {
            player,
            camel,
            die: Die::try_from(face)?,
        })
    }
    pub fn player(&self) -> Position {
        match self {
            Self::Roll { player, .. }
            | Self::Hazard { player, .. }
            | Self::RoundBet { player, .. }
            | Self::GameBet { player, .. } => *player,
        }
    }
    pub fn is_roll(&self) -> bool {
        matches!(self, Self::Roll { .. })
    }

    /// whether the move could be applied to this board right now
    pub fn available(&self, board: &Board) -> bool {
        self.check(board).is_ok()
    }
    pub fn check(&self, board: &Board) -> Result<(), Illegal> {
        if board.is_game_over() {
            return Err(Illegal::GameOver);
        }
        if board.is_round_over() {
            return Err(Illegal::RoundOver);
        }
        if self.player() != board.current() {
            return Err(Illegal::WrongTurn(self.player()));
        }
        match *self {
            Self::Roll { camel, .. } => match board.pending().contains(camel) {
                true => Ok(()),
                false => Err(Illegal::NotToRoll(camel)),
            },
            Self::Hazard { player, field, .. } => match board.track().is_placeable(player, field) {
                true => Ok(()),
                false => Err(Illegal::HazardSpot(field)),
            },
            Self::RoundBet { camel, .. } => match board.ledger().ladder(camel).is_empty() {
                true => Err(Illegal::LadderEmpty(camel)),
                false => Ok(()),
            },
            Self::GameBet { player, camel, .. } => match board.ledger().cards(player).contains(camel) {
                true => Ok(()),
                false => Err(Illegal::NoCard(player, camel)),
            },
        }
    }
    /// the board after this move, with the turn passed on.
    /// the given board is left as it was.
    pub fn apply(&self, board: &Board) -> Result<Board, Illegal> {
        self.check(board)?;
        let mut next = board.clone();
        match *self {
            Self::Roll { camel, die, .. } => next.roll(camel, die),
            Self::Hazard {
                player,
                field,
                effect,
            } => next.place(field, Hazard::new(player, effect)),
            Self::RoundBet { player, camel } => {
                next.back(player, camel)?;
            }
            Self::GameBet {
                player,
                camel,
                side,
            } => {
                next.stake(player, camel, side)?;
            }
        }
        if next.voice().is_loud() {
            log::debug!("{}", self);
        }
        next.pass();
        Ok(next)
    }

    /// compact notation, e.g. `ry2`, `sm7`, `eb`, `owl`
    pub fn label(&self) -> String {
        match self {
            Self::Roll { camel, die, .. } => format!("r{}{}", camel.initial(), die),
            Self::Hazard { field, effect, .. } => format!("s{}{}", effect.symbol(), field),
            Self::RoundBet { camel, .. } => format!("e{}", camel.initial()),
            Self::GameBet { camel, side, .. } => format!("o{}{}", camel.initial(), side.symbol()),
        }
    }
    /// read a move in compact notation on behalf of a player
    pub fn parse(player: Position, label: &str) -> anyhow::Result<Self> {
        let label = label.trim();
        let mut chars = label.chars();
        let kind = chars.next();
        let mut next = || {
            chars
                .next()
                .ok_or_else(|| anyhow::anyhow!("truncated move: {}", label))
        };
        let parsed = match kind {
            Some('r') => {
                let camel = Camel::try_from(next()?)?;
                let face = next()?
                    .to_digit(10)
                    .ok_or_else(|| anyhow::anyhow!("invalid die face in {}", label))?;
                Self::roll(player, camel, face as u8)?
            }
            Some('s') => {
                let effect = Effect::try_from(next()?)?;
                let field = label[2..].parse::<Field>()?;
                return Ok(Self::Hazard {
                    player,
                    field,
                    effect,
                });
            }
            Some('e') => Self::RoundBet {
                player,
                camel: Camel::try_from(next()?)?,
            },
            Some('o') => Self::GameBet {
                player,
                camel: Camel::try_from(next()?)?,
                side: Side::try_from(next()?)?,
            },
            _ => return Err(anyhow::anyhow!("invalid move: {}", label)),
        };
        match chars.next() {
            None => Ok(parsed),
            Some(_) => Err(anyhow::anyhow!("trailing input in move: {}", label)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Roll { player, camel, die } => write!(f, "P{} rolled {} for {}", player, die, camel),
            Self::Hazard {
                player,
                field,
                effect,
            } => write!(f, "P{} put a {} hazard on field {}", player, effect, field),
            Self::RoundBet { player, camel } => write!(f, "P{} bet on {} to lead the round", player, camel),
            Self::GameBet {
                player,
                camel,
                side,
            } => write!(f, "P{} bet on {} as overall {}", player, camel, side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camels::Roster;

    #[test]
    fn bad_face_fails_at_construction() {
        assert_eq!(Move::roll(0, Camel::Blue, 0), Err(Illegal::DieFace(0)));
        assert_eq!(Move::roll(0, Camel::Blue, 4), Err(Illegal::DieFace(4)));
        assert!(Move::roll(0, Camel::Blue, 3).is_ok());
    }

    #[test]
    fn out_of_turn_is_rejected() {
        let board = Board::new(2);
        let bet = Move::RoundBet {
            player: 1,
            camel: Camel::Blue,
        };
        assert_eq!(bet.apply(&board), Err(Illegal::WrongTurn(1)));
    }

    #[test]
    fn apply_leaves_original_untouched() {
        let board = Board::new(2);
        let before = board.clone();
        let roll = Move::roll(0, Camel::Green, 3).unwrap();
        let after = roll.apply(&board).unwrap();
        assert_eq!(board, before);
        assert_eq!(after.current(), 1);
        assert_eq!(after.track().spot(Camel::Green).field, 3);
    }

    #[test]
    fn stale_move_is_revalidated() {
        let board = Board::new(2);
        let roll = Move::roll(0, Camel::Green, 1).unwrap();
        let board = roll.apply(&board).unwrap();
        let board = Move::RoundBet {
            player: 1,
            camel: Camel::Blue,
        }
        .apply(&board)
        .unwrap();
        assert_eq!(roll.apply(&board), Err(Illegal::NotToRoll(Camel::Green)));
    }

    #[test]
    fn roll_conserves_camels_and_spends_one_roll() {
        let board = Board::new(1);
        let roll = Move::roll(0, Camel::Orange, 2).unwrap();
        let after = roll.apply(&board).unwrap();
        let mut before = board.order().to_vec();
        let mut now = after.order().to_vec();
        before.sort();
        now.sort();
        assert_eq!(before, now);
        assert_eq!(after.pending().len(), board.pending().len() - 1);
    }

    #[test]
    fn hazard_rules() {
        let board = Board::new(2);
        let hazard = |player, field| Move::Hazard {
            player,
            field,
            effect: Effect::Mirage,
        };
        assert_eq!(hazard(0, 1).apply(&board), Err(Illegal::HazardSpot(1)));
        let board = hazard(0, 6).apply(&board).unwrap();
        assert_eq!(hazard(1, 7).apply(&board), Err(Illegal::HazardSpot(7)));
        let board = hazard(1, 8).apply(&board).unwrap();
        let board = hazard(0, 12).apply(&board).unwrap();
        assert_eq!(board.track().hazard_of(0), Some(12));
        assert_eq!(board.track().hazard(6), None);
    }

    #[test]
    fn bets_need_stock() {
        let mut board = Board::new(1);
        for _ in 0..3 {
            board = Move::RoundBet {
                player: 0,
                camel: Camel::Blue,
            }
            .apply(&board)
            .unwrap();
        }
        let fourth = Move::RoundBet {
            player: 0,
            camel: Camel::Blue,
        };
        assert_eq!(fourth.apply(&board), Err(Illegal::LadderEmpty(Camel::Blue)));
        let game = Move::GameBet {
            player: 0,
            camel: Camel::Blue,
            side: Side::Loser,
        };
        let board = game.apply(&board).unwrap();
        assert_eq!(game.apply(&board), Err(Illegal::NoCard(0, Camel::Blue)));
    }

    #[test]
    fn nothing_goes_once_round_is_over() {
        let board = Board::new(1).with_pending(Roster::empty());
        let bet = Move::RoundBet {
            player: 0,
            camel: Camel::Blue,
        };
        assert_eq!(bet.apply(&board), Err(Illegal::RoundOver));
    }

    #[test]
    fn mirage_sends_party_back_and_pays_owner() {
        use crate::track::Spot;
        use crate::track::Track;
        let spots = [
            Spot::new(3, 0), // yellow
            Spot::new(0, 0), // blue
            Spot::new(4, 0), // green
            Spot::new(0, 1), // orange
            Spot::new(0, 2), // white
        ];
        let board = Board::new(2).with_track(Track::try_from(spots).unwrap());
        let board = Move::Hazard {
            player: 0,
            field: 5,
            effect: Effect::Mirage,
        }
        .apply(&board)
        .unwrap();
        let board = Move::roll(1, Camel::Yellow, 2).unwrap().apply(&board).unwrap();
        assert_eq!(board.track().spot(Camel::Yellow).field, 4);
        assert_eq!(board.track().stack(4), vec![Camel::Yellow, Camel::Green]);
        assert_eq!(board.standings(), &[1, 0]);
    }

    #[test]
    fn opening_sequence() {
        let board = Board::new(2);
        let board = Move::Hazard {
            player: 0,
            field: 2,
            effect: Effect::Mirage,
        }
        .apply(&board)
        .unwrap();
        let board = Move::roll(1, Camel::Yellow, 2).unwrap().apply(&board).unwrap();
        let board = Move::roll(0, Camel::Blue, 1).unwrap().apply(&board).unwrap();
        let board = Move::roll(1, Camel::Green, 2).unwrap().apply(&board).unwrap();
        assert_eq!(board.standings(), &[2, 0]);
        assert_eq!(
            board.track().stack(1),
            vec![Camel::Green, Camel::Yellow, Camel::Blue]
        );
    }

    #[test]
    fn labels_parse_back() {
        for label in ["ry2", "sm7", "sp16", "eb", "owl", "ogw"] {
            assert_eq!(Move::parse(0, label).unwrap().label(), label);
        }
        assert!(Move::parse(0, "ry4").is_err());
        assert!(Move::parse(0, "ebb").is_err());
        assert!(Move::parse(0, "x").is_err());
        assert!(Move::parse(0, "s").is_err());
    }
}
