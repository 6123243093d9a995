use crate::camels::Camel;
use crate::Coins;
use crate::Position;
use crate::CAMELS;
use crate::FLOOR;
use crate::PENALTY;

/// A bet on which camel leads when the round ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundBet {
    camel: Camel,
    value: Coins,
}

impl RoundBet {
    pub fn new(camel: Camel, value: Coins) -> Self {
        Self { camel, value }
    }
    pub fn camel(&self) -> Camel {
        self.camel
    }
    pub fn value(&self) -> Coins {
        self.value
    }
    /// full value for first, the floor for second, a penalty otherwise
    pub fn cash(&self, order: &[Camel; CAMELS]) -> Coins {
        if order[0] == self.camel {
            self.value
        } else if order[1] == self.camel {
            FLOOR
        } else {
            -PENALTY
        }
    }
}

impl std::fmt::Display for RoundBet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "round bet on {} for {}", self.camel, self.value)
    }
}

/// Which end of the race a game bet predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Winner,
    Loser,
}

impl Side {
    pub fn all() -> [Self; 2] {
        [Self::Winner, Self::Loser]
    }
    /// the camel this side is settled against
    pub fn pick(&self, order: &[Camel; CAMELS]) -> Camel {
        match self {
            Self::Winner => order[0],
            Self::Loser => order[CAMELS - 1],
        }
    }
    pub fn symbol(&self) -> char {
        match self {
            Self::Winner => 'w',
            Self::Loser => 'l',
        }
    }
}

impl TryFrom<char> for Side {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'w' => Ok(Self::Winner),
            'l' => Ok(Self::Loser),
            _ => Err(anyhow::anyhow!("invalid bet side: {}", c)),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winner => write!(f, "winner"),
            Self::Loser => write!(f, "loser"),
        }
    }
}

/// A bet on the overall race winner or loser, queued in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameBet {
    player: Position,
    camel: Camel,
}

impl GameBet {
    pub fn new(player: Position, camel: Camel) -> Self {
        Self { player, camel }
    }
    pub fn player(&self) -> Position {
        self.player
    }
    pub fn camel(&self) -> Camel {
        self.camel
    }
}

impl std::fmt::Display for GameBet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{} on {}", self.player, self.camel)
    }
}
