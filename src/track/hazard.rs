use crate::Coins;
use crate::Position;

/// Which way a hazard pushes the camels that land on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// one field forward, party lands on top
    Oasis,
    /// one field back, party is flipped and slides underneath
    Mirage,
}

impl Effect {
    pub fn offset(&self) -> isize {
        match self {
            Self::Oasis => 1,
            Self::Mirage => -1,
        }
    }
    pub fn all() -> [Self; 2] {
        [Self::Oasis, Self::Mirage]
    }
    pub fn symbol(&self) -> char {
        match self {
            Self::Oasis => 'p',
            Self::Mirage => 'm',
        }
    }
}

impl TryFrom<char> for Effect {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'p' | '+' => Ok(Self::Oasis),
            'm' | '-' => Ok(Self::Mirage),
            _ => Err(anyhow::anyhow!("invalid hazard effect: {}", c)),
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oasis => write!(f, "+1"),
            Self::Mirage => write!(f, "-1"),
        }
    }
}

/// A player-owned tile on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hazard {
    owner: Position,
    effect: Effect,
}

impl Hazard {
    pub fn new(owner: Position, effect: Effect) -> Self {
        Self { owner, effect }
    }
    pub fn owner(&self) -> Position {
        self.owner
    }
    pub fn effect(&self) -> Effect {
        self.effect
    }
}

/// What happened when a travelling party stepped on a hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    pub owner: Position,
    pub camels: usize,
}

impl Trip {
    /// reward owed to the hazard's owner
    pub fn toll(&self) -> Coins {
        self.camels as Coins * crate::TOLL
    }
}

impl std::fmt::Display for Hazard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}{}", self.owner, self.effect)
    }
}
