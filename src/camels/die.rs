use crate::moves::Illegal;
use crate::Arbitrary;
use crate::Field;
use crate::FACES;

/// A rolled die face, always within 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Die(u8);

impl Die {
    /// every face, lowest first
    pub fn faces() -> impl Iterator<Item = Self> {
        (1..=FACES as u8).map(Self)
    }
    /// fields travelled
    pub fn steps(&self) -> Field {
        self.0 as Field
    }
}

impl TryFrom<u8> for Die {
    type Error = Illegal;
    fn try_from(face: u8) -> Result<Self, Self::Error> {
        match face as usize {
            1..=FACES => Ok(Self(face)),
            _ => Err(Illegal::DieFace(face)),
        }
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> Self {
        die.0
    }
}

impl Arbitrary for Die {
    fn random() -> Self {
        Self(rand::random_range(1..=FACES as u8))
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
