use crate::Arbitrary;
use crate::CAMELS;

/// One of the racing camels.
///
/// Camels carry no state of their own; where they stand lives in the
/// [`Track`](crate::track::Track). The discriminant doubles as an index
/// into per-camel arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Camel {
    Yellow = 0,
    Blue = 1,
    Green = 2,
    Orange = 3,
    White = 4,
}

impl Camel {
    /// every camel, in the order they are stacked at the start
    /// (yellow at the bottom, white on top).
    pub const fn all() -> [Self; CAMELS] {
        [
            Self::Yellow,
            Self::Blue,
            Self::Green,
            Self::Orange,
            Self::White,
        ]
    }
    pub fn index(&self) -> usize {
        *self as usize
    }
    /// single letter used in move labels
    pub fn initial(&self) -> char {
        match self {
            Self::Yellow => 'y',
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Orange => 'o',
            Self::White => 'w',
        }
    }
}

impl From<usize> for Camel {
    fn from(i: usize) -> Self {
        match i {
            0 => Self::Yellow,
            1 => Self::Blue,
            2 => Self::Green,
            3 => Self::Orange,
            4 => Self::White,
            _ => panic!("no camel at index {}", i),
        }
    }
}

impl TryFrom<char> for Camel {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|camel| camel.initial() == c.to_ascii_lowercase())
            .ok_or_else(|| anyhow::anyhow!("invalid camel initial: {}", c))
    }
}

impl TryFrom<&str> for Camel {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            "orange" => Ok(Self::Orange),
            "white" => Ok(Self::White),
            other if other.chars().count() == 1 => Self::try_from(other.chars().next().unwrap_or(' ')),
            other => Err(anyhow::anyhow!("invalid camel: {}", other)),
        }
    }
}

impl Arbitrary for Camel {
    fn random() -> Self {
        Self::from(rand::random_range(0..CAMELS))
    }
}

impl std::fmt::Display for Camel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yellow => write!(f, "yellow"),
            Self::Blue => write!(f, "blue"),
            Self::Green => write!(f, "green"),
            Self::Orange => write!(f, "orange"),
            Self::White => write!(f, "white"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for camel in Camel::all() {
            assert_eq!(Camel::from(camel.index()), camel);
        }
    }

    #[test]
    fn parse_names_and_initials() {
        assert_eq!(Camel::try_from("Orange").unwrap(), Camel::Orange);
        assert_eq!(Camel::try_from("w").unwrap(), Camel::White);
        assert_eq!(Camel::try_from('B').unwrap(), Camel::Blue);
        assert!(Camel::try_from("red").is_err());
        assert!(Camel::try_from('x').is_err());
    }

    #[test]
    fn random_camels_round_trip_their_initial() {
        for _ in 0..64 {
            let camel = Camel::random();
            assert_eq!(Camel::try_from(camel.initial()).unwrap(), camel);
        }
    }
}
