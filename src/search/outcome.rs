use crate::camels::Camel;
use crate::CAMELS;

/// How a searched line of play ended.
///
/// Either a full finishing order, leader first, or a sampled game that ran
/// into its round ceiling before any camel crossed the finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Order([Camel; CAMELS]),
    Truncated,
}

impl Outcome {
    pub fn order(&self) -> Option<&[Camel; CAMELS]> {
        match self {
            Self::Order(order) => Some(order),
            Self::Truncated => None,
        }
    }
}

impl From<[Camel; CAMELS]> for Outcome {
    fn from(order: [Camel; CAMELS]) -> Self {
        Self::Order(order)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Order(order) => order.iter().try_for_each(|c| write!(f, "{}", c.initial())),
            Self::Truncated => write!(f, "-----"),
        }
    }
}
