use super::camel::Camel;
use crate::CAMELS;

/// A set of camels packed into a bitmask.
///
/// Used both for the camels still waiting to roll this round and for
/// the betting cards a player has not spent yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Roster(u8);

impl Roster {
    pub const fn full() -> Self {
        Self((1 << CAMELS) - 1)
    }
    pub const fn empty() -> Self {
        Self(0)
    }
    pub fn contains(&self, camel: Camel) -> bool {
        self.0 & Self::bit(camel) != 0
    }
    pub fn insert(&mut self, camel: Camel) {
        self.0 |= Self::bit(camel);
    }
    pub fn remove(&mut self, camel: Camel) {
        self.0 &= !Self::bit(camel);
    }
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// members in index order
    pub fn iter(&self) -> impl Iterator<Item = Camel> + '_ {
        Camel::all().into_iter().filter(|c| self.contains(*c))
    }
    fn bit(camel: Camel) -> u8 {
        1 << camel.index()
    }
}

impl FromIterator<Camel> for Roster {
    fn from_iter<I: IntoIterator<Item = Camel>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |mut roster, camel| {
            roster.insert(camel);
            roster
        })
    }
}

impl std::fmt::Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for camel in self.iter() {
            write!(f, "{}", camel.initial())?;
        }
        Ok(())
    }
}
