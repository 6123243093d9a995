use crate::Field;

/// Where a camel stands: a field, and a height within that field's stack.
///
/// Heights in one field are always a contiguous 0-based sequence. Higher
/// means later arrival and a better placing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Spot {
    pub field: Field,
    pub height: usize,
}

impl Spot {
    pub fn new(field: Field, height: usize) -> Self {
        Self { field, height }
    }
}

impl Ord for Spot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.field
            .cmp(&other.field)
            .then(self.height.cmp(&other.height))
    }
}
impl PartialOrd for Spot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.field, self.height)
    }
}
