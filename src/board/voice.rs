/// Whether a board reports hazard triggers and settlements to the log.
///
/// Searches branch from a quiet copy of the caller's board, so silence is
/// scoped to the copy and never leaks back, whichever way the search exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Voice {
    #[default]
    Loud,
    Quiet,
}

impl Voice {
    pub fn is_loud(&self) -> bool {
        matches!(self, Self::Loud)
    }
}
