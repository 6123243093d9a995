use super::histogram::Histogram;
use super::outcome::Outcome;
use crate::board::Board;
use crate::moves::Catalog;
use crate::moves::Illegal;

/// Exhaustive expansion of the rest of the current round.
///
/// Branches over every (pending camel, face) pair until the round ends or
/// the race does, and counts the finishing order of each leaf once. Every
/// pending camel is equally likely to roll next and every face equally
/// likely to show, so the leaf counts are the round's outcome distribution
/// up to normalization. With `k` camels left and no finish mid-round the
/// mass is `k! * 3^k`.
///
/// Traversal uses an explicit stack of boards rather than recursion, and
/// runs on a quiet copy of the root.
#[derive(Debug, Clone, Copy)]
pub struct Enumerator<'a> {
    root: &'a Board,
}

impl<'a> From<&'a Board> for Enumerator<'a> {
    fn from(root: &'a Board) -> Self {
        Self { root }
    }
}

impl Enumerator<'_> {
    pub fn histogram(&self) -> Result<Histogram, Illegal> {
        let mut histogram = Histogram::default();
        let mut stack = vec![self.root.quiet()];
        while let Some(node) = stack.pop() {
            if node.is_round_over() {
                histogram.witness(Outcome::from(node.order()), 1);
                continue;
            }
            for roll in Catalog::from(&node).rolls() {
                stack.push(roll.apply(&node)?);
            }
        }
        if self.root.voice().is_loud() {
            log::trace!(
                "round {} enumerated: {} leaves, {} orders",
                self.root.round(),
                histogram.mass(),
                histogram.n()
            );
        }
        Ok(histogram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camels::Camel;
    use crate::camels::Roster;
    use crate::track::Spot;
    use crate::track::Track;
    use crate::CAMELS;
    use crate::FINISH;

    fn leaves(k: u64) -> u64 {
        (1..=k).product::<u64>() * 3u64.pow(k as u32)
    }

    #[test]
    fn single_camel_left() {
        let board = Board::new(2).with_pending([Camel::Yellow].into_iter().collect());
        let hist = Enumerator::from(&board).histogram().unwrap();
        assert_eq!(hist.mass(), 3);
        // yellow leaves start alone and takes the lead on every face
        assert_eq!(hist.placing(Camel::Yellow, 0), 3);
    }

    #[test]
    fn mass_is_factorial_times_faces() {
        let pending = [Camel::Yellow, Camel::Blue, Camel::Green]
            .into_iter()
            .collect::<Roster>();
        let board = Board::new(2).with_pending(pending);
        let hist = Enumerator::from(&board).histogram().unwrap();
        assert_eq!(hist.mass(), leaves(3));
        assert_eq!(hist.truncated(), 0);
    }

    #[test]
    fn full_round_from_the_start() {
        let board = Board::new(3);
        let hist = Enumerator::from(&board).histogram().unwrap();
        assert_eq!(hist.mass(), leaves(CAMELS as u64));
        let firsts = Camel::all()
            .into_iter()
            .map(|c| hist.placing(c, 0))
            .sum::<u64>();
        assert_eq!(firsts, hist.mass());
    }

    #[test]
    fn finish_cuts_the_round_short() {
        // yellow sits on the last interior field, so any yellow roll ends the race
        let mut spots = [Spot::default(); CAMELS];
        for (i, spot) in spots.iter_mut().enumerate() {
            *spot = Spot::new(FINISH - i, 0);
        }
        let board = Board::new(2).with_track(Track::try_from(spots).unwrap());
        let hist = Enumerator::from(&board).histogram().unwrap();
        assert!(hist.mass() < leaves(CAMELS as u64));
        assert!(hist.mass() > 0);
    }

    #[test]
    fn root_is_left_alone() {
        let board = Board::new(2);
        let before = board.clone();
        Enumerator::from(&board).histogram().unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn already_over_is_one_leaf() {
        let board = Board::new(2).with_pending(Roster::empty());
        let hist = Enumerator::from(&board).histogram().unwrap();
        assert_eq!(hist.mass(), 1);
        assert_eq!(hist.weight(&Outcome::from(board.order())), 1);
    }
}
