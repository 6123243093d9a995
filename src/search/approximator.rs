use super::histogram::Histogram;
use super::outcome::Outcome;
use crate::board::Board;
use crate::moves::Catalog;
use crate::moves::Illegal;
use crate::APPROXIMATION_TRIALS;
use crate::ROUND_CEILING;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Monte Carlo estimate of how the whole race ends.
///
/// Each trial plays uniformly random rolls from a quiet copy of the board,
/// opening new rounds without cashing in any bets, until a camel crosses
/// the finish or `ceiling` rounds have closed. Betting is never sampled, so
/// this measures the race alone.
///
/// Every trial gets its own seed drawn up front from the caller's RNG, which
/// keeps the tally identical whether trials run in sequence or in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Approximator {
    trials: usize,
    ceiling: usize,
}

impl Default for Approximator {
    fn default() -> Self {
        Self::new(APPROXIMATION_TRIALS, ROUND_CEILING)
    }
}

impl Approximator {
    pub fn new(trials: usize, ceiling: usize) -> Self {
        Self { trials, ceiling }
    }

    pub fn histogram<R: Rng>(&self, board: &Board, rng: &mut R) -> Result<Histogram, Illegal> {
        let root = board.quiet();
        let seeds = (0..self.trials)
            .map(|_| rng.random::<u64>())
            .collect::<Vec<_>>();
        #[cfg(feature = "parallel")]
        let outcomes = {
            use rayon::iter::IntoParallelIterator;
            use rayon::iter::ParallelIterator;
            seeds
                .into_par_iter()
                .map(|seed| self.trial(&root, seed))
                .collect::<Result<Vec<_>, _>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let outcomes = seeds
            .into_iter()
            .map(|seed| self.trial(&root, seed))
            .collect::<Result<Vec<_>, _>>()?;
        let histogram = Histogram::from(outcomes);
        if board.voice().is_loud() {
            log::trace!(
                "{} games sampled from round {}: {} finished, {} truncated",
                self.trials,
                board.round(),
                histogram.finished(),
                histogram.truncated()
            );
        }
        Ok(histogram)
    }

    /// play one random race to its end or to the ceiling
    pub fn trial(&self, root: &Board, seed: u64) -> Result<Outcome, Illegal> {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut node = root.quiet();
        let mut closed = 0;
        loop {
            if node.is_game_over() {
                return Ok(Outcome::from(node.order()));
            }
            if closed >= self.ceiling {
                return Ok(Outcome::Truncated);
            }
            if node.is_round_over() {
                node = node.advance();
                closed += 1;
                continue;
            }
            let roll = Catalog::from(&node).shake(rng).ok_or(Illegal::RoundOver)?;
            node = roll.apply(&node)?;
        }
    }
}
