use super::outcome::Outcome;
use crate::camels::Camel;
use crate::Probability;
use crate::Weight;
use crate::CAMELS;
use std::collections::BTreeMap;
use std::ops::AddAssign;

/// A distribution over finishing orders.
///
/// The sum of the weights is the total number of leaves or samples.
/// The weight of an outcome is the number of times it was reached.
/// Truncated samples are counted in the mass but are never a placing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Histogram {
    mass: Weight,
    counts: BTreeMap<Outcome, Weight>,
}

impl Histogram {
    /// the weight of a given Outcome. returns 0 if it was never witnessed.
    pub fn weight(&self, x: &Outcome) -> Weight {
        self.counts.get(x).copied().unwrap_or(0)
    }
    pub fn density(&self, x: &Outcome) -> Probability {
        match self.mass {
            0 => 0.,
            mass => self.weight(x) as Probability / mass as Probability,
        }
    }
    /// distinct Outcomes witnessed
    pub fn n(&self) -> usize {
        self.counts.len()
    }
    /// total weight
    pub fn mass(&self) -> Weight {
        self.mass
    }
    pub fn truncated(&self) -> Weight {
        self.weight(&Outcome::Truncated)
    }
    /// total weight of outcomes that are real finishing orders
    pub fn finished(&self) -> Weight {
        self.mass - self.truncated()
    }
    /// total weight of finishing orders satisfying the predicate
    pub fn tally<F>(&self, predicate: F) -> Weight
    where
        F: Fn(&[Camel; CAMELS]) -> bool,
    {
        self.counts
            .iter()
            .filter_map(|(outcome, count)| outcome.order().map(|o| (o, count)))
            .filter(|(order, _)| predicate(*order))
            .map(|(_, count)| count)
            .sum()
    }
    /// weight of the camel finishing in the given place, 0 being first
    pub fn placing(&self, camel: Camel, place: usize) -> Weight {
        self.tally(|order| order[place] == camel)
    }
    /// chance of each placing for one camel, over finished outcomes
    pub fn pdf(&self, camel: Camel) -> [Probability; CAMELS] {
        let finished = self.finished();
        let mut pdf = [0.; CAMELS];
        if finished > 0 {
            for (place, p) in pdf.iter_mut().enumerate() {
                *p = self.placing(camel, place) as Probability / finished as Probability;
            }
        }
        pdf
    }

    /// insert the Outcome into our support,
    /// incrementing its local weight,
    /// incrementing our global norm.
    pub fn increment(mut self, outcome: Outcome) -> Self {
        self.witness(outcome, 1);
        self
    }
    pub fn witness(&mut self, outcome: Outcome, weight: Weight) {
        self.mass.add_assign(weight);
        self.counts.entry(outcome).or_insert(0).add_assign(weight);
    }
    /// absorb the other histogram into this one.
    pub fn absorb(&mut self, other: &Self) {
        for (outcome, count) in other.counts.iter() {
            self.witness(*outcome, *count);
        }
    }
}

impl From<Vec<Outcome>> for Histogram {
    fn from(outcomes: Vec<Outcome>) -> Self {
        outcomes.into_iter().collect()
    }
}

impl FromIterator<Outcome> for Histogram {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |hist, outcome| hist.increment(outcome))
    }
}

/// the most likely outcomes, one per line
impl std::fmt::Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ranked = self.counts.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        for (outcome, _) in ranked.into_iter().take(8) {
            writeln!(f, "{} {:>6.2}%", outcome, 100. * self.density(outcome))?;
        }
        write!(f, "{} outcomes over {} weight", self.n(), self.mass)
    }
}
