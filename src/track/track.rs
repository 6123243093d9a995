use super::hazard::Effect;
use super::hazard::Hazard;
use super::hazard::Trip;
use super::spot::Spot;
use crate::camels::Camel;
use crate::camels::Die;
use crate::Field;
use crate::Position;
use crate::CAMELS;
use crate::FIELDS;
use crate::FINISH;
use crate::HAZARD_MIN;
use crate::START;

/// The race itself: where every camel stands and which hazards lie on the track.
///
/// `Track` knows nothing about players' money or bets, which keeps it `Copy`
/// and cheap to branch during search. Hazard rewards are reported back to
/// the caller as a [`Trip`] instead of being paid here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Track {
    spots: [Spot; CAMELS],
    hazards: [Option<Hazard>; FIELDS],
}

impl Default for Track {
    fn default() -> Self {
        let mut spots = [Spot::default(); CAMELS];
        for camel in Camel::all() {
            spots[camel.index()] = Spot::new(START, camel.index());
        }
        Self {
            spots,
            hazards: [None; FIELDS],
        }
    }
}

impl Track {
    pub fn spot(&self, camel: Camel) -> Spot {
        self.spots[camel.index()]
    }
    pub fn hazard(&self, field: Field) -> Option<Hazard> {
        self.hazards.get(field).copied().flatten()
    }
    /// all placed hazards by field
    pub fn hazards(&self) -> impl Iterator<Item = (Field, Hazard)> + '_ {
        self.hazards
            .iter()
            .enumerate()
            .filter_map(|(field, hazard)| hazard.map(|h| (field, h)))
    }
    /// where a player's hazard lies, if it has one out
    pub fn hazard_of(&self, owner: Position) -> Option<Field> {
        self.hazards()
            .find(|(_, h)| h.owner() == owner)
            .map(|(field, _)| field)
    }
    /// camels on a field, bottom to top
    pub fn stack(&self, field: Field) -> Vec<Camel> {
        let mut stack = Camel::all()
            .into_iter()
            .filter(|c| self.spot(*c).field == field)
            .collect::<Vec<_>>();
        stack.sort_by_key(|c| self.spot(*c).height);
        stack
    }
    /// race order, leader first
    pub fn order(&self) -> [Camel; CAMELS] {
        let mut order = Camel::all();
        order.sort_by(|a, b| self.spot(*b).cmp(&self.spot(*a)));
        order
    }
    pub fn leader(&self) -> Camel {
        self.order()[0]
    }
    /// some camel went past the last interior field
    pub fn is_finished(&self) -> bool {
        self.spots.iter().any(|s| s.field > FINISH)
    }

    /// interior field, and no foreign hazard on it or next to it.
    /// the owner's own hazard doesn't block since placing lifts it.
    pub fn is_placeable(&self, owner: Position, field: Field) -> bool {
        (HAZARD_MIN..=FINISH).contains(&field)
            && (field - 1..=field + 1)
                .filter_map(|f| self.hazard(f))
                .all(|h| h.owner() == owner)
    }
    /// lay a hazard, lifting whatever the owner had out before
    pub fn place(&mut self, field: Field, hazard: Hazard) {
        assert!(self.is_placeable(hazard.owner(), field));
        self.lift(hazard.owner());
        self.hazards[field] = Some(hazard);
    }
    pub fn lift(&mut self, owner: Position) {
        if let Some(field) = self.hazard_of(owner) {
            self.hazards[field] = None;
        }
    }

    /// move a camel and everything riding on it.
    /// a camel leaving the start area travels alone.
    pub fn roll(&mut self, camel: Camel, die: Die) -> Option<Trip> {
        let from = self.spot(camel);
        let party = if from.field == START {
            vec![camel]
        } else {
            self.stack(from.field).split_off(from.height)
        };
        self.vacate(from.field, &party);
        let landing = from.field + die.steps();
        match self.hazard(landing) {
            None => {
                self.stack_above(landing, &party);
                None
            }
            Some(hazard) => {
                let field = landing
                    .checked_add_signed(hazard.effect().offset())
                    .expect("hazards sit past the start area");
                match hazard.effect() {
                    Effect::Oasis => self.stack_above(field, &party),
                    Effect::Mirage => {
                        let flipped = party.iter().rev().copied().collect::<Vec<_>>();
                        self.stack_below(field, &flipped)
                    }
                }
                Some(Trip {
                    owner: hazard.owner(),
                    camels: party.len(),
                })
            }
        }
    }

    /// re-index whoever stays behind once the party leaves
    fn vacate(&mut self, field: Field, party: &[Camel]) {
        let rest = self.others(field, party);
        for (height, camel) in rest.into_iter().enumerate() {
            self.spots[camel.index()].height = height;
        }
    }
    fn stack_above(&mut self, field: Field, party: &[Camel]) {
        let base = self.others(field, party).len();
        for (i, camel) in party.iter().enumerate() {
            self.spots[camel.index()] = Spot::new(field, base + i);
        }
    }
    fn stack_below(&mut self, field: Field, party: &[Camel]) {
        let rest = self.others(field, party);
        for (i, camel) in rest.into_iter().enumerate() {
            self.spots[camel.index()].height = party.len() + i;
        }
        for (i, camel) in party.iter().enumerate() {
            self.spots[camel.index()] = Spot::new(field, i);
        }
    }
    fn others(&self, field: Field, party: &[Camel]) -> Vec<Camel> {
        self.stack(field)
            .into_iter()
            .filter(|c| !party.contains(c))
            .collect()
    }
}

/// Arrange camels explicitly. Every occupied field must hold a
/// gapless stack of heights starting at zero.
impl TryFrom<[Spot; CAMELS]> for Track {
    type Error = anyhow::Error;
    fn try_from(spots: [Spot; CAMELS]) -> Result<Self, Self::Error> {
        let track = Self {
            spots,
            hazards: [None; FIELDS],
        };
        for spot in spots.iter() {
            if spot.field >= FIELDS {
                return Err(anyhow::anyhow!("field {} is off the track", spot.field));
            }
            let heights = track
                .stack(spot.field)
                .into_iter()
                .map(|c| track.spot(c).height)
                .collect::<Vec<_>>();
            if heights.iter().copied().ne(0..heights.len()) {
                return Err(anyhow::anyhow!("broken stack on field {}", spot.field));
            }
        }
        Ok(track)
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for field in (START..FIELDS).rev() {
            let stack = self.stack(field);
            let hazard = self.hazard(field);
            if stack.is_empty() && hazard.is_none() {
                continue;
            }
            write!(f, "{:>3} |", field)?;
            if let Some(hazard) = hazard {
                write!(f, " [{}]", hazard)?;
            }
            for camel in stack {
                write!(f, " {}", camel.initial())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
