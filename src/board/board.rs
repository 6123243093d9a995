use super::voice::Voice;
use crate::bets::GameBet;
use crate::bets::Ledger;
use crate::bets::RoundBet;
use crate::bets::Settlement;
use crate::bets::Side;
use crate::camels::Camel;
use crate::camels::Die;
use crate::camels::Roster;
use crate::moves::Illegal;
use crate::track::Hazard;
use crate::track::Track;
use crate::Coins;
use crate::Field;
use crate::Position;
use crate::CAMELS;
use crate::MAX_PLAYERS;
use std::sync::Arc;

/// A snapshot of the whole game between two moves.
///
/// Boards are values: moves produce a new board and leave the old one
/// as it was. The race state is `Copy`, and the money side sits behind an
/// `Arc` that is only copied by the first branch that writes to it, so
/// fanning out during search shares everything the branches don't touch.
///
/// # Fields
///
/// - `track`: camel stacks and hazards
/// - `ledger`: balances, bet books, cards
/// - `pending`: camels that have not rolled this round
/// - `round`: 1-based round counter
/// - `opener`: player who started the current round
/// - `ticker`: player to act
/// - `voice`: whether this copy reports to the log
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    track: Track,
    ledger: Arc<Ledger>,
    pending: Roster,
    round: usize,
    opener: Position,
    ticker: Position,
    voice: Voice,
}

impl Board {
    pub fn new(n: usize) -> Self {
        assert!((1..=MAX_PLAYERS).contains(&n), "seat 1..={} players", MAX_PLAYERS);
        Self {
            track: Track::default(),
            ledger: Arc::new(Ledger::new(n)),
            pending: Roster::full(),
            round: 1,
            opener: 0,
            ticker: 0,
            voice: Voice::Loud,
        }
    }
    /// same board with camels and hazards arranged explicitly
    pub fn with_track(mut self, track: Track) -> Self {
        self.track = track;
        self
    }
    /// same board with only these camels left to roll this round
    pub fn with_pending(mut self, pending: Roster) -> Self {
        self.pending = pending;
        self
    }
    /// a copy that keeps its diagnostics to itself
    pub fn quiet(&self) -> Self {
        let mut copy = self.clone();
        copy.voice = Voice::Quiet;
        copy
    }
}

/// Read accessors for renderers and policies.
impl Board {
    pub fn n(&self) -> usize {
        self.ledger.n()
    }
    pub fn track(&self) -> &Track {
        &self.track
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn pending(&self) -> Roster {
        self.pending
    }
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn opener(&self) -> Position {
        self.opener
    }
    /// player to act
    pub fn current(&self) -> Position {
        self.ticker
    }
    pub fn voice(&self) -> Voice {
        self.voice
    }
    /// race order, leader first
    pub fn order(&self) -> [Camel; CAMELS] {
        self.track.order()
    }
    pub fn standings(&self) -> &[Coins] {
        self.ledger.balances()
    }
    /// every camel rolled, or the race ended mid-round
    pub fn is_round_over(&self) -> bool {
        self.pending.is_empty() || self.is_game_over()
    }
    pub fn is_game_over(&self) -> bool {
        self.track.is_finished()
    }
}

/// State transitions used by moves. Callers validate first.
impl Board {
    pub(crate) fn roll(&mut self, camel: Camel, die: Die) {
        assert!(self.pending.contains(camel));
        self.pending.remove(camel);
        if let Some(trip) = self.track.roll(camel, die) {
            if self.voice.is_loud() {
                log::debug!(
                    "P{}'s hazard stepped on by {} camel(s)",
                    trip.owner,
                    trip.camels
                );
            }
            self.ledger_mut().credit(trip.owner, trip.toll());
        }
    }
    pub(crate) fn place(&mut self, field: Field, hazard: Hazard) {
        self.track.place(field, hazard);
    }
    pub(crate) fn back(&mut self, player: Position, camel: Camel) -> Result<RoundBet, Illegal> {
        self.ledger_mut().back(player, camel)
    }
    pub(crate) fn stake(&mut self, player: Position, camel: Camel, side: Side) -> Result<GameBet, Illegal> {
        self.ledger_mut().stake(player, camel, side)
    }
    pub(crate) fn pass(&mut self) {
        self.ticker = (self.ticker + 1) % self.n();
    }
    fn ledger_mut(&mut self) -> &mut Ledger {
        Arc::make_mut(&mut self.ledger)
    }
}

/// Round and game boundaries.
impl Board {
    /// cash in held round bets and open the next round.
    /// once the race is over the round counter stays on the last round played.
    pub fn conclude_round(&self) -> Self {
        let mut next = self.cash_in();
        if !next.is_game_over() {
            next.reset();
            if next.voice.is_loud() {
                log::info!("round {} begins, P{} opens", next.round, next.opener);
            }
        }
        next
    }
    /// cash in held round bets against the current order without
    /// opening another round.
    pub fn cash_in(&self) -> Self {
        assert!(self.is_round_over(), "round still running");
        let mut next = self.clone();
        let order = next.order();
        let settlement = Settlement::round(&next.ledger, &order);
        if next.voice.is_loud() {
            for payout in settlement.payouts() {
                log::debug!("round {} {}", next.round, payout);
            }
        }
        next.ledger_mut().apply(&settlement);
        next.ledger_mut().refill();
        next
    }
    /// open the next round without cashing anything in.
    /// sampled games use this so that only the race itself is played out.
    pub fn advance(&self) -> Self {
        assert!(self.is_round_over(), "round still running");
        let mut next = self.clone();
        next.reset();
        next
    }
    /// resolve the winner and loser queues against the final order.
    pub fn conclude_game(&self) -> Self {
        assert!(self.is_game_over(), "race still running");
        let mut next = self.clone();
        let order = next.order();
        let settlement = Settlement::game(&next.ledger, &order);
        if next.voice.is_loud() {
            for payout in settlement.payouts() {
                log::debug!("game {}", payout);
            }
            log::info!("{} wins the race", order[0]);
        }
        next.ledger_mut().apply(&settlement);
        next
    }
    fn reset(&mut self) {
        self.ledger_mut().refill();
        self.pending = Roster::full();
        self.round += 1;
        self.opener = (self.opener + 1) % self.n();
        self.ticker = self.opener;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "round {} | P{} to act | to roll: {}", self.round, self.ticker, self.pending)?;
        write!(f, "{}", self.track)?;
        let order = self.order();
        writeln!(
            f,
            "order: {}",
            order.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" > ")
        )?;
        for (player, balance) in self.standings().iter().enumerate() {
            writeln!(f, "P{} {:>4}", player, balance)?;
        }
        Ok(())
    }
}
