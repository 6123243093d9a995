use super::ladder::Ladder;
use super::settlement::Settlement;
use super::wager::GameBet;
use super::wager::RoundBet;
use super::wager::Side;
use crate::camels::Camel;
use crate::camels::Roster;
use crate::moves::Illegal;
use crate::Coins;
use crate::Position;
use crate::CAMELS;

/// Everything money-related on the board: balances, bet books, cards.
///
/// Round-scoped parts (ladders, held round bets) are reset by
/// [`Ledger::refill`]. Game-scoped parts (balances, cards, queues) live
/// for the whole game and only change through bets and settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balances: Vec<Coins>,
    holdings: Vec<Vec<RoundBet>>,
    cards: Vec<Roster>,
    winners: Vec<GameBet>,
    losers: Vec<GameBet>,
    ladders: [Ladder; CAMELS],
}

impl Ledger {
    pub fn new(n: usize) -> Self {
        Self {
            balances: vec![0; n],
            holdings: vec![Vec::new(); n],
            cards: vec![Roster::full(); n],
            winners: Vec::new(),
            losers: Vec::new(),
            ladders: [Ladder::round(); CAMELS],
        }
    }
    pub fn n(&self) -> usize {
        self.balances.len()
    }
    pub fn balances(&self) -> &[Coins] {
        &self.balances
    }
    pub fn holdings(&self, player: Position) -> &[RoundBet] {
        &self.holdings[player]
    }
    /// camels the player may still place a game bet on
    pub fn cards(&self, player: Position) -> Roster {
        self.cards[player]
    }
    pub fn queue(&self, side: Side) -> &[GameBet] {
        match side {
            Side::Winner => &self.winners,
            Side::Loser => &self.losers,
        }
    }
    pub fn ladder(&self, camel: Camel) -> Ladder {
        self.ladders[camel.index()]
    }

    pub fn credit(&mut self, player: Position, coins: Coins) {
        self.balances[player] += coins;
    }
    /// take the best round bet left on a camel
    pub fn back(&mut self, player: Position, camel: Camel) -> Result<RoundBet, Illegal> {
        let value = self.ladders[camel.index()]
            .take()
            .ok_or(Illegal::LadderEmpty(camel))?;
        let bet = RoundBet::new(camel, value);
        self.holdings[player].push(bet);
        Ok(bet)
    }
    /// spend a card on a game bet and queue it behind earlier ones
    pub fn stake(&mut self, player: Position, camel: Camel, side: Side) -> Result<GameBet, Illegal> {
        if !self.cards[player].contains(camel) {
            return Err(Illegal::NoCard(player, camel));
        }
        self.cards[player].remove(camel);
        let bet = GameBet::new(player, camel);
        match side {
            Side::Winner => self.winners.push(bet),
            Side::Loser => self.losers.push(bet),
        }
        Ok(bet)
    }
    pub fn apply(&mut self, settlement: &Settlement) {
        for payout in settlement.payouts() {
            self.credit(payout.player, payout.coins);
        }
    }
    /// drop held round bets and restore every camel's ladder
    pub fn refill(&mut self) {
        self.holdings.iter_mut().for_each(Vec::clear);
        self.ladders = [Ladder::round(); CAMELS];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_bets_walk_down_the_ladder() {
        let mut ledger = Ledger::new(2);
        assert_eq!(ledger.back(0, Camel::Blue).map(|b| b.value()), Ok(5));
        assert_eq!(ledger.back(1, Camel::Blue).map(|b| b.value()), Ok(3));
        assert_eq!(ledger.back(0, Camel::Blue).map(|b| b.value()), Ok(2));
        assert_eq!(ledger.back(1, Camel::Blue), Err(Illegal::LadderEmpty(Camel::Blue)));
        assert_eq!(ledger.holdings(0).len(), 2);
        assert_eq!(ledger.ladder(Camel::Green).peek(), Some(5));
        ledger.refill();
        assert!(ledger.holdings(0).is_empty());
        assert_eq!(ledger.ladder(Camel::Blue).peek(), Some(5));
    }

    #[test]
    fn cards_are_spent_once_per_player() {
        let mut ledger = Ledger::new(2);
        assert!(ledger.stake(0, Camel::Orange, Side::Winner).is_ok());
        assert_eq!(
            ledger.stake(0, Camel::Orange, Side::Loser),
            Err(Illegal::NoCard(0, Camel::Orange))
        );
        assert!(ledger.stake(1, Camel::Orange, Side::Loser).is_ok());
        assert!(ledger.cards(1).contains(Camel::Blue));
        assert!(!ledger.cards(1).contains(Camel::Orange));
        assert_eq!(ledger.queue(Side::Winner), &[GameBet::new(0, Camel::Orange)]);
        assert_eq!(ledger.queue(Side::Loser), &[GameBet::new(1, Camel::Orange)]);
        ledger.refill();
        assert_eq!(ledger.queue(Side::Winner).len(), 1);
    }
}
