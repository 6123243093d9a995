use super::ladder::Ladder;
use super::ledger::Ledger;
use super::wager::Side;
use crate::camels::Camel;
use crate::Coins;
use crate::Position;
use crate::CAMELS;
use crate::PENALTY;

/// One bet resolved against a finishing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub player: Position,
    pub camel: Camel,
    pub coins: Coins,
}

impl std::fmt::Display for Payout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{} {:+} for {}", self.player, self.coins, self.camel)
    }
}

/// The cash moves implied by a finishing order.
///
/// Every payout depends only on its own bet (and, for game bets, its
/// position within the queue), so applying them in any order gives the
/// same balances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settlement {
    payouts: Vec<Payout>,
}

impl Settlement {
    /// resolve every held round bet
    pub fn round(ledger: &Ledger, order: &[Camel; CAMELS]) -> Self {
        let payouts = (0..ledger.n())
            .flat_map(move |player| {
                ledger.holdings(player).iter().map(move |bet| Payout {
                    player,
                    camel: bet.camel(),
                    coins: bet.cash(order),
                })
            })
            .collect();
        Self { payouts }
    }
    /// resolve both game bet queues, each walking its own ladder.
    /// correct bettors climb down the ladder in placement order,
    /// wrong ones pay the penalty without consuming a rung.
    pub fn game(ledger: &Ledger, order: &[Camel; CAMELS]) -> Self {
        let mut payouts = Vec::new();
        for side in Side::all() {
            let target = side.pick(order);
            let mut ladder = Ladder::game();
            for bet in ledger.queue(side) {
                let coins = if bet.camel() == target {
                    ladder.step()
                } else {
                    -PENALTY
                };
                payouts.push(Payout {
                    player: bet.player(),
                    camel: bet.camel(),
                    coins,
                });
            }
        }
        Self { payouts }
    }
    pub fn payouts(&self) -> &[Payout] {
        &self.payouts
    }
    /// net result per player
    pub fn pnl(&self, n: usize) -> Vec<Coins> {
        let mut pnl = vec![0; n];
        for payout in self.payouts.iter() {
            pnl[payout.player] += payout.coins;
        }
        pnl
    }
}

impl From<Vec<Payout>> for Settlement {
    fn from(payouts: Vec<Payout>) -> Self {
        Self { payouts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [Camel; CAMELS] = [
        Camel::Blue,
        Camel::Yellow,
        Camel::Green,
        Camel::Orange,
        Camel::White,
    ];

    #[test]
    fn round_settlement() {
        let mut ledger = Ledger::new(3);
        ledger.back(0, Camel::Blue).unwrap();
        ledger.back(1, Camel::Yellow).unwrap();
        ledger.back(2, Camel::Green).unwrap();
        ledger.back(2, Camel::Blue).unwrap();
        let settlement = Settlement::round(&ledger, &ORDER);
        assert_eq!(settlement.pnl(3), vec![5, 1, -1 + 3]);
    }

    #[test]
    fn winner_queue_walks_ladder_for_correct_bets_only() {
        let mut ledger = Ledger::new(3);
        ledger.stake(0, Camel::Blue, Side::Winner).unwrap();
        ledger.stake(1, Camel::Yellow, Side::Winner).unwrap();
        ledger.stake(2, Camel::Blue, Side::Winner).unwrap();
        let settlement = Settlement::game(&ledger, &ORDER);
        assert_eq!(settlement.pnl(3), vec![8, -1, 5]);
    }

    #[test]
    fn queues_resolve_independently() {
        let mut ledger = Ledger::new(2);
        ledger.stake(0, Camel::Blue, Side::Winner).unwrap();
        ledger.stake(1, Camel::White, Side::Loser).unwrap();
        ledger.stake(0, Camel::White, Side::Loser).unwrap();
        ledger.stake(1, Camel::Green, Side::Winner).unwrap();
        let settlement = Settlement::game(&ledger, &ORDER);
        assert_eq!(settlement.pnl(2), vec![8 + 5, 8 - 1]);
    }

    #[test]
    fn payout_order_does_not_matter() {
        let mut ledger = Ledger::new(3);
        for (player, camel) in [(0, Camel::Blue), (1, Camel::Blue), (2, Camel::Yellow), (0, Camel::White)] {
            ledger.back(player, camel).unwrap();
        }
        let forward = Settlement::round(&ledger, &ORDER);
        let backward = Settlement::from(forward.payouts().iter().rev().copied().collect::<Vec<_>>());
        let mut a = ledger.clone();
        let mut b = ledger.clone();
        a.apply(&forward);
        b.apply(&backward);
        assert_eq!(a.balances(), b.balances());
        assert_eq!(a.balances(), &[5 - 1, 3, 1]);
    }
}
