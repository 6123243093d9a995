use crate::board::Board;
use crate::moves::Illegal;
use crate::moves::Move;
use crate::players::Player;

/// What happened during one call to [`Game::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// a player made this move
    Played(Move),
    /// every camel rolled, bets were cashed in and a new round opened
    Settled,
    /// the race is over and every bet is paid
    Finished,
    /// the round ceiling was reached with the race still running.
    /// the last round's bets are paid, the game queues are not
    Stalled,
}

/// Drives a full game: asks each seated policy for its move in turn,
/// settles rounds as they end and the game once the race does.
pub struct Game {
    board: Board,
    players: Vec<Box<dyn Player>>,
    ceiling: usize,
    over: bool,
}

impl Game {
    /// seat the players in order, P0 opening the first round.
    /// the game stalls rather than open round `ceiling + 1`.
    pub fn new(players: Vec<Box<dyn Player>>, ceiling: usize) -> Self {
        Self {
            board: Board::new(players.len()),
            players,
            ceiling,
            over: false,
        }
    }
    /// resume from a prepared board seating the same number of players
    pub fn with_board(mut self, board: Board) -> Self {
        assert_eq!(board.n(), self.players.len(), "one policy per seat");
        self.board = board;
        self
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn step(&mut self) -> Result<Turn, Illegal> {
        if self.over {
            return Err(Illegal::GameOver);
        }
        if self.board.is_game_over() {
            self.board = self.board.conclude_round().conclude_game();
            self.over = true;
            return Ok(Turn::Finished);
        }
        if self.board.is_round_over() {
            if self.board.round() >= self.ceiling {
                self.board = self.board.cash_in();
                self.over = true;
                return Ok(Turn::Stalled);
            }
            self.board = self.board.conclude_round();
            return Ok(Turn::Settled);
        }
        let player = self.board.current();
        let choice = self.players[player].decide(&self.board)?;
        self.board = choice.apply(&self.board)?;
        Ok(Turn::Played(choice))
    }
    /// play until the race ends or stalls, returning the final board
    pub fn play(mut self) -> Result<Board, Illegal> {
        loop {
            match self.step()? {
                Turn::Finished | Turn::Stalled => return Ok(self.board),
                Turn::Played(_) | Turn::Settled => continue,
            }
        }
    }
}
