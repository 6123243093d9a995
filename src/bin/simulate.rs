//! Race simulator
//!
//! Seats robot and random players around a board, plays whole games and
//! prints the finishing order with final standings.
//!
//! Options: --robots, --randoms, --games, --seed, --trials, --ceiling

use caravan::board::Board;
use caravan::camels::Camel;
use caravan::game::Game;
use caravan::players::Player;
use caravan::players::Random;
use caravan::players::Robot;
use caravan::search::Approximator;
use caravan::*;
use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(author, version, about = "Play out camel races between betting policies", long_about = None)]
struct Args {
    /// greedy expected-value players, seated first
    #[arg(short, long, default_value_t = 2)]
    robots: usize,
    /// uniformly random players, seated after the robots
    #[arg(short = 'x', long, default_value_t = 0)]
    randoms: usize,
    /// games to play back to back
    #[arg(short, long, default_value_t = 1)]
    games: usize,
    /// base seed; drawn from the OS when absent
    #[arg(short, long)]
    seed: Option<u64>,
    /// sampled races behind every game bet valuation
    #[arg(short, long, default_value_t = APPROXIMATION_TRIALS)]
    trials: usize,
    /// rounds a sampled race may last
    #[arg(short, long, default_value_t = ROUND_CEILING)]
    ceiling: usize,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let seats = args.robots + args.randoms;
    if !(1..=MAX_PLAYERS).contains(&seats) {
        return Err(anyhow::anyhow!("seat between 1 and {} players", MAX_PLAYERS));
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seating {} robots and {} randoms, seed {}", args.robots, args.randoms, seed);
    let approximator = Approximator::new(args.trials, args.ceiling);
    let mut totals = vec![0 as Coins; seats];
    for g in 0..args.games {
        let base = seed.wrapping_add((g * seats) as u64);
        let players = (0..seats)
            .map(|i| base.wrapping_add(i as u64))
            .enumerate()
            .map(|(i, s)| match i < args.robots {
                true => Box::new(Robot::new(s, approximator)) as Box<dyn Player>,
                false => Box::new(Random::new(s)) as Box<dyn Player>,
            })
            .collect::<Vec<_>>();
        let board = Game::new(players, 4 * ROUND_CEILING).play()?;
        report(g, &board);
        for (total, balance) in totals.iter_mut().zip(board.standings()) {
            *total += balance;
        }
    }
    if args.games > 1 {
        println!("{}", "totals".bold());
        for (player, total) in totals.iter().enumerate() {
            println!("P{} {:>6}", player, total);
        }
    }
    Ok(())
}

fn report(g: usize, board: &Board) {
    let order = board
        .order()
        .iter()
        .map(|c| paint(*c))
        .collect::<Vec<_>>()
        .join(" > ");
    println!("{} after {} rounds: {}", format!("game {}", g).bold(), board.round(), order);
    for (player, balance) in board.standings().iter().enumerate() {
        let line = format!("P{} {:>4}", player, balance);
        match balance {
            b if *b > 0 => println!("{}", line.green()),
            b if *b < 0 => println!("{}", line.red()),
            _ => println!("{}", line),
        }
    }
}

fn paint(camel: Camel) -> String {
    let name = camel.to_string();
    match camel {
        Camel::Yellow => name.yellow(),
        Camel::Blue => name.blue(),
        Camel::Green => name.green(),
        Camel::Orange => name.truecolor(255, 165, 0),
        Camel::White => name.white(),
    }
    .to_string()
}
