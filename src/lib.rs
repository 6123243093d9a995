pub mod bets;
pub mod board;
pub mod camels;
pub mod evaluation;
pub mod game;
pub mod moves;
pub mod players;
pub mod search;
pub mod track;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Player balances, bet payouts and hazard rewards.
pub type Coins = i32;
/// Track field index, 0 being the start area.
pub type Field = usize;
/// Seat index of a player around the table.
pub type Position = usize;
/// Unnormalized outcome counts in a histogram.
pub type Weight = u64;
/// Expected values of moves.
pub type Utility = f32;
/// Normalized outcome weights.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// RACE PARAMETERS
// ============================================================================
/// Number of racing camels.
pub const CAMELS: usize = 5;
/// Number of faces on a die, valued 1..=FACES.
pub const FACES: usize = 3;
/// The start area every camel leaves from.
pub const START: Field = 0;
/// Last interior field. Any camel beyond it ends the race.
pub const FINISH: Field = 16;
/// Lowest field a hazard may be placed on.
pub const HAZARD_MIN: Field = 2;
/// Fields tracked, enough to hold a camel rolling the top face from FINISH.
pub const FIELDS: usize = FINISH + FACES + 1;
/// Upper bound on seated players.
pub const MAX_PLAYERS: usize = 8;

// ============================================================================
// PAYOUTS
// ============================================================================
/// Per-camel round bet ladder, refilled every round.
pub const ROUND_LADDER: [Coins; 3] = [5, 3, 2];
/// Game bet ladder, walked independently by the winner and loser queues.
pub const GAME_LADDER: [Coins; 4] = [8, 5, 3, 2];
/// Payout once a ladder is exhausted, and the round bet second-place reward.
pub const FLOOR: Coins = 1;
/// Loss for any wrong bet.
pub const PENALTY: Coins = 1;
/// Reward per camel stepping on a hazard.
pub const TOLL: Coins = 1;

// ============================================================================
// APPROXIMATION
// ============================================================================
/// Rounds a sampled game may last before it is tallied as truncated.
pub const ROUND_CEILING: usize = 16;
/// Sampled games per approximation.
pub const APPROXIMATION_TRIALS: usize = 4096;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
