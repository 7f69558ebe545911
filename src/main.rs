//! Tycoon Gym - Main binary
//!
//! Runs a headless board-economy demo: players and companies hold
//! sector-tagged assets, collect periodic cash flow on their turns, and
//! trade shares, assets and money through the ledger. Valuations are
//! snapshotted once per completed cycle ("year").
//!
//! The scenario exercises every ledger operation; rejected transactions
//! are logged and skipped, never fatal.

mod config;

use clap::Parser;
use engine::{CashFlowCadence, Game, GameConfig, GameError};
use ledger_core::LedgerConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use types::Cash;

pub use config::{DemoConfig, PLAYER_NAMES};

/// Tycoon Gym - board-economy valuation and ownership ledger demo
#[derive(Parser, Debug)]
#[command(name = "tycoon-gym")]
#[command(about = "A board-economy simulation over a valuation and ownership ledger")]
#[command(version)]
struct Args {
    /// Total turns to play
    #[arg(long, env = "GYM_TURNS")]
    turns: Option<u64>,

    /// Number of players (2-6)
    #[arg(long, env = "GYM_PLAYERS")]
    players: Option<usize>,

    /// Starting balance in kr for every actor
    #[arg(long, env = "GYM_START_BALANCE")]
    start_balance: Option<f64>,

    /// Dice seed for reproducible runs
    #[arg(long, env = "GYM_SEED")]
    seed: Option<u64>,

    /// Credit cash flow per full cycle instead of per turn
    #[arg(long, env = "GYM_CYCLE_CASH_FLOW")]
    cycle_cash_flow: bool,

    /// Dump final actor summaries as JSON
    #[arg(long, env = "GYM_JSON")]
    json: bool,

    /// Log every turn
    #[arg(long, env = "GYM_VERBOSE")]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> DemoConfig {
        let defaults = DemoConfig::default();
        DemoConfig {
            turns: self.turns.unwrap_or(defaults.turns),
            players: self.players.unwrap_or(defaults.players).clamp(2, PLAYER_NAMES.len()),
            seed: self.seed,
            cadence: if self.cycle_cash_flow {
                CashFlowCadence::EveryCycle
            } else {
                CashFlowCadence::EveryTurn
            },
            start_balance: self
                .start_balance
                .map(Cash::from_float)
                .unwrap_or(defaults.start_balance),
            json: self.json,
            verbose: self.verbose,
        }
    }
}

/// Companies seeded into the demo: (company, founder index, assets).
/// Asset tuples are (name, value, sector, cash flow per period), straight
/// off the Swedish board.
const COMPANIES: [(&str, usize, &[(&str, f64, &str, f64)]); 3] = [
    (
        "Nordia Fastigheter",
        0,
        &[
            ("Västerlånggatan", 1_200.0, "Property", 40.0),
            ("Hornsgatan", 1_200.0, "Property", 80.0),
            ("Ringvägen", 2_400.0, "Property", 160.0),
        ],
    ),
    (
        "Svea Tåg AB",
        1,
        &[
            ("Södra Station", 4_000.0, "Tåg", 500.0),
            ("Central Station", 4_000.0, "Tåg", 500.0),
        ],
    ),
    (
        "Elverket AB",
        2,
        &[
            ("Elverket", 3_000.0, "Statligt", 240.0),
            ("Vattenledningsverket", 3_000.0, "Statligt", 240.0),
        ],
    ),
];

fn main() {
    let args = Args::parse();
    let config = args.into_config();

    let filter = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: DemoConfig) -> Result<(), GameError> {
    print_banner(&config);

    let game_config = GameConfig::default()
        .with_total_turns(config.turns)
        .with_cadence(config.cadence)
        .with_ledger(LedgerConfig::default().with_start_balance(config.start_balance));
    let game_config = match config.seed {
        Some(seed) => game_config.with_seed(seed),
        None => game_config,
    };
    let mut game = Game::new(game_config);

    build_scenario(&mut game, &config)?;

    let players: Vec<&str> = PLAYER_NAMES[..config.players].to_vec();
    for _ in 0..config.turns {
        let report = game.step()?;
        if config.verbose {
            eprintln!(
                "  turn {:>3}  {:<20} dice {}+{}  cash flow {:>10}",
                report.turn,
                report.actor,
                report.dice.0,
                report.dice.1,
                report.cash_flow_applied.to_string(),
            );
        }
        if report.year_completed {
            trade_round(&mut game, &players, report.years_completed);
        }
    }

    print_results(&game, config.json)?;
    Ok(())
}

/// Seat the players and found the demo companies.
fn build_scenario(game: &mut Game, config: &DemoConfig) -> Result<(), GameError> {
    let reg = game.registry_mut();
    for player in &PLAYER_NAMES[..config.players] {
        reg.add_actor(*player, None)?;
    }
    for (company, founder, assets) in COMPANIES {
        let founder = PLAYER_NAMES[founder % config.players];
        reg.add_actor_owned_by(company, Some(Cash::ZERO), founder)?;
        for (name, value, sector, flow) in assets {
            reg.add_asset(
                company,
                *name,
                Cash::from_float(*value),
                sector,
                Cash::from_float(*flow),
            )?;
        }
    }
    Ok(())
}

/// Once per year, rotate a small batch of scripted trades through the
/// ledger. Failures (typically thin balances early on) are logged and
/// skipped.
fn trade_round(game: &mut Game, players: &[&str], year: u64) {
    let reg = game.registry_mut();
    let n = players.len() as u64;
    let buyer = players[(year % n) as usize];
    let (company, _, assets) = COMPANIES[(year % COMPANIES.len() as u64) as usize];

    // Buy 10% of this year's company from its current majority owner.
    let majority_owner = reg
        .get(company)
        .ok()
        .and_then(|c| {
            c.ownership_shares()
                .iter()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(name, _)| name.clone())
        });
    if let Some(seller) = majority_owner {
        if seller != buyer {
            match reg.transfer_share(company, buyer, &seller, 10.0) {
                Ok(price) => info!(%company, buyer, seller = %seller, %price, "share purchase"),
                Err(err) => warn!(%err, "share purchase rejected"),
            }
        }
    }

    // Every other year the active player pays rent on the company's first
    // asset, keeping money moving between actors.
    if year % 2 == 0 {
        let payer = players[((year + 1) % n) as usize];
        if let Some((asset_name, ..)) = assets.first() {
            if let Err(err) = reg.pay_rent(payer, asset_name) {
                warn!(%err, "rent payment rejected");
            }
        }
    }
}

fn print_banner(config: &DemoConfig) {
    eprintln!("╔══════════════════════════════════════════════════════════╗");
    eprintln!("║  Tycoon Gym - valuation & ownership ledger demo          ║");
    eprintln!("╠══════════════════════════════════════════════════════════╣");
    eprintln!(
        "║  players: {:<2}  turns: {:<5}  start balance: {:<12} ║",
        config.players,
        config.turns,
        config.start_balance.to_string(),
    );
    eprintln!("╚══════════════════════════════════════════════════════════╝");
    eprintln!();
}

fn print_results(game: &Game, json: bool) -> Result<(), GameError> {
    let reg = game.registry();
    let names: Vec<String> = reg.actor_names().map(str::to_string).collect();

    if json {
        let summaries = names
            .iter()
            .map(|name| reg.summary(name))
            .collect::<ledger_core::Result<Vec<_>>>()?;
        match serde_json::to_string_pretty(&summaries) {
            Ok(out) => println!("{out}"),
            Err(err) => return Err(GameError::Scenario(format!("summary encoding: {err}"))),
        }
        return Ok(());
    }

    let stats = game.stats();
    eprintln!(
        "Played {} turns across {} actors ({} years completed).",
        stats.turns_played, stats.actor_count, stats.years_completed
    );
    eprintln!();
    for name in &names {
        let summary = reg.summary(name)?;
        eprintln!("── {name} ──");
        eprintln!("{summary}");
        let history = reg.get(name)?.valuation_history();
        if !history.is_empty() {
            let series = history
                .iter()
                .map(|v| format!("{:.0}", v.to_float()))
                .collect::<Vec<_>>()
                .join(" → ");
            eprintln!("Valuation history: {series}");
        }
        eprintln!();
    }
    Ok(())
}
