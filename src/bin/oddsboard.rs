use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use oddsboard_rs::{
    Bet, Config, GameDefinition, OddsBoard, OddsSnapshot, OutcomeStatus, RoundSnapshot,
};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oddsboard")]
#[command(about = "Exposure and lock view for casino odds boards", long_about = None)]
struct Cli {
    /// Configuration file (built-in games are used when it does not exist)
    #[arg(short, long, default_value = oddsboard_rs::config::CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known games and their market groups
    Games,
    /// Render a game board once
    Board {
        #[command(flatten)]
        round: RoundArgs,
    },
    /// Re-read inputs and re-render the board on every tick
    Watch {
        #[command(flatten)]
        round: RoundArgs,
        /// Refresh interval in seconds (default: 1)
        #[arg(short, long, default_value = "1")]
        interval: u64,
    },
    /// Evaluate the lock for a single outcome
    Lock {
        /// Raw feed status, e.g. OPEN, SUSPENDED, 0, 1
        #[arg(short, long)]
        status: Option<String>,
        /// Raw suspend flag, e.g. true, 0, SUSPENDED
        #[arg(long)]
        suspended: Option<String>,
        #[arg(long)]
        back: Option<f64>,
        #[arg(long)]
        lay: Option<f64>,
        /// Seconds until the round closes
        #[arg(short, long, allow_hyphen_values = true)]
        remaining: f64,
    },
}

#[derive(clap::Args)]
struct RoundArgs {
    /// Game name, see `oddsboard games`
    #[arg(short, long)]
    game: String,
    /// JSON array of bet records
    #[arg(short, long)]
    bets: PathBuf,
    /// JSON odds snapshot for the round
    #[arg(short, long)]
    odds: PathBuf,
    /// Seconds until the round closes (default: 30)
    #[arg(short, long, default_value = "30", allow_hyphen_values = true)]
    remaining: f64,
    /// Round to show; defaults to the odds snapshot's round
    #[arg(short, long)]
    match_id: Option<String>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Games => {
            print_games(&config.games());
            Ok(())
        }
        Commands::Board { round } => {
            let game = find_game(&config, &round.game)?;
            let snapshot = load_round(&round, round.remaining)?;
            let board = OddsBoard::new(config.lock);
            print!("{}", board.render(&game, &snapshot).pretty_print());
            Ok(())
        }
        Commands::Watch { round, interval } => {
            let game = find_game(&config, &round.game)?;
            tokio::runtime::Runtime::new()?.block_on(watch(config, game, round, interval))
        }
        Commands::Lock {
            status,
            suspended,
            back,
            lay,
            remaining,
        } => {
            let quote = OutcomeStatus {
                status: status.map(raw_value),
                suspended: suspended.map(raw_value),
                back,
                lay,
                ..Default::default()
            };
            let state = quote.state();
            if state.is_none() {
                warn!("Status is missing or not recognised, failing closed");
            }
            let locked = config.lock.is_locked(state.as_ref(), remaining);
            println!("{}", if locked { "locked" } else { "open" });
            Ok(())
        }
    }
}

async fn watch(
    config: Config,
    game: GameDefinition,
    round: RoundArgs,
    interval: u64,
) -> Result<()> {
    let board = OddsBoard::new(config.lock);
    let started = tokio::time::Instant::now();
    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval.max(1)));

    info!("Watching {} (press Ctrl+C to stop)...", game.name);
    loop {
        ticker.tick().await;
        let remaining = round.remaining - started.elapsed().as_secs_f64();

        match load_round(&round, remaining) {
            Ok(snapshot) => {
                println!("\n{}", "=".repeat(60));
                println!("Time: {}", chrono::Local::now().format("%H:%M:%S"));
                print!("{}", board.render(&game, &snapshot).pretty_print());
            }
            // Inputs are rewritten by another process; a half-written file is retried next tick.
            Err(err) => warn!("Skipping refresh: {:#}", err),
        }

        if remaining <= 0.0 {
            info!("Round closed");
            return Ok(());
        }
    }
}

fn find_game(config: &Config, name: &str) -> Result<GameDefinition> {
    config
        .game(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown game '{}', see `oddsboard games`", name))
}

fn load_round(args: &RoundArgs, remaining: f64) -> Result<RoundSnapshot> {
    let bets: Vec<Bet> = read_json(&args.bets)?;
    let odds: OddsSnapshot = read_json(&args.odds)?;
    let match_id = args.match_id.clone().unwrap_or_else(|| odds.match_id.clone());

    Ok(RoundSnapshot {
        match_id,
        remaining_seconds: remaining,
        odds,
        bets,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

// Numbers stay numbers so `0`/`1` statuses reach the feed parser unchanged.
fn raw_value(raw: String) -> Value {
    serde_json::from_str::<Value>(&raw)
        .ok()
        .filter(|v| v.is_number() || v.is_boolean())
        .unwrap_or(Value::String(raw))
}

fn print_games(games: &[GameDefinition]) {
    for game in games {
        println!("\n{} ({})", game.name, game.title);
        println!("{}", "-".repeat(60));
        for group in &game.groups {
            let labels: Vec<&str> = group.outcomes.iter().map(|o| o.label.as_str()).collect();
            let mode = format!("{:?}", group.mode);
            println!("  {:<18} {:<10} {}", group.name, mode, labels.join(", "));
        }
    }
}
