use clap::Parser;
use env_logger::Env;
use log::error;

use mailbox_chess::config::GameConfig;
use mailbox_chess::orchestrator::Orchestrator;

/// Plays a game of uniformly random pseudo-legal moves.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of half-moves to play
    #[arg(long, default_value_t = 100)]
    plies: usize,

    /// Seed for reproducible move selection
    #[arg(long)]
    seed: Option<u64>,

    /// Starting board notation (currently ignored)
    #[arg(long, default_value = "")]
    notation: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Do not print the board after each ply
    #[arg(long)]
    quiet: bool,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        GameConfig {
            plies: cli.plies,
            seed: cli.seed,
            notation: cli.notation,
            log_level: cli.log_level,
            show_boards: !cli.quiet,
        }
    }
}

fn main() {
    let config = GameConfig::from(Cli::parse());
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str())).init();

    let orchestrator = Orchestrator::new(&config);
    if config.show_boards {
        println!("{}", orchestrator.position());
    }

    let show_boards = config.show_boards;
    let summary = orchestrator.run_with(|ply, mv, position| {
        if show_boards {
            println!("{}: Chose {}", ply, mv);
            println!("{}", position);
        }
    });

    match summary {
        Ok(summary) => println!(
            "Finished successfully, computing a total of {} moves over {} plies in {:.3} seconds",
            summary.total_moves_generated,
            summary.plies_played,
            summary.elapsed.as_secs_f64()
        ),
        Err(err) => {
            error!("self-play aborted: {}", err);
            std::process::exit(1);
        }
    }
}
