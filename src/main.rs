use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use ml_tictactoe::agents::{Agent, HumanAgent, QTable, RandomAgent, TabularAgent};
use ml_tictactoe::config::AppConfig;
use ml_tictactoe::game::{GameOutcome, GameState};
use ml_tictactoe::session::{play_game, play_series};

#[derive(Parser)]
#[command(name = "ml_tictactoe", about = "Tic-tac-toe with learning players")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "ml_tictactoe.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play an interactive game as X against an automated opponent
    Play {
        #[arg(long, value_enum, default_value = "random")]
        opponent: AgentKind,

        /// JSON Q-table file for the tabular opponent
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Run an agent-vs-agent series and print the tally
    Bench {
        #[arg(long, value_enum, default_value = "random")]
        x: AgentKind,

        #[arg(long, value_enum, default_value = "random")]
        o: AgentKind,

        /// Number of games; defaults to session.num_games from the config
        #[arg(long)]
        games: Option<usize>,

        /// JSON Q-table file shared by any tabular agent in the series
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Print a config file with all default values
    DefaultConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Random,
    Tabular,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { opponent, table } => {
            let mut human = HumanAgent::new(io::stdin().lock(), io::stdout());
            let mut rival = build_agent(opponent, table.as_deref(), &config)?;

            let mut state = GameState::new();
            let outcome = play_game(&mut human, rival.as_mut(), &mut state);
            print!("{}", state.board());
            announce(outcome);
        }
        Command::Bench { x, o, games, table } => {
            let mut agent_x = build_agent(x, table.as_deref(), &config)?;
            let mut agent_o = build_agent(o, table.as_deref(), &config)?;
            let games = games.unwrap_or(config.session.num_games);

            info!(
                "running {} games: {} (X) vs {} (O)",
                games,
                agent_x.name(),
                agent_o.name()
            );
            let result = play_series(agent_x.as_mut(), agent_o.as_mut(), games);
            println!(
                "{} games: X won {}, O won {}, {} draws",
                result.games(),
                result.x_wins,
                result.o_wins,
                result.draws
            );
        }
        Command::DefaultConfig => {
            print!("{}", AppConfig::default_toml());
        }
    }

    Ok(())
}

fn build_agent(
    kind: AgentKind,
    table_path: Option<&Path>,
    config: &AppConfig,
) -> anyhow::Result<Box<dyn Agent>> {
    match kind {
        AgentKind::Random => Ok(Box::new(RandomAgent::new())),
        AgentKind::Tabular => {
            let table = match table_path {
                Some(path) => QTable::load(path)
                    .with_context(|| format!("loading Q-table from {}", path.display()))?,
                None => QTable::new(),
            };
            info!("tabular agent starts with {} known states", table.len());
            Ok(Box::new(TabularAgent::new(table, config.tabular.epsilon)))
        }
    }
}

fn announce(outcome: GameOutcome) {
    match outcome {
        GameOutcome::Winner(player) => println!("Player {player} has won the game!"),
        GameOutcome::Draw => println!("Draw! All cells are taken."),
    }
}
