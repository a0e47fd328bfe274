use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use connect_four_minimax::ai::{Agent, MinimaxAgent, RandomAgent, SearchEngine};
use connect_four_minimax::arena::{play_match, MatchSummary};
use connect_four_minimax::config::{AppConfig, Opponent};
use connect_four_minimax::game::{is_terminal, Board, GameState, Player};

/// Four-in-a-row minimax engine.
#[derive(Parser)]
#[command(name = "connect-four", about = "Four-in-a-row minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask the engine for a move on a position
    BestMove {
        /// Board rows from top to bottom ('.', 'X', 'O')
        #[arg(long, num_args = 1.., conflicts_with = "moves")]
        board: Option<Vec<String>>,

        /// Columns played so far from an empty board, e.g. "3342"
        #[arg(long)]
        moves: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play the engine against the configured opponent
    Play {
        /// Override number of games
        #[arg(long)]
        games: Option<usize>,
    },
    /// Print the default configuration as TOML
    DefaultConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        app_config.engine.depth = depth;
    }
    if let Command::Play { games: Some(games) } = cli.command {
        app_config.play.games = games;
    }
    app_config.validate().context("validating configuration")?;

    match cli.command {
        Command::BestMove { board, moves, json } => {
            let state = load_position(&app_config, board, moves.as_deref())?;
            best_move(&app_config, &state, json)
        }
        Command::Play { .. } => play(&app_config),
        Command::DefaultConfig => {
            print!("{}", AppConfig::default_toml());
            Ok(())
        }
    }
}

/// Build the position to search from either a diagram or a move list.
fn load_position(
    config: &AppConfig,
    rows: Option<Vec<String>>,
    moves: Option<&str>,
) -> Result<GameState> {
    if let Some(rows) = rows {
        let board = Board::from_rows(&rows).context("parsing --board")?;
        let to_move = side_to_move(&board)?;
        return Ok(GameState::from_board(board, to_move));
    }

    let columns = moves
        .unwrap_or("")
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as usize)
                .with_context(|| format!("'{c}' is not a column digit"))
        })
        .collect::<Result<Vec<_>>>()?;
    GameState::from_moves(config.engine.rows, config.engine.cols, &columns)
        .context("replaying --moves")
}

/// Player one moves first, so equal piece counts mean player one is on turn.
fn side_to_move(board: &Board) -> Result<Player> {
    let count = |player: Player| {
        (0..board.cols())
            .map(|col| board.count_in_column(col, player))
            .sum::<usize>()
    };
    let (one, two) = (count(Player::One), count(Player::Two));
    match one.checked_sub(two) {
        Some(0) => Ok(Player::One),
        Some(1) => Ok(Player::Two),
        _ => bail!("impossible position: {one} X pieces vs {two} O pieces"),
    }
}

fn best_move(config: &AppConfig, state: &GameState, json: bool) -> Result<()> {
    if is_terminal(state.board()) {
        bail!("position is already decided:\n{}", state.board());
    }

    let mut engine = SearchEngine::new(state.current_player());
    let result = engine.best_move(state.board(), config.engine.depth);

    if json {
        println!("{}", serde_json::to_string(&result).context("serializing result")?);
    } else {
        match result.column {
            Some(col) => println!(
                "{} plays column {} (score {}, {} nodes)",
                state.current_player().name(),
                col,
                result.score,
                engine.nodes_searched()
            ),
            None => println!("no move available"),
        }
    }
    Ok(())
}

fn play(config: &AppConfig) -> Result<()> {
    let games = config.play.games;
    let mut summary = MatchSummary::default();

    println!(
        "Playing {} games: Minimax (depth {}) vs {:?} on {}x{}",
        games, config.engine.depth, config.play.opponent, config.engine.rows, config.engine.cols
    );
    println!("-------------------------------------------");

    for game in 0..games {
        let start = GameState::from_board(config.engine.empty_board()?, Player::One);
        let mut engine = MinimaxAgent::new(config.engine.depth);
        let mut opponent: Box<dyn Agent> = match config.play.opponent {
            Opponent::Random => Box::new(match config.play.seed {
                Some(seed) => RandomAgent::with_seed(seed.wrapping_add(game as u64)),
                None => RandomAgent::new(),
            }),
            Opponent::Minimax => Box::new(MinimaxAgent::new(config.engine.depth)),
        };

        // Alternate who starts
        let engine_side = if game % 2 == 0 { Player::One } else { Player::Two };
        let agents: [&mut dyn Agent; 2] = match engine_side {
            Player::One => [&mut engine as &mut dyn Agent, opponent.as_mut()],
            Player::Two => [opponent.as_mut(), &mut engine as &mut dyn Agent],
        };

        let record = play_match(start, agents).with_context(|| format!("game {}", game + 1))?;
        summary.record(&record, engine_side);

        let result = match record.winner() {
            Some(p) if p == engine_side => "engine wins",
            Some(_) => "engine loses",
            None => "draw",
        };
        println!(
            "Game {:>3} | engine as {:<10} | {:>2} moves | {}",
            game + 1,
            engine_side.name(),
            record.moves.len(),
            result
        );
        print!("{}", record.final_board);
        println!();
    }

    println!("-------------------------------------------");
    println!(
        "Wins {} / Losses {} / Draws {}  ({:.1}% win rate, {:.1} moves per game)",
        summary.wins,
        summary.losses,
        summary.draws,
        summary.win_rate() * 100.0,
        summary.average_length()
    );
    Ok(())
}
