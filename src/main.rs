use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use crossterm::style::{style, Stylize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use slider_astar::shuffle::{random_solvable, random_walk};
use slider_astar::{
    handle_message, parse_board, spawn_solver, Board, SearchEngine, SolveRequest, SolveResponse,
    SolverConfig,
};

/// slider-astar: optimal sliding-tile puzzle solver.
#[derive(Parser)]
#[command(name = "slider-astar", version, about)]
struct Cli {
    /// Path to a solver config TOML file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Side length of a generated puzzle.
    #[arg(long)]
    size: Option<usize>,
    /// Seed for puzzle generation.
    #[arg(long)]
    seed: Option<u64>,
    /// Generate by this many random moves instead of a full shuffle.
    #[arg(long)]
    shuffle_moves: Option<usize>,
    /// Start board, e.g. "1 2 3 / 4 0 6 / 7 5 8". Generated when omitted.
    #[arg(long)]
    start: Option<String>,
    /// Goal board. Defaults to the ordered board with the blank last.
    #[arg(long)]
    goal: Option<String>,
    /// Read a JSON `[start, goal]` request from stdin and print the JSON response.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    if let Some(size) = cli.size {
        config.size = size;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.shuffle_moves.is_some() {
        config.shuffle_moves = cli.shuffle_moves;
    }
    config.validate()?;

    if cli.json {
        let mut message = String::new();
        std::io::stdin().read_to_string(&mut message)?;
        println!("{}", handle_message(&SearchEngine::new(config), &message)?);
        return Ok(());
    }

    let goal = match &cli.goal {
        Some(text) => parse_board(text)?,
        None => Board::standard_goal(config.size),
    };
    let start = match &cli.start {
        Some(text) => parse_board(text)?,
        None => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            match config.shuffle_moves {
                Some(steps) => random_walk(&goal, steps, &mut rng),
                None => random_solvable(&goal, &mut rng),
            }
        }
    };

    println!("Goal Puzzle:\n{}", render(&goal));
    println!("Start Puzzle:\n{}", render(&start));

    let request = SolveRequest::new(&start, &goal);
    let response = spawn_solver(SearchEngine::new(config), request)?.wait()?;

    match response {
        SolveResponse::Solved { moves, path, boards } => {
            println!("Found optimal solution with: {} moves", moves);
            for (step, rows) in path.iter().zip(boards.iter().skip(1)) {
                println!("{}\n{}", step, render(&Board::from_rows(rows)));
            }
        }
        SolveResponse::NotFound => println!("No solution found"),
    }
    Ok(())
}

/// Board text with the blank highlighted.
fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in board.rows() {
        for val in row {
            let cell = format!("{:2}", val);
            if val == 0 {
                out.push_str(&format!("{} ", style(&cell).reverse()));
            } else {
                out.push_str(&format!("{} ", style(&cell).bold()));
            }
        }
        out.push('\n');
    }
    out
}
