//! CLI entry point for the block puzzle search.
//!
//! Usage:
//!   block-search solve [<puzzle.json>] [options]
//!   block-search solve --stdin [options]
//!   block-search moves [options]
//!
//! Solve options:
//!   --order <dfs|bfs>          Traversal order (default: bfs)
//!   --max-expansions <n>       Stop after expanding n nodes
//!   --timeout <seconds>        Stop after this many seconds
//!   --red/--blue/--hands <n>   Classic puzzle when no file is given (default: 3/3/2)
//!   --safety <strict|blue-guarded>
//!   --json                     Print the result as JSON

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use block_search::input::{read_puzzle_file, read_puzzle_stdin};
use block_search::{
    compute_possible_moves, render_path, render_state, BlockState, InputError, Pile, PileCounts,
    PuzzleConfig, PuzzleFile, SafetyRule, SearchConfig, SearchRun, SearchStats, Termination,
    Traversal,
};

#[derive(Parser)]
#[command(name = "block-search")]
#[command(about = "Depth-first and breadth-first search over the block sorting puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Dfs,
    Bfs,
}

impl From<Order> for Traversal {
    fn from(order: Order) -> Self {
        match order {
            Order::Dfs => Traversal::DepthFirst,
            Order::Bfs => Traversal::BreadthFirst,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Safety {
    Strict,
    BlueGuarded,
}

impl From<Safety> for SafetyRule {
    fn from(safety: Safety) -> Self {
        match safety {
            Safety::Strict => SafetyRule::Strict,
            Safety::BlueGuarded => SafetyRule::BlueGuarded,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HandsAt {
    Pile1,
    Pile2,
}

impl From<HandsAt> for Pile {
    fn from(hands: HandsAt) -> Self {
        match hands {
            HandsAt::Pile1 => Pile::Pile1,
            HandsAt::Pile2 => Pile::Pile2,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a sequence of moves from the start state to the goal
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Traversal order
        #[arg(long, value_enum, default_value = "bfs")]
        order: Order,

        /// Maximum number of nodes to expand
        #[arg(long)]
        max_expansions: Option<usize>,

        /// Maximum search time in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Red blocks in the classic puzzle (ignored with a file)
        #[arg(long, default_value = "3")]
        red: i32,

        /// Blue blocks in the classic puzzle (ignored with a file)
        #[arg(long, default_value = "3")]
        blue: i32,

        /// Blocks carried per move in the classic puzzle (ignored with a file)
        #[arg(long, default_value = "2")]
        hands: i32,

        /// Safety rule for the classic puzzle (ignored with a file)
        #[arg(long, value_enum, default_value = "strict")]
        safety: Safety,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the moves available out of each pile
    Moves {
        #[arg(long, default_value = "3")]
        pile1_red: i32,

        #[arg(long, default_value = "3")]
        pile1_blue: i32,

        #[arg(long, default_value = "0")]
        pile2_red: i32,

        #[arg(long, default_value = "0")]
        pile2_blue: i32,

        /// Where the hands are
        #[arg(long, value_enum, default_value = "pile1")]
        at: HandsAt,

        /// Blocks carried per move
        #[arg(long, default_value = "2")]
        hands: i32,
    },
}

/// JSON output of a solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    termination: Termination,
    #[serde(flatten)]
    stats: SearchStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<BlockState>>,
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Solve {
            file,
            stdin,
            order,
            max_expansions,
            timeout,
            red,
            blue,
            hands,
            safety,
            json,
        } => {
            let puzzle = match load_puzzle(file, stdin, red, blue, hands, safety) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            };

            let config = SearchConfig {
                traversal: order.into(),
                max_expansions,
                timeout: timeout.map(Duration::from_secs),
            };

            let result = block_search::run(puzzle.start_node(), &puzzle.goal, &config);

            if json {
                print_json(&result);
            } else {
                print_text(&result, &puzzle.config());
            }

            if result.solved() {
                0
            } else {
                1
            }
        }
        Commands::Moves {
            pile1_red,
            pile1_blue,
            pile2_red,
            pile2_blue,
            at,
            hands,
        } => {
            let state = BlockState::new(
                PileCounts::new(pile1_red, pile1_blue),
                PileCounts::new(pile2_red, pile2_blue),
                at.into(),
            );
            print_moves(&state, hands);
            0
        }
    };

    process::exit(code);
}

fn load_puzzle(
    file: Option<PathBuf>,
    stdin: bool,
    red: i32,
    blue: i32,
    hands: i32,
    safety: Safety,
) -> Result<PuzzleFile, InputError> {
    if stdin {
        read_puzzle_stdin()
    } else if let Some(path) = file {
        read_puzzle_file(&path)
    } else {
        let config = PuzzleConfig::new(red, blue, hands).with_safety(safety.into());
        Ok(PuzzleFile::classic(config))
    }
}

fn print_json(result: &SearchRun<block_search::BlockNode>) {
    let output = SolveOutput {
        solved: result.solved(),
        termination: result.termination,
        stats: result.stats.clone(),
        path: result.solved().then(|| result.last.path().to_vec()),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error: failed to encode result: {}", e),
    }
}

fn print_text(result: &SearchRun<block_search::BlockNode>, config: &PuzzleConfig) {
    let stats = &result.stats;
    match result.termination {
        Termination::GoalReached => {
            println!(
                "Solved in {} moves ({} nodes examined, {} ms)\n",
                result.last.depth(),
                stats.nodes_examined,
                stats.time_elapsed_ms
            );
            println!("{}", render_path(result.last.path(), config));
        }
        Termination::FrontierExhausted => {
            println!(
                "No solution: every reachable state explored ({} nodes examined)",
                stats.nodes_examined
            );
        }
        Termination::ExpansionLimit => {
            println!(
                "Gave up after expanding {} nodes; last state:\n{}",
                stats.nodes_expanded,
                render_state(result.last.state(), config)
            );
        }
        Termination::TimedOut => {
            println!(
                "Timed out after {} ms; last state:\n{}",
                stats.time_elapsed_ms,
                render_state(result.last.state(), config)
            );
        }
    }
}

fn print_moves(state: &BlockState, hands: i32) {
    let config = PuzzleConfig::from_state(state, hands);
    println!("{}\n", render_state(state, &config));

    let moves = compute_possible_moves(state, hands);
    for from in [Pile::Pile1, Pile::Pile2] {
        let marker = if from == state.hands { " (hands here)" } else { "" };
        println!("From {:?}{}:", from, marker);
        let listed = moves.for_pile(from);
        if listed.is_empty() {
            println!("  none");
        }
        for mv in listed {
            println!("  {} red, {} blue", mv.red, mv.blue);
        }
    }
}
