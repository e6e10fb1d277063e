use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sokoban::{Board, Levels, Replay, parse_moves, random_walk};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PrintMode {
    Each,
    Final,
    None,
}

#[derive(Parser)]
#[command(name = "sokoban")]
#[command(about = "Play moves on a Sokoban level", long_about = None)]
struct Args {
    /// Path to the levels file (XSB format); the demo level is used if omitted
    #[arg(value_name = "FILE")]
    levels_file: Option<String>,

    /// Level number to load (1-indexed)
    #[arg(value_name = "LEVEL", default_value = "1")]
    level: usize,

    /// Moves to apply, in LURD notation
    #[arg(short, long, default_value = "")]
    moves: String,

    /// Number of random moves to apply after the given moves
    #[arg(short, long, default_value = "0")]
    random_walk: usize,

    /// Seed for the random walk
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// When to print the board
    #[arg(short, long, value_enum, default_value = "final")]
    print: PrintMode,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn load_board(args: &Args) -> Result<Board, String> {
    let Some(path) = &args.levels_file else {
        return Ok(Board::demo());
    };

    let levels = Levels::from_file(path).map_err(|e| format!("Error loading levels: {}", e))?;

    if args.level == 0 {
        return Err("Error: level numbers must be at least 1".to_string());
    }

    levels.get(args.level - 1).cloned().ok_or_else(|| {
        format!(
            "Error: level {} not found (file contains {} levels)",
            args.level,
            levels.len()
        )
    })
}

fn run(args: &Args) -> Result<(), String> {
    let mut board = load_board(args)?;
    let moves = parse_moves(&args.moves).map_err(|e| format!("Error: {}", e))?;

    if args.print == PrintMode::Each {
        println!("Starting position:\n{}", board);
    }

    let mut replay = Replay::default();

    for &dir in &moves {
        let step = board.step(dir);
        replay.record(dir, step);
        if args.print == PrintMode::Each {
            match step {
                Some(_) => println!("Move {} ({}):\n{}", dir, replay.moved(), board),
                None => println!("Move {} blocked", dir),
            }
        }
    }

    if args.random_walk > 0 {
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        replay.append(&random_walk(&mut board, &mut rng, args.random_walk));
        if args.print == PrintMode::Each {
            println!("After {} random moves:\n{}", args.random_walk, board);
        }
    }

    if args.print == PrintMode::Final {
        println!("{}", board);
    }

    println!(
        "moves: {:<5}  pushes: {:<5}  blocked: {:<5}  solved: {}",
        replay.moved(),
        replay.pushes(),
        replay.blocked(),
        if board.is_solved() { 'Y' } else { 'N' }
    );
    if replay.moved() > 0 {
        println!("lurd: {}", replay.notation());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
