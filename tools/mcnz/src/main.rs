use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use itertools::Itertools;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use mcnz_game::Arena;
use mcnz_game::Player;
use mcnz_game::WinningPartition;
use mcnz_game::ladder_arena;
use mcnz_game::random_parity_game;
use mcnz_game::sample_arena;
use mcnz_game::solve_zielonka;
use mcnz_tools::VerbosityFlag;
use mcnz_tools::Version;
use mcnz_tools::VersionFlag;
use mcnz_utilities::McnzError;
use mcnz_utilities::Timing;

#[derive(clap::Parser, Debug)]
#[command(
    about = "A command line tool to solve parity games with the McNaughton-Zielonka algorithm",
    arg_required_else_help = true
)]
struct Cli {
    #[command(flatten)]
    version: VersionFlag,

    #[command(flatten)]
    verbosity: VerbosityFlag,

    #[arg(long, global = true)]
    timings: bool,

    #[command(subcommand)]
    commands: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Sample(SampleArgs),
    Random(RandomArgs),
}

/// The built-in arenas.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Sample {
    /// The eight node game on `a` to `h`.
    First,
    /// Two cross-linked rails of eight nodes.
    Ladder,
}

/// Arguments for solving one of the built-in arenas
#[derive(clap::Args, Debug)]
struct SampleArgs {
    #[arg(value_enum)]
    sample: Sample,
}

/// Arguments for solving a randomly generated arena
#[derive(clap::Args, Debug)]
struct RandomArgs {
    #[arg(long, default_value_t = 100)]
    vertices: usize,

    #[arg(long, default_value_t = 8)]
    priorities: usize,

    /// The maximal number of outgoing edges of every vertex
    #[arg(long, default_value_t = 3)]
    outdegree: usize,

    /// The seed of the generator, chosen randomly when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Whether to print every vertex of the winning regions, not just their sizes.
    #[arg(long, default_value_t = false)]
    full_solution: bool,
}

fn main() -> Result<ExitCode, McnzError> {
    let cli = Cli::parse();

    let mut timing = Timing::new();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    if cli.version.into() {
        eprintln!("{}", Version);
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(command) = &cli.commands {
        match command {
            Commands::Sample(args) => handle_sample(args, &mut timing)?,
            Commands::Random(args) => handle_random(args, &mut timing)?,
        }
    }

    if cli.timings {
        timing.print();
    }

    Ok(ExitCode::SUCCESS)
}

/// Handle the `sample` subcommand.
///
/// Builds one of the built-in arenas and prints both winning regions.
fn handle_sample(args: &SampleArgs, timing: &mut Timing) -> Result<(), McnzError> {
    let mut time_construct = timing.start("construct");
    let arena = match args.sample {
        Sample::First => sample_arena()?,
        Sample::Ladder => ladder_arena()?,
    };
    time_construct.finish();

    let partition = solve(&arena, timing)?;
    print!("{partition}");

    Ok(())
}

/// Handle the `random` subcommand.
///
/// Generates a deadlock free arena with the given parameters and solves it.
fn handle_random(args: &RandomArgs, timing: &mut Timing) -> Result<(), McnzError> {
    if args.vertices == 0 || args.priorities == 0 {
        return Err("The number of vertices and priorities should be positive".into());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Generating random parity game with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut time_construct = timing.start("construct");
    let arena = random_parity_game(&mut rng, true, args.vertices, args.priorities, args.outdegree);
    time_construct.finish();

    let partition = solve(&arena, timing)?;
    if args.full_solution {
        print!("{partition}");
    } else {
        for player in Player::ALL {
            println!("W{}: {} vertices", player.to_index(), partition[player].len());
        }
    }

    Ok(())
}

/// Solves the arena and reports the size of both regions.
fn solve(arena: &Arena, timing: &mut Timing) -> Result<WinningPartition, McnzError> {
    let mut time_solve = timing.start("solve");
    let partition = solve_zielonka(arena)?;
    time_solve.finish();

    info!(
        "Solved {} vertices: {}",
        partition.len(),
        Player::ALL
            .iter()
            .map(|player| format!("{} vertices won by {player}", partition[*player].len()))
            .format(", ")
    );

    Ok(partition)
}
