use std::path::PathBuf;

use anstream::println;
use clap::Parser;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use wayfinder::problems::grid::Cell;
use wayfinder::problems::grid::GridCost;
use wayfinder::problems::grid::GridHeuristic;
use wayfinder::problems::grid::GridProblem;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    /// Plain Dijkstra
    Zero,
    /// A* using Manhattan distance to the goal
    Manhattan,
}

impl From<HeuristicArg> for GridHeuristic {
    fn from(h: HeuristicArg) -> Self {
        match h {
            HeuristicArg::Zero => GridHeuristic::Zero,
            HeuristicArg::Manhattan => GridHeuristic::Manhattan,
        }
    }
}

/// Finds the cheapest way through grid mazes
#[derive(Parser, Debug)]
#[clap(long_version = wayfinder::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maze files, see `wayfinder::problems::grid` for the format
    #[arg(required = true)]
    pub problems: Vec<PathBuf>,

    #[arg(
        long,
        value_enum,
        env = "WAYFINDER_HEURISTIC",
        default_value_t = HeuristicArg::Manhattan
    )]
    pub heuristic: HeuristicArg,

    /// Give up on paths costing more than this
    #[arg(long, env = "WAYFINDER_MAX_COST")]
    pub max_cost: Option<GridCost>,

    /// Print the distance to every reachable cell instead of solving
    #[arg(long, default_value_t = false)]
    pub flood: bool,

    /// Print how much memory the search result takes
    #[arg(long, default_value_t = false)]
    pub memory_stats: bool,

    /// More logging, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn solve(args: &Args, problem: &GridProblem) -> std::io::Result<()> {
    let heuristic = GridHeuristic::from(args.heuristic);
    let result = problem
        .solve(heuristic, args.max_cost, true)
        .map_err(std::io::Error::other)?;

    let Some(result) = result else {
        println!("{}", "No path found".red());
        return Ok(());
    };
    let path = result.path().map_err(std::io::Error::other)?;
    if let Some(path) = path {
        println!("{}", problem.render_path(&path));
        println!(
            "Cost {} in {} steps using {heuristic}",
            path.cost().green(),
            path.len()
        );
    }
    println!("{}", result.stats().dimmed());
    if args.memory_stats {
        result.write_memory_stats(std::io::stdout().lock())?;
    }
    Ok(())
}

fn flood(args: &Args, problem: &GridProblem) -> std::io::Result<()> {
    let result = problem.flood().map_err(std::io::Error::other)?;

    let mut distances: Vec<(&Cell, GridCost)> = result.distances().collect();
    distances.sort_by_key(|&(cell, cost)| (cost, *cell));
    for (cell, cost) in distances {
        println!("{cell} {}", cost.yellow());
    }
    println!("{}", result.stats().dimmed());
    if args.memory_stats {
        result.write_memory_stats(std::io::stdout().lock())?;
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    args.color.write_global();
    // `RUST_LOG` directives refine the `-v` level. Records from `log` are bridged.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_target(false)
        .init();

    for p in &args.problems {
        let problem = GridProblem::try_from(p.as_path()).map_err(std::io::Error::other)?;
        log::info!("Loaded {p:?} {:?}", problem.grid());
        println!("{}", p.display().bold());
        println!("{problem}");

        if args.flood {
            flood(&args, &problem)?;
        } else {
            solve(&args, &problem)?;
        }
    }

    Ok(())
}
