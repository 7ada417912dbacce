use std::{
    collections::HashSet,
    io::{Stdout, Write},
};

use crossterm::{
    QueueableCommand,
    style::{self, Attribute, Color, Stylize},
    terminal,
};

use escape_maze::{
    Coord, MazeConfig, MazeEngine, MazeResult, Tile,
    generators::{CarveOrigin, NoiseParams},
    layout::WorldTransform,
    logging,
    maze::Marker,
    placement::GoalPolicy,
    solvers::shortest_path,
};

const USAGE: &str = "Usage: escape-maze [WIDTH] [HEIGHT] [SEED] [--noise] [--random-goal] \
                     [--random-origin] [--solve] [--verbose]";

struct Args {
    width: u16,
    height: u16,
    seed: Option<u64>,
    noise: bool,
    random_goal: bool,
    random_origin: bool,
    solve: bool,
    verbose: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            width: 21,
            height: 17,
            seed: None,
            noise: false,
            random_goal: false,
            random_origin: false,
            solve: false,
            verbose: false,
        }
    }
}

impl Args {
    /// Parses the command line. Returns `None` on anything unrecognized.
    fn parse(args: impl Iterator<Item = String>) -> Option<Self> {
        let mut parsed = Args::default();
        let mut positional = 0;
        for arg in args {
            match arg.as_str() {
                "--noise" => parsed.noise = true,
                "--random-goal" => parsed.random_goal = true,
                "--random-origin" => parsed.random_origin = true,
                "--solve" => parsed.solve = true,
                "--verbose" => parsed.verbose = true,
                _ => {
                    match positional {
                        0 => parsed.width = arg.parse().ok()?,
                        1 => parsed.height = arg.parse().ok()?,
                        2 => parsed.seed = Some(arg.parse().ok()?),
                        _ => return None,
                    }
                    positional += 1;
                }
            }
        }
        Some(parsed)
    }

    fn config(&self) -> MazeConfig {
        let mut config = MazeConfig::default();
        if self.noise {
            config = config.with_noise(NoiseParams::default());
        }
        if self.random_goal {
            config = config.with_goal_policy(GoalPolicy::RandomReachable);
        }
        if self.random_origin {
            config = config.with_carve_origin(CarveOrigin::Random);
        }
        config
    }
}

/// Prints the maze with start, goal and optional route overlaid.
/// Falls back to the plain text dump when the terminal is too narrow.
fn print_maze(
    stdout: &mut Stdout,
    result: &MazeResult,
    route: &HashSet<Coord>,
) -> std::io::Result<()> {
    let grid = result.grid();
    let fits = match terminal::size() {
        Ok((term_width, _)) => term_width >= grid.width().saturating_mul(Tile::CELL_WIDTH),
        Err(_) => false,
    };
    if !fits {
        write!(stdout, "{}", grid)?;
        return stdout.flush();
    }

    for coord in grid.coords() {
        if coord == result.start() {
            stdout.queue(style::Print(Marker::Start))?;
        } else if coord == result.goal() {
            stdout.queue(style::Print(Marker::Goal))?;
        } else if route.contains(&coord) {
            stdout.queue(style::Print(Marker::Route))?;
        } else {
            stdout.queue(style::Print(grid[coord]))?;
        }
        if coord.0 == grid.width() - 1 {
            stdout.queue(style::Print("\n"))?;
        }
    }
    stdout.flush()
}

fn main() -> std::io::Result<()> {
    let args = match Args::parse(std::env::args().skip(1)) {
        Some(args) => args,
        None => {
            eprintln!("{}", USAGE);
            return Ok(());
        }
    };
    let _guard = logging::init(args.verbose || logging::debug_env());

    let seed = args.seed.unwrap_or_else(rand::random);
    let engine = MazeEngine::new(args.config());
    let result = match engine.generate(args.width, args.height, seed) {
        Ok(result) => result,
        Err(err) => {
            tracing::error!("[main] generation failed: {}", err);
            eprintln!("Could not generate maze: {}", err);
            return Ok(());
        }
    };

    let route: HashSet<Coord> = if args.solve {
        match shortest_path(result.grid(), result.start(), result.goal()) {
            Ok(path) => path.unwrap_or_default().into_iter().collect(),
            Err(err) => {
                eprintln!("Could not solve maze: {}", err);
                HashSet::new()
            }
        }
    } else {
        HashSet::new()
    };

    let mut stdout = std::io::stdout();
    print_maze(&mut stdout, &result, &route)?;

    let transform = WorldTransform::default();
    let grid = result.grid();
    let summary = format!(
        "{}x{} maze ({}), seed {}\nstart {:?} at world {:?}, goal {:?} at world {:?}\n",
        grid.width(),
        grid.height(),
        engine.config().generator,
        seed,
        result.start(),
        transform.cell_to_world(grid, result.start()),
        result.goal(),
        transform.cell_to_world(grid, result.goal()),
    );
    stdout.queue(style::PrintStyledContent(
        summary.with(Color::Green).attribute(Attribute::Bold),
    ))?;
    if args.solve {
        // The route includes both ends
        let steps = route.len().saturating_sub(1);
        stdout.queue(style::PrintStyledContent(
            format!("shortest route: {} steps\n", steps).with(Color::Yellow),
        ))?;
    }
    stdout.flush()
}
