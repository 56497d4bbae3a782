// Terminal front-end for the planner.
// `plan` runs a single tick and prints the decision; `interactive` lets you walk the level and watch the plan update.
// Level tiles: '|' '-' and arcs are walls, '=' ghost door, '.' food, 'o' capsule, 'P' player, 'G' ghost, 'X' dead ghost.

use clap::{Parser, Subcommand};
use pacman_planner::agent::{OnlinePlanningAgent, PlanReport, WorldSnapshot};
use pacman_planner::config::PlannerConfig;
use pacman_planner::console_interface::ConsoleInput::*;
use pacman_planner::console_interface::{
    UserAction, cleanup_terminal, handle_input, parse_level, render_game, render_plan_to_string, setup_terminal,
};
use pacman_planner::core::{Direction, Level, StepUpdate, step};
use pacman_planner::levels;
use pacman_planner::models::PlanRenderState;
use pacman_planner::search::SearchEngineKind;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pacman-planner", version, about = "Receding-horizon A* planner for a Pac-Man grid")]
struct Cli {
    /// Planner config as JSON; built-in defaults when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log destination while the terminal UI is up
    #[arg(long, global = true, default_value = "planner.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Plan a single tick and print the decision
    Plan {
        /// Built-in level name (classic, room) or path to a level file
        #[arg(default_value = "classic")]
        level: String,
        /// Plan as if a capsule was just eaten
        #[arg(long)]
        power: bool,
        /// Print a JSON report instead of the board
        #[arg(long)]
        json: bool,
    },
    /// Walk the level in the terminal and watch the plan update
    Interactive {
        #[arg(default_value = "classic")]
        level: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mode = cli.mode.unwrap_or(Mode::Interactive {
        level: "classic".to_string(),
    });

    init_logging(&mode, &cli.log_file)?;
    let config = PlannerConfig::load_or_default(cli.config.as_deref())?;

    let agent = match OnlinePlanningAgent::new(&config) {
        Ok(agent) => agent,
        Err(err) => {
            log::error!("{}; available engines: {:?}", err, SearchEngineKind::AVAILABLE);
            eprintln!("error: {}", err);
            std::process::exit(2);
        }
    };

    match mode {
        Mode::Plan { level, power, json } => run_plan(&agent, &level, power, json),
        Mode::Interactive { level } => run_interactive(&agent, &level),
    }
}

fn init_logging(mode: &Mode, log_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Mode::Interactive { .. } = mode {
        let file = std::fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_file)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn load_level(name: &str) -> Result<Level, Box<dyn std::error::Error>> {
    let level = match levels::builtin(name) {
        Some(text) => parse_level(text)?,
        None => parse_level(&std::fs::read_to_string(name)?)?,
    };
    log::info!(
        "loaded level {} ({} x {}, {} ghosts)",
        name,
        level.board.height(),
        level.board.width(),
        level.ghosts.len()
    );
    Ok(level)
}

fn run_plan(agent: &OnlinePlanningAgent, level_name: &str, power: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut level = load_level(level_name)?;
    level.power_mode = power;

    let world = WorldSnapshot::from_level(&level, agent.mapper(), Direction::Right);
    let perception = agent.perceive(&world);
    let outcome = agent.decide(&world, &perception);
    let report = PlanReport::new(&perception, &outcome);

    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    let danger_zone = perception.hazards.danger_zone(&level.board, agent.danger_radius());
    print!("{}", render_plan_to_string(&level, &danger_zone, &report.path));
    println!("{:?}", outcome);
    Ok(())
}

fn run_interactive(agent: &OnlinePlanningAgent, level_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let initial = load_level(level_name)?;
    let mut level = initial.clone();
    let mut direction = Direction::Right;
    let mut last_change = None;
    let mut error = None;
    let mut terminal = setup_terminal()?;

    'outer: loop {
        let world = WorldSnapshot::from_level(&level, agent.mapper(), direction);
        let perception = agent.perceive(&world);
        let outcome = agent.decide(&world, &perception);
        let to_render = PlanRenderState {
            danger_zone: perception.hazards.danger_zone(&level.board, agent.danger_radius()),
            won: !level.board.has_food(),
            level: level.clone(),
            outcome: outcome.clone(),
            error: error.take(),
            last_change,
        };
        render_game(&mut terminal, &to_render)?;

        if to_render.won {
            // Keep showing the win screen until user inputs
            loop {
                match handle_input() {
                    Ok(Timeout) => {}
                    Ok(_) => break 'outer,
                    Err(_) => {
                        log::error!("error reading input");
                        break 'outer;
                    }
                }
            }
        }

        let action = loop {
            match handle_input() {
                Ok(Quit) => break 'outer,
                Ok(UserAction(action)) => break action,
                Ok(_) => {
                    // No input, continue polling
                }
                Err(_) => {
                    log::error!("error reading input");
                    break 'outer;
                }
            }
        };

        let requested = match action {
            UserAction::Move(dir) => Some(dir),
            UserAction::ApplyPlan => outcome.direction(),
            UserAction::TogglePower => {
                level.power_mode = !level.power_mode;
                None
            }
            UserAction::Reset => {
                level = initial.clone();
                direction = Direction::Right;
                last_change = None;
                None
            }
        };

        if let Some(dir) = requested {
            match step(&level, dir) {
                StepUpdate::NextState(next, change) => {
                    level = next;
                    direction = dir;
                    last_change = Some(change);
                }
                StepUpdate::Error(err) => error = Some(err),
            }
        }
    }

    cleanup_terminal()?;
    Ok(())
}
