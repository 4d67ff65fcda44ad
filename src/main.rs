use avalanche::config::Config;
use avalanche::display::{CrosstermDisplay, GameDisplay, LoggingDisplay};
use avalanche::engine::Game;
use avalanche::input::{InputEvent, TerminalInput};
use avalanche::persistence::FilePersistence;
use log::{debug, info};
use std::env;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = "avalanche.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("avalanche - Lord Avalot d'Argent text adventure");
        println!();
        println!("Usage: {} [config.toml] [--log-display]", args[0]);
        println!("  The config file defaults to {}", DEFAULT_CONFIG);
        println!("  --log-display logs every display operation (RUST_LOG=info)");
        return Ok(());
    }

    let config_path = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let log_display = args.iter().any(|a| a == "--log-display");

    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading {}: {}", config_path.display(), e);
            std::process::exit(1);
        }
    };

    let terminal = CrosstermDisplay::new()?;
    let display: Box<dyn GameDisplay> = if log_display {
        Box::new(LoggingDisplay::new(Box::new(terminal)))
    } else {
        Box::new(terminal)
    };
    let persistence = FilePersistence::new(config.game.save_dir.clone());
    let ticks_per_command = config.game.ticks_per_command;
    let limit = config.parser.max_input_length;

    let mut game = Game::new(config, display, persistence)?;
    let mut input = TerminalInput::new(limit);
    info!("Starting game (interactive: {})", input.is_interactive());
    game.start()?;

    while !game.finished() {
        match input.next_event(game.display.as_mut())? {
            InputEvent::Line(line) => {
                game.handle_line(&line)?;
                if !input.is_interactive() {
                    game.tick(ticks_per_command)?;
                }
            }
            InputEvent::Idle => game.tick(1)?,
            InputEvent::Walk(direction) => game.walk(direction)?,
            InputEvent::Quit => {
                debug!("Input closed");
                break;
            }
        }
    }

    info!("Game over after {} moves", game.state.moves);
    Ok(())
}
