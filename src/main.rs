//! Terminal snake runner (default binary).
//!
//! Uses crossterm for raw-mode input and output. The game loop blocks on the
//! input poll, which also paces the frames.

use std::process;

use anyhow::Result;
use log::warn;

use snake_loop::engine::{Controller, GameConfig, GameError};
use snake_loop::input::TerminalInput;
use snake_loop::term::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result {
        Err(GameError::Interrupted) => {
            warn!("hard stop requested from the keyboard");
            println!("Interrupted");
            process::exit(1);
        }
        other => Ok(other?),
    }
}

fn run(term: &mut TerminalRenderer) -> Result<(), GameError> {
    let mut game = Controller::new(GameConfig::default(), TerminalInput::new(), term)?;
    game.run()
}
