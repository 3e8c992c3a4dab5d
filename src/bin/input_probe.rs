//! Prints every key the terminal input source delivers.
//!
//! Handy for checking raw-mode behaviour without the game: `q` quits,
//! Ctrl+C exercises the interrupt path.

use std::process;
use std::time::Duration;

use anyhow::Result;

use snake_loop::input::{direction_for_key, InputError, InputSource, RawModeGuard, TerminalInput};
use snake_loop::types::{DEFAULT_EXIT_KEY, DEFAULT_POLL_TIMEOUT_MS};

fn main() -> Result<()> {
    env_logger::init();

    let guard = RawModeGuard::enable()?;
    let mut input = TerminalInput::new();
    let timeout = Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS);

    print!("press keys ({} quits)\r\n", DEFAULT_EXIT_KEY);
    loop {
        match input.poll(timeout) {
            Ok(Some(ch)) => {
                print!(
                    "{:?} (U+{:04X}) steer={:?}\r\n",
                    ch,
                    ch as u32,
                    direction_for_key(ch).map(|d| d.as_str())
                );
                if ch == DEFAULT_EXIT_KEY {
                    break;
                }
            }
            Ok(None) => print!(".\r\n"),
            Err(InputError::Interrupted) => {
                drop(guard);
                println!("Interrupted");
                process::exit(1);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
