use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::input::InputError;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// Hard stop requested from the input device. Distinct from the normal
    /// exit-key termination, which is not an error.
    #[error("interrupted")]
    Interrupted,
    #[error("input device error: {0}")]
    Input(#[source] io::Error),
    #[error("frame output failed: {0}")]
    Render(anyhow::Error),
}

impl From<InputError> for GameError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Interrupted => GameError::Interrupted,
            InputError::Io(e) => GameError::Input(e),
        }
    }
}
