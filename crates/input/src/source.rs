//! The `InputSource` capability and a scripted implementation for tests.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// The hard-stop keystroke was read. Not part of the game's own exit
    /// handling; callers should abort.
    #[error("interrupted")]
    Interrupted,
    #[error("input device error: {0}")]
    Io(#[from] io::Error),
}

/// Timed single-key acquisition.
///
/// `poll` blocks for at most `timeout`, returns as soon as a key is
/// available, and yields `Ok(None)` when the timeout elapses.
pub trait InputSource {
    fn poll(&mut self, timeout: Duration) -> Result<Option<char>, InputError>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self, timeout: Duration) -> Result<Option<char>, InputError> {
        (**self).poll(timeout)
    }
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn poll(&mut self, timeout: Duration) -> Result<Option<char>, InputError> {
        (**self).poll(timeout)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Key(Option<char>),
    Interrupt,
}

/// Replays a fixed sequence of poll results without blocking.
///
/// Once the script runs out every poll returns `Ok(None)`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    steps: VecDeque<Step>,
    polls: usize,
    last_timeout: Option<Duration>,
}

impl ScriptedInput {
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Option<char>>,
    {
        Self {
            steps: keys.into_iter().map(Step::Key).collect(),
            polls: 0,
            last_timeout: None,
        }
    }

    /// Script from a string; every character is one successful poll.
    pub fn from_keys(keys: &str) -> Self {
        Self::new(keys.chars().map(Some))
    }

    pub fn then_interrupt(mut self) -> Self {
        self.steps.push_back(Step::Interrupt);
        self
    }

    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn last_timeout(&self) -> Option<Duration> {
        self.last_timeout
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, timeout: Duration) -> Result<Option<char>, InputError> {
        self.polls += 1;
        self.last_timeout = Some(timeout);
        match self.steps.pop_front() {
            Some(Step::Key(key)) => Ok(key),
            Some(Step::Interrupt) => Err(InputError::Interrupted),
            None => Ok(None),
        }
    }
}
