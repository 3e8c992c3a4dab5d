//! Where finished frames go.

use anyhow::Result;

use crate::core::{Diagnostics, Frame};

/// Receives one full frame and its diagnostics per tick.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame, diagnostics: &Diagnostics) -> Result<()>;
}

impl<T: FrameSink + ?Sized> FrameSink for &mut T {
    fn present(&mut self, frame: &Frame, diagnostics: &Diagnostics) -> Result<()> {
        (**self).present(frame, diagnostics)
    }
}

/// Keeps every presented frame as plain text. Useful headless.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    frames: Vec<(String, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(frame, diagnostics)` text pairs in presentation order.
    pub fn frames(&self) -> &[(String, String)] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(|(f, _)| f.as_str())
    }

    pub fn last_diagnostics(&self) -> Option<&str> {
        self.frames.last().map(|(_, d)| d.as_str())
    }
}

impl FrameSink for RecordingSink {
    fn present(&mut self, frame: &Frame, diagnostics: &Diagnostics) -> Result<()> {
        self.frames.push((frame.to_string(), diagnostics.to_string()));
        Ok(())
    }
}
