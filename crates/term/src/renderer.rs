//! TerminalRenderer: flushes rendered frames to a real terminal.
//!
//! Every frame is a full redraw: clear, home the cursor, print the bordered
//! grid, then the diagnostics dump. There is no diffing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{Diagnostics, Frame, Tone};
use crate::sink::FrameSink;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode keeps key presses unbuffered and unechoed for the input
    /// source for the whole session.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl FrameSink for TerminalRenderer {
    fn present(&mut self, frame: &Frame, diagnostics: &Diagnostics) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, diagnostics, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Encode a full-frame redraw plus diagnostics into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(frame: &Frame, diagnostics: &Diagnostics, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<Tone> = None;
    for line in frame.lines() {
        for token in line {
            if current != Some(token.tone) {
                apply_tone_into(out, token.tone)?;
                current = Some(token.tone);
            }
            out.queue(Print(token.ch))?;
        }
        out.queue(Print("\r\n"))?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;

    out.queue(Print("\r\n"))?;
    for (name, values) in diagnostics.iter() {
        out.queue(Print(format!("{}: [{}]\r\n", name, values.join(", "))))?;
    }
    Ok(())
}

fn apply_tone_into(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(tone_color(tone)))?;
    out.queue(SetAttribute(Attribute::Bold))?;
    Ok(())
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Background => Color::DarkBlue,
        Tone::Content => Color::DarkRed,
    }
}
