//! Pixel buffer of glyph/color cells and its bordered text projection.

use std::fmt;

use crate::types::{Rgb, BACKGROUND_GLYPH};

/// A single grid cell. `glyph == None` renders as the background glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub glyph: Option<char>,
    pub color: Rgb,
}

impl Pixel {
    pub const fn empty(color: Rgb) -> Self {
        Self { glyph: None, color }
    }

    pub fn is_empty(&self) -> bool {
        self.glyph.is_none()
    }
}

/// A rejected out-of-bounds write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Screen overflow: x = {}, y = {}", self.x, self.y)
    }
}

/// Fixed-size 2D grid of pixels, row-major by `y` then `x`.
///
/// Dimensions never change after construction. Writes outside the grid are
/// dropped and recorded as [`Overflow`]s; the caller drains them once per
/// frame with [`Screen::take_errors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: u16,
    height: u16,
    background: Rgb,
    background_glyph: char,
    cells: Vec<Pixel>,
    errors: Vec<Overflow>,
}

impl Screen {
    pub fn new(width: u16, height: u16, background: Rgb) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            background,
            background_glyph: BACKGROUND_GLYPH,
            cells: vec![Pixel::empty(background); len],
            errors: Vec::new(),
        }
    }

    pub fn with_background_glyph(mut self, glyph: char) -> Self {
        self.background_glyph = glyph;
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn background_glyph(&self) -> char {
        self.background_glyph
    }

    pub fn cells(&self) -> &[Pixel] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one cell. Out-of-bounds writes leave the grid untouched and
    /// append exactly one [`Overflow`].
    pub fn set_cell(&mut self, x: i32, y: i32, glyph: char, color: Rgb) {
        match self.idx(x, y) {
            Some(i) => {
                self.cells[i] = Pixel {
                    glyph: Some(glyph),
                    color,
                }
            }
            None => self.errors.push(Overflow { x, y }),
        }
    }

    /// Reset every cell to the background. Recorded errors are kept.
    pub fn clear(&mut self) {
        self.cells.fill(Pixel::empty(self.background));
    }

    pub fn errors(&self) -> &[Overflow] {
        &self.errors
    }

    /// Drain the overflow records accumulated since the last call.
    pub fn take_errors(&mut self) -> Vec<Overflow> {
        std::mem::take(&mut self.errors)
    }

    /// Project the grid into a bordered frame. Does not mutate the buffer.
    pub fn render(&self) -> Frame {
        let w = self.width as usize;
        let mut lines = Vec::with_capacity(self.height as usize + 2);

        lines.push(border_line(w, '┌', '┐'));
        for row in self.cells.chunks(w.max(1)).take(self.height as usize) {
            let mut line = Vec::with_capacity(w * 2 + 1);
            line.push(Token::background('│'));
            for (i, px) in row.iter().enumerate() {
                if i > 0 {
                    line.push(Token::background(' '));
                }
                line.push(match px.glyph {
                    Some(ch) => Token::content(ch),
                    None => Token::background(self.background_glyph),
                });
            }
            line.push(Token::background('│'));
            lines.push(line);
        }
        lines.push(border_line(w, '└', '┘'));

        Frame {
            width: self.width,
            height: self.height,
            lines,
        }
    }
}

fn border_line(width: usize, left: char, right: char) -> Vec<Token> {
    let mut line = Vec::with_capacity(width * 2 + 1);
    line.push(Token::background(left));
    for i in 0..width {
        if i > 0 {
            line.push(Token::background(' '));
        }
        line.push(Token::background('─'));
    }
    line.push(Token::background(right));
    line
}

/// Display attribute of a rendered token.
///
/// This is a two-tone legacy attribute, not per-pixel RGB: borders and empty
/// cells share one tone, every content cell uses the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Background,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub ch: char,
    pub tone: Tone,
}

impl Token {
    pub const fn background(ch: char) -> Self {
        Self {
            ch,
            tone: Tone::Background,
        }
    }

    pub const fn content(ch: char) -> Self {
        Self {
            ch,
            tone: Tone::Content,
        }
    }
}

/// Rendered frame: top border, one line per grid row, bottom border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    lines: Vec<Vec<Token>>,
}

impl Frame {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn lines(&self) -> &[Vec<Token>] {
        &self.lines
    }

    /// Token rendered for grid cell `(x, y)`.
    pub fn token_at(&self, x: u16, y: u16) -> Option<Token> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let line = self.lines.get(y as usize + 1)?;
        line.get(1 + 2 * x as usize).copied()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for token in line {
                write!(f, "{}", token.ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_screen_is_all_background() {
        let screen = Screen::new(4, 3, Rgb::BLACK);
        assert_eq!(screen.cells().len(), 12);
        assert!(screen.cells().iter().all(|p| *p == Pixel::empty(Rgb::BLACK)));
        assert!(screen.errors().is_empty());
    }

    #[test]
    fn set_cell_in_bounds_changes_only_target() {
        let mut screen = Screen::new(4, 3, Rgb::BLACK);
        screen.set_cell(2, 1, 'x', Rgb::WHITE);

        for y in 0..3 {
            for x in 0..4 {
                let px = screen.get(x, y).unwrap();
                if (x, y) == (2, 1) {
                    assert_eq!(px.glyph, Some('x'));
                    assert_eq!(px.color, Rgb::WHITE);
                } else {
                    assert!(px.is_empty());
                }
            }
        }
        assert!(screen.errors().is_empty());
    }

    #[test]
    fn set_cell_rejects_each_edge() {
        let mut screen = Screen::new(4, 3, Rgb::BLACK);
        let before = screen.cells().to_vec();

        screen.set_cell(-1, 0, 'x', Rgb::WHITE);
        screen.set_cell(0, -1, 'x', Rgb::WHITE);
        screen.set_cell(4, 0, 'x', Rgb::WHITE);
        screen.set_cell(0, 3, 'x', Rgb::WHITE);

        assert_eq!(screen.cells(), &before[..]);
        assert_eq!(
            screen.errors(),
            &[
                Overflow { x: -1, y: 0 },
                Overflow { x: 0, y: -1 },
                Overflow { x: 4, y: 0 },
                Overflow { x: 0, y: 3 },
            ]
        );
    }

    #[test]
    fn clear_resets_cells_but_keeps_errors() {
        let mut screen = Screen::new(2, 2, Rgb::BLACK);
        screen.set_cell(1, 1, 'x', Rgb::WHITE);
        screen.set_cell(9, 9, 'x', Rgb::WHITE);
        screen.clear();

        assert!(screen.cells().iter().all(Pixel::is_empty));
        assert_eq!(screen.errors().len(), 1);
        assert_eq!(screen.take_errors().len(), 1);
        assert!(screen.errors().is_empty());
    }

    #[test]
    fn render_draws_bordered_grid() {
        let mut screen = Screen::new(3, 2, Rgb::BLACK);
        screen.set_cell(1, 0, 'A', Rgb::WHITE);

        let text = screen.render().to_string();
        let expected = "┌─ ─ ─┐\n│® A ®│\n│® ® ®│\n└─ ─ ─┘";
        assert_eq!(text, expected);
    }

    #[test]
    fn render_tones_follow_content() {
        let mut screen = Screen::new(2, 2, Rgb::BLACK);
        screen.set_cell(0, 1, 'A', Rgb::WHITE);
        let frame = screen.render();

        assert_eq!(frame.token_at(0, 1), Some(Token::content('A')));
        assert_eq!(frame.token_at(1, 1), Some(Token::background('®')));
        assert_eq!(frame.token_at(2, 0), None);
        assert!(frame.lines()[0].iter().all(|t| t.tone == Tone::Background));
    }

    #[test]
    fn render_does_not_mutate() {
        let mut screen = Screen::new(2, 2, Rgb::BLACK);
        screen.set_cell(0, 0, 'A', Rgb::WHITE);
        screen.set_cell(5, 0, 'A', Rgb::WHITE);
        let before = screen.clone();
        let _ = screen.render();
        assert_eq!(screen, before);
    }

    #[test]
    fn custom_background_glyph() {
        let screen = Screen::new(1, 1, Rgb::BLACK).with_background_glyph('.');
        assert_eq!(screen.render().to_string(), "┌─┐\n│.│\n└─┘");
    }
}
