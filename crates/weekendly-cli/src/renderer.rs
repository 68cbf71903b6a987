//! Terminal rendering for markdown output.
//!
//! Core display types produce markdown. With colors enabled, headers are
//! printed with their hash marks in a color per level and other lines are
//! styled by termimad; otherwise the markdown is printed unchanged.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Green);
        skin.inline_code.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::Reset);

        Self { rich_enabled, skin }
    }

    /// ANSI color code for a header line.
    fn header_color(line: &str) -> Option<u8> {
        match line.chars().take_while(|&c| c == '#').count() {
            0 => None,
            1 => Some(36),
            2 => Some(34),
            _ => Some(35),
        }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match Self::header_color(line) {
                Some(code) => println!("\x1b[1;{code}m{line}\x1b[0m"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }

    /// Print text exactly as given, e.g. an export, followed by a newline.
    pub fn raw(&self, text: &str) -> Result<()> {
        println!("{text}");
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
