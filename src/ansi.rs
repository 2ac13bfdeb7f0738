/*
ansi.rs

Copyright 2025 Hervé Quatremain

This file is part of Yuletide Arcade.

Yuletide Arcade is free software: you can redistribute it and/or modify it
under the terms of the GNU General Public License as published by the Free
Software Foundation, either version 3 of the License, or (at your option) any
later version.

Yuletide Arcade is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Yuletide Arcade. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! ANSI escape sequences for coloring the console games.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Text colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    Cyan,
    Magenta,
    BrightCyan,
    BrightMagenta,
    Orange,
    Green,
    Yellow,
    Red,
    /// No color.
    Plain,
}

impl Color {
    /// Escape sequence that selects the color.
    pub fn code(self) -> &'static str {
        match self {
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
            Color::BrightCyan => "\x1b[96m",
            Color::BrightMagenta => "\x1b[95m",
            Color::Orange => "\x1b[38;5;208m",
            Color::Green => "\x1b[92m",
            Color::Yellow => "\x1b[93m",
            Color::Red => "\x1b[91m",
            Color::Plain => RESET,
        }
    }

    /// Return the text in that color.
    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{RESET}", self.code())
    }

    /// Return the text in that color, in bold.
    pub fn paint_bold(self, text: &str) -> String {
        format!("{}{BOLD}{text}{RESET}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painted_text_is_reset() {
        assert_eq!(Color::Cyan.paint("elf"), "\x1b[36melf\x1b[0m");
        assert_eq!(Color::Magenta.paint_bold("x"), "\x1b[35m\x1b[1mx\x1b[0m");
    }
}
