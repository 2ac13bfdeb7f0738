/*
main.rs

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

mod ansi;
#[cfg(feature = "gui")]
mod application;
mod cli_options;
mod config;
// Only the scoreboard uses the cookie clicker without the graphical interface
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
mod cookie;
#[cfg(feature = "gui")]
mod draw;
mod highscores;
mod madlib;
mod saver;
mod sushi;
mod trees;
#[cfg(feature = "gui")]
mod widgets;

use config::{GETTEXT_PACKAGE, LOCALEDIR};
use gettextrs::{bind_textdomain_codeset, bindtextdomain, textdomain};
use log::warn;
use std::process::ExitCode;

/// Set up gettext translations.
///
/// Without translations, the games run in English.
pub fn setup_translations() {
    if let Err(e) = bindtextdomain(GETTEXT_PACKAGE, LOCALEDIR) {
        warn!("Unable to bind the text domain: {e}");
        return;
    }
    if let Err(e) = bind_textdomain_codeset(GETTEXT_PACKAGE, "UTF-8") {
        warn!("Unable to set the text domain encoding: {e}");
    }
    if let Err(e) = textdomain(GETTEXT_PACKAGE) {
        warn!("Unable to switch to the text domain: {e}");
    }
}

fn main() -> ExitCode {
    // The application does not use the option parsing feature provided by GApplication. Clap
    // is used instead.
    ExitCode::from(cli_options::parse())
}
