/*
config.rs

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

//! Build-time constants and location of the user data.

use std::path::PathBuf;

#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub const APPLICATION_ID: &str = "io.github.herve4m.YuletideArcade";
pub const GETTEXT_PACKAGE: &str = "yuletide-arcade";
pub const LOCALEDIR: &str = "/usr/share/locale";
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COPYRIGHT_NOTICE: &str = "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Name of the subdirectory in the user data directory.
const DATA_SUBDIR: &str = "yuletide-arcade";

/// Return the directory where the application stores its data.
///
/// The directory is `yuletide-arcade` in the user data directory (`$XDG_DATA_HOME`, or
/// `~/.local/share`). Return None when the user data directory is unknown.
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(DATA_SUBDIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_application_specific() {
        if let Some(dir) = data_dir() {
            assert!(dir.ends_with(DATA_SUBDIR));
            assert!(dir.is_absolute());
        }
    }
}
