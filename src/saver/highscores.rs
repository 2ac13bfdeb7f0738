/*
highscores.rs

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

//! Save and restore the cookie clicker scoreboard.
//!
//! The saved object is a serialization of the [`HighScores`] object in JSON format by
//! using [`serde`].

use log::{debug, warn};
use std::error::Error;
use std::fs::{self, File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::highscores::HighScores;

/// Object to save and restore the high scores.
pub struct SaverHighScores {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverHighScores {
    /// Create a [`SaverHighScores`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the high scores must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("highscores.json");
        debug!("High scores file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Path to the high scores file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Retrieve the [`HighScores`] object from the high scores file.
    ///
    /// Return the [`HighScores`] object or None if the high scores file does not exist.
    pub fn get_highscores(&self) -> Result<Option<HighScores>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let highscores: HighScores = serde_json::from_reader(reader)?;
        Ok(Some(highscores))
    }

    /// Retrieve the [`HighScores`] object, or an empty scoreboard if the file does not exist.
    ///
    /// A file that cannot be read is deleted so that the next save starts from a clean state.
    #[cfg_attr(not(feature = "gui"), allow(dead_code))]
    pub fn load_or_default(&self) -> HighScores {
        match self.get_highscores() {
            Ok(Some(h)) => h,
            Ok(None) => {
                debug!("No saved high scores");
                HighScores::new()
            }
            Err(error) => {
                warn!("Cannot read the high scores from {:?}: {error}", self.save_file);
                self.delete_save();
                HighScores::new()
            }
        }
    }

    /// Save the provided [`HighScores`] object.
    #[cfg_attr(not(feature = "gui"), allow(dead_code))]
    pub fn save_highscores(&self, highscores: &HighScores) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            fs::create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, highscores)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the high scores file.
    #[cfg_attr(not(feature = "gui"), allow(dead_code))]
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::Ending;
    use std::time::{Duration, SystemTime};

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().expect("Cannot create a temporary directory");
        let saver: SaverHighScores = SaverHighScores::new(dir.path().to_path_buf());
        assert!(saver.get_highscores().expect("Cannot read").is_none());
        assert!(saver.load_or_default().is_empty());
    }

    #[test]
    fn save_and_restore() {
        let dir = tempfile::tempdir().expect("Cannot create a temporary directory");
        let saver: SaverHighScores = SaverHighScores::new(dir.path().join("nested"));
        let when: SystemTime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        let mut h: HighScores = HighScores::new();
        h.add_score(12, Ending::GameOver, when);
        h.add_score(31, Ending::Break, when);
        saver.save_highscores(&h).expect("Cannot save");

        let restored: HighScores = saver
            .get_highscores()
            .expect("Cannot read")
            .expect("No high scores");
        assert_eq!(restored.get_scores(), h.get_scores());
    }

    #[test]
    fn corrupted_file_is_deleted() {
        let dir = tempfile::tempdir().expect("Cannot create a temporary directory");
        let saver: SaverHighScores = SaverHighScores::new(dir.path().to_path_buf());
        fs::write(saver.path(), "{ not json").expect("Cannot write");

        assert!(saver.get_highscores().is_err());
        assert!(saver.load_or_default().is_empty());
        assert!(!saver.path().exists());
    }
}
