/*
cli_options.rs

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

//! Process command-line options.
//!
//! Each game is a subcommand.
//! The console games (`madlib` and `sushi`) run in the terminal.
//! The Christmas trees and the cookie clicker open a window, which requires the `gui` feature.
//!
//! # Examples
//!
//! Play Mad Libs:
//!
//! ```text
//! $ yuletide-arcade madlib
//! ```
//!
//! Print the first three frames of the Christmas trees as JSON lines, without opening a window:
//!
//! ```text
//! $ yuletide-arcade trees --data christmas_movies.csv --json --frames 3 --seed 42
//! {"frame":0,"year_range":[1934,1947],"slider_fraction":0.0,"trees":[...]}
//! {"frame":1,"year_range":[1934,1947],"slider_fraction":0.0,"trees":[...]}
//! {"frame":2,"year_range":[1934,1947],"slider_fraction":0.0,"trees":[...]}
//! ```
//!
//! Display the cookie clicker scoreboard:
//!
//! ```text
//! $ yuletide-arcade scores
//!  1.   42 cookies  2025-12-24 18:02  break
//!  2.   17 cookies  2025-12-23 21:45  game over
//! ```

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::io;
use std::path::PathBuf;

use crate::config::{self, COPYRIGHT_NOTICE};
use crate::highscores::{Ending, HighScores};
use crate::madlib;
use crate::saver::highscores::SaverHighScores;
use crate::sushi;
use crate::trees::movies::{self, YearGroup};
use crate::trees::scene::{DEFAULT_VIEWPORT, Scene, SceneFrame};
use crate::trees::settings::TreeSettings;

/// Christmas games and a Christmas movies visualization.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Enable debug messages
    #[arg(short, long, default_value_t = false, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play Mad Libs: "One More Game"
    Madlib,

    /// Build your own sushi roll
    Sushi,

    /// Display the cookie clicker scoreboard
    Scores {
        /// Directory that contains the scoreboard
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Display the Christmas movies as Christmas trees
    Trees {
        /// CSV file with the movies
        #[arg(long, default_value = "christmas_movies.csv")]
        data: PathBuf,

        /// Width of the base of the trees, in pixels
        #[arg(
            long,
            default_value_t = TreeSettings::default().tree_width,
            value_parser = parse_tree_width
        )]
        tree_width: f64,

        /// Number of frames between two bulb shuffles (0 shuffles at every frame)
        #[arg(long, default_value_t = TreeSettings::default().update_period)]
        period: u64,

        /// Number of trees displayed at the same time
        #[arg(
            long,
            default_value_t = TreeSettings::default().window_size,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..)
        )]
        window: usize,

        /// Print the frames as JSON lines instead of opening a window
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Number of frames to print
        #[arg(long, default_value_t = 1, requires = "json")]
        frames: u64,

        /// Seed for the random number generator
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play the cookie clicker
    Cookie {
        /// Directory where the scoreboard is saved
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

/// Parse the tree width, which must be a positive number.
fn parse_tree_width(value: &str) -> Result<f64, String> {
    let width: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !width.is_finite() || width <= 0.0 {
        return Err(format!("`{value}` is not a positive width"));
    }
    Ok(width)
}

/// Return the object that saves the scoreboard, in the given directory or in the user data
/// directory.
fn highscores_saver(data_dir: Option<PathBuf>) -> Option<SaverHighScores> {
    data_dir.or_else(config::data_dir).map(SaverHighScores::new)
}

fn print_scores(highscores: &HighScores) {
    if highscores.is_empty() {
        println!("No scores yet.");
        return;
    }
    for (i, score) in highscores.get_scores().iter().enumerate() {
        let ending: &str = match score.ending {
            Ending::GameOver => "game over",
            Ending::Break => "break",
        };
        println!(
            "{:2}. {:4} cookies  {}  {ending}",
            i + 1,
            score.cookies,
            score.when_local()
        );
    }
}

/// Print the frames of the Christmas trees visualization as JSON lines.
fn print_frames(
    groups: Vec<YearGroup>,
    settings: TreeSettings,
    frames: u64,
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let mut scene: Scene = Scene::new(groups, settings);
    for frame in 0..frames {
        let f: SceneFrame = scene.frame(frame, DEFAULT_VIEWPORT, &mut rng);
        println!("{}", serde_json::to_string(&f)?);
    }
    Ok(())
}

/// Start a game that requires a window.
#[cfg(feature = "gui")]
fn run_gui(game: crate::application::WindowGame) -> u8 {
    crate::application::run(game)
}

#[cfg(not(feature = "gui"))]
fn run_gui<T>(_game: T) -> u8 {
    eprintln!(
        "This build does not include the graphical interface. Rebuild with `--features gui`, \
         or use `trees --json` to print the frames."
    );
    1
}

/// Parse and process command-line options.
///
/// Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        println!("DEBUG");
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    crate::setup_translations();

    match args.command {
        Command::Madlib => {
            if let Err(e) = madlib::play(&mut io::stdin().lock(), &mut io::stdout().lock()) {
                eprintln!("Mad Libs: {e}");
                return 1;
            }
            0
        }

        Command::Sushi => {
            if let Err(e) = sushi::play(&mut io::stdin().lock(), &mut io::stdout().lock()) {
                eprintln!("Sushi adventure: {e}");
                return 1;
            }
            0
        }

        Command::Scores { data_dir } => {
            let Some(saver) = highscores_saver(data_dir) else {
                eprintln!("Cannot find the data directory. Use --data-dir.");
                return 1;
            };
            match saver.get_highscores() {
                Ok(Some(h)) => print_scores(&h),
                Ok(None) => print_scores(&HighScores::new()),
                Err(e) => {
                    eprintln!("Cannot read {}: {e}", saver.path().display());
                    return 1;
                }
            }
            0
        }

        Command::Trees {
            data,
            tree_width,
            period,
            window,
            json,
            frames,
            seed,
        } => {
            let groups: Vec<YearGroup> = match movies::load_groups(&data) {
                Ok(g) => g,
                Err(e) => {
                    eprintln!("Cannot load {}: {e}", data.display());
                    return 1;
                }
            };
            debug!("Loaded {} years from {}", groups.len(), data.display());

            let settings: TreeSettings = TreeSettings {
                tree_width,
                update_period: period,
                window_size: window,
                ..TreeSettings::default()
            };

            if json {
                if let Err(e) = print_frames(groups, settings, frames, seed) {
                    eprintln!("Cannot print the frames: {e}");
                    return 1;
                }
                return 0;
            }
            #[cfg(feature = "gui")]
            let game = crate::application::WindowGame::Trees(Scene::new(groups, settings));
            #[cfg(not(feature = "gui"))]
            let game = Scene::new(groups, settings);
            run_gui(game)
        }

        Command::Cookie { data_dir } => {
            let saver: Option<SaverHighScores> = highscores_saver(data_dir);
            if saver.is_none() {
                warn!("Cannot find the data directory, the scores will not be saved");
            }
            #[cfg(feature = "gui")]
            let game = crate::application::WindowGame::Cookie(saver);
            #[cfg(not(feature = "gui"))]
            let game = saver;
            run_gui(game)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn trees_options() {
        let args: Args = Args::try_parse_from([
            "yuletide-arcade",
            "trees",
            "--data",
            "movies.csv",
            "--json",
            "--frames",
            "3",
            "--seed",
            "7",
            "--period",
            "0",
        ])
        .expect("Cannot parse the options");
        match args.command {
            Command::Trees {
                data,
                tree_width,
                period,
                window,
                json,
                frames,
                seed,
            } => {
                assert_eq!(data, PathBuf::from("movies.csv"));
                assert_eq!(tree_width, 110.0);
                assert_eq!(period, 0);
                assert_eq!(window, 10);
                assert!(json);
                assert_eq!(frames, 3);
                assert_eq!(seed, Some(7));
            }
            _ => panic!("Wrong subcommand"),
        }
    }

    #[test]
    fn frames_requires_json() {
        assert!(Args::try_parse_from(["yuletide-arcade", "trees", "--frames", "3"]).is_err());
    }

    #[test]
    fn tree_width_must_be_positive() {
        for width in ["inf", "NaN", "-10", "0", "wide"] {
            assert!(
                Args::try_parse_from(["yuletide-arcade", "trees", "--tree-width", width]).is_err(),
                "{width} accepted"
            );
        }
        assert_eq!(parse_tree_width("80.5"), Ok(80.5));
    }

    #[test]
    fn window_must_not_be_empty() {
        assert!(Args::try_parse_from(["yuletide-arcade", "trees", "--window", "0"]).is_err());
        assert!(Args::try_parse_from(["yuletide-arcade", "trees", "--window", "1"]).is_ok());
    }

    #[test]
    fn debug_is_global() {
        let args: Args = Args::try_parse_from(["yuletide-arcade", "madlib", "--debug"])
            .expect("Cannot parse the options");
        assert!(args.debug);
    }

    #[test]
    fn explicit_data_dir() {
        let saver: SaverHighScores =
            highscores_saver(Some(PathBuf::from("/tmp/scores"))).expect("No saver");
        assert_eq!(saver.path(), PathBuf::from("/tmp/scores/highscores.json"));
    }
}
