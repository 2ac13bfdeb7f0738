/*
movies.rs

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

//! Load the Christmas movies and group them by release year.
//!
//! The movies are read from a CSV file with a header row.
//! Only the following columns are used, in any order:
//!
//! * `release_year`: release year of the movie (`1994` or `1994.0`). Required.
//! * `imdb_rating`: IMDb rating, used for the tree height.
//! * `rating`: content rating (G, PG, PG-13...), used for the bulb color.
//! * `title`
//!
//! Fields can be quoted, and quoted fields can span several lines.
//! Rows without a valid release year are skipped. Invalid IMDb ratings are ignored.

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// A movie.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,

    /// IMDb rating, if known.
    pub imdb_rating: Option<f64>,

    /// Content rating label (G, PG, PG-13...), if known.
    pub content_rating: Option<String>,
}

/// Movies released the same year.
///
/// Each [`YearGroup`] is drawn as a Christmas tree.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup {
    year: i32,
    movies: Vec<Movie>,
    avg_rating: Option<f64>,
}

impl YearGroup {
    /// Create a [`YearGroup`] object and compute the average IMDb rating of its movies.
    pub fn new(year: i32, movies: Vec<Movie>) -> Self {
        let ratings: Vec<f64> = movies.iter().filter_map(|m| m.imdb_rating).collect();
        let avg_rating: Option<f64> = if ratings.is_empty() {
            None
        } else {
            Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
        };
        Self {
            year,
            movies,
            avg_rating,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Average IMDb rating of the movies, or None when no movie has a rating.
    pub fn avg_rating(&self) -> Option<f64> {
        self.avg_rating
    }
}

/// Type of errors.
#[derive(Debug)]
pub enum LoadError {
    /// The file cannot be read.
    Io(io::Error),

    /// The file is empty.
    MissingHeader,

    /// A required column is not in the header row.
    MissingColumn(&'static str),

    /// The CSV data is malformed.
    Csv(csv::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "cannot read the movie file: {e}"),
            LoadError::MissingHeader => write!(f, "the movie file has no header row"),
            LoadError::MissingColumn(c) => write!(f, "the movie file has no `{c}` column"),
            LoadError::Csv(e) => write!(f, "invalid movie file: {e}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(error: io::Error) -> Self {
        LoadError::Io(error)
    }
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        LoadError::Csv(error)
    }
}

/// Position of the used columns in the rows.
struct Columns {
    year: usize,
    imdb_rating: Option<usize>,
    rating: Option<usize>,
    title: Option<usize>,
}

impl Columns {
    fn from_header(header: &StringRecord) -> Result<Self, LoadError> {
        let names: Vec<&str> = header
            .iter()
            .map(|n| n.trim_start_matches('\u{feff}').trim())
            .collect();
        let find = |name: &str| names.iter().position(|n| *n == name);

        Ok(Self {
            year: find("release_year").ok_or(LoadError::MissingColumn("release_year"))?,
            imdb_rating: find("imdb_rating"),
            rating: find("rating"),
            title: find("title"),
        })
    }
}

/// Return the trimmed field at the given position, or None if the field is missing or empty.
fn field(record: &StringRecord, index: Option<usize>) -> Option<&str> {
    index
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|f| !f.is_empty())
}

/// Parse a release year such as `1994` or `1994.0`.
fn parse_year(value: &str) -> Option<i32> {
    let year: f64 = value.parse().ok()?;
    if !year.is_finite() || year < f64::from(i32::MIN) || year > f64::from(i32::MAX) {
        return None;
    }
    Some(year.trunc() as i32)
}

/// Read movies from CSV data and return the groups sorted by year.
pub fn parse_groups<R: Read>(reader: R) -> Result<Vec<YearGroup>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let header: &StringRecord = reader.headers()?;
    if header.is_empty() {
        return Err(LoadError::MissingHeader);
    }
    let columns: Columns = Columns::from_header(header)?;

    let mut years: BTreeMap<i32, Vec<Movie>> = BTreeMap::new();
    let mut skipped: usize = 0;

    for record in reader.records() {
        let record: StringRecord = record?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let Some(year) = field(&record, Some(columns.year)).and_then(parse_year) else {
            debug!(
                "Line {}: no valid release year, skipping the row",
                record.position().map_or(0, |p| p.line())
            );
            skipped += 1;
            continue;
        };

        let imdb_rating: Option<f64> = field(&record, columns.imdb_rating)
            .and_then(|r| r.parse::<f64>().ok())
            .filter(|r| r.is_finite());

        years.entry(year).or_default().push(Movie {
            title: field(&record, columns.title).unwrap_or_default().to_string(),
            imdb_rating,
            content_rating: field(&record, columns.rating).map(str::to_string),
        });
    }

    let groups: Vec<YearGroup> = years
        .into_iter()
        .map(|(year, movies)| YearGroup::new(year, movies))
        .collect();
    info!(
        "Loaded {} years of movies ({skipped} rows skipped)",
        groups.len()
    );
    Ok(groups)
}

/// Read the movies from the given CSV file and return the groups sorted by year.
pub fn load_groups(path: &Path) -> Result<Vec<YearGroup>, LoadError> {
    debug!("Loading movies from {path:?}");
    let file: File = File::open(path)?;
    parse_groups(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVIES: &str = "\
title,release_year,rating,imdb_rating,genre
Elf,2003,PG,7.1,Comedy
\"Christmas Carol, A\",1938.0,G,7.4,Drama
Love Actually,2003,R,7.6,Romance
No Year,,PG,6.0,Comedy
Bad Year,soon,PG,6.0,Comedy
Unrated Special,2003,,,Family
Krampus,2015,PG-13,n/a,Horror
";

    fn groups() -> Vec<YearGroup> {
        parse_groups(MOVIES.as_bytes()).expect("Cannot parse the movies")
    }

    #[test]
    fn groups_are_sorted_by_year() {
        let years: Vec<i32> = groups().iter().map(YearGroup::year).collect();
        assert_eq!(years, vec![1938, 2003, 2015]);
    }

    #[test]
    fn rows_without_year_are_skipped() {
        let total: usize = groups().iter().map(|g| g.movies().len()).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn average_ignores_missing_ratings() {
        let g: Vec<YearGroup> = groups();
        let avg: f64 = g[1].avg_rating().expect("2003 has ratings");
        assert!((avg - 7.35).abs() < 1e-9);
        assert_eq!(g[1].movies().len(), 3);
        assert_eq!(g[2].avg_rating(), None);
    }

    #[test]
    fn fields_are_cleaned() {
        let g: Vec<YearGroup> = groups();
        let carol: &Movie = &g[0].movies()[0];
        assert_eq!(carol.title, "Christmas Carol, A");
        assert_eq!(carol.content_rating.as_deref(), Some("G"));

        let unrated: &Movie = &g[1].movies()[2];
        assert_eq!(unrated.title, "Unrated Special");
        assert_eq!(unrated.content_rating, None);
        assert_eq!(unrated.imdb_rating, None);
    }

    #[test]
    fn missing_year_column() {
        let err: LoadError = parse_groups("title,rating\nElf,PG\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("release_year")));
        assert!(matches!(
            parse_groups("".as_bytes()),
            Err(LoadError::MissingHeader)
        ));
    }

    #[test]
    fn windows_line_endings_and_bom() {
        let data: &str = "\u{feff}release_year,imdb_rating\r\n2001,6.0\r\n2001,8.0\r\n";
        let g: Vec<YearGroup> = parse_groups(data.as_bytes()).expect("Cannot parse the movies");
        assert_eq!(g.len(), 1);
        assert_eq!(g[0].avg_rating(), Some(7.0));
        assert_eq!(g[0].movies()[0].title, "");
    }

    #[test]
    fn quoted_fields_span_lines() {
        let data: &str = "\
title,description,release_year,rating,imdb_rating
Elf,\"A man raised
by elves\",2003,PG,7.1
\"He said \"\"Ho ho ho\"\"\",\"\",2015,PG-13,6.2
";
        let g: Vec<YearGroup> = parse_groups(data.as_bytes()).expect("Cannot parse the movies");
        let years: Vec<(i32, usize)> = g.iter().map(|g| (g.year(), g.movies().len())).collect();
        assert_eq!(years, vec![(2003, 1), (2015, 1)]);
        assert_eq!(g[0].movies()[0].title, "Elf");
        assert_eq!(g[0].movies()[0].content_rating.as_deref(), Some("PG"));
        assert_eq!(g[1].movies()[0].title, r#"He said "Ho ho ho""#);
    }

    #[test]
    fn short_rows_are_kept() {
        let data: &str = "title,release_year,imdb_rating\nElf,2003\n";
        let g: Vec<YearGroup> = parse_groups(data.as_bytes()).expect("Cannot parse the movies");
        assert_eq!(g[0].movies()[0].imdb_rating, None);
    }

    #[test]
    fn missing_file() {
        let err: LoadError = load_groups(Path::new("/nonexistent/christmas_movies.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
