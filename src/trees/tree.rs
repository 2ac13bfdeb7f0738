/*
tree.rs

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

//! Christmas tree for a year of movies, with one bulb per movie.
//!
//! The bulbs are shuffled every [`TreeSettings::update_period`] frames to animate the tree.
//! Bulb positions are kept relative to the bottom center of the tree, so that the tree can be
//! moved (when the player slides the year range) without detaching its bulbs.

use log::debug;
use rand::Rng;
use serde::Serialize;

use super::color::{self, Rgb};
use super::movies::YearGroup;
use super::placement::{self, Placement, TriangleArea};
use super::settings::TreeSettings;

/// Radius of a bulb, in pixels.
pub const BULB_RADIUS: f64 = 5.0;

/// Radius increment of a sparkling bulb.
pub const SPARKLE_EXTRA_RADIUS: f64 = 3.0;

/// Bulbs are placed in a slightly smaller triangle than the tree so that they do not overflow
/// the tree edges.
const BULB_AREA_RATIO: f64 = 0.9;

/// A bulb on a tree.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bulb {
    /// Horizontal offset from the tree axis.
    pub dx: f64,

    /// Vertical offset from the tree base (negative values are above the base).
    pub dy: f64,

    /// Bulb color, from the content rating of the movie.
    pub color: Rgb,

    /// Whether the bulb was placed at the fallback position.
    pub fallback: bool,
}

impl Bulb {
    /// Return true occasionally to create a sparkling effect.
    ///
    /// Each call is an independent draw with the given probability.
    pub fn sparkle<R: Rng>(probability: f64, rng: &mut R) -> bool {
        if probability.is_nan() || probability <= 0.0 {
            return false;
        }
        rng.random_bool(probability.min(1.0))
    }
}

/// Bulb as it must be drawn for the current frame.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct BulbFrame {
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
    pub radius: f64,
    pub sparkle: bool,

    /// Whether no free spot was found for the bulb (see [`Bulb::fallback`]).
    pub fallback: bool,
}

/// Tree for a [`YearGroup`].
#[derive(Debug, Clone)]
pub struct Tree {
    group: YearGroup,
    bulbs: Vec<Bulb>,

    /// Whether the bulbs have been placed at least once.
    laid_out: bool,

    /// Number of times the bulbs have been placed.
    generation: u64,
}

impl Tree {
    /// Create a [`Tree`] object. The bulbs are placed on the first call to
    /// [`Tree::update_bulbs`].
    pub fn new(group: YearGroup) -> Self {
        Self {
            group,
            bulbs: Vec::new(),
            laid_out: false,
            generation: 0,
        }
    }

    pub fn group(&self) -> &YearGroup {
        &self.group
    }

    /// Place the bulbs again every `update_period` frames, or if they have never been placed.
    ///
    /// Return whether the bulbs have been placed.
    pub fn update_bulbs<R: Rng>(
        &mut self,
        frame: u64,
        height: f64,
        settings: &TreeSettings,
        rng: &mut R,
    ) -> bool {
        let period: u64 = settings.update_period;
        if self.laid_out && period != 0 && frame % period != 0 {
            return false;
        }

        // Bulbs are placed relative to the bottom center of the tree
        let area: TriangleArea = TriangleArea {
            x_center: 0.0,
            base_y: 0.0,
            width: settings.tree_width * BULB_AREA_RATIO,
            height: height * BULB_AREA_RATIO,
        };
        let positions: Vec<Placement> = placement::position_bulbs(
            self.group.movies().len(),
            &area,
            settings.min_bulb_distance,
            settings.max_tries_per_bulb,
            rng,
        );
        self.bulbs = positions
            .iter()
            .zip(self.group.movies())
            .map(|(p, movie)| Bulb {
                dx: p.x,
                dy: p.y,
                color: color::rating_to_color(movie.content_rating.as_deref()),
                fallback: p.fallback,
            })
            .collect();
        self.laid_out = true;
        self.generation += 1;
        debug!(
            "Year {}: {} bulbs placed (frame {frame}, layout {})",
            self.group.year(),
            self.bulbs.len(),
            self.generation
        );
        true
    }

    /// Return the bulbs to draw for a tree at the given position.
    ///
    /// Each bulb gets its own sparkle draw.
    pub fn bulb_frames<R: Rng>(
        &self,
        x_center: f64,
        base_y: f64,
        sparkle_probability: f64,
        rng: &mut R,
    ) -> Vec<BulbFrame> {
        self.bulbs
            .iter()
            .map(|b| {
                let sparkle: bool = Bulb::sparkle(sparkle_probability, rng);
                BulbFrame {
                    x: x_center + b.dx,
                    y: base_y + b.dy,
                    color: b.color,
                    radius: if sparkle {
                        BULB_RADIUS + SPARKLE_EXTRA_RADIUS
                    } else {
                        BULB_RADIUS
                    },
                    sparkle,
                    fallback: b.fallback,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::color::ContentTier;
    use crate::trees::movies::Movie;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn movie(title: &str, rating: Option<&str>) -> Movie {
        Movie {
            title: title.to_string(),
            imdb_rating: Some(7.0),
            content_rating: rating.map(str::to_string),
        }
    }

    fn tree(n: usize) -> Tree {
        let movies: Vec<Movie> = (0..n)
            .map(|i| movie(&format!("Movie {i}"), Some(if i % 2 == 0 { "PG" } else { "R" })))
            .collect();
        Tree::new(YearGroup::new(2000, movies))
    }

    #[test]
    fn one_bulb_per_movie() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let settings: TreeSettings = TreeSettings::default();
        for n in [0, 1, 9, 25] {
            let mut t: Tree = tree(n);
            assert!(t.update_bulbs(5, 300.0, &settings, &mut rng));
            assert_eq!(t.bulbs.len(), n);
        }
    }

    #[test]
    fn bulbs_are_stable_between_refreshes() {
        let mut rng: StdRng = StdRng::seed_from_u64(2);
        let settings: TreeSettings = TreeSettings::default();
        let mut t: Tree = tree(12);

        // First call always places the bulbs, even if the frame is not a multiple of the period
        assert!(t.update_bulbs(7, 250.0, &settings, &mut rng));
        let first: Vec<Bulb> = t.bulbs.clone();
        for frame in 8..30 {
            assert!(!t.update_bulbs(frame, 250.0, &settings, &mut rng));
            assert_eq!(t.bulbs, first);
        }
        assert_eq!(t.generation, 1);

        assert!(t.update_bulbs(30, 250.0, &settings, &mut rng));
        assert_eq!(t.generation, 2);
        assert_eq!(t.bulbs.len(), 12);
        assert_ne!(t.bulbs, first);
    }

    #[test]
    fn empty_tree_is_laid_out_once() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let settings: TreeSettings = TreeSettings::default();
        let mut t: Tree = tree(0);
        assert!(t.update_bulbs(1, 200.0, &settings, &mut rng));
        assert!(!t.update_bulbs(2, 200.0, &settings, &mut rng));
    }

    #[test]
    fn zero_period_refreshes_every_frame() {
        let mut rng: StdRng = StdRng::seed_from_u64(4);
        let settings: TreeSettings = TreeSettings {
            update_period: 0,
            ..TreeSettings::default()
        };
        let mut t: Tree = tree(3);
        for frame in 1..5 {
            assert!(t.update_bulbs(frame, 200.0, &settings, &mut rng));
        }
        assert_eq!(t.generation, 4);
    }

    #[test]
    fn bulbs_stay_in_the_tree() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let settings: TreeSettings = TreeSettings::default();
        let mut t: Tree = tree(40);
        t.update_bulbs(0, 320.0, &settings, &mut rng);

        let area: TriangleArea = TriangleArea {
            x_center: 700.0,
            base_y: 710.0,
            width: settings.tree_width,
            height: 320.0,
        };
        for b in t.bulb_frames(700.0, 710.0, 0.0, &mut rng) {
            assert!(area.contains(b.x, b.y, 1e-9), "{b:?} outside of the tree");
            assert_eq!(b.radius, BULB_RADIUS);
            assert!(!b.sparkle);
        }
    }

    #[test]
    fn bulb_colors_follow_content_ratings() {
        let mut rng: StdRng = StdRng::seed_from_u64(6);
        let movies: Vec<Movie> = vec![
            movie("a", Some("PG-13")),
            movie("b", None),
            movie("c", Some("XYZ")),
        ];
        let mut t: Tree = Tree::new(YearGroup::new(1999, movies));
        t.update_bulbs(0, 200.0, &TreeSettings::default(), &mut rng);
        let colors: Vec<Rgb> = t
            .bulb_frames(0.0, 0.0, 0.0, &mut rng)
            .iter()
            .map(|b| b.color)
            .collect();
        assert_eq!(
            colors,
            vec![
                ContentTier::Caution.color(),
                color::DEFAULT_COLOR,
                color::DEFAULT_COLOR
            ]
        );
    }

    #[test]
    fn sparkle_probability() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        assert!((0..1000).all(|_| !Bulb::sparkle(0.0, &mut rng)));
        assert!((0..1000).all(|_| Bulb::sparkle(1.0, &mut rng)));
        assert!(!Bulb::sparkle(f64::NAN, &mut rng));

        let sparkles: usize = (0..100_000)
            .filter(|_| Bulb::sparkle(0.02, &mut rng))
            .count();
        assert!((1500..2500).contains(&sparkles), "{sparkles} sparkles");

        let mut t: Tree = tree(10);
        t.update_bulbs(0, 200.0, &TreeSettings::default(), &mut rng);
        for b in t.bulb_frames(0.0, 0.0, 1.0, &mut rng) {
            assert!(b.sparkle);
            assert_eq!(b.radius, BULB_RADIUS + SPARKLE_EXTRA_RADIUS);
        }
    }
}
