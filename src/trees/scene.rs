/*
scene.rs

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

//! Build the frames of the visualization.
//!
//! The [`Scene`] object owns the trees and the range of years that is displayed.
//! For each frame, the host calls [`Scene::frame`] with an increasing frame counter and receives
//! a [`SceneFrame`] object that describes everything that must be drawn: the position and height
//! of the visible trees and the position, color, and size of their bulbs.

use log::debug;
use rand::Rng;
use serde::Serialize;

use super::height;
use super::movies::YearGroup;
use super::settings::TreeSettings;
use super::tree::{BulbFrame, Tree};

/// Horizontal margin on both sides of the tree area.
pub const MARGIN_X: f64 = 100.0;

/// Distance between the bottom of the viewport and the base of the trees.
pub const BASE_OFFSET_Y: f64 = 90.0;

/// Size of the drawing area, in pixels, when the host does not provide one.
pub const DEFAULT_VIEWPORT: (f64, f64) = (1400.0, 800.0);

/// Rating bounds used when no year has a rating.
const DEFAULT_RATING_BOUNDS: (f64, f64) = (0.0, 10.0);

/// Horizontal slider bar that selects the range of displayed years.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub struct Slider {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg_attr(not(feature = "gui"), allow(dead_code))]
impl Slider {
    /// Slider bar for a viewport of the given width.
    pub fn for_viewport(viewport_width: f64) -> Self {
        Self {
            x: 120.0,
            y: 120.0,
            width: (viewport_width - 240.0).max(1.0),
            height: 14.0,
        }
    }

    /// Whether the pointer is on the slider bar, with some vertical tolerance so that the thin
    /// bar is easy to grab.
    pub fn hit(&self, x: f64, y: f64) -> bool {
        x >= self.x
            && x <= self.x + self.width
            && y >= self.y - 10.0
            && y <= self.y + self.height + 10.0
    }
}

/// A tree as it must be drawn for the current frame.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TreeFrame {
    pub year: i32,
    pub movie_count: usize,
    pub avg_rating: Option<f64>,

    /// X coordinate of the tree axis.
    pub x_center: f64,

    /// Y coordinate of the tree base.
    pub base_y: f64,
    pub width: f64,
    pub height: f64,
    pub bulbs: Vec<BulbFrame>,
}

/// Everything that must be drawn for a frame.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub frame: u64,

    /// First and last years of the visible trees.
    pub year_range: Option<(i32, i32)>,

    /// Position of the slider handle, between 0 and 1.
    pub slider_fraction: f64,
    pub trees: Vec<TreeFrame>,
}

/// The trees and the range of displayed years.
#[derive(Debug, Clone)]
pub struct Scene {
    trees: Vec<Tree>,
    settings: TreeSettings,
    window_start: usize,
    rating_bounds: (f64, f64),
}

impl Scene {
    /// Create a [`Scene`] object from the groups, which must be sorted by year.
    pub fn new(groups: Vec<YearGroup>, settings: TreeSettings) -> Self {
        let ratings: Vec<f64> = groups.iter().filter_map(YearGroup::avg_rating).collect();
        let rating_bounds: (f64, f64) = if ratings.is_empty() {
            DEFAULT_RATING_BOUNDS
        } else {
            (
                ratings.iter().copied().fold(f64::INFINITY, f64::min),
                ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            )
        };
        debug!(
            "Scene with {} trees, rating bounds = {rating_bounds:?}",
            groups.len()
        );

        Self {
            trees: groups.into_iter().map(Tree::new).collect(),
            settings,
            window_start: 0,
            rating_bounds,
        }
    }

    /// Lowest and highest average ratings.
    pub fn rating_bounds(&self) -> (f64, f64) {
        self.rating_bounds
    }

    /// Height of the tree for the given average rating.
    pub fn tree_height(&self, avg_rating: Option<f64>) -> f64 {
        let (v_min, v_max) = self.rating_bounds();
        height::compute_tree_height(avg_rating, v_min, v_max, self.settings.height_range)
    }

    /// Index of the first visible tree.
    #[cfg_attr(not(feature = "gui"), allow(dead_code))]
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Number of trees displayed at the same time.
    ///
    /// A window size of 0 displays all the trees.
    pub fn window_size(&self) -> usize {
        match self.settings.window_size {
            0 => self.trees.len(),
            size => size,
        }
    }

    /// Highest possible index for the first visible tree.
    pub fn max_start(&self) -> usize {
        self.trees.len().saturating_sub(self.window_size())
    }

    /// Set the first visible tree. The index is clamped to [`Scene::max_start`].
    #[cfg_attr(not(feature = "gui"), allow(dead_code))]
    pub fn set_window_start(&mut self, start: usize) {
        self.window_start = start.min(self.max_start());
    }

    /// Position of the slider handle, between 0 and 1.
    pub fn slider_fraction(&self) -> f64 {
        match self.max_start() {
            0 => 0.0,
            max_start => self.window_start as f64 / max_start as f64,
        }
    }

    /// Return the first visible tree for the given pointer position over the slider bar.
    #[cfg_attr(not(feature = "gui"), allow(dead_code))]
    pub fn slider_value_from_pointer(&self, x: f64, slider: &Slider) -> usize {
        let max_start: usize = self.max_start();
        if max_start == 0 {
            return 0;
        }
        let t: f64 = ((x - slider.x) / slider.width).clamp(0.0, 1.0);
        if t.is_nan() {
            return 0;
        }
        (t * max_start as f64).round() as usize
    }

    /// Range of the visible trees in the tree list.
    fn visible(&self) -> std::ops::Range<usize> {
        let end: usize = self
            .window_start
            .saturating_add(self.window_size())
            .min(self.trees.len());
        self.window_start.min(end)..end
    }

    /// First and last years of the visible trees.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let visible = &self.trees[self.visible()];
        match (visible.first(), visible.last()) {
            (Some(first), Some(last)) => Some((first.group().year(), last.group().year())),
            _ => None,
        }
    }

    /// First and last years of all the trees.
    #[cfg_attr(not(feature = "gui"), allow(dead_code))]
    pub fn full_year_range(&self) -> Option<(i32, i32)> {
        match (self.trees.first(), self.trees.last()) {
            (Some(first), Some(last)) => Some((first.group().year(), last.group().year())),
            _ => None,
        }
    }

    /// Update the bulbs of the visible trees and return the frame to draw.
    ///
    /// `frame` must increase by one at each call.
    pub fn frame<R: Rng>(
        &mut self,
        frame: u64,
        viewport: (f64, f64),
        rng: &mut R,
    ) -> SceneFrame {
        let (width, height) = viewport;
        let base_y: f64 = height - BASE_OFFSET_Y;
        let area_width: f64 = width - 2.0 * MARGIN_X;
        let visible = self.visible();
        let n: usize = visible.len();
        let spacing: f64 = area_width / n.saturating_sub(1).max(1) as f64;

        let mut trees: Vec<TreeFrame> = Vec::with_capacity(n);
        for (idx, i) in visible.enumerate() {
            let avg_rating: Option<f64> = self.trees[i].group().avg_rating();
            let tree_height: f64 = self.tree_height(avg_rating);
            let x_center: f64 = (MARGIN_X + idx as f64 * spacing).trunc();

            let tree: &mut Tree = &mut self.trees[i];
            tree.update_bulbs(frame, tree_height, &self.settings, rng);
            trees.push(TreeFrame {
                year: tree.group().year(),
                movie_count: tree.group().movies().len(),
                avg_rating,
                x_center,
                base_y,
                width: self.settings.tree_width,
                height: tree_height,
                bulbs: tree.bulb_frames(x_center, base_y, self.settings.sparkle_probability, rng),
            });
        }

        SceneFrame {
            frame,
            year_range: self.year_range(),
            slider_fraction: self.slider_fraction(),
            trees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::movies::Movie;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const VIEWPORT: (f64, f64) = DEFAULT_VIEWPORT;

    fn group(year: i32, ratings: &[Option<f64>]) -> YearGroup {
        let movies: Vec<Movie> = ratings
            .iter()
            .enumerate()
            .map(|(i, r)| Movie {
                title: format!("{year} movie {i}"),
                imdb_rating: *r,
                content_rating: Some("PG".to_string()),
            })
            .collect();
        YearGroup::new(year, movies)
    }

    fn scene(years: i32) -> Scene {
        let groups: Vec<YearGroup> = (0..years)
            .map(|i| group(1990 + i, &[Some(5.0 + f64::from(i % 4)), None]))
            .collect();
        Scene::new(groups, TreeSettings::default())
    }

    #[test]
    fn rating_bounds() {
        assert_eq!(scene(12).rating_bounds(), (5.0, 8.0));
        let no_ratings: Scene = Scene::new(vec![group(2000, &[None])], TreeSettings::default());
        assert_eq!(no_ratings.rating_bounds(), (0.0, 10.0));
        assert_eq!(no_ratings.tree_height(None), 120.0);
    }

    #[test]
    fn window_is_clamped() {
        let mut s: Scene = scene(25);
        assert_eq!(s.max_start(), 15);
        s.set_window_start(40);
        assert_eq!(s.window_start(), 15);
        assert_eq!(s.year_range(), Some((2005, 2014)));
        assert_eq!(s.slider_fraction(), 1.0);

        let mut small: Scene = scene(4);
        assert_eq!(small.max_start(), 0);
        small.set_window_start(3);
        assert_eq!(small.window_start(), 0);
        assert_eq!(small.slider_fraction(), 0.0);
        assert_eq!(small.year_range(), Some((1990, 1993)));
    }

    #[test]
    fn zero_window_displays_all_trees() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let settings: TreeSettings = TreeSettings {
            window_size: 0,
            ..TreeSettings::default()
        };
        let groups: Vec<YearGroup> = (0..14).map(|i| group(1990 + i, &[Some(6.0)])).collect();
        let mut s: Scene = Scene::new(groups, settings);

        assert_eq!(s.window_size(), 14);
        assert_eq!(s.max_start(), 0);
        let f: SceneFrame = s.frame(0, VIEWPORT, &mut rng);
        assert_eq!(f.trees.len(), 14);
        assert_eq!(f.year_range, Some((1990, 2003)));
    }

    #[test]
    fn slider_pointer() {
        let s: Scene = scene(30);
        let slider: Slider = Slider::for_viewport(VIEWPORT.0);
        assert_eq!(s.slider_value_from_pointer(0.0, &slider), 0);
        assert_eq!(s.slider_value_from_pointer(slider.x + slider.width / 2.0, &slider), 10);
        assert_eq!(s.slider_value_from_pointer(5000.0, &slider), 20);
        assert!(slider.hit(slider.x + 5.0, slider.y - 5.0));
        assert!(!slider.hit(slider.x + 5.0, slider.y + 40.0));
    }

    #[test]
    fn frame_layout() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let mut s: Scene = scene(12);
        let f: SceneFrame = s.frame(0, VIEWPORT, &mut rng);

        assert_eq!(f.trees.len(), 10);
        assert_eq!(f.year_range, Some((1990, 1999)));
        assert_eq!(f.trees[0].x_center, MARGIN_X);
        assert_eq!(f.trees[9].x_center, VIEWPORT.0 - MARGIN_X);
        for t in &f.trees {
            assert_eq!(t.base_y, VIEWPORT.1 - BASE_OFFSET_Y);
            assert_eq!(t.bulbs.len(), t.movie_count);
            assert!((120.0..=420.0).contains(&t.height));
        }
        // 1990 has the lowest rating (5.0) and 1993 the highest (8.0)
        assert_eq!(f.trees[0].height, 120.0);
        assert_eq!(f.trees[3].height, 420.0);
    }

    #[test]
    fn bulbs_follow_their_tree_when_sliding() {
        let mut rng: StdRng = StdRng::seed_from_u64(2);
        let mut s: Scene = scene(12);
        let before: SceneFrame = s.frame(1, VIEWPORT, &mut rng);
        s.set_window_start(1);
        let after: SceneFrame = s.frame(2, VIEWPORT, &mut rng);

        // 1991 moved from the second slot to the first one, its bulbs were not shuffled
        let old: &TreeFrame = &before.trees[1];
        let new: &TreeFrame = &after.trees[0];
        assert_eq!(old.year, new.year);
        let shift: f64 = new.x_center - old.x_center;
        for (a, b) in old.bulbs.iter().zip(&new.bulbs) {
            assert!((b.x - a.x - shift).abs() < 1e-9);
            assert_eq!(a.y, b.y);
        }
    }

    #[test]
    fn single_tree_and_empty_scene() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let mut one: Scene = scene(1);
        let f: SceneFrame = one.frame(0, VIEWPORT, &mut rng);
        assert_eq!(f.trees.len(), 1);
        assert_eq!(f.trees[0].x_center, MARGIN_X);

        let mut empty: Scene = Scene::new(Vec::new(), TreeSettings::default());
        let f: SceneFrame = empty.frame(0, VIEWPORT, &mut rng);
        assert!(f.trees.is_empty());
        assert_eq!(f.year_range, None);
        assert_eq!(empty.full_year_range(), None);
    }

    #[test]
    fn frames_serialize_to_json() {
        let mut rng: StdRng = StdRng::seed_from_u64(4);
        let mut s: Scene = scene(2);
        let json: String =
            serde_json::to_string(&s.frame(0, VIEWPORT, &mut rng)).expect("Cannot serialize");
        assert!(json.contains("\"year\":1990"));
        assert!(json.contains("\"bulbs\":["));
    }
}
