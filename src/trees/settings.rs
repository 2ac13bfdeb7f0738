/*
settings.rs

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

//! Tunable parameters of the Christmas tree visualization.

use super::height::HeightRange;
use super::placement;

/// Parameters of the visualization.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TreeSettings {
    /// Width of the base of the trees, in pixels.
    pub tree_width: f64,

    /// Number of frames between two bulb shuffles.
    pub update_period: u64,

    /// Range of the tree heights.
    pub height_range: HeightRange,

    /// Minimum distance between two bulbs of the same tree.
    pub min_bulb_distance: f64,

    /// Number of attempts for placing a bulb before using the fallback position.
    pub max_tries_per_bulb: usize,

    /// Probability for a bulb to sparkle during a frame.
    pub sparkle_probability: f64,

    /// Number of trees displayed at the same time.
    pub window_size: usize,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            tree_width: 110.0,
            update_period: 30,
            height_range: HeightRange::default(),
            min_bulb_distance: placement::MIN_DISTANCE,
            max_tries_per_bulb: placement::MAX_TRIES_PER_BULB,
            sparkle_probability: 0.02,
            window_size: 10,
        }
    }
}
