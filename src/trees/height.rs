/*
height.rs

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

//! Scale the average rating of a year to the height of its tree.

/// Range of the tree heights, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeightRange {
    /// Height of the tree for the lowest average rating (and for years without ratings).
    pub min: f64,

    /// Height of the tree for the highest average rating.
    pub max: f64,
}

impl Default for HeightRange {
    fn default() -> Self {
        Self {
            min: 120.0,
            max: 420.0,
        }
    }
}

/// Scale `value`, which is between `v_min` and `v_max`, to a height in the given range.
///
/// The function returns the minimum height when the value is missing, or when all the years
/// have the same rating.
/// Values outside of `[v_min, v_max]` are clamped.
pub fn compute_tree_height(value: Option<f64>, v_min: f64, v_max: f64, range: HeightRange) -> f64 {
    let value: f64 = match value {
        Some(v) if v.is_finite() => v,
        _ => return range.min,
    };
    if v_max == v_min {
        return range.min;
    }

    let t: f64 = ((value - v_min) / (v_max - v_min)).clamp(0.0, 1.0);
    if t.is_nan() {
        return range.min;
    }
    range.min + t * (range.max - range.min)
}
