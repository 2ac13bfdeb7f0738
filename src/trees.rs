/*
trees.rs

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

//! Visualize Christmas movies as animated Christmas trees.
//!
//! Each year of movies is drawn as a tree:
//!
//! * The tree height represents the average IMDb rating of the movies released that year
//!   (see [`height::compute_tree_height`]).
//! * Each movie is a bulb on the tree. The bulb color represents the content rating of the movie
//!   (see [`color::rating_to_color`]).
//! * Bulbs are randomly placed in the tree without overlapping (see
//!   [`placement::position_bulbs`]), and are shuffled periodically to animate the tree (see
//!   [`tree::Tree::update_bulbs`]).
//!
//! The movies are loaded from a CSV file with [`movies::load_groups`].
//! A [`scene::Scene`] object then produces, for each frame, the description of the trees and
//! bulbs that the front end draws.

pub mod color;
pub mod height;
pub mod movies;
pub mod placement;
pub mod scene;
pub mod settings;
pub mod tree;
