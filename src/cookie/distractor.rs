/*
distractor.rs

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

//! Burnt cookies that move across the screen. Clicking them costs a life.

use rand::Rng;

use super::config::*;
use super::rect::Rect;

/// A moving burnt cookie.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Distractor {
    pub rect: Rect,

    /// Horizontal velocity, in pixels per frame.
    pub dx: f64,

    /// Vertical velocity, in pixels per frame.
    pub dy: f64,
}

/// Speed of the new distractors for the given score.
///
/// Distractors get faster as the score increases, up to [`MAX_SPEED`].
pub fn speed_for_score(score: u32) -> f64 {
    (BASE_SPEED + f64::from(score / 10) * SPEED_INCREMENT).min(MAX_SPEED)
}

/// Return a random position for the center of a cookie, away from the screen edges.
pub fn random_center<R: Rng>(rng: &mut R) -> (f64, f64) {
    (
        rng.random_range(SPAWN_MARGIN..=SCREEN_WIDTH - SPAWN_MARGIN),
        rng.random_range(SPAWN_MARGIN..=SCREEN_HEIGHT - SPAWN_MARGIN),
    )
}

/// Random velocity component: a random direction with a speed between 80% and 100% of `speed`.
fn random_velocity<R: Rng>(speed: f64, rng: &mut R) -> f64 {
    let sign: f64 = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    sign * rng.random_range(speed * 0.8..=speed)
}

impl Distractor {
    /// Create a distractor at a random position, with a speed that depends on the score.
    pub fn spawn<R: Rng>(score: u32, rng: &mut R) -> Self {
        let (cx, cy) = random_center(rng);
        let speed: f64 = speed_for_score(score);
        Self {
            rect: Rect::centered(cx, cy, COOKIE_SIZE, COOKIE_SIZE),
            dx: random_velocity(speed, rng),
            dy: random_velocity(speed, rng),
        }
    }

    /// Move the distractor for one frame. It bounces on the screen edges.
    pub fn step(&mut self) {
        self.rect.x += self.dx;
        self.rect.y += self.dy;

        if self.rect.left() <= 0.0 || self.rect.right() >= SCREEN_WIDTH {
            self.dx = -self.dx;
        }
        if self.rect.top() <= 0.0 || self.rect.bottom() >= SCREEN_HEIGHT {
            self.dy = -self.dy;
        }
    }
}
