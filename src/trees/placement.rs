/*
placement.rs

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

//! Randomly place bulbs inside a triangular tree.
//!
//! The tree is an isosceles triangle: its top is at `(x_center, base_y - height)` and its base
//! goes from `x_center - width / 2` to `x_center + width / 2` at `base_y`.
//! The y axis points down, as in the drawing surfaces.
//!
//! Bulbs should not overlap, so a candidate position closer than the minimum distance to an
//! already placed bulb is rejected and a new position is drawn.
//! After too many rejections, the bulb is placed at a fixed fallback position in the middle of
//! the tree, even if it overlaps another bulb.

use log::debug;
use rand::Rng;

/// Default number of attempts for placing a bulb before using the fallback position.
pub const MAX_TRIES_PER_BULB: usize = 50;

/// Default minimum distance between two bulbs, in pixels.
pub const MIN_DISTANCE: f64 = 6.0;

/// Return the size, or 0 when the size is negative or not finite.
fn usable_size(size: f64) -> f64 {
    if size.is_finite() { size.max(0.0) } else { 0.0 }
}

/// Geometry of the triangle and placement constraints.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleArea {
    /// X coordinate of the tree axis.
    pub x_center: f64,

    /// Y coordinate of the tree base.
    pub base_y: f64,

    /// Width of the tree base.
    pub width: f64,

    /// Height of the tree.
    pub height: f64,
}

impl TriangleArea {
    /// Y coordinate of the top of the tree.
    pub fn top_y(&self) -> f64 {
        self.base_y - usable_size(self.height)
    }

    /// Position used when no free spot could be found: the vertical middle of the tree, on its
    /// axis.
    pub fn fallback(&self) -> (f64, f64) {
        (self.x_center, (self.top_y() + self.base_y) / 2.0)
    }

    /// Half of the tree width at the given height.
    ///
    /// The half-width is 0 at the top of the tree and `width / 2` at its base.
    pub fn half_width_at(&self, y: f64) -> f64 {
        let height: f64 = usable_size(self.height);
        if height == 0.0 {
            return 0.0;
        }
        let frac_from_top: f64 = ((y - self.top_y()) / height).clamp(0.0, 1.0);
        (usable_size(self.width) / 2.0) * frac_from_top
    }

    /// Whether the given position is inside the triangle.
    ///
    /// `tolerance` absorbs floating point rounding on the triangle edges.
    pub fn contains(&self, x: f64, y: f64, tolerance: f64) -> bool {
        y >= self.top_y() - tolerance
            && y <= self.base_y + tolerance
            && (x - self.x_center).abs() <= self.half_width_at(y) + tolerance
    }
}

/// A bulb position returned by [`position_bulbs`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,

    /// Whether no free spot was found and the fallback position was used.
    pub fallback: bool,
}

/// Place `num_bulbs` bulbs inside the triangle.
///
/// The function always returns exactly `num_bulbs` positions.
/// A bulb gets `max_tries` attempts to find a spot at least `min_dist` away from the bulbs
/// already placed by this call.
/// When all the attempts fail, the bulb is placed at [`TriangleArea::fallback`].
/// Negative or non-finite sizes are treated as 0. When the tree position itself is not finite,
/// all the bulbs use the fallback position.
pub fn position_bulbs<R: Rng>(
    num_bulbs: usize,
    area: &TriangleArea,
    min_dist: f64,
    max_tries: usize,
    rng: &mut R,
) -> Vec<Placement> {
    let mut positions: Vec<Placement> = Vec::with_capacity(num_bulbs);
    let top_y: f64 = area.top_y();
    let min_dist_sq: f64 = min_dist * min_dist;
    let mut fallbacks: usize = 0;
    let max_tries: usize = if area.x_center.is_finite() && area.base_y.is_finite() {
        max_tries
    } else {
        0
    };

    for _ in 0..num_bulbs {
        let mut placed: bool = false;

        for _ in 0..max_tries {
            // Pick a random vertical location along the tree, and then a horizontal location
            // within the tree width at that height
            let y: f64 = rng.random_range(top_y..=area.base_y);
            let half_width: f64 = area.half_width_at(y);
            let x: f64 = rng.random_range(area.x_center - half_width..=area.x_center + half_width);

            let too_close: bool = positions
                .iter()
                .any(|p| (p.x - x).powi(2) + (p.y - y).powi(2) < min_dist_sq);
            if !too_close {
                positions.push(Placement {
                    x,
                    y,
                    fallback: false,
                });
                placed = true;
                break;
            }
        }

        if !placed {
            let (x, y) = area.fallback();
            positions.push(Placement {
                x,
                y,
                fallback: true,
            });
            fallbacks += 1;
        }
    }

    if fallbacks > 0 {
        debug!(
            "{fallbacks} of {num_bulbs} bulbs placed at the fallback position (width = {}, height = {})",
            area.width, area.height
        );
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EPSILON: f64 = 1e-9;

    fn area(width: f64, height: f64) -> TriangleArea {
        TriangleArea {
            x_center: 300.0,
            base_y: 500.0,
            width,
            height,
        }
    }

    fn distance(a: &Placement, b: &Placement) -> f64 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    #[test]
    fn no_bulbs() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        assert!(position_bulbs(0, &area(100.0, 200.0), MIN_DISTANCE, 50, &mut rng).is_empty());
    }

    #[test]
    fn three_bulbs_with_generous_budget() {
        let a: TriangleArea = area(100.0, 200.0);
        for seed in 0..50 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let p: Vec<Placement> = position_bulbs(3, &a, 6.0, 10_000, &mut rng);

            assert_eq!(p.len(), 3);
            for b in &p {
                assert!(!b.fallback);
                assert!(a.contains(b.x, b.y, EPSILON), "{b:?} outside of the tree");
            }
            for i in 0..p.len() {
                for j in i + 1..p.len() {
                    assert!(distance(&p[i], &p[j]) >= 6.0);
                }
            }
        }
    }

    #[test]
    fn exact_count_and_bounds_for_many_bulbs() {
        let a: TriangleArea = area(99.0, 270.0);
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        for n in [1, 5, 17, 60] {
            let p: Vec<Placement> = position_bulbs(n, &a, MIN_DISTANCE, MAX_TRIES_PER_BULB, &mut rng);
            assert_eq!(p.len(), n);
            for b in &p {
                assert!(b.y >= a.top_y() - EPSILON && b.y <= a.base_y + EPSILON);
                assert!((b.x - a.x_center).abs() <= a.half_width_at(b.y) + EPSILON);
            }
        }
    }

    #[test]
    fn overlaps_only_involve_fallback_positions() {
        // The tree is too small for that many bulbs, so some of them end up at the fallback
        // position
        let a: TriangleArea = area(30.0, 40.0);
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let p: Vec<Placement> = position_bulbs(80, &a, MIN_DISTANCE, 20, &mut rng);

        assert_eq!(p.len(), 80);
        assert!(p.iter().any(|b| b.fallback));
        for i in 0..p.len() {
            for j in i + 1..p.len() {
                if distance(&p[i], &p[j]) < MIN_DISTANCE {
                    assert!(p[i].fallback || p[j].fallback, "{:?} and {:?}", p[i], p[j]);
                }
            }
        }
        for b in p.iter().filter(|b| b.fallback) {
            assert_eq!((b.x, b.y), a.fallback());
        }
    }

    #[test]
    fn zero_budget_uses_fallback() {
        let a: TriangleArea = area(100.0, 200.0);
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let p: Vec<Placement> = position_bulbs(2, &a, MIN_DISTANCE, 0, &mut rng);
        assert_eq!(p.len(), 2);
        assert!(p.iter().all(|b| b.fallback && (b.x, b.y) == (300.0, 400.0)));
    }

    #[test]
    fn degenerate_triangles() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);

        let flat: TriangleArea = area(100.0, 0.0);
        let p: Vec<Placement> = position_bulbs(4, &flat, MIN_DISTANCE, 10, &mut rng);
        assert_eq!(p.len(), 4);
        assert!(p.iter().all(|b| b.y == 500.0 && b.x == 300.0));

        let negative: TriangleArea = area(-20.0, -10.0);
        let p: Vec<Placement> = position_bulbs(3, &negative, 0.0, 10, &mut rng);
        assert_eq!(p.len(), 3);
        assert!(p.iter().all(|b| !b.fallback && b.x == 300.0));
    }

    #[test]
    fn non_finite_sizes_are_flattened() {
        let mut rng: StdRng = StdRng::seed_from_u64(9);
        for (width, height) in [
            (f64::INFINITY, 200.0),
            (f64::NAN, 200.0),
            (100.0, f64::INFINITY),
            (f64::NEG_INFINITY, f64::NAN),
        ] {
            let a: TriangleArea = area(width, height);
            let p: Vec<Placement> = position_bulbs(3, &a, 0.0, 10, &mut rng);
            assert_eq!(p.len(), 3);
            assert!(p.iter().all(|b| b.x == 300.0 && b.x.is_finite() && b.y.is_finite()));
        }
    }

    #[test]
    fn non_finite_position_uses_fallback() {
        let mut rng: StdRng = StdRng::seed_from_u64(9);
        let a: TriangleArea = TriangleArea {
            x_center: f64::NAN,
            ..area(100.0, 200.0)
        };
        let p: Vec<Placement> = position_bulbs(2, &a, MIN_DISTANCE, 10, &mut rng);
        assert_eq!(p.len(), 2);
        assert!(p.iter().all(|b| b.fallback));
    }

    #[test]
    fn half_width_is_linear() {
        let a: TriangleArea = area(100.0, 200.0);
        assert_eq!(a.half_width_at(300.0), 0.0);
        assert_eq!(a.half_width_at(400.0), 25.0);
        assert_eq!(a.half_width_at(500.0), 50.0);
        assert_eq!(a.fallback(), (300.0, 400.0));
    }
}
