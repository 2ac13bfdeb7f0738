/*
color.rs

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

//! Map the content rating of a movie (G, PG, PG-13, R...) to a bulb color.
//!
//! Content ratings are grouped into [`ContentTier`] tiers, from the least restrictive to the
//! most restrictive.
//! Each tier has its own bulb color.
//! Missing or unknown ratings ("Not Rated", "Unrated", typos...) use [`DEFAULT_COLOR`].

/// Color components are integers between 0 and 255.
pub type Rgb = (u8, u8, u8);

/// Bulb color for movies without a recognized content rating.
pub const DEFAULT_COLOR: Rgb = (180, 180, 180);

/// Content rating tiers, ordered from the least restrictive to the most restrictive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentTier {
    /// General audiences.
    General,
    /// Parental guidance suggested.
    ParentalGuidance,
    /// Parents strongly cautioned.
    Caution,
    /// Restricted, mature audiences.
    Restricted,
}

impl ContentTier {
    /// All the tiers, from the least restrictive to the most restrictive.
    pub const ALL: [ContentTier; 4] = [
        ContentTier::General,
        ContentTier::ParentalGuidance,
        ContentTier::Caution,
        ContentTier::Restricted,
    ];

    /// Return the labels that belong to the tier (upper case).
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            ContentTier::General => &["G", "TV-G"],
            ContentTier::ParentalGuidance => &["PG", "TV-PG"],
            ContentTier::Caution => &["PG-13", "TV-14"],
            ContentTier::Restricted => &["R", "TV-MA"],
        }
    }

    /// Bulb color for the tier.
    pub fn color(self) -> Rgb {
        match self {
            ContentTier::General => (140, 220, 140),
            ContentTier::ParentalGuidance => (80, 200, 120),
            ContentTier::Caution => (230, 200, 80),
            ContentTier::Restricted => (200, 70, 70),
        }
    }

    /// Return the tier of the given label, or None if the label is not recognized.
    ///
    /// Labels are compared without surrounding spaces and case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        let label: String = label.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.labels().contains(&label.as_str()))
    }
}

/// Return the bulb color for the given content rating label.
pub fn rating_to_color(label: Option<&str>) -> Rgb {
    label
        .and_then(ContentTier::from_label)
        .map_or(DEFAULT_COLOR, ContentTier::color)
}
