/*
draw.rs

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

//! Draw the Christmas trees and the cookie clicker with Cairo.
//!
//! The functions of this module only paint. They receive the state to draw ([`SceneFrame`] or
//! [`CookieGame`]) and never modify it.

use formatx::formatx;
use gettextrs::gettext;
use std::f64::consts::PI;
use std::time::Duration;

use gtk::cairo::*;

use crate::cookie::config::{DISTRACTOR_SPAWN_THRESHOLD, SCREEN_HEIGHT, SCREEN_WIDTH, TIMER_WARNING};
use crate::cookie::game::{self, CookieGame, Phase};
use crate::cookie::rect::Rect;
use crate::trees::color::{ContentTier, DEFAULT_COLOR, Rgb};
use crate::trees::scene::{SceneFrame, Slider, TreeFrame};

type Color = (f64, f64, f64);

const WHITE: Color = (1.0, 1.0, 1.0);
const BLACK: Color = (0.0, 0.0, 0.0);
const GOLD: Color = (1.0, 0.843, 0.0);
const RED: Color = (0.863, 0.078, 0.235);
const DARK_RED: Color = (0.545, 0.0, 0.0);
const BROWN: Color = (0.545, 0.271, 0.075);
const LIGHT_BROWN: Color = (0.824, 0.706, 0.549);
const GRAY: Color = (0.502, 0.502, 0.502);

const TREE_COLOR: Color = (0.0, 0.196, 0.078);
const TRUNK_COLOR: Color = (0.039, 0.078, 0.039);
const TEXT_COLOR: Color = (0.941, 0.941, 0.941);
const SLIDER_BAR_COLOR: Color = (0.608, 0.749, 0.510);
const SLIDER_HANDLE_COLOR: Color = (0.647, 0.165, 0.165);
const SLIDER_HANDLE_RADIUS: f64 = 10.0;
const TRUNK_WIDTH: f64 = 16.0;
const TRUNK_HEIGHT: f64 = 26.0;
const STAR_RADIUS: f64 = 12.0;

fn rgb(color: Rgb) -> Color {
    (
        f64::from(color.0) / 255.0,
        f64::from(color.1) / 255.0,
        f64::from(color.2) / 255.0,
    )
}

fn set_color(ctx: &Context, color: Color) {
    ctx.set_source_rgb(color.0, color.1, color.2);
}

/// Where the text is anchored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Anchor {
    /// The coordinates are the top left corner of the text.
    TopLeft,

    /// The coordinates are the center of the text.
    Center,
}

/// Draw a line of text.
fn draw_text(
    ctx: &Context,
    text: &str,
    size: f64,
    color: Color,
    (x, y): (f64, f64),
    anchor: Anchor,
    bold: bool,
) -> Result<()> {
    ctx.save()?;
    let weight: FontWeight = if bold {
        FontWeight::Bold
    } else {
        FontWeight::Normal
    };
    ctx.select_font_face("Sans", FontSlant::Normal, weight);
    ctx.set_font_size(size);
    set_color(ctx, color);

    let font_extents: FontExtents = ctx.font_extents()?;
    let text_extents: TextExtents = ctx.text_extents(text)?;
    let text_width: f64 = text_extents.x_advance();
    let text_height: f64 = font_extents.ascent() + font_extents.descent();

    match anchor {
        Anchor::TopLeft => ctx.move_to(x, y + font_extents.ascent()),
        Anchor::Center => ctx.move_to(
            x - text_width / 2.0,
            y + text_height / 2.0 - font_extents.descent(),
        ),
    }
    ctx.show_text(text)?;
    ctx.restore()
}

/// Draw a five-pointed star.
fn draw_star(ctx: &Context, cx: f64, cy: f64, radius: f64, color: Color) -> Result<()> {
    set_color(ctx, color);
    for i in 0..5 {
        let outer: f64 = (f64::from(i) * 72.0 - 90.0).to_radians();
        let inner: f64 = (f64::from(i) * 72.0 + 36.0 - 90.0).to_radians();
        let (ox, oy) = (cx + radius * outer.cos(), cy + radius * outer.sin());
        if i == 0 {
            ctx.move_to(ox, oy);
        } else {
            ctx.line_to(ox, oy);
        }
        ctx.line_to(cx + radius * 0.5 * inner.cos(), cy + radius * 0.5 * inner.sin());
    }
    ctx.close_path();
    ctx.fill()
}

/// Add a rectangle with round corners to the current path.
fn rounded_rectangle(ctx: &Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let r: f64 = radius.min(width / 2.0).min(height / 2.0).max(0.0);
    ctx.new_sub_path();
    ctx.arc(x + width - r, y + r, r, -PI / 2.0, 0.0);
    ctx.arc(x + width - r, y + height - r, r, 0.0, PI / 2.0);
    ctx.arc(x + r, y + height - r, r, PI / 2.0, PI);
    ctx.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
    ctx.close_path();
}

//
// Christmas trees
//

/// Night sky background.
fn draw_sky(ctx: &Context, width: f64, height: f64) -> Result<()> {
    let gradient: LinearGradient = LinearGradient::new(0.0, 0.0, 0.0, height);
    gradient.add_color_stop_rgb(0.0, 0.02, 0.04, 0.12);
    gradient.add_color_stop_rgb(1.0, 0.08, 0.12, 0.25);
    ctx.set_source(&gradient)?;
    ctx.rectangle(0.0, 0.0, width, height);
    ctx.fill()
}

fn draw_tree(ctx: &Context, tree: &TreeFrame) -> Result<()> {
    let x: f64 = tree.x_center;
    let base_y: f64 = tree.base_y;
    let half_width: f64 = (tree.width / 2.0).trunc();

    // Trunk
    set_color(ctx, TRUNK_COLOR);
    ctx.rectangle(x - TRUNK_WIDTH / 2.0, base_y, TRUNK_WIDTH, TRUNK_HEIGHT);
    ctx.fill()?;

    // Tree
    set_color(ctx, TREE_COLOR);
    ctx.move_to(x, base_y - tree.height);
    ctx.line_to(x - half_width, base_y);
    ctx.line_to(x + half_width, base_y);
    ctx.close_path();
    ctx.fill()?;

    // Bulbs
    for bulb in &tree.bulbs {
        set_color(ctx, rgb(bulb.color));
        ctx.arc(bulb.x, bulb.y, bulb.radius, 0.0, 2.0 * PI);
        ctx.fill()?;
    }

    draw_star(ctx, x, base_y - tree.height, STAR_RADIUS, (1.0, 1.0, 0.0))?;

    draw_text(
        ctx,
        &tree.year.to_string(),
        20.0,
        TEXT_COLOR,
        (x, base_y + TRUNK_HEIGHT + 20.0),
        Anchor::Center,
        false,
    )
}

fn draw_slider(ctx: &Context, frame: &SceneFrame, slider: &Slider) -> Result<()> {
    set_color(ctx, SLIDER_BAR_COLOR);
    rounded_rectangle(
        ctx,
        slider.x,
        slider.y,
        slider.width,
        slider.height,
        slider.height / 2.0,
    );
    ctx.fill()?;

    let handle_x: f64 = (slider.x + frame.slider_fraction * slider.width).trunc();
    let handle_y: f64 = slider.y + (slider.height / 2.0).trunc();
    set_color(ctx, SLIDER_HANDLE_COLOR);
    ctx.arc(handle_x, handle_y, SLIDER_HANDLE_RADIUS, 0.0, 2.0 * PI);
    ctx.fill()?;

    if let Some((first, last)) = frame.year_range {
        let label: String = format!(
            "{} {first} - {last}",
            gettext("Slide to Change Year Range:")
        );
        draw_text(
            ctx,
            &label,
            20.0,
            (0.902, 0.902, 0.902),
            (slider.x, slider.y - 32.0),
            Anchor::TopLeft,
            false,
        )?;
    }
    Ok(())
}

fn draw_legend(ctx: &Context, x: f64, y: f64) -> Result<()> {
    let items: [String; 3] = [
        gettext("Tree Height : Average IMDb rating per year"),
        gettext("Each Christmas Bulb : One movie"),
        gettext("Christmas Bulb Color : Content rating"),
    ];
    for (i, item) in items.iter().enumerate() {
        draw_text(
            ctx,
            item,
            15.0,
            WHITE,
            (x, y + i as f64 * 20.0),
            Anchor::TopLeft,
            true,
        )?;
    }

    // Color key
    let mut key_y: f64 = y + items.len() as f64 * 20.0 + 12.0;
    let mut entries: Vec<(Rgb, String)> = ContentTier::ALL
        .iter()
        .map(|tier| (tier.color(), tier.labels().join(", ")))
        .collect();
    entries.push((DEFAULT_COLOR, gettext("Other")));
    for (color, label) in entries {
        set_color(ctx, rgb(color));
        ctx.arc(x + 6.0, key_y, 6.0, 0.0, 2.0 * PI);
        ctx.fill()?;
        draw_text(
            ctx,
            &label,
            13.0,
            WHITE,
            (x + 18.0, key_y - 8.0),
            Anchor::TopLeft,
            false,
        )?;
        key_y += 18.0;
    }
    Ok(())
}

/// Draw a frame of the Christmas trees visualization.
///
/// `full_year_range` is the range of all the years, for the title.
pub fn trees(
    ctx: &Context,
    frame: &SceneFrame,
    full_year_range: Option<(i32, i32)>,
    width: f64,
    height: f64,
) -> Result<()> {
    draw_sky(ctx, width, height)?;

    let title: String = match full_year_range {
        Some((first, last)) => format!(
            "{} ({first}-{last})",
            gettext("Christmas Movies Visualization")
        ),
        None => gettext("Christmas Movies Visualization"),
    };
    draw_text(
        ctx,
        &title,
        40.0,
        WHITE,
        (width / 2.0, 40.0),
        Anchor::Center,
        true,
    )?;

    if frame.trees.is_empty() {
        return Ok(());
    }

    let slider: Slider = Slider::for_viewport(width);
    draw_slider(ctx, frame, &slider)?;
    draw_legend(ctx, 40.0, slider.y + slider.height + 45.0)?;

    for tree in &frame.trees {
        draw_tree(ctx, tree)?;
    }
    Ok(())
}

//
// Cookie clicker
//

/// Scaling and offset between the widget and the fixed-size game screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenFit {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ScreenFit {
    /// Fit the game screen in the widget, keeping the aspect ratio.
    pub fn new(width: f64, height: f64) -> Self {
        let scale: f64 = (width / SCREEN_WIDTH).min(height / SCREEN_HEIGHT).max(0.01);
        Self {
            scale,
            offset_x: (width - SCREEN_WIDTH * scale) / 2.0,
            offset_y: (height - SCREEN_HEIGHT * scale) / 2.0,
        }
    }

    /// Convert widget coordinates into game screen coordinates.
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.offset_x) / self.scale,
            (y - self.offset_y) / self.scale,
        )
    }
}

fn draw_cookie_shape(ctx: &Context, rect: &Rect) -> Result<()> {
    let (cx, cy) = rect.center();
    let size: f64 = rect.width;
    let radius: f64 = size / 2.0 - 2.0;

    set_color(ctx, LIGHT_BROWN);
    ctx.arc(cx, cy, radius, 0.0, 2.0 * PI);
    ctx.fill_preserve()?;
    set_color(ctx, BROWN);
    ctx.set_line_width(3.0);
    ctx.stroke()?;

    // Chocolate chips
    set_color(ctx, DARK_RED);
    for (x_ratio, y_ratio) in [
        (0.3, 0.3),
        (0.7, 0.3),
        (0.5, 0.5),
        (0.3, 0.7),
        (0.7, 0.7),
        (0.2, 0.5),
        (0.8, 0.5),
    ] {
        ctx.arc(
            cx + (x_ratio - 0.5) * size * 0.6,
            cy + (y_ratio - 0.5) * size * 0.6,
            size / 15.0,
            0.0,
            2.0 * PI,
        );
        ctx.fill()?;
    }
    Ok(())
}

fn draw_burnt_cookie(ctx: &Context, rect: &Rect) -> Result<()> {
    let (cx, cy) = rect.center();
    let size: f64 = rect.width;
    let radius: f64 = size / 2.0 - 2.0;

    ctx.set_source_rgb(0.196, 0.157, 0.118);
    ctx.arc(cx, cy, radius, 0.0, 2.0 * PI);
    ctx.fill_preserve()?;
    set_color(ctx, BLACK);
    ctx.set_line_width(3.0);
    ctx.stroke()?;

    // Burn spots, spread with the golden angle
    for i in 0..8 {
        let angle: f64 = f64::from(i) * 2.399_963;
        let distance: f64 = size / 2.0 * (0.3 + 0.05 * f64::from(i));
        ctx.arc(
            cx + angle.cos() * distance,
            cy + angle.sin() * distance,
            size / 20.0,
            0.0,
            2.0 * PI,
        );
        ctx.fill()?;
    }
    Ok(())
}

fn draw_overlay(ctx: &Context, alpha: f64) -> Result<()> {
    ctx.set_source_rgba(0.0, 0.0, 0.0, alpha);
    ctx.rectangle(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
    ctx.fill()
}

fn draw_playfield(ctx: &Context, game: &CookieGame) -> Result<()> {
    draw_cookie_shape(ctx, &game.cookie())?;
    for distractor in game.distractors() {
        draw_burnt_cookie(ctx, &distractor.rect)?;
    }

    let score: String = format!("{} {}", gettext("Score:"), game.score());
    draw_text(ctx, &score, 24.0, BLACK, (20.0, 20.0), Anchor::TopLeft, false)?;

    let lives_color: Color = if game.lives() == 1 { RED } else { BLACK };
    let lives: String = format!("{} {}", gettext("Lives:"), game.lives());
    draw_text(ctx, &lives, 24.0, lives_color, (20.0, 60.0), Anchor::TopLeft, false)?;

    draw_text(
        ctx,
        &gettext("P: Pause | ESC: Menu"),
        18.0,
        GRAY,
        (SCREEN_WIDTH - 240.0, 20.0),
        Anchor::TopLeft,
        false,
    )?;

    let remaining: Duration = game.time_remaining();
    let timer_color: Color = if remaining <= TIMER_WARNING { RED } else { BLACK };
    let timer: String = format!("{} {}s", gettext("Time:"), remaining.as_secs());
    draw_text(ctx, &timer, 26.0, timer_color, (20.0, 100.0), Anchor::TopLeft, false)?;

    let hint: Option<String> = if game.score() < DISTRACTOR_SPAWN_THRESHOLD {
        Some(
            formatx!(
                gettext("Score {threshold} to spawn distractors!"),
                threshold = DISTRACTOR_SPAWN_THRESHOLD
            )
            .unwrap_or_else(|_| {
                format!("Score {DISTRACTOR_SPAWN_THRESHOLD} to spawn distractors!")
            }),
        )
    } else if game.is_escalated() {
        Some(gettext("Double-click the cookie!"))
    } else {
        None
    };
    if let Some(hint) = hint {
        draw_text(
            ctx,
            &hint,
            18.0,
            GRAY,
            (SCREEN_WIDTH / 2.0, 30.0),
            Anchor::Center,
            false,
        )?;
    }
    Ok(())
}

fn draw_start(ctx: &Context, game: &CookieGame) -> Result<()> {
    let (cx, cy) = (SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    draw_text(
        ctx,
        &gettext("COOKIE CLICKER CHALLENGE"),
        44.0,
        BLACK,
        (cx, cy - 120.0),
        Anchor::Center,
        true,
    )?;
    draw_text(
        ctx,
        &gettext("Click the golden cookies, avoid the burnt ones!"),
        22.0,
        GRAY,
        (cx, cy - 40.0),
        Anchor::Center,
        false,
    )?;
    draw_text(
        ctx,
        &gettext("Click anywhere to start"),
        30.0,
        BLACK,
        (cx, cy + 40.0),
        Anchor::Center,
        false,
    )?;
    if game.high_score() > 0 {
        let high: String = format!("{} {}", gettext("High Score:"), game.high_score());
        draw_text(ctx, &high, 28.0, GOLD, (cx, cy + 120.0), Anchor::Center, true)?;
    }
    Ok(())
}

fn draw_break_suggestion(ctx: &Context, game: &CookieGame) -> Result<()> {
    let (cx, cy) = (SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    draw_overlay(ctx, 150.0 / 255.0)?;
    draw_text(
        ctx,
        &gettext("TIME'S UP!"),
        54.0,
        GOLD,
        (cx, cy - 150.0),
        Anchor::Center,
        true,
    )?;
    draw_text(
        ctx,
        &game::break_message(game.score()),
        20.0,
        WHITE,
        (cx, cy - 70.0),
        Anchor::Center,
        false,
    )?;
    draw_text(
        ctx,
        &gettext("Do you want a break?"),
        24.0,
        WHITE,
        (cx, cy + 10.0),
        Anchor::Center,
        false,
    )?;

    let (take_break, keep_playing) = game::break_buttons();
    for (button, label) in [
        (take_break, gettext("Take Break")),
        (keep_playing, gettext("Continue")),
    ] {
        ctx.set_source_rgba(1.0, 1.0, 1.0, 0.15);
        rounded_rectangle(ctx, button.x, button.y, button.width, button.height, 8.0);
        ctx.fill()?;
        draw_text(
            ctx,
            &label,
            22.0,
            WHITE,
            button.center(),
            Anchor::Center,
            false,
        )?;
    }
    Ok(())
}

fn draw_game_over(ctx: &Context, game: &CookieGame) -> Result<()> {
    let (cx, cy) = (SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    draw_text(
        ctx,
        &gettext("GAME OVER"),
        60.0,
        RED,
        (cx, cy - 100.0),
        Anchor::Center,
        true,
    )?;
    let final_score: String = format!("{} {}", gettext("Final Score:"), game.score());
    draw_text(ctx, &final_score, 36.0, BLACK, (cx, cy - 10.0), Anchor::Center, false)?;
    if game.score() > 0 && game.score() == game.high_score() {
        draw_text(
            ctx,
            &gettext("NEW HIGH SCORE!"),
            28.0,
            GOLD,
            (cx, cy + 50.0),
            Anchor::Center,
            true,
        )?;
    }
    draw_text(
        ctx,
        &gettext("Click or press ESC to return to menu"),
        24.0,
        GRAY,
        (cx, cy + 100.0),
        Anchor::Center,
        false,
    )
}

/// Draw the cookie clicker game, scaled to fit the widget.
pub fn cookie_game(ctx: &Context, game: &CookieGame, fit: &ScreenFit) -> Result<()> {
    // Letterbox
    set_color(ctx, (0.2, 0.2, 0.2));
    ctx.paint()?;

    ctx.save()?;
    ctx.translate(fit.offset_x, fit.offset_y);
    ctx.scale(fit.scale, fit.scale);
    ctx.rectangle(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
    ctx.clip();

    set_color(ctx, WHITE);
    ctx.paint()?;

    match game.phase() {
        Phase::Start => draw_start(ctx, game)?,
        Phase::Playing => draw_playfield(ctx, game)?,
        Phase::Paused => {
            draw_playfield(ctx, game)?;
            draw_overlay(ctx, 128.0 / 255.0)?;
            let (cx, cy) = (SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
            draw_text(
                ctx,
                &gettext("PAUSED"),
                60.0,
                WHITE,
                (cx, cy - 60.0),
                Anchor::Center,
                true,
            )?;
            draw_text(
                ctx,
                &gettext("P: Continue | ESC: Menu"),
                30.0,
                WHITE,
                (cx, cy + 40.0),
                Anchor::Center,
                false,
            )?;
        }
        Phase::BreakSuggestion => {
            draw_playfield(ctx, game)?;
            draw_break_suggestion(ctx, game)?;
        }
        Phase::GameOver => draw_game_over(ctx, game)?,
    }
    ctx.restore()
}
