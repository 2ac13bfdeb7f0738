/*
cookie_window.rs

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

//! Window for the cookie clicker game.
//!
//! The game runs at 60 frames per second. Mouse clicks and the `P` and `Esc` keys are forwarded
//! to the [`CookieGame`] object, and the finished sessions are added to the scoreboard.

use log::{Level, debug, info, log_enabled, warn};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime};

use adw::prelude::*;
use glib::clone;
use gtk::{gdk, glib};

use crate::cookie::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::cookie::game::{CookieGame, Event, Key, SessionEnd};
use crate::draw::{self, ScreenFit};
use crate::highscores::{Ending, HighScores};
use crate::saver::highscores::SaverHighScores;

/// Delay between two frames.
const FRAME_DELAY: Duration = Duration::from_millis(16);

/// State shared by the event controllers, the timeout, and the draw function.
struct CookieView {
    game: CookieGame,
    highscores: HighScores,
    saver: Option<SaverHighScores>,

    /// Origin of the game clock.
    started: Instant,
}

impl CookieView {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn handle_event(&mut self, event: Event) {
        let now: Duration = self.now();
        if let Some(end) = self.game.handle_event(event, now, &mut rand::rng()) {
            self.record_session(end);
        }
    }

    /// Add the finished session to the scoreboard and save the scoreboard.
    fn record_session(&mut self, end: SessionEnd) {
        let position: Option<usize> =
            self.highscores
                .add_score(end.score, Ending::from(end.reason), SystemTime::now());
        let Some(position) = position else {
            debug!("Score {} does not make it to the scoreboard", end.score);
            return;
        };
        info!("Score {} is at position {position} in the scoreboard", end.score);
        if let Some(saver) = &self.saver
            && let Err(e) = saver.save_highscores(&self.highscores)
        {
            warn!("Cannot save the high scores to {:?}: {e}", saver.path());
        }
    }
}

fn screen_fit(area: &gtk::DrawingArea) -> ScreenFit {
    ScreenFit::new(f64::from(area.width()), f64::from(area.height()))
}

/// Create the window.
pub fn build(
    app: &impl IsA<gtk::Application>,
    saver: Option<SaverHighScores>,
) -> adw::ApplicationWindow {
    let highscores: HighScores = match &saver {
        Some(s) => s.load_or_default(),
        None => HighScores::new(),
    };
    let view: Rc<RefCell<CookieView>> = Rc::new(RefCell::new(CookieView {
        game: CookieGame::new(highscores.best()),
        highscores,
        saver,
        started: Instant::now(),
    }));

    let area: gtk::DrawingArea = gtk::DrawingArea::builder()
        .content_width(SCREEN_WIDTH as i32)
        .content_height(SCREEN_HEIGHT as i32)
        .hexpand(true)
        .vexpand(true)
        .build();

    area.set_draw_func(clone!(
        #[strong]
        view,
        move |_da, ctx, w, h| {
            let fit: ScreenFit = ScreenFit::new(f64::from(w), f64::from(h));
            if let Err(e) = draw::cookie_game(ctx, &view.borrow().game, &fit) {
                warn!("Cannot draw the cookie game: {e}");
            }
        }
    ));

    // Mouse clicks
    let click: gtk::GestureClick = gtk::GestureClick::new();
    click.connect_pressed(clone!(
        #[strong]
        view,
        #[weak]
        area,
        move |_gesture, _n_press, x, y| {
            let (x, y) = screen_fit(&area).to_screen(x, y);
            view.borrow_mut().handle_event(Event::Click { x, y });
            area.queue_draw();
        }
    ));
    area.add_controller(click);

    // Game loop
    glib::timeout_add_local(
        FRAME_DELAY,
        clone!(
            #[strong]
            view,
            #[weak]
            area,
            #[upgrade_or]
            glib::ControlFlow::Break,
            move || {
                let mut view = view.borrow_mut();
                let now: Duration = view.now();
                view.game.tick(now);
                area.queue_draw();
                glib::ControlFlow::Continue
            }
        ),
    );

    let toolbar_view: adw::ToolbarView = adw::ToolbarView::new();
    toolbar_view.add_top_bar(&adw::HeaderBar::new());
    toolbar_view.set_content(Some(&area));

    let window: adw::ApplicationWindow = adw::ApplicationWindow::builder()
        .application(app)
        .title("Cookie Clicker Challenge")
        .content(&toolbar_view)
        .build();

    // Keyboard
    let keys: gtk::EventControllerKey = gtk::EventControllerKey::new();
    keys.connect_key_pressed(clone!(
        #[strong]
        view,
        #[weak]
        area,
        #[upgrade_or]
        glib::Propagation::Proceed,
        move |_controller, keyval, keycode, modifier| {
            if log_enabled!(Level::Debug) {
                debug!("Key pressed:");
                debug!("       keyval = {keyval:?}");
                debug!("     modifier = {modifier:?}");
                debug!("      keycode = {keycode}");
            }
            let key: Key = match keyval {
                gdk::Key::p | gdk::Key::P => Key::Pause,
                gdk::Key::Escape => Key::Escape,
                _ => return glib::Propagation::Proceed,
            };
            view.borrow_mut().handle_event(Event::Key(key));
            area.queue_draw();
            glib::Propagation::Stop
        }
    ));
    window.add_controller(keys);

    window
}
