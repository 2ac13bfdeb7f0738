/*
trees_window.rs

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

//! Window that displays the Christmas movies as animated Christmas trees.
//!
//! A [`glib`] timeout advances the animation at 25 frames per second. Dragging the pointer over
//! the slider bar changes the range of displayed years.

use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use adw::prelude::*;
use glib::clone;
use gtk::glib;

use crate::draw;
use crate::trees::scene::{DEFAULT_VIEWPORT, Scene, SceneFrame, Slider};

/// Delay between two frames.
const FRAME_DELAY: Duration = Duration::from_millis(40);

/// Animation state shared by the timeout, the gestures, and the draw function.
struct TreesView {
    scene: Scene,

    /// Frame counter.
    frame: u64,

    /// Last computed frame.
    current: Option<SceneFrame>,

    /// Whether the player is dragging the slider handle.
    dragging: bool,
}

fn viewport(area: &gtk::DrawingArea) -> (f64, f64) {
    let (w, h) = (area.width(), area.height());
    if w <= 0 || h <= 0 {
        return DEFAULT_VIEWPORT;
    }
    (f64::from(w), f64::from(h))
}

/// Move the slider handle under the pointer.
fn slide(view: &mut TreesView, area: &gtk::DrawingArea, x: f64) {
    let slider: Slider = Slider::for_viewport(viewport(area).0);
    let start: usize = view.scene.slider_value_from_pointer(x, &slider);
    if start != view.scene.window_start() {
        debug!("Window start: {start}");
        view.scene.set_window_start(start);
    }
}

/// Create the window.
pub fn build(app: &impl IsA<gtk::Application>, scene: Scene) -> adw::ApplicationWindow {
    let full_year_range: Option<(i32, i32)> = scene.full_year_range();
    let view: Rc<RefCell<TreesView>> = Rc::new(RefCell::new(TreesView {
        scene,
        frame: 0,
        current: None,
        dragging: false,
    }));

    let area: gtk::DrawingArea = gtk::DrawingArea::builder()
        .content_width(DEFAULT_VIEWPORT.0 as i32)
        .content_height(DEFAULT_VIEWPORT.1 as i32)
        .hexpand(true)
        .vexpand(true)
        .build();

    area.set_draw_func(clone!(
        #[strong]
        view,
        move |_da, ctx, w, h| {
            let view = view.borrow();
            if let Some(frame) = &view.current
                && let Err(e) =
                    draw::trees(ctx, frame, full_year_range, f64::from(w), f64::from(h))
            {
                warn!("Cannot draw the frame {}: {e}", frame.frame);
            }
        }
    ));

    // Slider
    let drag: gtk::GestureDrag = gtk::GestureDrag::new();
    drag.connect_drag_begin(clone!(
        #[strong]
        view,
        #[weak]
        area,
        move |_gesture, x, y| {
            let mut view = view.borrow_mut();
            if Slider::for_viewport(viewport(&area).0).hit(x, y) {
                view.dragging = true;
                slide(&mut view, &area, x);
            }
        }
    ));
    drag.connect_drag_update(clone!(
        #[strong]
        view,
        #[weak]
        area,
        move |gesture, offset_x, _offset_y| {
            let mut view = view.borrow_mut();
            if let Some((start_x, _start_y)) = gesture.start_point()
                && view.dragging
            {
                slide(&mut view, &area, start_x + offset_x);
            }
        }
    ));
    drag.connect_drag_end(clone!(
        #[strong]
        view,
        move |_gesture, _offset_x, _offset_y| {
            view.borrow_mut().dragging = false;
        }
    ));
    area.add_controller(drag);

    // Animation
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
                let counter: u64 = view.frame;
                let frame: SceneFrame =
                    view.scene
                        .frame(counter, viewport(&area), &mut rand::rng());
                view.current = Some(frame);
                view.frame += 1;
                area.queue_draw();
                glib::ControlFlow::Continue
            }
        ),
    );

    let toolbar_view: adw::ToolbarView = adw::ToolbarView::new();
    toolbar_view.add_top_bar(&adw::HeaderBar::new());
    toolbar_view.set_content(Some(&area));

    adw::ApplicationWindow::builder()
        .application(app)
        .title("Christmas Movies")
        .default_width(DEFAULT_VIEWPORT.0 as i32)
        .default_height(DEFAULT_VIEWPORT.1 as i32)
        .content(&toolbar_view)
        .build()
}
