/*
application.rs

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

//! GTK application that hosts the Christmas trees and the cookie clicker windows.

use gettextrs::gettext;
use log::debug;

use adw::prelude::*;
use adw::subclass::prelude::*;
use glib::WeakRef;
use gtk::{gio, glib};

use crate::config;
use crate::saver::highscores::SaverHighScores;
use crate::trees::scene::Scene;
use crate::widgets::{cookie_window, trees_window};

/// The game that the application window displays.
pub enum WindowGame {
    Trees(Scene),

    /// The cookie clicker, with the object that saves the scoreboard (None when the scores
    /// cannot be saved).
    Cookie(Option<SaverHighScores>),
}

mod imp {
    use super::*;
    use std::cell::{OnceCell, RefCell};

    #[derive(Default)]
    pub struct YuletideApplication {
        /// The game to display, until the window is created.
        pub game: RefCell<Option<WindowGame>>,

        /// The application window.
        pub window: OnceCell<WeakRef<adw::ApplicationWindow>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for YuletideApplication {
        const NAME: &'static str = "YuletideApplication";
        type Type = super::YuletideApplication;
        type ParentType = adw::Application;
    }

    impl ApplicationImpl for YuletideApplication {
        // Create the window when the application is launched, or present the existing one.
        fn activate(&self) {
            let application = self.obj();
            if let Some(window) = application.get_main_window() {
                window.present();
                return;
            }

            let Some(game) = self.game.take() else {
                debug!("No game to display");
                return;
            };
            let window: adw::ApplicationWindow = match game {
                WindowGame::Trees(scene) => trees_window::build(&*application, scene),
                WindowGame::Cookie(saver) => cookie_window::build(&*application, saver),
            };
            if self.window.set(window.downgrade()).is_err() {
                debug!("The application window is already set");
            }
            window.present();
        }

        fn startup(&self) {
            self.parent_startup();

            let application = self.obj();
            application.setup_gactions();
            application.set_accels_for_action("app.quit", &["<Primary>q"]);
            application.set_accels_for_action("app.toggle-fullscreen", &["F11"]);
        }
    }

    impl ObjectImpl for YuletideApplication {}
    impl GtkApplicationImpl for YuletideApplication {}
    impl AdwApplicationImpl for YuletideApplication {}
}

glib::wrapper! {
    pub struct YuletideApplication(ObjectSubclass<imp::YuletideApplication>)
        @extends gio::Application, gtk::Application, adw::Application,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl Default for YuletideApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl YuletideApplication {
    /// Create an [`YuletideApplication`] object.
    pub fn new() -> Self {
        glib::Object::builder()
            .property("application-id", config::APPLICATION_ID)
            .build()
    }

    fn setup_gactions(&self) {
        let actions = [
            gio::ActionEntryBuilder::new("about")
                .activate(|app: &Self, _, _| app.show_about())
                .build(),
            gio::ActionEntryBuilder::new("quit")
                .activate(|app: &Self, _, _| app.quit())
                .build(),
            gio::ActionEntryBuilder::new("toggle-fullscreen")
                .activate(move |app: &Self, _, _| app.toggle_fullscreen())
                .build(),
        ];

        self.add_action_entries(actions);
    }

    fn get_main_window(&self) -> Option<adw::ApplicationWindow> {
        self.imp().window.get().and_then(|w| w.upgrade())
    }

    fn show_about(&self) {
        let about: adw::AboutDialog = adw::AboutDialog::builder()
            .application_name("Yuletide Arcade")
            .application_icon(config::APPLICATION_ID)
            .developer_name("Hervé Quatremain")
            .version(config::VERSION)
            .developers(vec!["Hervé Quatremain"])
            // Translators: Replace "translator-credits" with your name/username, and optionally
            // an email or URL.
            .translator_credits(gettext("translator-credits"))
            .copyright("© 2025 Hervé Quatremain")
            .license_type(gtk::License::Gpl30)
            .build();
        about.present(self.active_window().as_ref());
    }

    fn toggle_fullscreen(&self) {
        debug!("Toggle fullscreen");
        if let Some(window) = self.get_main_window() {
            if window.is_fullscreen() {
                window.unfullscreen();
            } else {
                window.fullscreen();
            }
        }
    }
}

/// Open the window for the given game and run the GTK main loop.
///
/// Return the exit code.
pub fn run(game: WindowGame) -> u8 {
    let app: YuletideApplication = YuletideApplication::new();
    app.imp().game.replace(Some(game));

    // Because the arguments are processed by Clap, pass an empty argument list to the GApplication
    let args: Vec<String> = Vec::new();
    if app.run_with_args(&args) == glib::ExitCode::SUCCESS {
        0
    } else {
        1
    }
}
