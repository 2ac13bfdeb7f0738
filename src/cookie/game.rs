/*
game.rs

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

//! Manage the status of a cookie clicker game.
//!
//! The game goes through the following phases:
//!
//! ```text
//!             click                 P
//!   Start ----------> Playing <----------> Paused
//!     ^  ^  Esc         |  |     P / Esc      |
//!     |  +--------------+  |                  |
//!     |  +-----------------|------------------+
//!     |                    |
//!     | click / Esc        | no more lives        90 s elapsed
//!   GameOver <-------------+---------------------------> BreakSuggestion
//!                                                     |        |
//!          Start <---------------- "Take Break" ------+        |
//!          Playing (double-click, more distractors) <- "Continue"
//! ```
//!
//! The host delivers player input with [`CookieGame::handle_event`] and calls
//! [`CookieGame::tick`] once per frame.
//! Time is provided by the host as a monotonic [`Duration`], which makes the game easy to test.
//!
//! The 90 s engagement timer only counts the playing time: it stops while the game is paused,
//! so resuming after a long pause does not immediately suggest a break.

use formatx::formatx;
use gettextrs::gettext;
use log::{debug, info};
use rand::Rng;
use std::fmt;
use std::time::Duration;

use super::clicks::DoubleClick;
use super::config::*;
use super::distractor::{self, Distractor};
use super::rect::Rect;

/// Game phase.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Title screen.
    Start,
    Playing,
    Paused,

    /// The engagement period is over, the player is asked whether they want a break.
    BreakSuggestion,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Phase::Start => write!(f, "start"),
            Phase::Playing => write!(f, "playing"),
            Phase::Paused => write!(f, "paused"),
            Phase::BreakSuggestion => write!(f, "break suggestion"),
            Phase::GameOver => write!(f, "game over"),
        }
    }
}

/// Keys that the game reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    /// Pause or resume the game (`P`).
    Pause,

    /// Go back to the title screen (`Esc`).
    Escape,
}

/// Player input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Event {
    /// Mouse click at the given position.
    Click { x: f64, y: f64 },
    Key(Key),
}

/// Why a session ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EndReason {
    /// The player lost all their lives.
    GameOver,

    /// The player accepted to take a break.
    Break,
}

/// A finished session, which the host can add to the scoreboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionEnd {
    pub score: u32,
    pub reason: EndReason,
}

/// Session timer that does not count the paused time.
#[derive(Debug, Default, Clone)]
struct SessionTimer {
    /// Time when the session started.
    start: Duration,

    /// The elapsed time when the player paused the game.
    paused_elapsed: Option<Duration>,
}

impl SessionTimer {
    fn new(now: Duration) -> Self {
        Self {
            start: now,
            paused_elapsed: None,
        }
    }

    fn elapsed(&self, now: Duration) -> Duration {
        match self.paused_elapsed {
            Some(d) => d,
            None => now.saturating_sub(self.start),
        }
    }

    fn pause(&mut self, now: Duration) {
        if self.paused_elapsed.is_none() {
            self.paused_elapsed = Some(self.elapsed(now));
        }
    }

    fn resume(&mut self, now: Duration) {
        // Shift the start time by the pause duration
        if let Some(d) = self.paused_elapsed.take() {
            self.start = now.saturating_sub(d);
        }
    }
}

/// Boxes of the two buttons of the break suggestion screen.
pub fn break_buttons() -> (Rect, Rect) {
    let take_break: Rect = Rect::new(
        SCREEN_WIDTH / 2.0 - 150.0,
        SCREEN_HEIGHT / 2.0 + 80.0,
        140.0,
        50.0,
    );
    let keep_playing: Rect = Rect::new(
        SCREEN_WIDTH / 2.0 + 10.0,
        SCREEN_HEIGHT / 2.0 + 80.0,
        140.0,
        50.0,
    );
    (take_break, keep_playing)
}

/// Message displayed when suggesting a break.
pub fn break_message(score: u32) -> String {
    let seconds: u64 = ENGAGEMENT_PERIOD.as_secs();
    formatx!(
        gettext("Cookie Champion! You've collected {score} cookies in {seconds} seconds!"),
        score = score,
        seconds = seconds
    )
    .unwrap_or_else(|_| {
        format!("Cookie Champion! You've collected {score} cookies in {seconds} seconds!")
    })
}

/// Status of the cookie clicker game.
#[derive(Debug, Clone)]
pub struct CookieGame {
    phase: Phase,
    score: u32,
    lives: u32,

    /// Best score since the game was launched, or restored from the scoreboard.
    high_score: u32,
    cookie: Rect,
    distractors: Vec<Distractor>,

    /// Score when the last regular distractor was added.
    last_spawn_score: u32,
    timer: SessionTimer,
    time_remaining: Duration,

    /// After refusing a break, every point adds a distractor.
    extra_distractors: bool,

    /// After refusing a break, cookies must be double-clicked.
    double_click_required: bool,
    double_click: DoubleClick,
}

impl Default for CookieGame {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CookieGame {
    /// Create a [`CookieGame`] object, on the title screen.
    pub fn new(high_score: u32) -> Self {
        Self {
            phase: Phase::Start,
            score: 0,
            lives: LIVES,
            high_score,
            cookie: Self::centered_cookie(),
            distractors: Vec::new(),
            last_spawn_score: 0,
            timer: SessionTimer::default(),
            time_remaining: ENGAGEMENT_PERIOD,
            extra_distractors: false,
            double_click_required: false,
            double_click: DoubleClick::new(),
        }
    }

    fn centered_cookie() -> Rect {
        Rect::centered(
            SCREEN_WIDTH / 2.0,
            SCREEN_HEIGHT / 2.0,
            COOKIE_SIZE,
            COOKIE_SIZE,
        )
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn cookie(&self) -> Rect {
        self.cookie
    }

    pub fn distractors(&self) -> &[Distractor] {
        &self.distractors
    }

    /// Remaining time in the current session.
    pub fn time_remaining(&self) -> Duration {
        self.time_remaining
    }

    /// Whether the player refused a break and the game got harder.
    pub fn is_escalated(&self) -> bool {
        self.extra_distractors || self.double_click_required
    }

    fn set_phase(&mut self, phase: Phase) {
        if phase != self.phase {
            debug!("Cookie game: {} -> {phase}", self.phase);
            self.phase = phase;
        }
    }

    /// Start a new game: reset the score, lives, and positions.
    fn reset(&mut self, now: Duration) {
        self.score = 0;
        self.lives = LIVES;
        self.distractors.clear();
        self.last_spawn_score = 0;
        self.cookie = Self::centered_cookie();
        self.timer = SessionTimer::new(now);
        self.time_remaining = ENGAGEMENT_PERIOD;
        self.extra_distractors = false;
        self.double_click_required = false;
        self.double_click.clear();
        self.set_phase(Phase::Playing);
    }

    /// Record the end of the session.
    fn end_session(&mut self, reason: EndReason) -> SessionEnd {
        self.high_score = self.high_score.max(self.score);
        info!("Session ended ({reason:?}) with {} cookies", self.score);
        SessionEnd {
            score: self.score,
            reason,
        }
    }

    /// Process player input.
    ///
    /// Return a [`SessionEnd`] object when the event ends the session.
    pub fn handle_event<R: Rng>(
        &mut self,
        event: Event,
        now: Duration,
        rng: &mut R,
    ) -> Option<SessionEnd> {
        match (self.phase, event) {
            (Phase::Start, Event::Click { .. }) => {
                self.reset(now);
                None
            }

            (Phase::Playing, Event::Key(Key::Pause)) => {
                self.timer.pause(now);
                self.set_phase(Phase::Paused);
                None
            }
            (Phase::Paused, Event::Key(Key::Pause)) => {
                self.timer.resume(now);
                self.set_phase(Phase::Playing);
                None
            }
            (Phase::Playing | Phase::Paused, Event::Key(Key::Escape)) => {
                self.set_phase(Phase::Start);
                None
            }
            (Phase::Playing, Event::Click { x, y }) => self.click(x, y, now, rng),

            (Phase::BreakSuggestion, Event::Click { x, y }) => {
                let (take_break, keep_playing) = break_buttons();
                if take_break.contains(x, y) {
                    self.set_phase(Phase::Start);
                    Some(self.end_session(EndReason::Break))
                } else {
                    if keep_playing.contains(x, y) {
                        // The game gets harder, and a new session starts
                        self.extra_distractors = true;
                        self.double_click_required = true;
                        self.double_click.clear();
                        self.timer = SessionTimer::new(now);
                        self.time_remaining = ENGAGEMENT_PERIOD;
                        self.set_phase(Phase::Playing);
                    }
                    None
                }
            }

            (Phase::GameOver, Event::Click { .. } | Event::Key(Key::Escape)) => {
                self.set_phase(Phase::Start);
                None
            }

            _ => None,
        }
    }

    /// Process a click during the game.
    fn click<R: Rng>(&mut self, x: f64, y: f64, now: Duration, rng: &mut R) -> Option<SessionEnd> {
        if self.cookie.contains(x, y) {
            if !self.double_click_required || self.double_click.click(now, x, y) {
                self.collect_cookie(rng);
            }
            return None;
        }

        if self.distractors.iter().any(|d| d.rect.contains(x, y)) {
            self.lives = self.lives.saturating_sub(1);
            debug!("Distractor clicked, {} lives left", self.lives);
            if self.lives == 0 {
                self.set_phase(Phase::GameOver);
                return Some(self.end_session(EndReason::GameOver));
            }
        }
        None
    }

    /// The player collected the cookie: increase the score, move the cookie, and add
    /// distractors.
    fn collect_cookie<R: Rng>(&mut self, rng: &mut R) {
        self.score += 1;
        let (cx, cy) = distractor::random_center(rng);
        self.cookie = Rect::centered(cx, cy, COOKIE_SIZE, COOKIE_SIZE);

        if self.extra_distractors {
            self.distractors.push(Distractor::spawn(self.score, rng));
        }

        if self.score >= DISTRACTOR_SPAWN_THRESHOLD
            && self.score - self.last_spawn_score >= DISTRACTOR_SPAWN_THRESHOLD
        {
            for _ in 0..DISTRACTORS_PER_SPAWN {
                self.distractors.push(Distractor::spawn(self.score, rng));
            }
            self.last_spawn_score = self.score;
        }
    }

    /// Advance the game by one frame: move the distractors and update the session timer.
    pub fn tick(&mut self, now: Duration) {
        if self.phase != Phase::Playing {
            return;
        }
        for d in &mut self.distractors {
            d.step();
        }

        self.time_remaining = ENGAGEMENT_PERIOD.saturating_sub(self.timer.elapsed(now));
        if self.time_remaining.is_zero() {
            self.set_phase(Phase::BreakSuggestion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Click in the middle of the given rectangle.
    fn click_on(r: Rect) -> Event {
        let (x, y) = r.center();
        Event::Click { x, y }
    }

    fn started(rng: &mut StdRng) -> CookieGame {
        let mut g: CookieGame = CookieGame::new(0);
        g.handle_event(Event::Click { x: 1.0, y: 1.0 }, secs(0.0), rng);
        g
    }

    fn collect(g: &mut CookieGame, now: Duration, rng: &mut StdRng) {
        let e: Event = click_on(g.cookie());
        g.handle_event(e, now, rng);
    }

    #[test]
    fn start_screen_click_starts_a_game() {
        let mut rng: StdRng = rng();
        let g: CookieGame = started(&mut rng);
        assert_eq!(g.phase(), Phase::Playing);
        assert_eq!(g.score(), 0);
        assert_eq!(g.lives(), LIVES);
        assert_eq!(g.cookie().center(), (400.0, 300.0));
        assert_eq!(g.time_remaining(), ENGAGEMENT_PERIOD);
    }

    #[test]
    fn keys_are_ignored_on_start_screen() {
        let mut rng: StdRng = rng();
        let mut g: CookieGame = CookieGame::new(0);
        g.handle_event(Event::Key(Key::Pause), secs(0.0), &mut rng);
        g.handle_event(Event::Key(Key::Escape), secs(0.0), &mut rng);
        assert_eq!(g.phase(), Phase::Start);
    }

    #[test]
    fn collecting_cookies_spawns_distractors() {
        let mut rng: StdRng = rng();
        let mut g: CookieGame = started(&mut rng);
        for i in 1..=4 {
            collect(&mut g, secs(f64::from(i)), &mut rng);
        }
        assert_eq!(g.score(), 4);
        assert!(g.distractors().is_empty());

        collect(&mut g, secs(5.0), &mut rng);
        assert_eq!(g.score(), 5);
        assert_eq!(g.distractors().len(), 1);

        for i in 6..=10 {
            collect(&mut g, secs(f64::from(i)), &mut rng);
        }
        assert_eq!(g.distractors().len(), 2);
    }

    #[test]
    fn clicking_elsewhere_does_nothing() {
        let mut rng: StdRng = rng();
        let mut g: CookieGame = started(&mut rng);
        g.handle_event(Event::Click { x: 5.0, y: 5.0 }, secs(1.0), &mut rng);
        assert_eq!(g.score(), 0);
        assert_eq!(g.lives(), LIVES);
    }

    #[test]
    fn losing_all_lives_ends_the_game() {
        let mut rng: StdRng = rng();
        let mut g: CookieGame = started(&mut rng);
        for i in 1..=7 {
            collect(&mut g, secs(f64::from(i)), &mut rng);
        }
        assert_eq!(g.distractors().len(), 1);

        let mut end: Option<SessionEnd> = None;
        for i in 0..LIVES {
            // Click a spot of the distractor that the cookie does not cover
            let d: Rect = g.distractors()[0].rect;
            let spot: Option<(f64, f64)> = [
                (d.left() + 1.0, d.top() + 1.0),
                (d.right() - 1.0, d.top() + 1.0),
                (d.left() + 1.0, d.bottom() - 1.0),
                (d.right() - 1.0, d.bottom() - 1.0),
            ]
            .into_iter()
            .find(|(x, y)| !g.cookie().contains(*x, *y));
            let (x, y) = spot.expect("The cookie hides the distractor");
            end = g.handle_event(Event::Click { x, y }, secs(8.0 + f64::from(i)), &mut rng);
        }
        assert_eq!(g.lives(), 0);
        assert_eq!(g.phase(), Phase::GameOver);
        assert_eq!(
            end,
            Some(SessionEnd {
                score: 7,
                reason: EndReason::GameOver
            })
        );
        assert_eq!(g.high_score(), 7);

        g.handle_event(Event::Key(Key::Escape), secs(20.0), &mut rng);
        assert_eq!(g.phase(), Phase::Start);

        // A new game resets the score but keeps the high score
        g.handle_event(Event::Click { x: 0.0, y: 0.0 }, secs(21.0), &mut rng);
        assert_eq!(g.score(), 0);
        assert_eq!(g.high_score(), 7);
        assert!(g.distractors().is_empty());
    }

    #[test]
    fn pause_freezes_the_timer() {
        let mut rng: StdRng = rng();
        let mut g: CookieGame = started(&mut rng);
        g.tick(secs(10.0));
        assert_eq!(g.time_remaining(), secs(80.0));

        g.handle_event(Event::Key(Key::Pause), secs(10.0), &mut rng);
        assert_eq!(g.phase(), Phase::Paused);
        g.tick(secs(50.0));
        assert_eq!(g.time_remaining(), secs(80.0));

        // Clicks are ignored while paused
        collect(&mut g, secs(55.0), &mut rng);
        assert_eq!(g.score(), 0);

        g.handle_event(Event::Key(Key::Pause), secs(60.0), &mut rng);
        assert_eq!(g.phase(), Phase::Playing);
        g.tick(secs(70.0));
        assert_eq!(g.time_remaining(), secs(70.0));
    }

    #[test]
    fn escape_goes_back_to_start() {
        let mut rng: StdRng = rng();
        let mut g: CookieGame = started(&mut rng);
        g.handle_event(Event::Key(Key::Escape), secs(1.0), &mut rng);
        assert_eq!(g.phase(), Phase::Start);

        let mut g: CookieGame = started(&mut rng);
        g.handle_event(Event::Key(Key::Pause), secs(1.0), &mut rng);
        g.handle_event(Event::Key(Key::Escape), secs(2.0), &mut rng);
        assert_eq!(g.phase(), Phase::Start);
    }

    #[test]
    fn break_suggestion_after_engagement_period() {
        let mut rng: StdRng = rng();
        let mut g: CookieGame = started(&mut rng);
        collect(&mut g, secs(1.0), &mut rng);
        g.tick(secs(89.9));
        assert_eq!(g.phase(), Phase::Playing);
        g.tick(secs(90.0));
        assert_eq!(g.phase(), Phase::BreakSuggestion);
        assert_eq!(g.time_remaining(), Duration::ZERO);

        // Clicks outside of the buttons are ignored
        g.handle_event(Event::Click { x: 1.0, y: 1.0 }, secs(91.0), &mut rng);
        assert_eq!(g.phase(), Phase::BreakSuggestion);

        let (take_break, _) = break_buttons();
        let end: Option<SessionEnd> = g.handle_event(click_on(take_break), secs(92.0), &mut rng);
        assert_eq!(g.phase(), Phase::Start);
        assert_eq!(
            end,
            Some(SessionEnd {
                score: 1,
                reason: EndReason::Break
            })
        );
        assert_eq!(g.high_score(), 1);
    }

    #[test]
    fn continuing_makes_the_game_harder() {
        let mut rng: StdRng = rng();
        let mut g: CookieGame = started(&mut rng);
        g.tick(secs(90.0));
        let (_, keep_playing) = break_buttons();
        g.handle_event(click_on(keep_playing), secs(95.0), &mut rng);
        assert_eq!(g.phase(), Phase::Playing);
        assert!(g.is_escalated());
        g.tick(secs(100.0));
        assert_eq!(g.time_remaining(), secs(85.0));

        // A single click is not enough anymore
        collect(&mut g, secs(101.0), &mut rng);
        assert_eq!(g.score(), 0);

        // A slow second click does not count either
        collect(&mut g, secs(102.0), &mut rng);
        assert_eq!(g.score(), 0);

        // Double-click, which also adds a distractor
        collect(&mut g, secs(102.2), &mut rng);
        assert_eq!(g.score(), 1);
        assert_eq!(g.distractors().len(), 1);

        // Another session, and then the break suggestion again
        g.tick(secs(185.0));
        assert_eq!(g.phase(), Phase::BreakSuggestion);
    }

    #[test]
    fn distractors_move_only_while_playing() {
        let mut rng: StdRng = rng();
        let mut g: CookieGame = started(&mut rng);
        for i in 1..=5 {
            collect(&mut g, secs(f64::from(i)), &mut rng);
        }
        let before: Rect = g.distractors()[0].rect;
        g.tick(secs(6.0));
        let moved: Rect = g.distractors()[0].rect;
        assert_ne!(before, moved);

        g.handle_event(Event::Key(Key::Pause), secs(6.0), &mut rng);
        g.tick(secs(7.0));
        assert_eq!(g.distractors()[0].rect, moved);
    }

    #[test]
    fn break_message_mentions_the_score() {
        let message: String = break_message(42);
        assert!(message.contains("42"));
        assert!(message.contains("90"));
    }
}
