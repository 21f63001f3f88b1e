//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Rollcall library and
//! the Zellij plugin system. It implements `ZellijPlugin`, maps keys to library
//! events, turns host timers into ticks and executes the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `Timer` events
//! 3. **Start**: Send `Event::Started`, which arms the splash timer
//! 4. **Update**: Map host events, delegate to `handle_event`, run actions
//! 5. **Render**: Call the library renderer
//!
//! # Time
//!
//! The shim owns the only clock: `now` is the time elapsed since load. Host
//! timers cannot be cancelled, so a `Timer` event only means "look at your
//! deadlines"; the library decides what, if anything, is due.
//!
//! # Keybindings
//!
//! Everywhere (outside text fields and overlays):
//! - `Tab` / `Shift+Tab`: Next / previous tab
//! - `q`: Close plugin
//!
//! Employees:
//! - `/`: Focus search; `Esc`/`Enter` leave it, keeping the query
//! - `j`/`Down`, `k`/`Up`: Move cursor
//! - `1`/`2`/`3`: Present / Absent / Late filter, `0`: clear filter
//! - `Enter`: Open profile; `Esc`/`Enter`/`q` close it
//! - `r`: Refresh
//!
//! Dashboard:
//! - `t`: Toggle dark mode
//!
//! Leave:
//! - `n`: New request; in the form `Left`/`Right` change the date, `Enter`
//!   submits, `Esc` closes

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
mod plugin {
    use rollcall::{handle_event, Action, AttendanceStatus, Config, Event, InputMode, Screen};
    use std::collections::BTreeMap;
    use std::time::{Duration, Instant};
    use zellij_tile::prelude::*;

    /// Plugin state wrapper.
    ///
    /// Wraps the library's `AppState` with the load instant used as the
    /// origin of the monotonic clock.
    pub struct State {
        app: rollcall::AppState,
        loaded_at: Instant,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: rollcall::AppState::default(),
                loaded_at: Instant::now(),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Initializes the plugin on load.
        ///
        /// # Permissions
        ///
        /// Requests `ReadApplicationState` so the plugin can run as a floating pane.
        ///
        /// # Subscriptions
        ///
        /// - `Key`: Keyboard input
        /// - `Timer`: Wake-ups for debounce, splash, loading, submission and toasts
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            rollcall::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            self.loaded_at = Instant::now();
            self.app = rollcall::initialize(&config, chrono::Local::now().date_naive());

            request_permission(&[PermissionType::ReadApplicationState]);
            subscribe(&[EventType::Key, EventType::Timer]);

            self.dispatch(&Event::Started);
            tracing::debug!("plugin load complete");
        }

        /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick,
                _ => return false,
            };

            self.dispatch(&our_event)
        }

        fn render(&mut self, rows: usize, cols: usize) {
            rollcall::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn now(&self) -> Duration {
            self.loaded_at.elapsed()
        }

        fn dispatch(&mut self, event: &Event) -> bool {
            let now = self.now();
            match handle_event(&mut self.app, event, now) {
                Ok((should_render, actions)) => {
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        /// Maps keyboard events to application events for the current screen and mode.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::trace!(bare_key = ?key.bare_key, "key event");

            let mode = self.app.input_mode();

            if mode == InputMode::Normal {
                match key.bare_key {
                    BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => return Some(Event::PrevTab),
                    BareKey::Tab => return Some(Event::NextTab),
                    _ => {}
                }
            }

            match (self.app.screen, mode) {
                (_, InputMode::Overlay) => match key.bare_key {
                    BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseProfile),
                    _ => None,
                },
                (Screen::Employees, InputMode::Typing(_)) => match key.bare_key {
                    BareKey::Esc | BareKey::Enter => Some(Event::LeaveSearch),
                    BareKey::Backspace => Some(Event::Backspace),
                    BareKey::Char(c) => Some(Event::Char(c)),
                    _ => None,
                },
                (Screen::Leave, InputMode::Typing(_)) => match key.bare_key {
                    BareKey::Esc => Some(Event::CloseLeaveForm),
                    BareKey::Enter => Some(Event::SubmitLeave),
                    BareKey::Left => Some(Event::ShiftLeaveDate(-1)),
                    BareKey::Right => Some(Event::ShiftLeaveDate(1)),
                    BareKey::Backspace => Some(Event::Backspace),
                    BareKey::Char(c) => Some(Event::Char(c)),
                    _ => None,
                },
                (Screen::Employees, _) => match key.bare_key {
                    BareKey::Char('q') => Some(Event::CloseFocus),
                    BareKey::Char('/') => Some(Event::FocusSearch),
                    BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
                    BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
                    BareKey::Char('1') => Some(Event::SelectStatus(AttendanceStatus::Present)),
                    BareKey::Char('2') => Some(Event::SelectStatus(AttendanceStatus::Absent)),
                    BareKey::Char('3') => Some(Event::SelectStatus(AttendanceStatus::Late)),
                    BareKey::Char('0') => Some(Event::ClearStatus),
                    BareKey::Enter => Some(Event::OpenProfile),
                    BareKey::Char('r') => Some(Event::Refresh),
                    _ => None,
                },
                (Screen::Dashboard, _) => match key.bare_key {
                    BareKey::Char('q') => Some(Event::CloseFocus),
                    BareKey::Char('t') => Some(Event::ToggleDarkMode),
                    _ => None,
                },
                (Screen::Leave, _) => match key.bare_key {
                    BareKey::Char('q') => Some(Event::CloseFocus),
                    BareKey::Char('n') => Some(Event::OpenLeaveForm),
                    _ => None,
                },
                (Screen::Splash, _) => match key.bare_key {
                    BareKey::Char('q') => Some(Event::CloseFocus),
                    _ => None,
                },
            }
        }

        /// Translates library actions to Zellij API calls.
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
                Action::ScheduleWakeup { after } => {
                    set_timeout(after.as_secs_f64());
                }
            }
        }
    }
}

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);

#[cfg(not(target_family = "wasm"))]
fn main() {}
