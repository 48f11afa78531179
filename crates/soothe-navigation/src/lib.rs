//! Screens and the controller that moves between them.
//!
//! The controller owns a single `current` screen. `go_to` is the only way to
//! change it and accepts any target: the registry documents which edges the
//! UI wires up, but nothing enforces them.
//!
//! ```rust
//! use soothe_navigation::*;
//!
//! let nav = NavController::new();
//! assert_eq!(nav.current_screen(), Screen::Welcome);
//! nav.go_to(Screen::Login);
//! assert_eq!(nav.current_screen(), Screen::Login);
//! ```

pub mod actions;
pub mod registry;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use soothe_core::{Signal, SubId, signal};
use thiserror::Error;

pub use actions::{NavActions, Navigator, NoopNavigator};
pub use registry::{NavAction, NavEdge};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Welcome,
    Login,
    Home,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Welcome, Screen::Login, Screen::Home];

    pub fn route(self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Login => "login",
            Screen::Home => "home",
        }
    }

    pub fn from_route(route: &str) -> Result<Screen, NavError> {
        Screen::ALL
            .into_iter()
            .find(|s| s.route() == route)
            .ok_or_else(|| NavError::UnknownRoute(route.to_string()))
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.route())
    }
}

#[derive(Debug, Error)]
pub enum NavError {
    #[error("unknown route `{0}`")]
    UnknownRoute(String),
    #[error("malformed navigation state: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

#[derive(Serialize, Deserialize)]
struct SavedNav {
    current: Screen,
}

/// Holds the current screen and notifies subscribers on every transition.
///
/// Clones share state.
#[derive(Clone)]
pub struct NavController {
    current: Signal<Screen>,
    last: Rc<RefCell<Option<Transition>>>,
    version: Signal<u64>,
}

impl Default for NavController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavController {
    /// Starts at `Screen::Welcome`.
    pub fn new() -> Self {
        Self::starting_at(Screen::Welcome)
    }

    pub fn starting_at(start: Screen) -> Self {
        Self {
            current: signal(start),
            last: Rc::new(RefCell::new(None)),
            version: signal(0),
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.current.get()
    }

    /// Moves to `target` unconditionally. Going to the current screen still
    /// counts as a transition and notifies subscribers.
    pub fn go_to(&self, target: Screen) {
        let from = self.current.get();
        log::debug!("nav: {from} -> {target}");
        *self.last.borrow_mut() = Some(Transition { from, to: target });
        self.version.update(|v| *v = v.wrapping_add(1));
        self.current.set(target);
    }

    /// `f` runs after each transition with the new current screen.
    pub fn subscribe(&self, f: impl Fn(Screen) + 'static) -> SubId {
        self.current.subscribe(move |s| f(*s))
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.current.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.current.subscriber_count()
    }

    pub fn last_transition(&self) -> Option<Transition> {
        *self.last.borrow()
    }

    /// Number of transitions so far, restores included.
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    pub fn to_json(&self) -> String {
        let saved = SavedNav {
            current: self.current_screen(),
        };
        serde_json::to_string(&saved).unwrap_or_else(|_| r#"{"current":"welcome"}"#.into())
    }

    /// Restores state written by `to_json`. On error the state is untouched.
    pub fn restore_json(&self, json: &str) -> Result<(), NavError> {
        let saved: SavedNav = serde_json::from_str(json)?;
        log::info!("nav: restoring {}", saved.current);
        self.go_to(saved.current);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn starts_at_welcome() {
        let nav = NavController::new();
        assert_eq!(nav.current_screen(), Screen::Welcome);
        assert_eq!(nav.last_transition(), None);
        assert_eq!(nav.version(), 0);
    }

    #[test]
    fn go_to_login_from_any_state_is_idempotent() {
        for start in Screen::ALL {
            let nav = NavController::starting_at(start);
            nav.go_to(Screen::Login);
            assert_eq!(nav.current_screen(), Screen::Login);
            nav.go_to(Screen::Login);
            assert_eq!(nav.current_screen(), Screen::Login);
            assert_eq!(
                nav.last_transition(),
                Some(Transition {
                    from: Screen::Login,
                    to: Screen::Login
                })
            );
            assert_eq!(nav.version(), 2);
        }
    }

    #[test]
    fn go_to_ignores_declared_edges() {
        let nav = NavController::new();
        nav.go_to(Screen::Home);
        assert_eq!(nav.current_screen(), Screen::Home);
        nav.go_to(Screen::Welcome);
        assert_eq!(nav.current_screen(), Screen::Welcome);
    }

    #[test]
    fn subscribers_fire_on_every_go_to() {
        let nav = NavController::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let reader = nav.clone();
        let id = nav.subscribe(move |screen| {
            s.borrow_mut().push((screen, reader.current_screen()));
        });

        nav.go_to(Screen::Login);
        nav.go_to(Screen::Login);
        nav.go_to(Screen::Home);
        assert_eq!(
            *seen.borrow(),
            vec![
                (Screen::Login, Screen::Login),
                (Screen::Login, Screen::Login),
                (Screen::Home, Screen::Home),
            ]
        );

        assert!(nav.unsubscribe(id));
        nav.go_to(Screen::Welcome);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn json_round_trip() {
        let nav = NavController::new();
        nav.go_to(Screen::Home);
        let saved = nav.to_json();
        assert_eq!(saved, r#"{"current":"home"}"#);

        let restored = NavController::new();
        restored.restore_json(&saved).expect("restore");
        assert_eq!(restored.current_screen(), Screen::Home);
    }

    #[test]
    fn restore_notifies_once_and_bumps_version() {
        let nav = NavController::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        nav.subscribe(move |screen| s.borrow_mut().push(screen));

        nav.restore_json(r#"{"current":"login"}"#).expect("restore");
        assert_eq!(*seen.borrow(), vec![Screen::Login]);
        assert_eq!(nav.version(), 1);
        assert_eq!(
            nav.last_transition(),
            Some(Transition {
                from: Screen::Welcome,
                to: Screen::Login
            })
        );

        assert!(nav.restore_json("not json").is_err());
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(nav.version(), 1);
        assert_eq!(nav.current_screen(), Screen::Login);
    }

    #[test]
    fn restore_rejects_unknown_screen() {
        let nav = NavController::new();
        let err = nav.restore_json(r#"{"current":"profile"}"#).unwrap_err();
        assert!(matches!(err, NavError::Malformed(_)));
        assert_eq!(nav.current_screen(), Screen::Welcome);
        assert_eq!(nav.version(), 0);
    }

    #[test]
    fn routes_round_trip() {
        for s in Screen::ALL {
            assert_eq!(Screen::from_route(s.route()).unwrap(), s);
        }
        assert!(matches!(
            Screen::from_route("signup"),
            Err(NavError::UnknownRoute(r)) if r == "signup"
        ));
    }
}
