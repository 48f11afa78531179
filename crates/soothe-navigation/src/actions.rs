use std::rc::Rc;

use crate::registry::{self, NavAction};
use crate::{NavController, Screen};

/// Capability to change screens, handed to the UI.
///
/// Previews and tests use `NoopNavigator` instead of a live controller.
pub trait Navigator {
    fn go_to(&self, target: Screen);
}

impl Navigator for NavController {
    fn go_to(&self, target: Screen) {
        NavController::go_to(self, target)
    }
}

/// Ignores every transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn go_to(&self, target: Screen) {
        log::trace!("noop navigator: dropping transition to {target}");
    }
}

/// Callbacks the screens bind to their buttons.
///
/// Each one makes zero or one `go_to` call, as declared in the registry.
#[derive(Clone)]
pub struct NavActions {
    navigator: Rc<dyn Navigator>,
}

impl NavActions {
    pub fn new(navigator: Rc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    pub fn noop() -> Self {
        Self::new(Rc::new(NoopNavigator))
    }

    pub fn dispatch(&self, action: NavAction) {
        match registry::action_target(action) {
            Some(target) => self.navigator.go_to(target),
            None => log::debug!("nav: {action:?} has no destination"),
        }
    }

    pub fn on_sign_up_pressed(&self) {
        self.dispatch(NavAction::SignUpPressed)
    }

    pub fn on_log_in_pressed(&self) {
        self.dispatch(NavAction::LogInPressed)
    }

    pub fn on_submit_login(&self) {
        self.dispatch(NavAction::SubmitLogin)
    }

    pub fn on_play_pressed(&self) {
        self.dispatch(NavAction::PlayPressed)
    }

    /// `Fn()` handle for `action`, for wiring into a button.
    pub fn handler(&self, action: NavAction) -> impl Fn() + use<> {
        let this = self.clone();
        move || this.dispatch(action)
    }
}
