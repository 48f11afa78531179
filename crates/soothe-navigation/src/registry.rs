use crate::Screen;

/// User actions that may move between screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavAction {
    SignUpPressed,
    LogInPressed,
    SubmitLogin,
    PlayPressed,
}

impl NavAction {
    pub const ALL: [NavAction; 4] = [
        NavAction::SignUpPressed,
        NavAction::LogInPressed,
        NavAction::SubmitLogin,
        NavAction::PlayPressed,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEdge {
    pub from: Screen,
    pub action: NavAction,
    pub to: Screen,
}

const EDGES: &[NavEdge] = &[
    NavEdge {
        from: Screen::Welcome,
        action: NavAction::LogInPressed,
        to: Screen::Login,
    },
    NavEdge {
        from: Screen::Login,
        action: NavAction::SubmitLogin,
        to: Screen::Home,
    },
];

/// Edges the UI wires up. Sign-up and play have none yet.
pub fn edges() -> &'static [NavEdge] {
    EDGES
}

/// Where `action` leads, wherever it is triggered from.
pub fn action_target(action: NavAction) -> Option<Screen> {
    EDGES.iter().find(|e| e.action == action).map(|e| e.to)
}

/// Declared edge out of `from` for `action`.
pub fn target(from: Screen, action: NavAction) -> Option<Screen> {
    EDGES
        .iter()
        .find(|e| e.from == from && e.action == action)
        .map(|e| e.to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_edges() {
        assert_eq!(
            target(Screen::Welcome, NavAction::LogInPressed),
            Some(Screen::Login)
        );
        assert_eq!(
            target(Screen::Login, NavAction::SubmitLogin),
            Some(Screen::Home)
        );
        assert_eq!(target(Screen::Home, NavAction::LogInPressed), None);
    }

    #[test]
    fn sign_up_and_play_lead_nowhere() {
        for from in Screen::ALL {
            assert_eq!(target(from, NavAction::SignUpPressed), None);
            assert_eq!(target(from, NavAction::PlayPressed), None);
        }
        assert_eq!(action_target(NavAction::SignUpPressed), None);
        assert_eq!(action_target(NavAction::PlayPressed), None);
    }

    #[test]
    fn home_has_no_outgoing_edge() {
        assert!(edges().iter().all(|e| e.from != Screen::Home));
    }
}
