use soothe_core::*;
use soothe_navigation::{NavAction, NavActions};
use soothe_ui::*;

use crate::components::{Background, ContainedButton, Logo};
use crate::resources::{ImageKey, ResourceProvider, StringKey};

pub fn screen(res: &dyn ResourceProvider, actions: &NavActions) -> View {
    let t = theme();
    Surface(
        Modifier::new().fill_max_size().background(t.background),
        Stack(Modifier::new().fill_max_size()).child((
            Background(res.image(ImageKey::WelcomeBackground)),
            Column(Modifier::new().fill_max_size().center_content()).child((
                Logo(res, Modifier::new()),
                Box(Modifier::new().height(32.0)),
                // No destination yet; the action is dispatched and dropped.
                ContainedButton(
                    &res.string(StringKey::SignUp),
                    t.primary,
                    t.on_primary,
                    actions.handler(NavAction::SignUpPressed),
                    Modifier::new().padding_horizontal(16.0),
                ),
                Box(Modifier::new().height(8.0)),
                ContainedButton(
                    &res.string(StringKey::LogIn),
                    t.secondary,
                    t.on_secondary,
                    actions.handler(NavAction::LogInPressed),
                    Modifier::new().padding_horizontal(16.0),
                ),
            )),
        )),
    )
}
