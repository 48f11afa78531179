use soothe_core::*;
use soothe_navigation::{NavAction, NavActions};
use soothe_ui::*;

use crate::components::{Background, ContainedButton, FilledTextField};
use crate::resources::{ImageKey, ResourceProvider, StringKey};

/// Credentials are never checked: the log-in button always proceeds.
pub fn screen(res: &dyn ResourceProvider, actions: &NavActions) -> View {
    let t = theme();
    let type_scale = typography();
    Surface(
        Modifier::new().fill_max_size().background(t.background),
        Stack(Modifier::new().fill_max_size()).child((
            Background(res.image(ImageKey::LoginBackground)),
            Column(Modifier::new().fill_max_size().align_items(AlignItems::Center)).child((
                Text(res.string(StringKey::LogIn).to_uppercase())
                    .size(type_scale.h1)
                    .color(t.on_background)
                    .modifier(Modifier::new().first_baseline_to_top(200.0)),
                Box(Modifier::new().height(32.0)),
                FilledTextField(
                    &res.string(StringKey::EmailAddress),
                    None,
                    Modifier::new().padding_horizontal(16.0),
                ),
                Box(Modifier::new().height(8.0)),
                FilledTextField(
                    &res.string(StringKey::Password),
                    None,
                    Modifier::new().padding_horizontal(16.0),
                ),
                Box(Modifier::new().height(8.0)),
                ContainedButton(
                    &res.string(StringKey::LogIn),
                    t.primary,
                    t.on_primary,
                    actions.handler(NavAction::SubmitLogin),
                    Modifier::new().padding_horizontal(16.0),
                ),
                Row(Modifier::new().first_baseline_to_top(32.0)).child((
                    Text(res.string(StringKey::SignUpMessageFirst))
                        .size(type_scale.body1)
                        .color(t.on_background),
                    Text(res.string(StringKey::SignUpMessageSecond))
                        .size(type_scale.body1)
                        .color(t.on_background)
                        .underline(),
                )),
            )),
        )),
    )
}
