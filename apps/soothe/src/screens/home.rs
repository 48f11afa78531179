use soothe_core::*;
use soothe_navigation::{NavAction, NavActions};
use soothe_ui::*;

use crate::catalog::{Catalog, CollectionId};
use crate::components::{AlignCollection, FavoriteCollection, FilledTextField};
use crate::resources::{ResourceProvider, StringKey};

pub fn screen(catalog: &Catalog, res: &dyn ResourceProvider, actions: &NavActions) -> View {
    let t = theme();
    Surface(
        Modifier::new().fill_max_size().background(t.background),
        Column(Modifier::new().fill_max_size()).child((
            Column(Modifier::new().fill_max_width().flex_grow(1.0)).child((
                Box(Modifier::new().height(56.0)),
                FilledTextField(
                    &res.string(StringKey::Search),
                    Some(soothe_core::Icon::Search),
                    Modifier::new().padding_horizontal(16.0),
                ),
                FavoriteCollection(
                    &res.string(StringKey::FavoriteCollections),
                    catalog.get_collection(CollectionId::Favorites),
                    res,
                    Modifier::new().first_baseline_to_top(40.0).padding_start(16.0),
                ),
                AlignCollection(
                    &res.string(StringKey::AlignYourBody),
                    catalog.get_collection(CollectionId::AlignBody),
                    res,
                    Modifier::new().first_baseline_to_top(48.0).padding_start(16.0),
                ),
                AlignCollection(
                    &res.string(StringKey::AlignYourMind),
                    catalog.get_collection(CollectionId::AlignMind),
                    res,
                    Modifier::new().first_baseline_to_top(48.0).padding_start(16.0),
                ),
            )),
            Stack(Modifier::new().fill_max_width()).child((
                BottomNavigation(res),
                PlayButton(actions),
            )),
        )),
    )
}

/// Home and Profile tabs. Neither has a destination; Home is always selected.
fn BottomNavigation(res: &dyn ResourceProvider) -> View {
    let t = theme();
    let caption = typography().caption;
    let tab = |selected: bool, icon: soothe_core::Icon, key: StringKey| {
        Tab(
            selected,
            (
                Icon(icon).icon_size(18.0).tint(t.on_background),
                Text(res.string(key).to_uppercase())
                    .size(caption)
                    .color(t.on_background),
            ),
            move || log::debug!("tab {key:?}: no destination"),
        )
        .modifier(Modifier::new().flex_grow(1.0).center_content())
    };
    Row(Modifier::new()
        .fill_max_width()
        .height(57.0)
        .background(t.background)
        .elevation(8.0))
    .child((
        tab(true, soothe_core::Icon::Spa, StringKey::Home),
        tab(false, soothe_core::Icon::AccountCircle, StringKey::Profile),
    ))
}

/// Floating play button docked over the center of the bottom bar.
fn PlayButton(actions: &NavActions) -> View {
    let t = theme();
    Button(
        Icon(soothe_core::Icon::PlayArrow)
            .icon_size(24.0)
            .tint(t.on_primary),
        actions.handler(NavAction::PlayPressed),
    )
    .modifier(
        Modifier::new()
            .square(56.0)
            .clip_circle()
            .background(t.primary)
            .align_self_center(),
    )
}
