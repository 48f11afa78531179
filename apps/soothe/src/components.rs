//! Building blocks shared by the screens.

use soothe_core::*;
use soothe_ui::*;

use crate::catalog::{ContentItem, favorite_columns};
use crate::resources::{ImageKey, ResourceProvider, StringKey};

/// Corner radius for text fields and cards.
pub const SHAPE_SMALL: f32 = 4.0;
/// Corner radius for contained buttons.
pub const SHAPE_MEDIUM: f32 = 24.0;

pub fn Logo(res: &dyn ResourceProvider, modifier: Modifier) -> View {
    Image(modifier, res.image(ImageKey::Logo))
        .content_description(res.string(StringKey::LogoContentDescription))
}

/// Full-bleed decorative image behind a screen's content.
pub fn Background(source: ImageSource) -> View {
    Image(Modifier::new().fill_max_size(), source).image_fit(ImageFit::FillBounds)
}

fn RemoteImage(image_ref: &str, res: &dyn ResourceProvider, modifier: Modifier) -> View {
    Image(modifier, ImageSource::remote(image_ref))
        .image_fit(ImageFit::Crop)
        .placeholder(res.image(ImageKey::Placeholder))
}

pub fn SectionHeader(title: &str, modifier: Modifier) -> View {
    Text(title.to_uppercase())
        .size(typography().h2)
        .color(theme().on_background)
        .modifier(modifier)
}

pub fn FavoriteItem(item: &ContentItem, res: &dyn ResourceProvider, modifier: Modifier) -> View {
    Surface(
        modifier
            .size(192.0, 56.0)
            .background(theme().surface)
            .clip_rounded(SHAPE_SMALL),
        Row(Modifier::new().fill_max_size().align_items(AlignItems::Center)).child((
            RemoteImage(item.image_ref, res, Modifier::new().square(56.0)),
            Text(item.label)
                .size(typography().h3)
                .color(theme().on_surface)
                .modifier(Modifier::new().padding_start(16.0).padding_end(4.0)),
        )),
    )
}

/// Two rows of favorites scrolling together.
pub fn FavoriteGrid(items: &[ContentItem], res: &dyn ResourceProvider, modifier: Modifier) -> View {
    LazyRow(
        favorite_columns(items),
        8.0,
        PaddingValues::symmetric(16.0, 0.0),
        modifier,
        |column, _| {
            let last = column.len() - 1;
            Column(Modifier::new()).child(
                column
                    .iter()
                    .enumerate()
                    .map(|(i, it)| {
                        let m = if i < last {
                            Modifier::new().padding_bottom(8.0)
                        } else {
                            Modifier::new()
                        };
                        FavoriteItem(it, res, m)
                    })
                    .collect::<Vec<_>>(),
            )
        },
    )
}

pub fn FavoriteCollection(
    title: &str,
    items: &[ContentItem],
    res: &dyn ResourceProvider,
    modifier: Modifier,
) -> Vec<View> {
    vec![
        SectionHeader(title, modifier),
        FavoriteGrid(items, res, Modifier::new().padding_top(8.0)),
    ]
}

pub fn AlignItem(item: &ContentItem, res: &dyn ResourceProvider) -> View {
    Column(Modifier::new().align_items(AlignItems::Center)).child((
        RemoteImage(
            item.image_ref,
            res,
            Modifier::new().square(88.0).clip_circle(),
        ),
        Text(item.label)
            .size(typography().h3)
            .color(theme().on_background)
            .modifier(Modifier::new().first_baseline_to_top(24.0)),
    ))
}

pub fn AlignRow(items: &[ContentItem], res: &dyn ResourceProvider, modifier: Modifier) -> View {
    LazyRow(
        items,
        8.0,
        PaddingValues::symmetric(16.0, 0.0),
        modifier,
        |it, _| AlignItem(it, res),
    )
}

pub fn AlignCollection(
    title: &str,
    items: &[ContentItem],
    res: &dyn ResourceProvider,
    modifier: Modifier,
) -> Vec<View> {
    vec![
        SectionHeader(title, modifier),
        AlignRow(items, res, Modifier::new().padding_top(8.0)),
    ]
}

/// Full-width, 56dp text field on the theme surface. The value starts empty.
pub fn FilledTextField(label: &str, leading_icon: Option<soothe_core::Icon>, modifier: Modifier) -> View {
    let field = TextField(label, "", |v| log::trace!("text field: {} chars", v.len())).modifier(
        modifier
            .fill_max_width()
            .height(56.0)
            .background(theme().surface)
            .clip_rounded(SHAPE_SMALL),
    );
    match leading_icon {
        Some(icon) => field.leading_icon(icon),
        None => field,
    }
}

/// Full-width, 72dp button with an uppercased label.
pub fn ContainedButton(
    text: &str,
    background: Color,
    text_color: Color,
    on_click: impl Fn() + 'static,
    modifier: Modifier,
) -> View {
    Button(
        Text(text.to_uppercase())
            .size(typography().button)
            .color(text_color),
        on_click,
    )
    .modifier(
        modifier
            .fill_max_width()
            .height(72.0)
            .background(background)
            .clip_rounded(SHAPE_MEDIUM),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CollectionId};
    use crate::resources::BundledResources;
    use soothe_ui::inspect;

    #[test]
    fn favorite_grid_has_three_columns_of_two() {
        let res = BundledResources::new();
        let items = Catalog::new().get_collection(CollectionId::Favorites);
        let grid = FavoriteGrid(items, &res, Modifier::new());
        assert_eq!(grid.children.len(), 3);
        for col in &grid.children {
            assert_eq!(col.children.len(), 2);
            assert_eq!(col.children[0].modifier.resolved_padding().bottom, 8.0);
            assert_eq!(col.children[1].modifier.resolved_padding().bottom, 0.0);
        }
        assert_eq!(
            inspect::texts(&grid),
            items.iter().map(|i| i.label).collect::<Vec<_>>()
        );
    }

    #[test]
    fn align_item_is_a_circular_remote_image_with_label() {
        let res = BundledResources::new();
        let item = &Catalog::new().get_collection(CollectionId::AlignMind)[0];
        let v = AlignItem(item, &res);
        let image = &v.children[0];
        assert!(image.modifier.clip_circle);
        match &image.kind {
            ViewKind::Image {
                source,
                placeholder,
                fit,
            } => {
                assert_eq!(*source, ImageSource::remote(item.image_ref));
                assert_eq!(placeholder.as_ref(), Some(&ImageSource::asset("placeholder")));
                assert_eq!(*fit, ImageFit::Crop);
            }
            other => panic!("expected image, got {other:?}"),
        }
        assert_eq!(v.children[1].text_content(), "Meditate");
    }

    #[test]
    fn section_header_is_uppercased() {
        let h = SectionHeader("Align your body", Modifier::new());
        assert_eq!(h.text_content(), "ALIGN YOUR BODY");
    }

    #[test]
    fn contained_button_uses_given_colors() {
        let b = ContainedButton("Log in", Color::BLACK, Color::WHITE, || {}, Modifier::new());
        assert_eq!(b.modifier.background, Some(Color::BLACK));
        assert_eq!(b.modifier.height, Some(72.0));
        assert!(b.modifier.fill_max_w);
        match &b.children[0].kind {
            ViewKind::Text { text, color, .. } => {
                assert_eq!(text, "LOG IN");
                assert_eq!(*color, Color::WHITE);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn filled_text_field_optional_icon() {
        let plain = FilledTextField("Password", None, Modifier::new());
        let search = FilledTextField("Search", Some(soothe_core::Icon::Search), Modifier::new());
        assert!(matches!(
            plain.kind,
            ViewKind::TextField {
                leading_icon: None,
                ..
            }
        ));
        assert!(matches!(
            search.kind,
            ViewKind::TextField {
                leading_icon: Some(soothe_core::Icon::Search),
                ..
            }
        ));
    }
}
