use soothe_core::*;

/// Horizontally scrolling row of `items`.
///
/// `spacing` is the gap between items; `content_padding` pads the scrolled
/// content rather than the viewport, so the first item starts inset but can
/// scroll to the edge.
pub fn LazyRow<T>(
    items: impl IntoIterator<Item = T>,
    spacing: f32,
    content_padding: PaddingValues,
    modifier: Modifier,
    item: impl Fn(T, usize) -> View,
) -> View {
    let children: Vec<View> = items
        .into_iter()
        .enumerate()
        .map(|(i, it)| item(it, i))
        .collect();
    log::trace!("LazyRow: {} items", children.len());
    View::new(ViewKind::LazyRow {
        spacing,
        content_padding,
    })
    .modifier(modifier)
    .with_children(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;

    #[test]
    fn builds_one_child_per_item_in_order() {
        let row = LazyRow(
            ["x", "y", "z"],
            8.0,
            PaddingValues::symmetric(16.0, 0.0),
            Modifier::new(),
            |s, i| Text(format!("{i}:{s}")),
        );
        assert_eq!(row.children.len(), 3);
        assert_eq!(row.text_content(), "0:x1:y2:z");
        match row.kind {
            ViewKind::LazyRow {
                spacing,
                content_padding,
            } => {
                assert_eq!(spacing, 8.0);
                assert_eq!(content_padding.left, 16.0);
                assert_eq!(content_padding.top, 0.0);
            }
            other => panic!("expected lazy row, got {other:?}"),
        }
    }
}
