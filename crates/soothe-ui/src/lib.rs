#![allow(non_snake_case)]
//! Widgets and view-tree inspection.

pub mod inspect;
pub mod lazy;

use std::rc::Rc;

use soothe_core::*;

pub use lazy::LazyRow;

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(ViewKind::Column).modifier(modifier)
}

pub fn Stack(modifier: Modifier) -> View {
    View::new(ViewKind::Stack).modifier(modifier)
}

/// Text in the current theme's `on_background` color at `body1` size.
pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text {
        text: text.into(),
        color: theme().on_background,
        font_size: typography().body1,
        underline: false,
    })
}

pub fn Spacer() -> View {
    Box(Modifier::new().flex_grow(1.0))
}

pub fn Button(content: impl IntoChildren, on_click: impl Fn() + 'static) -> View {
    View::new(ViewKind::Button {
        on_click: Some(Rc::new(on_click)),
    })
    .with_children(content.into_children())
    .semantics(Semantics::new(Role::Button))
}

pub fn Tab(selected: bool, content: impl IntoChildren, on_click: impl Fn() + 'static) -> View {
    View::new(ViewKind::Tab {
        selected,
        on_click: Some(Rc::new(on_click)),
    })
    .with_children(content.into_children())
    .semantics(Semantics {
        selected,
        ..Semantics::new(Role::Tab)
    })
}

pub fn Image(modifier: Modifier, source: ImageSource) -> View {
    View::new(ViewKind::Image {
        source,
        placeholder: None,
        fit: ImageFit::Contain,
    })
    .modifier(modifier)
}

pub fn Icon(icon: soothe_core::Icon) -> View {
    View::new(ViewKind::Icon {
        icon,
        tint: theme().on_surface,
        size: 24.0,
    })
}

pub fn TextField(
    label: impl Into<String>,
    value: impl Into<String>,
    on_change: impl Fn(String) + 'static,
) -> View {
    let label = label.into();
    View::new(ViewKind::TextField {
        label: label.clone(),
        value: value.into(),
        leading_icon: None,
        on_change: Some(Rc::new(on_change)),
    })
    .semantics(Semantics::new(Role::TextField).label(label))
}

pub trait ImageExt {
    fn image_fit(self, fit: ImageFit) -> View;
    fn placeholder(self, source: ImageSource) -> View;
    /// Screen-reader description; images without one are decorative.
    fn content_description(self, text: impl Into<String>) -> View;
}

impl ImageExt for View {
    fn image_fit(mut self, fit: ImageFit) -> View {
        if let ViewKind::Image { fit: f, .. } = &mut self.kind {
            *f = fit;
        }
        self
    }
    fn placeholder(mut self, source: ImageSource) -> View {
        if let ViewKind::Image { placeholder, .. } = &mut self.kind {
            *placeholder = Some(source);
        }
        self
    }
    fn content_description(self, text: impl Into<String>) -> View {
        self.semantics(Semantics::new(Role::Image).label(text))
    }
}

pub trait IconStyle {
    fn tint(self, c: Color) -> View;
    fn icon_size(self, dp: f32) -> View;
}

impl IconStyle for View {
    fn tint(mut self, c: Color) -> View {
        if let ViewKind::Icon { tint, .. } = &mut self.kind {
            *tint = c;
        }
        self
    }
    fn icon_size(mut self, dp: f32) -> View {
        if let ViewKind::Icon { size, .. } = &mut self.kind {
            *size = dp;
        }
        self
    }
}

pub trait TextFieldExt {
    fn leading_icon(self, icon: soothe_core::Icon) -> View;
}

impl TextFieldExt for View {
    fn leading_icon(mut self, icon: soothe_core::Icon) -> View {
        if let ViewKind::TextField { leading_icon, .. } = &mut self.kind {
            *leading_icon = Some(icon);
        }
        self
    }
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J);

/// Method styling
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, sp: f32) -> View;
    fn underline(self) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = c;
        }
        self
    }
    fn size(mut self, sp: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = sp;
        }
        self
    }
    fn underline(mut self) -> View {
        if let ViewKind::Text { underline, .. } = &mut self.kind {
            *underline = true;
        }
        self
    }
}
