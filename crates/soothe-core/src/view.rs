use crate::{Color, Modifier, PaddingValues};
use std::rc::Rc;

pub type Callback = Rc<dyn Fn()>;
pub type TextCallback = Rc<dyn Fn(String)>;

/// Where an image's pixels come from. Loading and caching belong to the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// Drawable bundled with the app, by asset name.
    Asset(String),
    /// Remote image fetched by the host's image pipeline.
    Remote(String),
}

impl ImageSource {
    pub fn asset(name: impl Into<String>) -> Self {
        ImageSource::Asset(name.into())
    }
    pub fn remote(url: impl Into<String>) -> Self {
        ImageSource::Remote(url.into())
    }
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::Asset(name) => write!(f, "asset:{name}"),
            ImageSource::Remote(url) => f.write_str(url),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageFit {
    #[default]
    Contain,
    /// Scale to cover the bounds, cropping the overflow.
    Crop,
    /// Stretch to the bounds, ignoring aspect ratio.
    FillBounds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Search,
    Spa,
    AccountCircle,
    PlayArrow,
}

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    Stack,
    /// Horizontally scrolling row; children are composed on demand by the host.
    LazyRow {
        spacing: f32,
        content_padding: PaddingValues,
    },
    Text {
        text: String,
        color: Color,
        font_size: f32,
        underline: bool,
    },
    Image {
        source: ImageSource,
        /// Shown while `source` loads, and in its place if loading fails.
        placeholder: Option<ImageSource>,
        fit: ImageFit,
    },
    Icon {
        icon: Icon,
        tint: Color,
        size: f32,
    },
    /// Clickable container; its children are the button content.
    Button {
        on_click: Option<Callback>,
    },
    TextField {
        label: String,
        value: String,
        leading_icon: Option<Icon>,
        on_change: Option<TextCallback>,
    },
    /// Bottom navigation entry; children are the icon and label.
    Tab {
        selected: bool,
        on_click: Option<Callback>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Stack => write!(f, "Stack"),
            ViewKind::LazyRow {
                spacing,
                content_padding,
            } => f
                .debug_struct("LazyRow")
                .field("spacing", spacing)
                .field("content_padding", content_padding)
                .finish(),
            ViewKind::Text {
                text,
                color,
                font_size,
                underline,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .field("underline", underline)
                .finish(),
            ViewKind::Image {
                source,
                placeholder,
                fit,
            } => f
                .debug_struct("Image")
                .field("source", source)
                .field("placeholder", placeholder)
                .field("fit", fit)
                .finish(),
            ViewKind::Icon { icon, tint, size } => f
                .debug_struct("Icon")
                .field("icon", icon)
                .field("tint", tint)
                .field("size", size)
                .finish(),
            ViewKind::Button { on_click } => f
                .debug_struct("Button")
                .field("on_click", &on_click.as_ref().map(|_| "<callback>"))
                .finish(),
            ViewKind::TextField {
                label,
                value,
                leading_icon,
                ..
            } => f
                .debug_struct("TextField")
                .field("label", label)
                .field("value", value)
                .field("leading_icon", leading_icon)
                .finish(),
            ViewKind::Tab { selected, on_click } => f
                .debug_struct("Tab")
                .field("selected", selected)
                .field("on_click", &on_click.as_ref().map(|_| "<callback>"))
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Depth-first, parents before children.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    pub fn node_count(&self) -> usize {
        let mut n = 0;
        self.walk(&mut |_| n += 1);
        n
    }

    /// Concatenated text of this node and its descendants, in tree order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |v| {
            if let ViewKind::Text { text, .. } = &v.kind {
                out.push_str(text);
            }
        });
        out
    }
}
