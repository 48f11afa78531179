use taffy::{AlignItems, AlignSelf, JustifyContent};

use crate::{Color, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PaddingValues {
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }
}

/// Layout and decoration hints attached to a `View`.
///
/// All lengths are dp. The host toolkit decides how to honor them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    pub size: Option<Size>,
    pub height: Option<f32>,
    pub fill_max: bool,
    pub fill_max_w: bool,
    pub padding: Option<f32>,
    pub padding_values: Option<PaddingValues>,
    pub background: Option<Color>,
    pub clip_rounded: Option<f32>,
    pub clip_circle: bool,
    pub flex_grow: Option<f32>,
    pub align_self: Option<AlignSelf>,
    pub justify_content: Option<JustifyContent>,
    pub align_items_container: Option<AlignItems>,
    /// Distance from the top of the layout to the first text baseline.
    pub first_baseline_to_top: Option<f32>,
    /// Shadow depth, for bars and floating buttons.
    pub elevation: Option<f32>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Some(Size {
            width: w,
            height: h,
        });
        self
    }
    pub fn square(self, side: f32) -> Self {
        self.size(side, side)
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn fill_max_size(mut self) -> Self {
        self.fill_max = true;
        self
    }
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding_values = Some(padding);
        self
    }

    fn edit_padding(mut self, f: impl FnOnce(&mut PaddingValues)) -> Self {
        let base = self.padding.unwrap_or(0.0);
        let mut pv = self.padding_values.unwrap_or(PaddingValues {
            left: base,
            right: base,
            top: base,
            bottom: base,
        });
        f(&mut pv);
        self.padding = None;
        self.padding_values = Some(pv);
        self
    }

    /// Start and end padding (`padding(start = v, end = v)`).
    pub fn padding_horizontal(self, v: f32) -> Self {
        self.edit_padding(|p| {
            p.left = v;
            p.right = v;
        })
    }
    pub fn padding_start(self, v: f32) -> Self {
        self.edit_padding(|p| p.left = v)
    }
    pub fn padding_end(self, v: f32) -> Self {
        self.edit_padding(|p| p.right = v)
    }
    pub fn padding_top(self, v: f32) -> Self {
        self.edit_padding(|p| p.top = v)
    }
    pub fn padding_bottom(self, v: f32) -> Self {
        self.edit_padding(|p| p.bottom = v)
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.clip_rounded = Some(radius);
        self
    }
    pub fn clip_circle(mut self) -> Self {
        self.clip_circle = true;
        self
    }
    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }
    pub fn align_self(mut self, a: AlignSelf) -> Self {
        self.align_self = Some(a);
        self
    }
    pub fn align_self_center(self) -> Self {
        self.align_self(AlignSelf::Center)
    }
    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items_container = Some(a);
        self
    }
    /// Centers children on both axes.
    pub fn center_content(self) -> Self {
        self.justify_content(JustifyContent::Center)
            .align_items(AlignItems::Center)
    }
    pub fn first_baseline_to_top(mut self, dp: f32) -> Self {
        self.first_baseline_to_top = Some(dp);
        self
    }
    pub fn elevation(mut self, dp: f32) -> Self {
        self.elevation = Some(dp);
        self
    }

    /// Resolved padding on each edge, merging `padding` and `padding_values`.
    pub fn resolved_padding(&self) -> PaddingValues {
        self.padding_values.unwrap_or_else(|| {
            let p = self.padding.unwrap_or(0.0);
            PaddingValues::symmetric(p, p)
        })
    }
}
