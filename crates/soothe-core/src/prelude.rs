pub use crate::color::Color;
pub use crate::geometry::Size;
pub use crate::locals::{Theme, Typography, theme, typography, with_theme, with_typography};
pub use crate::modifier::{Modifier, PaddingValues};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, SubId, signal};
pub use crate::view::{Callback, Icon, ImageFit, ImageSource, TextCallback, View, ViewKind};
pub use taffy::{AlignItems, AlignSelf, JustifyContent};
