//! # Views, Signals, and Locals
//!
//! Soothe describes every screen as a plain tree of `View` values. Nothing in
//! this crate draws pixels; a host toolkit walks the tree and renders it.
//! There are three main pieces:
//!
//! - `View` / `ViewKind` / `Modifier`: the declarative tree.
//! - `Signal<T>`: observable value used to drive re-rendering.
//! - `with_theme` / `with_typography`: composition locals for UI-wide styling.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use soothe_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Subscribers run after the value is stored, so they may read the signal
//! from inside the callback.
//!
//! ## Locals
//!
//! Widgets read colors from `theme()` and text sizes from `typography()`
//! instead of hard-coding them:
//!
//! ```rust
//! use soothe_core::*;
//!
//! let dark = Theme {
//!     background: Color::from_hex("#333333"),
//!     ..Theme::default()
//! };
//!
//! with_theme(dark, || {
//!     assert_eq!(theme().background, Color::from_hex("#333333"));
//! });
//! ```

pub mod color;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod semantics;
pub mod signal;
pub mod tests;
pub mod view;

pub use prelude::*;
