//! # Theming and typography
//!
//! UI-wide parameters travel as thread-local "composition locals" rather than
//! being threaded through every widget constructor:
//!
//! - `Theme`: the color scheme (background, surface, primary, secondary).
//! - `Typography`: text sizes for the named text styles.
//!
//! Override them for a subtree with `with_theme` and `with_typography`. Reads
//! outside any frame fall back to the defaults.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Pops on unwind too.
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        let mut st = st.borrow_mut();
        if let Some(top) = st.last_mut() {
            top.insert(t, v);
        } else {
            let mut m = HashMap::new();
            m.insert(t, v);
            st.push(m);
        }
    });
}

fn local<T: Copy + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

/// Color scheme read by widgets and screens.
///
/// The default is the light palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Window background / app root.
    pub background: Color,
    /// Foreground on top of `background`.
    pub on_background: Color,
    /// Cards, text fields, bottom sheets.
    pub surface: Color,
    /// Foreground on top of `surface`.
    pub on_surface: Color,

    /// Main accent: the sign-up and log-in buttons, the play button.
    pub primary: Color,
    pub on_primary: Color,

    /// Secondary accent: the welcome screen's log-in button.
    pub secondary: Color,
    pub on_secondary: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::from_hex("#F0EAE2"),
            on_background: Color::from_hex("#232323"),
            surface: Color::from_hex("#FFFFFFD9"),
            on_surface: Color::from_hex("#232323"),
            primary: Color::from_hex("#655454"),
            on_primary: Color::WHITE,
            secondary: Color::from_hex("#886363"),
            on_secondary: Color::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_hex("#333333"),
            on_background: Color::from_hex("#F0EAE2"),
            surface: Color::from_hex("#FFFFFF26"),
            on_surface: Color::from_hex("#FFFFFFCC"),
            primary: Color::from_hex("#B8C9B8"),
            on_primary: Color::from_hex("#333333"),
            secondary: Color::from_hex("#E1AFAF"),
            on_secondary: Color::from_hex("#333333"),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Font sizes (sp) for the named text styles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub h1: f32,
    pub h2: f32,
    pub h3: f32,
    pub body1: f32,
    pub button: f32,
    pub caption: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            h1: 28.0,
            h2: 15.0,
            h3: 14.0,
            body1: 14.0,
            button: 14.0,
            caption: 12.0,
        }
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Theme>(), Box::new(theme));
        f()
    })
}

pub fn with_typography<R>(typography: Typography, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Typography>(), Box::new(typography));
        f()
    })
}

pub fn theme() -> Theme {
    local::<Theme>()
}

pub fn typography() -> Typography {
    local::<Typography>()
}
