//! Headless queries over a built view tree.
//!
//! Hosts, tests and the preview binary use these to locate nodes by their
//! visible text and to fire click handlers without a pointer pipeline.

use std::fmt::Write as _;

use soothe_core::*;

/// First `Text` node whose text equals `text`.
pub fn find_text<'a>(root: &'a View, text: &str) -> Option<&'a View> {
    let mut found = None;
    root.walk(&mut |v| {
        if found.is_none()
            && let ViewKind::Text { text: t, .. } = &v.kind
            && t == text
        {
            found = Some(v);
        }
    });
    found
}

/// First clickable node (button or tab) whose combined text equals `label`.
pub fn find_clickable<'a>(root: &'a View, label: &str) -> Option<&'a View> {
    let mut found = None;
    root.walk(&mut |v| {
        if found.is_none()
            && matches!(v.kind, ViewKind::Button { .. } | ViewKind::Tab { .. })
            && v.text_content() == label
        {
            found = Some(v);
        }
    });
    found
}

/// All clickable nodes in tree order.
pub fn clickables(root: &View) -> Vec<&View> {
    let mut out = Vec::new();
    root.walk(&mut |v| {
        if matches!(v.kind, ViewKind::Button { .. } | ViewKind::Tab { .. }) {
            out.push(v);
        }
    });
    out
}

/// Fires the node's click handler. Returns false for nodes without one.
pub fn click(view: &View) -> bool {
    let handler = match &view.kind {
        ViewKind::Button { on_click } | ViewKind::Tab { on_click, .. } => on_click.clone(),
        _ => None,
    };
    match handler {
        Some(h) => {
            log::debug!("click: {:?}", view.text_content());
            h();
            true
        }
        None => false,
    }
}

/// All text in the tree, one entry per `Text` node.
pub fn texts(root: &View) -> Vec<String> {
    let mut out = Vec::new();
    root.walk(&mut |v| {
        if let ViewKind::Text { text, .. } = &v.kind {
            out.push(text.clone());
        }
    });
    out
}

fn describe(v: &View) -> String {
    let mut s = match &v.kind {
        ViewKind::Surface => "Surface".to_string(),
        ViewKind::Box => "Box".to_string(),
        ViewKind::Row => "Row".to_string(),
        ViewKind::Column => "Column".to_string(),
        ViewKind::Stack => "Stack".to_string(),
        ViewKind::LazyRow { spacing, .. } => format!("LazyRow spacing={spacing}"),
        ViewKind::Text {
            text, underline, ..
        } => {
            if *underline {
                format!("Text {text:?} underline")
            } else {
                format!("Text {text:?}")
            }
        }
        ViewKind::Image { source, fit, .. } => format!("Image {source} fit={fit:?}"),
        ViewKind::Icon { icon, .. } => format!("Icon {icon:?}"),
        ViewKind::Button { on_click } => {
            if on_click.is_some() {
                "Button".to_string()
            } else {
                "Button disabled".to_string()
            }
        }
        ViewKind::TextField {
            label,
            leading_icon,
            ..
        } => match leading_icon {
            Some(icon) => format!("TextField {label:?} icon={icon:?}"),
            None => format!("TextField {label:?}"),
        },
        ViewKind::Tab { selected, .. } => {
            if *selected {
                "Tab selected".to_string()
            } else {
                "Tab".to_string()
            }
        }
    };
    if !matches!(v.kind, ViewKind::TextField { .. })
        && let Some(label) = v.semantics.as_ref().and_then(|s| s.label.as_ref())
    {
        let _ = write!(s, " label={label:?}");
    }
    s
}

/// Indented one-node-per-line dump of the tree.
pub fn outline(root: &View) -> String {
    fn go(v: &View, depth: usize, out: &mut Vec<String>) {
        out.push(format!("{}{}", "  ".repeat(depth), describe(v)));
        for c in &v.children {
            go(c, depth + 1, out);
        }
    }
    let mut lines = Vec::new();
    go(root, 0, &mut lines);
    lines.join("\n")
}
