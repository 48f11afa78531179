#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::locals::*;
    use crate::modifier::*;
    use crate::signal::*;
    use crate::view::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription_sees_new_value() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let reader = sig.clone();
        sig.subscribe(move |v| {
            // reading the signal from inside the callback must not panic
            seen_clone.borrow_mut().push((*v, reader.get()));
        });

        sig.set(42);
        sig.set(42);
        assert_eq!(*seen.borrow(), vec![(42, 42), (42, 42)]);
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(0);
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        let id = sig.subscribe(move |_| *h.borrow_mut() += 1);

        sig.set(1);
        assert!(sig.unsubscribe(id));
        assert!(!sig.unsubscribe(id));
        sig.set(2);

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(sig.subscriber_count(), 0);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("#12"), Color::BLACK);
        assert_eq!(c_alpha.to_hex(), "#FF5733AA");
        assert_eq!(c.to_hex(), "#FF5733");
    }

    #[test]
    fn test_theme_local_scoping() {
        assert_eq!(theme(), Theme::light());
        with_theme(Theme::dark(), || {
            assert_eq!(theme(), Theme::dark());
            with_theme(Theme::light(), || assert_eq!(theme(), Theme::light()));
            assert_eq!(theme(), Theme::dark());
        });
        assert_eq!(theme(), Theme::light());
    }

    #[test]
    fn test_typography_override() {
        let big = Typography {
            h1: 40.0,
            ..Typography::default()
        };
        with_typography(big, || assert_eq!(typography().h1, 40.0));
        assert_eq!(typography().h1, 28.0);
    }

    #[test]
    fn test_padding_edits_merge() {
        let m = Modifier::new().padding(4.0).padding_horizontal(16.0);
        assert_eq!(
            m.resolved_padding(),
            PaddingValues {
                left: 16.0,
                right: 16.0,
                top: 4.0,
                bottom: 4.0,
            }
        );
        assert_eq!(m.padding, None);

        let m = Modifier::new().padding_start(16.0);
        assert_eq!(m.resolved_padding().left, 16.0);
        assert_eq!(m.resolved_padding().right, 0.0);
    }

    #[test]
    fn test_view_walk_and_text() {
        let text = |s: &str| {
            View::new(ViewKind::Text {
                text: s.into(),
                color: Color::BLACK,
                font_size: 14.0,
                underline: false,
            })
        };
        let tree = View::new(ViewKind::Row).with_children(vec![
            text("Don't have an account? "),
            View::new(ViewKind::Box).with_children(vec![text("Sign up")]),
        ]);
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.text_content(), "Don't have an account? Sign up");
    }

    #[test]
    fn test_root_exports_cover_view_and_signal() {
        let sig: crate::Signal<u8> = crate::signal(1);
        let id: crate::SubId = sig.subscribe(|_| {});
        assert!(sig.unsubscribe(id));

        let edits = Rc::new(RefCell::new(Vec::new()));
        let e = edits.clone();
        let on_change: crate::TextCallback = Rc::new(move |v: String| e.borrow_mut().push(v));
        let field = crate::View::new(crate::ViewKind::TextField {
            label: "Search".into(),
            value: String::new(),
            leading_icon: Some(crate::Icon::Search),
            on_change: Some(on_change),
        });
        if let crate::ViewKind::TextField {
            on_change: Some(f), ..
        } = &field.kind
        {
            f("yoga".into());
        }
        assert_eq!(*edits.borrow(), vec!["yoga".to_string()]);
    }
}
