use std::cell::Cell;
use std::rc::Rc;

use soothe_core::*;
use soothe_navigation::{NavActions, NavController, Screen};
use soothe_ui::inspect;

use crate::catalog::{Catalog, CatalogError};
use crate::resources::ResourceProvider;
use crate::screens;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub dark: bool,
}

impl AppConfig {
    pub fn theme(&self) -> Theme {
        if self.dark { Theme::dark() } else { Theme::light() }
    }
}

/// Builds the view tree for `screen`. Pure: the same inputs give the same tree.
pub fn render(
    screen: Screen,
    catalog: &Catalog,
    res: &dyn ResourceProvider,
    actions: &NavActions,
) -> View {
    match screen {
        Screen::Welcome => screens::welcome::screen(res, actions),
        Screen::Login => screens::login::screen(res, actions),
        Screen::Home => screens::home::screen(catalog, res, actions),
    }
}

/// Owns the navigation state and keeps the rendered tree in sync with it.
///
/// Navigation marks the host dirty; the next `frame()` re-renders.
pub struct AppHost {
    nav: NavController,
    catalog: Catalog,
    resources: Rc<dyn ResourceProvider>,
    actions: NavActions,
    config: AppConfig,
    dirty: Rc<Cell<bool>>,
    sub: SubId,
    view: View,
    renders: u64,
}

impl AppHost {
    pub fn new(
        nav: NavController,
        resources: Rc<dyn ResourceProvider>,
        config: AppConfig,
    ) -> Result<Self, CatalogError> {
        let catalog = Catalog::new();
        if let Err(e) = catalog.validate() {
            log::warn!("catalog rejected: {e}");
            return Err(e);
        }

        let actions = NavActions::new(Rc::new(nav.clone()));
        let dirty = Rc::new(Cell::new(false));
        let sub = {
            let dirty = dirty.clone();
            nav.subscribe(move |screen| {
                log::debug!("host: {screen} needs a frame");
                dirty.set(true);
            })
        };

        let view = compose(&nav, &catalog, resources.as_ref(), &actions, config);
        log::info!("host: started on {}", nav.current_screen());
        Ok(Self {
            nav,
            catalog,
            resources,
            actions,
            config,
            dirty,
            sub,
            view,
            renders: 1,
        })
    }

    /// Re-renders if navigation happened since the last frame.
    pub fn frame(&mut self) -> bool {
        if !self.dirty.replace(false) {
            return false;
        }
        self.view = compose(
            &self.nav,
            &self.catalog,
            self.resources.as_ref(),
            &self.actions,
            self.config,
        );
        self.renders += 1;
        log::debug!(
            "host: rendered {} ({} nodes)",
            self.nav.current_screen(),
            self.view.node_count()
        );
        true
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn screen(&self) -> Screen {
        self.nav.current_screen()
    }

    pub fn navigator(&self) -> &NavController {
        &self.nav
    }

    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Clicks the button labelled `label` in the current tree, then runs a
    /// frame. Returns false if there is no such button.
    pub fn click(&mut self, label: &str) -> bool {
        let clicked = inspect::find_clickable(&self.view, label)
            .map(inspect::click)
            .unwrap_or(false);
        self.frame();
        clicked
    }
}

impl Drop for AppHost {
    fn drop(&mut self) {
        self.nav.unsubscribe(self.sub);
    }
}

fn compose(
    nav: &NavController,
    catalog: &Catalog,
    res: &dyn ResourceProvider,
    actions: &NavActions,
    config: AppConfig,
) -> View {
    with_theme(config.theme(), || {
        with_typography(Typography::default(), || {
            render(nav.current_screen(), catalog, res, actions)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::BundledResources;

    fn host() -> AppHost {
        AppHost::new(
            NavController::new(),
            Rc::new(BundledResources::new()),
            AppConfig::default(),
        )
        .expect("host")
    }

    #[test]
    fn starts_on_welcome() {
        let host = host();
        assert_eq!(host.screen(), Screen::Welcome);
        assert_eq!(host.render_count(), 1);
        assert!(inspect::find_clickable(host.view(), "SIGN UP").is_some());
        assert!(inspect::find_clickable(host.view(), "LOG IN").is_some());
    }

    fn field_labels(v: &View) -> Vec<String> {
        let mut out = Vec::new();
        v.walk(&mut |n| {
            if let ViewKind::TextField { label, .. } = &n.kind {
                out.push(label.clone());
            }
        });
        out
    }

    #[test]
    fn log_in_flow_through_rendered_buttons() {
        let mut host = host();

        assert!(host.click("LOG IN"));
        assert_eq!(host.screen(), Screen::Login);
        assert_eq!(host.render_count(), 2);
        assert_eq!(field_labels(host.view()), vec!["Email address", "Password"]);

        assert!(host.click("LOG IN"));
        assert_eq!(host.screen(), Screen::Home);
        assert_eq!(host.render_count(), 3);
        assert_eq!(field_labels(host.view()), vec!["Search"]);
        assert!(inspect::find_text(host.view(), "FAVORITE COLLECTIONS").is_some());
    }

    #[test]
    fn sign_up_stays_on_welcome_without_rerender() {
        let mut host = host();
        assert!(host.click("SIGN UP"));
        assert_eq!(host.screen(), Screen::Welcome);
        assert_eq!(host.render_count(), 1);
        assert!(!host.frame());
    }

    #[test]
    fn play_and_tabs_on_home_do_not_navigate() {
        let mut host = host();
        host.navigator().go_to(Screen::Home);
        assert!(host.frame());

        let play = inspect::clickables(host.view())
            .into_iter()
            .find(|v| v.text_content().is_empty())
            .expect("play button");
        assert!(inspect::click(play));
        assert!(host.click("HOME"));
        assert!(host.click("PROFILE"));
        assert_eq!(host.screen(), Screen::Home);
        assert!(!host.frame());
    }

    #[test]
    fn go_to_same_screen_still_notifies() {
        let mut host = host();
        host.navigator().go_to(Screen::Welcome);
        assert!(host.frame());
        assert_eq!(host.render_count(), 2);
        assert!(!host.frame());
    }

    #[test]
    fn dropping_host_unsubscribes() {
        let nav = NavController::new();
        {
            let _host = AppHost::new(
                nav.clone(),
                Rc::new(BundledResources::new()),
                AppConfig::default(),
            )
            .expect("host");
            assert_eq!(nav.observer_count(), 1);
        }
        assert_eq!(nav.observer_count(), 0);
    }

    #[test]
    fn dark_config_changes_background() {
        let host = AppHost::new(
            NavController::new(),
            Rc::new(BundledResources::new()),
            AppConfig { dark: true },
        )
        .expect("host");
        assert_eq!(host.view().modifier.background, Some(Theme::dark().background));
    }

    #[test]
    fn overridden_strings_reach_the_tree() {
        let res = BundledResources::new()
            .with_overrides_json(r#"{"log_in": "Sign in"}"#)
            .expect("overrides");
        let mut host =
            AppHost::new(NavController::new(), Rc::new(res), AppConfig::default()).expect("host");
        assert!(host.click("SIGN IN"));
        assert_eq!(host.screen(), Screen::Login);
        assert!(inspect::find_text(host.view(), "SIGN IN").is_some());
    }
}
