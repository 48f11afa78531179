use std::rc::Rc;

use anyhow::{Context, bail};
use soothe::{AppConfig, AppHost, BundledResources, ResourceProvider, StringKey};
use soothe_navigation::{NavController, Screen};
use soothe_ui::inspect;

// Usage: soothe [welcome|login|home] [--dark]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut start = Screen::Welcome;
    let mut config = AppConfig::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--dark" => config.dark = true,
            route => {
                start = Screen::from_route(route)
                    .with_context(|| format!("cannot start on `{route}`"))?
            }
        }
    }

    let resources = Rc::new(BundledResources::new());
    let log_in = resources.string(StringKey::LogIn).to_uppercase();
    let mut host = AppHost::new(NavController::starting_at(start), resources, config)
        .context("starting the app")?;
    print_screen(&host);

    // Walk the log-in flow the way a user would, by pressing the buttons.
    while host.screen() != Screen::Home {
        let from = host.screen();
        if !host.click(&log_in) {
            bail!("no `{log_in}` button on {from}");
        }
        print_screen(&host);
    }
    Ok(())
}

fn print_screen(host: &AppHost) {
    println!("== {} ({} nodes)", host.screen(), host.view().node_count());
    println!("{}", inspect::outline(host.view()));
    println!();
}
