pub mod components;
pub mod config;
pub mod gui;
pub mod headless;
pub mod logging;
pub mod themes;

use gpui::{App, actions};
pub use gui::{run, setup_app};
use tracing::info;

actions!(tip_split, [Quit]);

/// Handler for the [`Quit`] action, bound to the platform quit shortcut and menu item.
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
