//! Navigator for the terminal: a navigation is reported, not rendered.

use tracing::info;

use portal_core::traits::Navigator;

/// Prints every destination the portal navigates to.
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        info!(path, "Navigating");
        println!("→ {path}");
    }
}
