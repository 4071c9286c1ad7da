//! Views
//!
//! The renderable views routes point at. Rendering itself lives in the
//! front end; the table only needs to know which view a route shows and
//! which code chunk carries it.

use serde::{Deserialize, Serialize};

/// A renderable view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Primary widget view
    Widget,
    /// Widget wrapped for embedding in third-party pages
    Embedded,
    /// Original landing page
    Home,
    /// About page
    About,
}

impl View {
    /// All views
    pub const ALL: [View; 4] = [View::Widget, View::Embedded, View::Home, View::About];

    /// Component name
    pub fn component(&self) -> &'static str {
        match self {
            View::Widget => "WidgetView",
            View::Embedded => "EmbeddedView",
            View::Home => "HomeView",
            View::About => "AboutView",
        }
    }

    /// Default chunk id for lazily bound routes showing this view
    pub fn chunk(&self) -> &'static str {
        match self {
            View::Widget => "widget-view",
            View::Embedded => "embedded-view",
            View::Home => "home-view",
            View::About => "about-view",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.component())
    }
}
