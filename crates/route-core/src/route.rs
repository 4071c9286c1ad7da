//! Route Entries

use serde::{Deserialize, Serialize};

use crate::view::View;

/// How a route's view is bound
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "binding", rename_all = "lowercase")]
pub enum Binding {
    /// View is resident from application start
    Eager { view: View },

    /// View code is fetched the first time the route is activated
    Lazy { view: View, chunk: String },
}

impl Binding {
    /// View rendered by this binding
    pub fn view(&self) -> View {
        match self {
            Binding::Eager { view } | Binding::Lazy { view, .. } => *view,
        }
    }

    /// Chunk to fetch, for lazy bindings
    pub fn chunk(&self) -> Option<&str> {
        match self {
            Binding::Eager { .. } => None,
            Binding::Lazy { chunk, .. } => Some(chunk),
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Binding::Lazy { .. })
    }
}

/// One row of the route table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// URL pattern matched against the current location
    pub path: String,

    /// Identifier used for navigation by name
    pub name: String,

    /// View binding
    #[serde(flatten)]
    pub binding: Binding,
}

impl RouteEntry {
    /// Entry whose view is resident at start
    pub fn eager(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            binding: Binding::Eager { view },
        }
    }

    /// Entry whose view is fetched on first visit, from the view's default chunk
    pub fn lazy(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            binding: Binding::Lazy {
                view,
                chunk: view.chunk().into(),
            },
        }
    }

    pub fn view(&self) -> View {
        self.binding.view()
    }
}
