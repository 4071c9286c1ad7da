//! # route-core
//!
//! Route table for the widget single-page app.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       RouteTable                             │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │   Matcher   │  │ RouteEntry  │  │   ChunkLoader       │  │
//! │  │ (base+path) │──│  + Lazy     │──│   (Strategy)        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Eager entries resolve immediately. Lazy entries fetch their code chunk
//! through a `ChunkLoader` the first time they are resolved and keep it
//! resident afterwards.

pub mod config;
pub mod error;
pub mod history;
pub mod lazy;
pub mod loader;
pub mod matcher;
pub mod route;
pub mod routes;
pub mod table;
pub mod view;

pub use config::RouterConfig;
pub use error::{Result, RouteError};
pub use history::{join_base, strip_base};
pub use lazy::LazyComponent;
pub use loader::{Chunk, ChunkLoader, MockChunkLoader};
pub use route::{Binding, RouteEntry};
pub use routes::{app_routes, app_table};
pub use table::{ManifestEntry, Resolved, RouteManifest, RouteTable};
pub use view::View;
