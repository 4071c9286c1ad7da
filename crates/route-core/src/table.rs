//! Route Table
//!
//! Ordered, immutable set of routes built once at bootstrap. Resolution is a
//! lookup over the canonical paths; the only side effect is fetching the
//! chunk of a lazy entry the first time it is activated.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::config::RouterConfig;
use crate::error::{Result, RouteError};
use crate::history::{join_base, strip_base};
use crate::lazy::LazyComponent;
use crate::loader::{Chunk, ChunkLoader};
use crate::matcher::canonical;
use crate::route::{Binding, RouteEntry};
use crate::view::View;

struct Slot {
    entry: RouteEntry,
    /// Present for lazy bindings
    lazy: Option<LazyComponent>,
}

impl Slot {
    fn is_resident(&self) -> bool {
        self.lazy.as_ref().is_none_or(LazyComponent::is_resident)
    }
}

/// Outcome of a successful resolution
#[derive(Clone, Debug)]
pub struct Resolved<'a> {
    /// Matched entry
    pub entry: &'a RouteEntry,

    /// Loaded chunk, for lazy entries
    pub chunk: Option<Arc<Chunk>>,
}

impl Resolved<'_> {
    pub fn name(&self) -> &str {
        &self.entry.name
    }

    /// View to mount
    pub fn view(&self) -> View {
        self.entry.view()
    }
}

/// Serializable snapshot of one route
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub path: String,
    pub name: String,
    #[serde(flatten)]
    pub binding: Binding,
    pub resident: bool,
}

/// Serializable snapshot of a route table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteManifest {
    pub base: String,
    pub routes: Vec<ManifestEntry>,
}

impl RouteManifest {
    /// Manifest of entries as they stand at application start
    pub fn from_entries(base: &str, entries: &[RouteEntry]) -> Self {
        Self {
            base: base.to_string(),
            routes: entries
                .iter()
                .map(|entry| ManifestEntry {
                    path: entry.path.clone(),
                    name: entry.name.clone(),
                    binding: entry.binding.clone(),
                    resident: !entry.binding.is_lazy(),
                })
                .collect(),
        }
    }
}

/// Route table
pub struct RouteTable {
    config: RouterConfig,
    slots: Vec<Slot>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    loader: Arc<dyn ChunkLoader>,
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("config", &self.config)
            .field("routes", &self.slots.iter().map(|s| &s.entry).collect::<Vec<_>>())
            .field("loader", &self.loader.name())
            .finish()
    }
}

impl RouteTable {
    /// Build a table, rejecting invalid or duplicate paths and names
    pub fn new(
        config: RouterConfig,
        entries: Vec<RouteEntry>,
        loader: Arc<dyn ChunkLoader>,
    ) -> Result<Self> {
        let options = config.match_options();
        let mut slots = Vec::with_capacity(entries.len());
        let mut by_path = HashMap::new();
        let mut by_name = HashMap::new();

        for (idx, entry) in entries.into_iter().enumerate() {
            if !entry.path.starts_with('/') {
                return Err(RouteError::InvalidPath(entry.path));
            }
            if by_path.insert(canonical(&entry.path, options), idx).is_some() {
                return Err(RouteError::DuplicatePath(entry.path));
            }
            if by_name.insert(entry.name.clone(), idx).is_some() {
                return Err(RouteError::DuplicateName(entry.name));
            }

            let lazy = entry.binding.chunk().map(LazyComponent::new);
            slots.push(Slot { entry, lazy });
        }

        tracing::info!(
            routes = slots.len(),
            base = %config.base(),
            loader = loader.name(),
            "Route table ready"
        );

        Ok(Self {
            config,
            slots,
            by_path,
            by_name,
            loader,
        })
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Entries in declaration order
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.slots.iter().map(|slot| &slot.entry)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Entry matching `path`, without loading anything
    pub fn match_path(&self, path: &str) -> Option<&RouteEntry> {
        self.index_of_path(path).map(|idx| &self.slots[idx].entry)
    }

    /// Entry addressed by a browser location, without loading anything
    pub fn match_location(&self, location: &str) -> Option<&RouteEntry> {
        self.match_path(&strip_base(self.config.base(), location))
    }

    /// Entry named `name`
    pub fn find(&self, name: &str) -> Option<&RouteEntry> {
        self.by_name.get(name).map(|&idx| &self.slots[idx].entry)
    }

    /// Resolve a route path, fetching the view's chunk if it is not resident
    pub async fn resolve(&self, path: &str) -> Result<Resolved<'_>> {
        let Some(idx) = self.index_of_path(path) else {
            tracing::debug!(path, "No route matches");
            return Err(RouteError::NoMatch(path.to_string()));
        };
        self.activate(idx).await
    }

    /// Resolve by route name
    pub async fn resolve_name(&self, name: &str) -> Result<Resolved<'_>> {
        let idx = *self
            .by_name
            .get(name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?;
        self.activate(idx).await
    }

    /// Resolve a browser location (base, query and hash included)
    pub async fn resolve_location(&self, location: &str) -> Result<Resolved<'_>> {
        let path = strip_base(self.config.base(), location);
        self.resolve(&path).await
    }

    /// Resolution available without fetching, if any
    pub fn peek(&self, name: &str) -> Option<Resolved<'_>> {
        let slot = &self.slots[*self.by_name.get(name)?];
        let chunk = match &slot.lazy {
            None => None,
            Some(lazy) => Some(lazy.get()?),
        };

        Some(Resolved {
            entry: &slot.entry,
            chunk,
        })
    }

    /// Whether the named route can render without fetching
    pub fn is_resident(&self, name: &str) -> bool {
        self.by_name
            .get(name)
            .is_some_and(|&idx| self.slots[idx].is_resident())
    }

    /// Browser URL for the named route, base included
    pub fn href(&self, name: &str) -> Result<String> {
        let entry = self
            .find(name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?;
        Ok(join_base(self.config.base(), &entry.path))
    }

    /// Snapshot of the table and what is resident
    pub fn manifest(&self) -> RouteManifest {
        RouteManifest {
            base: self.config.base().to_string(),
            routes: self
                .slots
                .iter()
                .map(|slot| ManifestEntry {
                    path: slot.entry.path.clone(),
                    name: slot.entry.name.clone(),
                    binding: slot.entry.binding.clone(),
                    resident: slot.is_resident(),
                })
                .collect(),
        }
    }

    fn index_of_path(&self, path: &str) -> Option<usize> {
        self.by_path
            .get(&canonical(path, self.config.match_options()))
            .copied()
    }

    async fn activate(&self, idx: usize) -> Result<Resolved<'_>> {
        let slot = &self.slots[idx];

        let chunk = match &slot.lazy {
            None => None,
            Some(lazy) => {
                let chunk = lazy.load(self.loader.as_ref()).await.map_err(|e| {
                    tracing::warn!(route = %slot.entry.name, error = %e, "Lazy route failed to load");
                    RouteError::LoadFailure {
                        route: slot.entry.name.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Some(chunk)
            }
        };

        Ok(Resolved {
            entry: &slot.entry,
            chunk,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::MockChunkLoader;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct SlowLoader {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl ChunkLoader for SlowLoader {
        async fn fetch(&self, chunk: &str) -> Result<Chunk> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(Chunk::new(chunk, vec![0; 8]))
        }

        fn name(&self) -> &str {
            "SlowLoader"
        }
    }

    fn sample() -> Vec<RouteEntry> {
        vec![
            RouteEntry::eager("/", "root", View::Widget),
            RouteEntry::lazy("/about", "about", View::About),
        ]
    }

    fn table(config: RouterConfig) -> RouteTable {
        RouteTable::new(config, sample(), Arc::new(MockChunkLoader::new())).unwrap()
    }

    #[test]
    fn test_rejects_duplicates() {
        let loader: Arc<dyn ChunkLoader> = Arc::new(MockChunkLoader::new());

        let mut entries = sample();
        entries.push(RouteEntry::lazy("/About/", "about-again", View::About));
        let err = RouteTable::new(RouterConfig::default(), entries, loader.clone()).unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("/About/".into()));

        let mut entries = sample();
        entries.push(RouteEntry::lazy("/team", "about", View::About));
        let err = RouteTable::new(RouterConfig::default(), entries, loader.clone()).unwrap_err();
        assert_eq!(err, RouteError::DuplicateName("about".into()));

        let entries = vec![RouteEntry::eager("about", "about", View::About)];
        let err = RouteTable::new(RouterConfig::default(), entries, loader).unwrap_err();
        assert_eq!(err, RouteError::InvalidPath("about".into()));
    }

    #[test]
    fn test_case_sensitive_table_allows_case_variants() {
        let mut entries = sample();
        entries.push(RouteEntry::lazy("/About", "about-upper", View::About));
        let config = RouterConfig::default().sensitive(true);
        let table = RouteTable::new(config, entries, Arc::new(MockChunkLoader::new())).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.match_path("/About").unwrap().name, "about-upper");
        assert_eq!(table.match_path("/about").unwrap().name, "about");
    }

    #[test]
    fn test_lookup_is_pure() {
        let table = table(RouterConfig::default());
        assert_eq!(table.match_path("/about/").unwrap().name, "about");
        assert!(table.match_path("/missing").is_none());
        assert!(!table.is_resident("about"));
        assert!(table.is_resident("root"));
        assert!(!table.is_resident("missing"));
    }

    #[test]
    fn test_match_location_ignores_case_and_base() {
        let table = table(RouterConfig::with_base("/app"));
        assert_eq!(table.match_location("/APP/ABOUT").unwrap().name, "about");
        assert_eq!(table.match_location("/app/About/?tab=1").unwrap().name, "about");
        assert_eq!(table.match_location("/app/").unwrap().name, "root");
        assert!(table.match_location("/app/nonexistent").is_none());
        assert!(!table.is_resident("about"));
    }

    #[tokio::test]
    async fn test_peek() {
        let table = table(RouterConfig::default());

        let root = table.peek("root").unwrap();
        assert!(root.chunk.is_none());
        assert_eq!(root.view(), View::Widget);

        assert!(table.peek("about").is_none());
        table.resolve("/about").await.unwrap();
        let about = table.peek("about").unwrap();
        assert_eq!(about.chunk.unwrap().id, "about-view");
        assert!(table.peek("missing").is_none());
    }

    #[tokio::test]
    async fn test_resolve_location_under_base() {
        let table = table(RouterConfig::with_base("/app/"));

        let resolved = table.resolve_location("/app/about?ref=nav#top").await.unwrap();
        assert_eq!(resolved.name(), "about");

        let resolved = table.resolve_location("/app").await.unwrap();
        assert_eq!(resolved.name(), "root");

        let err = table.resolve_location("/elsewhere/about").await.unwrap_err();
        assert_eq!(err, RouteError::NoMatch("/elsewhere/about".into()));

        assert_eq!(table.href("about").unwrap(), "/app/about");
        assert_eq!(table.href("root").unwrap(), "/app/");
        assert_eq!(
            table.href("missing").unwrap_err(),
            RouteError::UnknownName("missing".into())
        );
    }

    #[tokio::test]
    async fn test_strict_trailing_slash() {
        let table = table(RouterConfig::default().strict(true));
        assert!(table.resolve("/about").await.is_ok());
        assert!(matches!(
            table.resolve("/about/").await,
            Err(RouteError::NoMatch(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_first_resolve_fetches_once() {
        let loader = Arc::new(SlowLoader::default());
        let table = RouteTable::new(RouterConfig::default(), sample(), loader.clone()).unwrap();

        let (a, b) = tokio::join!(table.resolve("/about"), table.resolve("/about/"));
        assert!(a.is_ok());
        assert!(b.is_ok());
        assert_eq!(loader.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_manifest_tracks_residency() {
        let table = table(RouterConfig::with_base("/app"));

        let before = table.manifest();
        assert_eq!(before.base, "/app");
        assert_eq!(before.routes.len(), 2);
        assert!(before.routes[0].resident);
        assert!(!before.routes[1].resident);
        assert_eq!(before, RouteManifest::from_entries("/app", &sample()));

        table.resolve_name("about").await.unwrap();
        let after = table.manifest();
        assert!(after.routes[1].resident);

        let json = serde_json::to_value(&after).unwrap();
        assert_eq!(json["routes"][1]["binding"], "lazy");
        assert_eq!(json["routes"][1]["chunk"], "about-view");
        assert_eq!(json["routes"][1]["resident"], true);
    }
}
