//! Application Routes
//!
//! The widget app's route table. `/` and `/widget` show the same view: the
//! root ships it eagerly, `/widget` fetches it on demand.

use std::sync::Arc;

use crate::config::RouterConfig;
use crate::error::Result;
use crate::loader::ChunkLoader;
use crate::route::RouteEntry;
use crate::table::RouteTable;
use crate::view::View;

pub const HOME: &str = "home";
pub const EMBEDDED: &str = "embedded";
pub const WIDGET: &str = "widget";
pub const ORIGINAL_HOME: &str = "original-home";
pub const ABOUT: &str = "about";

/// Route entries in declaration order
pub fn app_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::eager("/", HOME, View::Widget),
        RouteEntry::lazy("/embedded", EMBEDDED, View::Embedded),
        RouteEntry::lazy("/widget", WIDGET, View::Widget),
        RouteEntry::lazy("/home", ORIGINAL_HOME, View::Home),
        RouteEntry::lazy("/about", ABOUT, View::About),
    ]
}

/// Build the application's route table
pub fn app_table(config: RouterConfig, loader: Arc<dyn ChunkLoader>) -> Result<RouteTable> {
    RouteTable::new(config, app_routes(), loader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use crate::loader::MockChunkLoader;
    use std::collections::HashSet;

    fn setup() -> (RouteTable, Arc<MockChunkLoader>) {
        let loader = Arc::new(MockChunkLoader::new());
        let table = app_table(RouterConfig::default(), loader.clone()).unwrap();
        (table, loader)
    }

    #[tokio::test]
    async fn test_declared_paths_resolve_to_names() {
        let (table, _) = setup();
        let expected = [
            ("/", HOME),
            ("/embedded", EMBEDDED),
            ("/widget", WIDGET),
            ("/home", ORIGINAL_HOME),
            ("/about", ABOUT),
        ];

        for (path, name) in expected {
            let resolved = table.resolve(path).await.unwrap();
            assert_eq!(resolved.name(), name, "path {path}");
            assert_eq!(resolved.entry.path, path);
        }
    }

    #[tokio::test]
    async fn test_root_and_widget_share_view() {
        let (table, loader) = setup();

        let root = table.resolve("/").await.unwrap();
        assert!(root.chunk.is_none());
        assert_eq!(loader.total_fetches(), 0);

        let widget = table.resolve("/widget").await.unwrap();
        assert!(widget.chunk.is_some());
        assert_eq!(root.view(), View::Widget);
        assert_eq!(widget.view(), root.view());
        assert!(!root.entry.binding.is_lazy());
        assert!(widget.entry.binding.is_lazy());
    }

    #[test]
    fn test_names_and_paths_unique() {
        let routes = app_routes();
        let names: HashSet<_> = routes.iter().map(|r| r.name.as_str()).collect();
        let paths: HashSet<_> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(routes.len(), 5);
        assert_eq!(names.len(), routes.len());
        assert_eq!(paths.len(), routes.len());
    }

    #[tokio::test]
    async fn test_unknown_path_is_no_match() {
        let (table, loader) = setup();
        let err = table.resolve("/nonexistent").await.unwrap_err();
        assert_eq!(err, RouteError::NoMatch("/nonexistent".into()));
        assert_eq!(loader.total_fetches(), 0);
    }

    #[tokio::test]
    async fn test_lazy_routes_become_resident_on_first_resolve() {
        let (table, _) = setup();
        assert!(table.is_resident(HOME));

        for name in [EMBEDDED, WIDGET, ORIGINAL_HOME, ABOUT] {
            assert!(!table.is_resident(name), "{name} resident before visit");
            table.resolve_name(name).await.unwrap();
            assert!(table.is_resident(name), "{name} not resident after visit");
        }
    }

    #[tokio::test]
    async fn test_reresolve_does_not_refetch() {
        let (table, loader) = setup();

        let first = table.resolve("/about").await.unwrap();
        let second = table.resolve("/about").await.unwrap();

        assert_eq!(loader.fetch_count(View::About.chunk()), 1);
        assert!(Arc::ptr_eq(
            first.chunk.as_ref().unwrap(),
            second.chunk.as_ref().unwrap()
        ));
    }

    #[tokio::test]
    async fn test_load_failure_then_later_success() {
        let (table, loader) = setup();
        loader.fail(View::Embedded.chunk());

        let err = table.resolve("/embedded").await.unwrap_err();
        assert!(matches!(err, RouteError::LoadFailure { ref route, .. } if route == EMBEDDED));
        assert!(err.is_retryable());
        assert!(!table.is_resident(EMBEDDED));

        loader.recover(View::Embedded.chunk());
        table.resolve("/embedded").await.unwrap();
        assert!(table.is_resident(EMBEDDED));
        assert_eq!(loader.fetch_count(View::Embedded.chunk()), 2);
    }

    #[tokio::test]
    async fn test_base_path_deployment() {
        let loader = Arc::new(MockChunkLoader::new());
        let table = app_table(RouterConfig::with_base("/widgets/"), loader).unwrap();

        assert_eq!(table.href(ORIGINAL_HOME).unwrap(), "/widgets/home");
        assert_eq!(table.href(HOME).unwrap(), "/widgets/");

        let resolved = table.resolve_location("/widgets/home").await.unwrap();
        assert_eq!(resolved.name(), ORIGINAL_HOME);
        assert_eq!(resolved.view(), View::Home);
    }
}
