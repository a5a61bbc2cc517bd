//! Router - maps navigation paths onto registered tools.
//!
//! Tool routes are registered from the registry on the first navigation of
//! the session; that navigation waits for discovery and is then dispatched
//! against the complete route table. Every navigation updates the active
//! tool, which UI consumers can watch.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use super::route::Route;
use crate::domains::tools::{LoadedToolInfo, ToolRegistry};

/// Title segment shown for unknown paths.
const NOT_FOUND_TITLE: &str = "Not Found";

/// Outcome of one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// The path as requested.
    pub requested: String,

    /// Where the navigation ended up. Unknown tools resolve to `NotFound`.
    pub route: Route,

    /// Document title for the resolved route.
    pub title: String,

    /// The tool being shown, for tool routes.
    pub tool: Option<LoadedToolInfo>,
}

impl Navigation {
    pub fn is_not_found(&self) -> bool {
        matches!(self.route, Route::NotFound(_))
    }
}

/// Router over the tool registry.
pub struct Router {
    registry: ToolRegistry,
    app_title: String,

    /// Registered tool routes. Key: route path, Value: tool identifier.
    routes: RwLock<BTreeMap<String, String>>,
    routes_ready: AtomicBool,

    active: watch::Sender<Option<LoadedToolInfo>>,
}

impl Router {
    pub fn new(registry: ToolRegistry, app_title: impl Into<String>) -> Self {
        let (active, _) = watch::channel(None);
        Self {
            registry,
            app_title: app_title.into(),
            routes: RwLock::new(BTreeMap::new()),
            routes_ready: AtomicBool::new(false),
            active,
        }
    }

    /// Navigate to `path`.
    ///
    /// The first navigation waits for tool discovery and route registration.
    /// If discovery fails, this navigation falls back (home stays reachable,
    /// tool paths are not found) and the next navigation tries again.
    #[instrument(skip(self))]
    pub async fn navigate(&self, path: &str) -> Navigation {
        if !self.routes_ready.load(Ordering::Acquire) {
            self.register_routes().await;
        }

        self.dispatch(path).await
    }

    async fn register_routes(&self) {
        match self.registry.initialize().await {
            Ok(tools) => {
                let mut routes = self.routes.write();
                for tool in tools.iter() {
                    routes
                        .entry(Route::tool_path(&tool.id))
                        .or_insert_with(|| tool.id.clone());
                }
                self.routes_ready.store(true, Ordering::Release);
                info!("Registered {} tool route(s)", routes.len());
            }
            Err(e) => {
                error!("Cannot register tool routes: {}", e);
            }
        }
    }

    async fn dispatch(&self, path: &str) -> Navigation {
        let route = Route::parse(path);

        match route {
            Route::Home => {
                self.set_active(None);
                self.navigation(path, Route::Home, self.app_title.clone(), None)
            }
            Route::Tool(id) => {
                if !self.has_route(&id) {
                    debug!("No route registered for tool '{}'", id);
                    return self.not_found(path, Route::tool_path(&id));
                }

                match self.registry.get_by_identifier(&id).await {
                    Ok(tool) => {
                        let title = format!("{} - {}", tool.name(), self.app_title);
                        self.set_active(Some(tool.clone()));
                        self.navigation(path, Route::Tool(id), title, Some(tool))
                    }
                    Err(e) => {
                        warn!("Cannot resolve tool '{}': {}", id, e);
                        self.not_found(path, Route::tool_path(&id))
                    }
                }
            }
            Route::NotFound(normalized) => self.not_found(path, normalized),
        }
    }

    fn not_found(&self, requested: &str, normalized: String) -> Navigation {
        self.set_active(None);
        let title = format!("{} - {}", NOT_FOUND_TITLE, self.app_title);
        self.navigation(requested, Route::NotFound(normalized), title, None)
    }

    fn navigation(
        &self,
        requested: &str,
        route: Route,
        title: String,
        tool: Option<LoadedToolInfo>,
    ) -> Navigation {
        Navigation {
            requested: requested.to_string(),
            route,
            title,
            tool,
        }
    }

    fn set_active(&self, tool: Option<LoadedToolInfo>) {
        self.active.send_replace(tool);
    }

    fn has_route(&self, id: &str) -> bool {
        self.routes.read().contains_key(&Route::tool_path(id))
    }

    /// The tool currently shown, if any.
    pub fn active_tool(&self) -> Option<LoadedToolInfo> {
        self.active.borrow().clone()
    }

    /// Watch the active tool.
    pub fn subscribe(&self) -> watch::Receiver<Option<LoadedToolInfo>> {
        self.active.subscribe()
    }

    /// Whether tool routes have been registered this session.
    pub fn routes_ready(&self) -> bool {
        self.routes_ready.load(Ordering::Acquire)
    }

    /// Registered tool route paths, sorted.
    pub fn route_paths(&self) -> Vec<String> {
        self.routes.read().keys().cloned().collect()
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{StaticSource, ToolDescriptor, ToolError, ToolModule, ToolSource};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    const TITLE: &str = "Developer Toolbox";

    fn builtin_router() -> Router {
        Router::new(ToolRegistry::builtin(), TITLE)
    }

    /// Source whose first discovery fails.
    struct FlakySource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ToolSource for FlakySource {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn discover(&self) -> Result<Vec<ToolModule>, ToolError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(ToolError::discovery("not yet"));
            }
            Ok(vec![ToolModule::from_fn("tools/echo", || {
                Ok(ToolDescriptor {
                    name: "Echo".to_string(),
                    description: "Echo".to_string(),
                    tags: vec![],
                    icon: None,
                    author: None,
                    email: None,
                    github: None,
                })
            })])
        }
    }

    #[tokio::test]
    async fn test_first_navigation_registers_routes() {
        let router = builtin_router();
        assert!(!router.routes_ready());

        let nav = router.navigate("/tool/json").await;

        assert!(router.routes_ready());
        assert_eq!(router.route_paths().len(), 31);
        assert_eq!(nav.route, Route::Tool("json".to_string()));
        assert_eq!(nav.title, "JSON工具 - Developer Toolbox");
        assert_eq!(
            router.active_tool().map(|t| t.id),
            Some("json".to_string())
        );
    }

    #[tokio::test]
    async fn test_later_navigations_reuse_registry() {
        let router = builtin_router();
        router.navigate("/").await;
        router.navigate("/tool/regular").await;
        router.navigate("/tool/md5").await;
        assert_eq!(router.registry().discovery_passes(), 1);
    }

    #[tokio::test]
    async fn test_unknown_tool_clears_active_tool() {
        let router = builtin_router();
        router.navigate("/tool/regular").await;
        assert!(router.active_tool().is_some());

        let nav = router.navigate("/tool/does-not-exist").await;
        assert!(nav.is_not_found());
        assert_eq!(nav.title, "Not Found - Developer Toolbox");
        assert!(router.active_tool().is_none());
    }

    #[tokio::test]
    async fn test_home_and_unknown_paths() {
        let router = builtin_router();

        let home = router.navigate("/").await;
        assert_eq!(home.route, Route::Home);
        assert_eq!(home.title, TITLE);
        assert!(home.tool.is_none());

        let other = router.navigate("/settings").await;
        assert_eq!(other.route, Route::NotFound("/settings".to_string()));
    }

    #[tokio::test]
    async fn test_identifier_case_matters() {
        let router = builtin_router();
        let nav = router.navigate("/tool/imagetoascii").await;
        assert!(nav.is_not_found());

        let nav = router.navigate("/tool/imageToAscii").await;
        assert_eq!(nav.route, Route::Tool("imageToAscii".to_string()));
        assert_eq!(nav.title, "图片转字符画 - Developer Toolbox");
    }

    #[tokio::test]
    async fn test_active_tool_is_observable() {
        let router = builtin_router();
        let mut rx = router.subscribe();

        router.navigate("/tool/color").await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow_and_update().as_ref().map(|t| t.id.clone()),
            Some("color".to_string())
        );

        router.navigate("/").await;
        assert!(rx.borrow_and_update().is_none());
    }

    #[tokio::test]
    async fn test_failed_discovery_retried_on_next_navigation() {
        let source = Arc::new(FlakySource {
            calls: AtomicUsize::new(0),
        });
        let router = Router::new(ToolRegistry::new(vec![source]), TITLE);

        let first = router.navigate("/tool/echo").await;
        assert!(first.is_not_found());
        assert!(!router.routes_ready());

        let second = router.navigate("/tool/echo").await;
        assert_eq!(second.route, Route::Tool("echo".to_string()));
        assert_eq!(second.title, "Echo - Developer Toolbox");
    }

    #[tokio::test]
    async fn test_concurrent_first_navigations() {
        let router = Router::new(
            ToolRegistry::new(vec![Arc::new(StaticSource::new(
                "test",
                crate::domains::tools::builtin_modules(),
            ))]),
            TITLE,
        );

        let (a, b) = tokio::join!(
            router.navigate("/tool/url-encoder"),
            router.navigate("/tool/cron-generator")
        );
        assert_eq!(a.route, Route::Tool("url-encoder".to_string()));
        assert_eq!(b.route, Route::Tool("cron-generator".to_string()));
        assert_eq!(router.registry().discovery_passes(), 1);
    }
}
