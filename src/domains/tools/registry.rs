//! Tool Registry - discovery, loading and lookup of all tools.
//!
//! This module provides:
//! - A single-flight load pass over every registered [`ToolSource`]
//! - A frozen, shared cache of [`LoadedToolInfo`] for the session
//! - Lookup by identifier and simple catalogue queries
//!
//! Callers that ask for the tool list while a pass is running attach to that
//! pass instead of starting another. The pending pass is dropped from the
//! registry once it finishes, whatever the outcome, so a failed pass can be
//! retried.

use futures::future::{BoxFuture, FutureExt, Shared, join_all};
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, error, info, instrument, warn};

use super::catalog::builtin_source;
use super::descriptor::{LoadedToolInfo, ToolTag};
use super::error::ToolError;
use super::source::{ManifestDirSource, ToolSource};
use crate::core::config::Config;

/// The frozen tool list shared by every reader.
pub type ToolList = Arc<[LoadedToolInfo]>;

type LoadOutcome = Result<ToolList, ToolError>;
type PendingLoad = Shared<BoxFuture<'static, LoadOutcome>>;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - discovers and caches all available tools.
///
/// Cheap to clone; clones share the same cache and pending pass.
#[derive(Clone)]
pub struct ToolRegistry {
    inner: Arc<RegistryInner>,
}

struct RegistryInner {
    sources: Vec<Arc<dyn ToolSource>>,
    cache: RwLock<Option<ToolList>>,
    pending: Mutex<Option<PendingLoad>>,
    passes: AtomicUsize,
}

impl ToolRegistry {
    /// Create a registry over the given sources, discovered in order.
    pub fn new(sources: Vec<Arc<dyn ToolSource>>) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                sources,
                cache: RwLock::new(None),
                pending: Mutex::new(None),
                passes: AtomicUsize::new(0),
            }),
        }
    }

    /// Registry over the built-in catalogue only.
    pub fn builtin() -> Self {
        Self::new(vec![Arc::new(builtin_source())])
    }

    /// Registry with the sources selected by the configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut sources: Vec<Arc<dyn ToolSource>> = Vec::new();

        if config.registry.include_builtin {
            sources.push(Arc::new(builtin_source()));
        }

        if let Some(dir) = &config.registry.tools_dir {
            sources.push(Arc::new(ManifestDirSource::new(
                dir.clone(),
                config.security.allow_symlinks,
            )));
        }

        Self::new(sources)
    }

    /// Load every tool unless already cached or in flight.
    ///
    /// Concurrent callers share one load pass and receive the same list.
    pub async fn initialize(&self) -> Result<ToolList, ToolError> {
        if let Some(tools) = self.cached() {
            return Ok(tools);
        }

        let pending = {
            let mut slot = self.inner.pending.lock();

            // A pass may have finished between the cache check and the lock
            if let Some(tools) = self.cached() {
                return Ok(tools);
            }

            match slot.as_ref() {
                Some(pending) => {
                    debug!("Joining in-flight tool discovery");
                    pending.clone()
                }
                None => {
                    let pending = Self::load_pass(Arc::clone(&self.inner)).boxed().shared();
                    *slot = Some(pending.clone());
                    pending
                }
            }
        };

        pending.await
    }

    /// All loaded tools in discovery order, loading them first if needed.
    pub async fn get_all(&self) -> Result<ToolList, ToolError> {
        self.initialize().await
    }

    /// The tool with the given identifier.
    pub async fn get_by_identifier(&self, id: &str) -> Result<LoadedToolInfo, ToolError> {
        let tools = self.initialize().await?;
        tools
            .iter()
            .find(|tool| tool.id == id)
            .cloned()
            .ok_or_else(|| ToolError::not_found(id))
    }

    /// Tools matching a free-text query, in discovery order.
    pub async fn search(&self, query: &str) -> Result<Vec<LoadedToolInfo>, ToolError> {
        let tools = self.initialize().await?;
        Ok(tools.iter().filter(|t| t.matches(query)).cloned().collect())
    }

    /// Tools carrying `tag`, in discovery order.
    pub async fn with_tag(&self, tag: &str) -> Result<Vec<LoadedToolInfo>, ToolError> {
        let tools = self.initialize().await?;
        Ok(tools.iter().filter(|t| t.has_tag(tag)).cloned().collect())
    }

    /// How many tools carry each built-in vocabulary tag.
    ///
    /// A tool is counted once per tag even if it lists the tag twice.
    /// Free-form tags are not counted.
    pub async fn tag_stats(&self) -> Result<BTreeMap<ToolTag, usize>, ToolError> {
        let tools = self.initialize().await?;
        let mut stats = BTreeMap::new();
        for tool in tools.iter() {
            let tags: HashSet<ToolTag> = tool.descriptor.vocabulary_tags().collect();
            for tag in tags {
                *stats.entry(tag).or_insert(0) += 1;
            }
        }
        Ok(stats)
    }

    /// The cached list, if a pass has completed.
    pub fn cached(&self) -> Option<ToolList> {
        self.inner.cache.read().clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.cache.read().is_some()
    }

    /// Number of load passes started so far.
    pub fn discovery_passes(&self) -> usize {
        self.inner.passes.load(Ordering::SeqCst)
    }

    #[instrument(skip_all, fields(sources = inner.sources.len()))]
    async fn load_pass(inner: Arc<RegistryInner>) -> LoadOutcome {
        let _clear = ClearPending(&inner);
        inner.passes.fetch_add(1, Ordering::SeqCst);
        info!("Discovering tools");

        let mut modules = Vec::new();
        for source in &inner.sources {
            match source.discover().await {
                Ok(found) => {
                    debug!("Source '{}' provided {} module(s)", source.name(), found.len());
                    modules.extend(found);
                }
                Err(e) => {
                    error!("Tool discovery failed in source '{}': {}", source.name(), e);
                    return Err(e);
                }
            }
        }

        let outcomes = join_all(modules.iter().map(|module| module.load())).await;

        let mut tools = Vec::with_capacity(modules.len());
        let mut failed = 0usize;
        let mut seen = HashSet::new();

        for (module, outcome) in modules.iter().zip(outcomes) {
            let Some(id) = module.identifier() else {
                warn!("Cannot derive a tool identifier from '{}'; skipping", module.path());
                failed += 1;
                continue;
            };

            match outcome {
                Ok(descriptor) => {
                    if !seen.insert(id.to_string()) {
                        warn!(
                            "Duplicate tool identifier '{}' from '{}'; lookups return the first",
                            id,
                            module.path()
                        );
                    }
                    tools.push(LoadedToolInfo::new(id, descriptor));
                }
                Err(e) => {
                    warn!("Excluding tool '{}': {}", id, e);
                    failed += 1;
                }
            }
        }

        let tools: ToolList = tools.into();
        *inner.cache.write() = Some(Arc::clone(&tools));

        info!("Tool registry ready: {} loaded, {} failed", tools.len(), failed);
        Ok(tools)
    }
}

/// Drops the pending pass from the registry when the pass ends.
struct ClearPending<'a>(&'a RegistryInner);

impl Drop for ClearPending<'_> {
    fn drop(&mut self) {
        self.0.pending.lock().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::descriptor::ToolDescriptor;
    use crate::domains::tools::source::{StaticSource, ToolModule};
    use async_trait::async_trait;
    use std::sync::atomic::AtomicBool;
    use tokio::sync::Notify;

    fn descriptor(name: &str, tags: &[&str]) -> ToolDescriptor {
        ToolDescriptor {
            name: name.to_string(),
            description: format!("{name} tool"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            icon: None,
            author: None,
            email: None,
            github: None,
        }
    }

    fn module(path: &'static str, name: &'static str, tags: &'static [&'static str]) -> ToolModule {
        ToolModule::from_fn(path, move || Ok(descriptor(name, tags)))
    }

    /// Source that suspends before listing and counts its discoveries.
    ///
    /// With a gate set, discovery waits until the gate is notified.
    struct CountingSource {
        inner: StaticSource,
        discoveries: AtomicUsize,
        fail_first: AtomicBool,
        gate: Option<Arc<Notify>>,
    }

    impl CountingSource {
        fn new(modules: Vec<ToolModule>) -> Self {
            Self {
                inner: StaticSource::new("counting", modules),
                discoveries: AtomicUsize::new(0),
                fail_first: AtomicBool::new(false),
                gate: None,
            }
        }

        fn failing_once(modules: Vec<ToolModule>) -> Self {
            let source = Self::new(modules);
            source.fail_first.store(true, Ordering::SeqCst);
            source
        }

        fn gated(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }
    }

    #[async_trait]
    impl ToolSource for CountingSource {
        fn name(&self) -> &str {
            "counting"
        }

        async fn discover(&self) -> Result<Vec<ToolModule>, ToolError> {
            self.discoveries.fetch_add(1, Ordering::SeqCst);
            match &self.gate {
                Some(gate) => gate.notified().await,
                None => tokio::task::yield_now().await,
            }
            if self.fail_first.swap(false, Ordering::SeqCst) {
                return Err(ToolError::discovery("disk unavailable"));
            }
            self.inner.discover().await
        }
    }

    fn abc_modules() -> Vec<ToolModule> {
        vec![
            module("tools/a", "A", &["utility"]),
            module("tools/b", "B", &["converter", "utility"]),
            module("tools/c", "C", &["free-form"]),
        ]
    }

    #[tokio::test]
    async fn test_get_by_identifier_matches_get_all() {
        let registry = ToolRegistry::builtin();
        let tools = registry.get_all().await.unwrap();
        assert!(!tools.is_empty());

        for tool in tools.iter() {
            let found = registry.get_by_identifier(&tool.id).await.unwrap();
            assert_eq!(&found, tool);
        }
    }

    #[tokio::test]
    async fn test_unknown_identifier_is_not_found() {
        let registry = ToolRegistry::builtin();
        let err = registry.get_by_identifier("no-such-tool").await.unwrap_err();
        assert_eq!(err, ToolError::NotFound("no-such-tool".to_string()));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_concurrent_initialize_runs_one_pass() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(CountingSource::new(abc_modules()).gated(gate.clone()));
        let registry = ToolRegistry::new(vec![source.clone()]);

        let release = async {
            tokio::task::yield_now().await;
            gate.notify_one();
        };
        let (results, ()) = tokio::join!(join_all((0..8).map(|_| registry.initialize())), release);

        assert_eq!(source.discoveries.load(Ordering::SeqCst), 1);
        assert_eq!(registry.discovery_passes(), 1);

        let first = results[0].as_ref().unwrap();
        for result in &results {
            let list = result.as_ref().unwrap();
            assert!(Arc::ptr_eq(first, list));
        }
        assert_eq!(first.len(), 3);
    }

    #[tokio::test]
    async fn test_concurrent_initialize_across_tasks() {
        let source = Arc::new(CountingSource::new(abc_modules()));
        let registry = ToolRegistry::new(vec![source.clone()]);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                tokio::spawn(async move { registry.initialize().await })
            })
            .collect();

        let mut lists = Vec::new();
        for handle in handles {
            lists.push(handle.await.unwrap().unwrap());
        }

        assert_eq!(source.discoveries.load(Ordering::SeqCst), 1);
        assert!(lists.iter().all(|l| Arc::ptr_eq(l, &lists[0])));
    }

    #[tokio::test]
    async fn test_cached_after_first_pass() {
        let source = Arc::new(CountingSource::new(abc_modules()));
        let registry = ToolRegistry::new(vec![source.clone()]);
        assert!(!registry.is_initialized());

        registry.initialize().await.unwrap();
        registry.get_all().await.unwrap();
        registry.get_by_identifier("b").await.unwrap();

        assert!(registry.is_initialized());
        assert_eq!(source.discoveries.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failing_module_is_excluded() {
        let modules = vec![
            module("tools/a", "A", &[]),
            ToolModule::from_fn("tools/broken", || {
                Err(ToolError::module_load("tools/broken", "syntax error"))
            }),
            module("tools/c", "C", &[]),
        ];
        let registry = ToolRegistry::new(vec![Arc::new(StaticSource::new("test", modules))]);

        let tools = registry.get_all().await.unwrap();
        let ids: Vec<_> = tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(registry.get_by_identifier("broken").await.is_err());
    }

    #[tokio::test]
    async fn test_discovery_failure_can_be_retried() {
        let source = Arc::new(CountingSource::failing_once(abc_modules()));
        let registry = ToolRegistry::new(vec![source.clone()]);

        let err = registry.initialize().await.unwrap_err();
        assert!(matches!(err, ToolError::Discovery(_)));
        assert!(!registry.is_initialized());

        let tools = registry.initialize().await.unwrap();
        assert_eq!(tools.len(), 3);
        assert_eq!(registry.discovery_passes(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_failure() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(CountingSource::failing_once(abc_modules()).gated(gate.clone()));
        let registry = ToolRegistry::new(vec![source.clone()]);

        let release = async {
            tokio::task::yield_now().await;
            gate.notify_one();
        };
        let (results, ()) = tokio::join!(join_all((0..3).map(|_| registry.initialize())), release);

        assert!(results.iter().all(|r| r.is_err()));
        assert_eq!(source.discoveries.load(Ordering::SeqCst), 1);

        // The failed pass no longer blocks a fresh one
        gate.notify_one();
        assert_eq!(registry.initialize().await.unwrap().len(), 3);
        assert_eq!(source.discoveries.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_discovery_order_across_sources() {
        let first = StaticSource::new("first", vec![module("x/b", "B", &[])]);
        let second = StaticSource::new("second", vec![module("y/a", "A", &[])]);
        let registry = ToolRegistry::new(vec![Arc::new(first), Arc::new(second)]);

        let tools = registry.get_all().await.unwrap();
        let ids: Vec<_> = tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_duplicate_identifier_lookup_returns_first() {
        let modules = vec![module("one/dup", "First", &[]), module("two/dup", "Second", &[])];
        let registry = ToolRegistry::new(vec![Arc::new(StaticSource::new("test", modules))]);

        assert_eq!(registry.get_all().await.unwrap().len(), 2);
        let found = registry.get_by_identifier("dup").await.unwrap();
        assert_eq!(found.name(), "First");
    }

    #[tokio::test]
    async fn test_tag_stats_count_vocabulary_only() {
        let mut modules = abc_modules();
        modules.push(module("tools/d", "D", &["utility", "utility"]));
        let registry = ToolRegistry::new(vec![Arc::new(StaticSource::new("test", modules))]);

        let stats = registry.tag_stats().await.unwrap();
        assert_eq!(stats.get(&ToolTag::Utility), Some(&3));
        assert_eq!(stats.get(&ToolTag::Converter), Some(&1));
        assert_eq!(stats.len(), 2);
    }

    #[tokio::test]
    async fn test_search_and_with_tag() {
        let registry = ToolRegistry::builtin();

        let hits = registry.search("json").await.unwrap();
        let ids: Vec<_> = hits.iter().map(|t| t.id.as_str()).collect();
        assert!(ids.contains(&"json"));
        assert!(ids.contains(&"yml"));

        let images = registry.with_tag("image").await.unwrap();
        assert!(images.iter().all(|t| t.has_tag("image")));
        assert!(images.iter().any(|t| t.id == "imageWatermark"));

        let crypto = registry.search("加密").await.unwrap();
        assert!(crypto.iter().any(|t| t.id == "rsa"));
        assert!(crypto.iter().any(|t| t.id == "md5"));
    }

    #[tokio::test]
    async fn test_builtin_tag_stats_cover_vocabulary() {
        let registry = ToolRegistry::builtin();
        let stats = registry.tag_stats().await.unwrap();
        assert_eq!(stats.len(), ToolTag::ALL.len());
        assert_eq!(stats.get(&ToolTag::Security), Some(&5));
    }

    #[tokio::test]
    async fn test_from_config_without_sources_is_empty() {
        let mut config = Config::default();
        config.registry.include_builtin = false;
        let registry = ToolRegistry::from_config(&config);
        assert!(registry.get_all().await.unwrap().is_empty());
    }

    #[test]
    fn test_initialize_blocking() {
        let registry = ToolRegistry::builtin();
        let tools = tokio_test::block_on(registry.initialize()).unwrap();
        assert_eq!(tools.len(), 31);
    }
}
