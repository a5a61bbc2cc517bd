//! Tool module sources.
//!
//! A [`ToolSource`] enumerates [`ToolModule`]s; each module knows its storage
//! path and how to load its descriptor. Enumeration and loading are separate
//! steps so the registry can load every module concurrently and drop the ones
//! that fail.

use async_trait::async_trait;
use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use super::definitions::ToolDefinition;
use super::descriptor::ToolDescriptor;
use super::error::ToolError;
use super::identifier::derive_identifier;
use crate::core::security::validate_manifest_path;

/// File name of a tool manifest inside its directory.
pub const MANIFEST_FILE: &str = "info.json";

/// Something that evaluates to a tool descriptor.
#[async_trait]
pub trait DescriptorLoader: Send + Sync {
    async fn load(&self) -> Result<ToolDescriptor, ToolError>;
}

/// One discoverable tool: where it lives and how to load it.
#[derive(Clone)]
pub struct ToolModule {
    path: String,
    loader: Arc<dyn DescriptorLoader>,
}

impl ToolModule {
    pub fn new(path: impl Into<String>, loader: Arc<dyn DescriptorLoader>) -> Self {
        Self {
            path: path.into(),
            loader,
        }
    }

    /// Module backed by a built-in [`ToolDefinition`].
    pub fn from_definition<D: ToolDefinition + 'static>() -> Self {
        Self::new(D::PATH, Arc::new(DefinitionLoader::<D>(PhantomData)))
    }

    /// Module backed by a closure, evaluated on every load.
    pub fn from_fn<F>(path: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Result<ToolDescriptor, ToolError> + Send + Sync + 'static,
    {
        Self::new(path, Arc::new(FnLoader(f)))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Identifier derived from the storage path.
    pub fn identifier(&self) -> Option<&str> {
        derive_identifier(&self.path)
    }

    pub async fn load(&self) -> Result<ToolDescriptor, ToolError> {
        self.loader.load().await
    }
}

impl fmt::Debug for ToolModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolModule")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

struct DefinitionLoader<D>(PhantomData<fn() -> D>);

#[async_trait]
impl<D: ToolDefinition + 'static> DescriptorLoader for DefinitionLoader<D> {
    async fn load(&self) -> Result<ToolDescriptor, ToolError> {
        Ok(D::descriptor())
    }
}

struct FnLoader<F>(F);

#[async_trait]
impl<F> DescriptorLoader for FnLoader<F>
where
    F: Fn() -> Result<ToolDescriptor, ToolError> + Send + Sync,
{
    async fn load(&self) -> Result<ToolDescriptor, ToolError> {
        (self.0)()
    }
}

/// A set of tool modules the registry can enumerate.
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// List every module this source provides, in a stable order.
    async fn discover(&self) -> Result<Vec<ToolModule>, ToolError>;
}

/// Source over a fixed list of modules.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    name: String,
    modules: Vec<ToolModule>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, modules: Vec<ToolModule>) -> Self {
        Self {
            name: name.into(),
            modules,
        }
    }
}

#[async_trait]
impl ToolSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn discover(&self) -> Result<Vec<ToolModule>, ToolError> {
        Ok(self.modules.clone())
    }
}

/// Source reading `<root>/<slug>/info.json` manifests.
///
/// A missing root yields no modules. Sub-directories without a manifest are
/// skipped. Each manifest is read and parsed when the module loads, so a
/// broken manifest only excludes that one tool.
#[derive(Debug, Clone)]
pub struct ManifestDirSource {
    root: PathBuf,
    allow_symlinks: bool,
}

impl ManifestDirSource {
    pub fn new(root: impl Into<PathBuf>, allow_symlinks: bool) -> Self {
        Self {
            root: root.into(),
            allow_symlinks,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ToolSource for ManifestDirSource {
    fn name(&self) -> &str {
        "manifest-dir"
    }

    async fn discover(&self) -> Result<Vec<ToolModule>, ToolError> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Tools directory {} does not exist", self.root.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(ToolError::discovery(format!(
                    "cannot read {}: {}",
                    self.root.display(),
                    e
                )));
            }
        };

        let mut dirs = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    return Err(ToolError::discovery(format!(
                        "cannot list {}: {}",
                        self.root.display(),
                        e
                    )));
                }
            };

            let path = entry.path();
            if is_tool_dir(&entry).await {
                dirs.push(path);
            } else {
                debug!("Skipping {} (no {})", path.display(), MANIFEST_FILE);
            }
        }
        dirs.sort();

        Ok(dirs
            .into_iter()
            .map(|dir| {
                let loader = ManifestLoader {
                    manifest: dir.join(MANIFEST_FILE),
                    root: self.root.clone(),
                    allow_symlinks: self.allow_symlinks,
                };
                ToolModule::new(dir.to_string_lossy().into_owned(), Arc::new(loader))
            })
            .collect())
    }
}

/// Whether `entry` is a directory (or a link to one) holding a manifest.
async fn is_tool_dir(entry: &tokio::fs::DirEntry) -> bool {
    let path = entry.path();
    let is_dir = match entry.file_type().await {
        Ok(kind) if kind.is_symlink() => tokio::fs::metadata(&path)
            .await
            .is_ok_and(|meta| meta.is_dir()),
        Ok(kind) => kind.is_dir(),
        Err(_) => false,
    };

    is_dir
        && tokio::fs::try_exists(path.join(MANIFEST_FILE))
            .await
            .unwrap_or(false)
}

struct ManifestLoader {
    manifest: PathBuf,
    root: PathBuf,
    allow_symlinks: bool,
}

#[async_trait]
impl DescriptorLoader for ManifestLoader {
    async fn load(&self) -> Result<ToolDescriptor, ToolError> {
        let display = self.manifest.display().to_string();

        let path = validate_manifest_path(&self.manifest, &self.root, self.allow_symlinks)
            .map_err(|e| ToolError::module_load(&display, e.to_string()))?;

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ToolError::module_load(&display, e.to_string()))?;

        serde_json::from_str(&raw).map_err(|e| ToolError::module_load(&display, e.to_string()))
    }
}
