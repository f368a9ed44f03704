//! Extension-based loader lookup.

use crate::{CflLoader, LoadError, LoadResult, NpyLoader};
use nx_core::ArrayData;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Reads one file format into an [`ArrayData`].
pub trait ArrayLoader: Send + Sync {
    /// Human-readable format name.
    fn name(&self) -> &'static str;

    /// Lowercase extensions without the leading dot, e.g. `"nii.gz"`.
    fn extensions(&self) -> &'static [&'static str];

    fn load(&self, path: &Path) -> LoadResult<ArrayData>;
}

/// Extension → loader table.
#[derive(Clone, Default)]
pub struct LoaderRegistry {
    loaders: BTreeMap<String, Arc<dyn ArrayLoader>>,
}

impl LoaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the CFL and NumPy loaders.
    pub fn with_builtin_loaders() -> Self {
        let mut registry = Self::new();
        registry.register(CflLoader);
        registry.register(NpyLoader);
        registry
    }

    /// Register under every extension the loader declares; later
    /// registrations win.
    pub fn register(&mut self, loader: impl ArrayLoader + 'static) {
        let loader: Arc<dyn ArrayLoader> = Arc::new(loader);
        for ext in loader.extensions() {
            if let Some(previous) = self
                .loaders
                .insert(ext.to_ascii_lowercase(), Arc::clone(&loader))
            {
                tracing::debug!(ext, previous = previous.name(), "loader replaced");
            }
        }
    }

    /// Registered extensions in sorted order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.loaders.keys().map(String::as_str)
    }

    /// Loader for `path`, trying compound extensions first.
    pub fn loader_for(&self, path: &Path) -> LoadResult<&dyn ArrayLoader> {
        candidate_extensions(path)
            .iter()
            .find_map(|ext| self.loaders.get(ext))
            .map(|loader| loader.as_ref())
            .ok_or_else(|| LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
    }

    pub fn load(&self, path: &Path) -> LoadResult<ArrayData> {
        let loader = self.loader_for(path)?;
        let array = loader.load(path)?;
        tracing::info!(
            path = %path.display(),
            format = loader.name(),
            shape = ?array.shape(),
            kind = %array.kind(),
            "loaded array"
        );
        Ok(array)
    }
}

/// `foo.nii.gz` → `["nii.gz", "gz"]`, lowercased.
fn candidate_extensions(path: &Path) -> Vec<String> {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return Vec::new();
    };
    let name = name.to_ascii_lowercase();
    let parts: Vec<&str> = name.split('.').collect();
    (1..parts.len())
        .map(|start| parts[start..].join("."))
        .filter(|ext| !ext.is_empty())
        .collect()
}
