//! Lazy Components
//!
//! Memoized async factory for a view's code chunk: the first successful
//! fetch is cached, failures are not, and concurrent callers share one
//! in-flight fetch.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::error::{Result, RouteError};
use crate::loader::{Chunk, ChunkLoader};

/// Deferred binding to a code chunk
#[derive(Debug)]
pub struct LazyComponent {
    chunk: String,
    cell: OnceCell<Arc<Chunk>>,
}

impl LazyComponent {
    pub fn new(chunk: impl Into<String>) -> Self {
        Self {
            chunk: chunk.into(),
            cell: OnceCell::new(),
        }
    }

    /// Chunk this component loads
    pub fn chunk_id(&self) -> &str {
        &self.chunk
    }

    /// Whether the chunk has been fetched
    pub fn is_resident(&self) -> bool {
        self.cell.initialized()
    }

    /// Cached chunk, if resident
    pub fn get(&self) -> Option<Arc<Chunk>> {
        self.cell.get().cloned()
    }

    /// Return the cached chunk or fetch it through `loader`
    pub async fn load(&self, loader: &dyn ChunkLoader) -> Result<Arc<Chunk>> {
        let chunk = self
            .cell
            .get_or_try_init(|| async {
                tracing::debug!(chunk = %self.chunk, loader = loader.name(), "Fetching chunk");
                let chunk = loader.fetch(&self.chunk).await?;
                tracing::debug!(chunk = %self.chunk, bytes = chunk.len(), "Chunk resident");
                Ok::<_, RouteError>(Arc::new(chunk))
            })
            .await?;

        Ok(Arc::clone(chunk))
    }
}
