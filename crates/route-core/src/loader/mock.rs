//! Mock Chunk Loader
//!
//! For testing and demo purposes. Serves a small placeholder for any chunk
//! id, counts fetches, and can be told to fail specific chunks.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::{Chunk, ChunkLoader};
use crate::error::{Result, RouteError};

/// In-memory chunk loader
#[derive(Debug, Default)]
pub struct MockChunkLoader {
    failing: RwLock<HashSet<String>>,
    fetches: RwLock<HashMap<String, usize>>,
}

impl MockChunkLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every fetch of `chunk` fail until `recover` is called
    pub fn fail(&self, chunk: &str) {
        self.failing
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(chunk.to_string());
    }

    pub fn recover(&self, chunk: &str) {
        self.failing
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(chunk);
    }

    /// Fetch attempts for `chunk`, failed ones included
    pub fn fetch_count(&self, chunk: &str) -> usize {
        self.fetches
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(chunk)
            .copied()
            .unwrap_or(0)
    }

    /// Fetch attempts across all chunks
    pub fn total_fetches(&self) -> usize {
        self.fetches
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .sum()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ChunkLoader for MockChunkLoader {
    async fn fetch(&self, chunk: &str) -> Result<Chunk> {
        *self
            .fetches
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(chunk.to_string())
            .or_insert(0) += 1;

        let failing = self
            .failing
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(chunk);
        if failing {
            return Err(RouteError::Fetch {
                chunk: chunk.to_string(),
                reason: "simulated network error".into(),
            });
        }

        Ok(Chunk::new(chunk, format!("/* {chunk} */").into_bytes()))
    }

    fn name(&self) -> &str {
        "MockLoader"
    }
}
