//! Chunk Loading
//!
//! Abstraction over how the code of a lazily bound view is fetched.

mod mock;

pub use mock::MockChunkLoader;

use async_trait::async_trait;

use crate::error::Result;

/// Fetched code of a lazily bound view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// Chunk identifier
    pub id: String,

    /// Raw chunk contents
    pub bytes: Vec<u8>,
}

impl Chunk {
    pub fn new(id: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Chunk loader trait (Strategy pattern)
///
/// Implement this for each place chunks come from: the network, an
/// embedded bundle, a test double.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ChunkLoader: Send + Sync {
    /// Fetch a chunk by id
    async fn fetch(&self, chunk: &str) -> Result<Chunk>;

    /// Loader name
    fn name(&self) -> &str;
}
