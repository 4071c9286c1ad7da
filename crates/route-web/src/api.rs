//! Chunk Fetching
//!
//! Loads the code chunk of a lazily bound view from the server the app is
//! deployed on.

use async_trait::async_trait;
use reqwest::StatusCode;
use route_core::{Chunk, ChunkLoader, Result, RouteError};

/// Leading bytes of every WebAssembly module
const WASM_MAGIC: &[u8; 4] = b"\0asm";

/// Fetches chunks from `{origin}{base}/chunks/{id}.wasm`
#[derive(Clone, Debug)]
pub struct HttpChunkLoader {
    root: String,
}

impl HttpChunkLoader {
    /// Loader reading chunks under `root` (no trailing slash)
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// Loader for the current page's origin and the given base path
    pub fn from_window(base: &str) -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:3000".into());

        Self::new(format!("{origin}{base}/chunks"))
    }

    pub fn chunk_url(&self, chunk: &str) -> String {
        format!("{}/{chunk}.wasm", self.root)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ChunkLoader for HttpChunkLoader {
    async fn fetch(&self, chunk: &str) -> Result<Chunk> {
        let response = reqwest::Client::new()
            .get(self.chunk_url(chunk))
            .send()
            .await
            .map_err(|e| fetch_error(chunk, e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| fetch_error(chunk, e.to_string()))?;

        chunk_from_response(chunk, status, &bytes)
    }

    fn name(&self) -> &str {
        "HttpLoader"
    }
}

fn fetch_error(chunk: &str, reason: String) -> RouteError {
    RouteError::Fetch {
        chunk: chunk.to_string(),
        reason,
    }
}

/// Accept a response only if it succeeded and carries a wasm module
///
/// A host that answers unknown paths with its HTML shell would otherwise
/// hand back a page instead of the chunk.
fn chunk_from_response(chunk: &str, status: StatusCode, body: &[u8]) -> Result<Chunk> {
    if !status.is_success() {
        return Err(fetch_error(chunk, format!("HTTP {status}")));
    }
    if !body.starts_with(WASM_MAGIC) {
        return Err(fetch_error(chunk, "response is not a wasm module".into()));
    }

    Ok(Chunk::new(chunk, body.to_vec()))
}
