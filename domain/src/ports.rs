use crate::models::{ChatMessage, ScoredVector};
use async_trait::async_trait;
use shared::types::Result;

/// Converts a free-text query into a fixed-dimension vector. The
/// dimensionality is owned by the provider and never checked locally.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>>;
}

/// Nearest-neighbor search over stored embeddings. Results come back in
/// descending-score order; ordering is the index's responsibility.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<ScoredVector>>;
}

/// Chat completion over a rendered prompt. Returns the provider's raw
/// text response.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}
