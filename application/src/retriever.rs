use domain::error::PipelineError;
use domain::models::Match;
use domain::ports::{EmbeddingProvider, VectorIndex};
use shared::types::Result;
use std::sync::Arc;

pub const DEFAULT_TOP_K: usize = 5;

/// Embeds a query and looks up its nearest neighbors in the vector
/// index. Ordering and score semantics come from the index; nothing is
/// re-sorted, deduplicated, or cached here.
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
}

impl Retriever {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, index: Arc<dyn VectorIndex>) -> Self {
        Self { embedder, index }
    }

    pub async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<Match>> {
        let vector = self.embedder.embed_query(query).await?;
        let neighbors = self.index.query(&vector, top_k).await?;
        neighbors
            .into_iter()
            .map(|neighbor| match neighbor.text {
                Some(text) => Ok(Match {
                    text,
                    score: neighbor.score,
                }),
                None => Err(PipelineError::MissingText { id: neighbor.id }.into()),
            })
            .collect()
    }
}
