use crate::prompt::{qa_template, PromptTemplate};
use crate::retriever::Retriever;
use domain::error::PipelineError;
use domain::models::{Document, Match};
use domain::ports::ChatModel;
use shared::types::Result;
use std::sync::Arc;

/// The orchestrator: retrieve, validate, format, generate, return.
/// Stateless across calls; concurrent questions each run their own
/// independent chain.
pub struct RagService {
    retriever: Retriever,
    chat: Arc<dyn ChatModel>,
    template: PromptTemplate,
    top_k: usize,
}

impl RagService {
    pub fn new(retriever: Retriever, chat: Arc<dyn ChatModel>, top_k: usize) -> Self {
        Self {
            retriever,
            chat,
            template: qa_template(),
            top_k,
        }
    }

    pub async fn answer(&self, question: &str) -> Result<String> {
        let matches = self.retriever.retrieve(question, self.top_k).await?;
        if matches.is_empty() {
            return Err(PipelineError::EmptyRetrieval.into());
        }
        let docs = format_matches(&matches);
        self.generate(question, &docs).await
    }

    pub async fn generate(&self, question: &str, docs: &[Document]) -> Result<String> {
        let context = docs
            .iter()
            .map(|d| d.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        let messages = self
            .template
            .render(&[("context", context.as_str()), ("question", question)])?;
        self.chat.complete(&messages).await
    }
}

/// Projects matches down to their text, dropping scores. Order and
/// cardinality are preserved.
pub fn format_matches(matches: &[Match]) -> Vec<Document> {
    matches
        .iter()
        .map(|m| Document {
            text: m.text.clone(),
        })
        .collect()
}
