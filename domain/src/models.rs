use serde::{Deserialize, Serialize};

/// Raw nearest neighbor as returned by the vector index. The `text`
/// metadata field may be absent; validation happens in the retriever.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredVector {
    pub id: String,
    pub score: f32,
    pub text: Option<String>,
}

/// A validated retrieval result: passage text plus the index's similarity
/// score, higher is better.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub text: String,
    pub score: f32,
}

/// Text-only projection of a [`Match`], the unit fed into the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub text: String,
}

/// One turn of a chat prompt. Serializes to the `{role, content}` shape
/// the chat completion API expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}
