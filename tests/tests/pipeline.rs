use application::rag_service::{format_matches, RagService};
use application::retriever::{Retriever, DEFAULT_TOP_K};
use async_trait::async_trait;
use domain::models::{ChatMessage, ScoredVector};
use domain::ports::{ChatModel, EmbeddingProvider, VectorIndex};
use shared::types::Result;
use std::sync::Arc;

struct FixedEmbedder;

#[async_trait]
impl EmbeddingProvider for FixedEmbedder {
    async fn embed_query(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(vec![0.4; 1536])
    }
}

struct HeartFailureIndex;

#[async_trait]
impl VectorIndex for HeartFailureIndex {
    async fn query(&self, _vector: &[f32], top_k: usize) -> Result<Vec<ScoredVector>> {
        let passages = [
            "Heart failure with reduced ejection fraction (HFrEF) occurs when the left ventricle cannot contract normally.",
            "Heart failure with preserved ejection fraction (HFpEF) occurs when the ventricle stiffens and fills poorly.",
            "Right-sided heart failure causes fluid to back up into the abdomen and legs.",
            "Left-sided heart failure is the most common form and often leads to right-sided failure.",
            "Congestive heart failure describes the stage at which fluid builds up around the heart.",
        ];
        Ok(passages
            .iter()
            .enumerate()
            .take(top_k)
            .map(|(i, text)| ScoredVector {
                id: format!("hf-{i}"),
                score: 0.95 - i as f32 * 0.03,
                text: Some(text.to_string()),
            })
            .collect())
    }
}

/// Returns a canned answer and records the prompt it was asked with.
struct RecordingChat {
    seen: std::sync::Mutex<Vec<ChatMessage>>,
}

#[async_trait]
impl ChatModel for RecordingChat {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        *self.seen.lock().unwrap() = messages.to_vec();
        Ok("There are several types: HFrEF, HFpEF, left-sided, right-sided, and congestive heart failure.".to_string())
    }
}

#[tokio::test]
async fn end_to_end_heart_failure_question() {
    let question = "What are the different types of heart failure?";

    let embedder = Arc::new(FixedEmbedder);
    let index = Arc::new(HeartFailureIndex);
    let chat = Arc::new(RecordingChat {
        seen: std::sync::Mutex::new(Vec::new()),
    });

    let retriever = Retriever::new(embedder.clone(), index.clone());
    let matches = retriever.retrieve(question, DEFAULT_TOP_K).await.unwrap();
    assert_eq!(matches.len(), 5);

    let docs = format_matches(&matches);
    assert_eq!(docs.len(), 5);
    assert_eq!(docs[0].text, matches[0].text);

    let retriever = Retriever::new(embedder, index);
    let service = RagService::new(retriever, chat.clone(), DEFAULT_TOP_K);
    let answer = service.answer(question).await.unwrap();

    // The provider's text comes back unmodified.
    assert_eq!(
        answer,
        "There are several types: HFrEF, HFpEF, left-sided, right-sided, and congestive heart failure."
    );

    // The chat model saw a two-turn prompt with every passage and the
    // literal question in the human turn.
    let seen = chat.seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].role, "system");
    assert!(seen[0].content.contains("helpful assistant"));
    assert_eq!(seen[1].role, "user");
    assert!(seen[1].content.contains("HFrEF"));
    assert!(seen[1].content.contains("Congestive heart failure"));
    assert!(seen[1]
        .content
        .contains("Question: What are the different types of heart failure?"));
}

#[tokio::test]
async fn repeated_questions_are_independent_and_identical() {
    let chat = Arc::new(RecordingChat {
        seen: std::sync::Mutex::new(Vec::new()),
    });
    let retriever = Retriever::new(Arc::new(FixedEmbedder), Arc::new(HeartFailureIndex));
    let service = RagService::new(retriever, chat, DEFAULT_TOP_K);

    let first = service.answer("What is heart failure?").await.unwrap();
    let second = service.answer("What is heart failure?").await.unwrap();
    assert_eq!(first, second);
}
