use domain::error::PipelineError;
use dotenvy::dotenv;
use shared::types::Result;
use std::env;

#[derive(Debug)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub pinecone_api_key: String,
    pub pinecone_index_host: String,
    pub embedding_model: String,
    pub chat_model: String,
    pub top_k: usize,
}

impl Config {
    /// Loads configuration from `.env` and the process environment.
    /// Missing credentials fail here, before any provider is contacted.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Ok(Self {
            openai_api_key: required("OPENAI_API_KEY")?,
            pinecone_api_key: required("PINECONE_API_KEY")?,
            pinecone_index_host: required("PINECONE_INDEX_HOST")?,
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            embedding_model: env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| "text-embedding-ada-002".to_string()),
            chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            top_k: env::var("RAG_TOP_K")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        })
    }
}

fn required(name: &'static str) -> Result<String> {
    env::var(name).map_err(|_| PipelineError::MissingCredential(name).into())
}
