pub mod config;
pub mod openai;
pub mod pinecone;
