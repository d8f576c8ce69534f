use application::rag_service::RagService;
use application::retriever::Retriever;
use clap::Parser;
use colored::Colorize;
use infrastructure::config::Config;
use infrastructure::openai::OpenAiClient;
use infrastructure::pinecone::PineconeIndex;
use shared::telemetry::Telemetry;
use shared::types::Result;
use std::sync::Arc;

const EXAMPLE_QUESTION: &str = "What is Task Decomposition?";

#[derive(Parser)]
#[command(name = "genqa")]
#[command(about = "Answer a question over an indexed document set with retrieval-augmented generation")]
pub struct Cli {
    /// Question to answer; defaults to a built-in example
    pub question: Option<String>,

    /// Number of nearest neighbors to retrieve (overrides RAG_TOP_K)
    #[arg(long)]
    pub top_k: Option<usize>,
}

pub struct CliApp;

impl CliApp {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, cli: Cli) -> Result<()> {
        let config = Config::load()?;
        let question = cli
            .question
            .unwrap_or_else(|| EXAMPLE_QUESTION.to_string());
        let top_k = cli.top_k.unwrap_or(config.top_k);

        let openai = Arc::new(OpenAiClient::new(
            config.openai_base_url,
            config.openai_api_key,
            config.embedding_model,
            config.chat_model,
        ));
        let index = Arc::new(PineconeIndex::new(
            config.pinecone_index_host,
            config.pinecone_api_key,
        ));

        let retriever = Retriever::new(openai.clone(), index);
        let service = RagService::new(retriever, openai, top_k);

        eprintln!("{} {}", "Question:".green(), question);
        let telemetry = Telemetry::new();
        let answer = service.answer(&question).await?;
        eprintln!(
            "{}",
            format!("Answered in {:.1}s", telemetry.elapsed().as_secs_f64()).blue()
        );
        println!("{answer}");
        Ok(())
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
