use domain::error::PipelineError;
use domain::models::ChatMessage;
use shared::types::Result;

const SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant. Use the following information to answer the question.";
const HUMAN_TEMPLATE: &str = "Context:\n{context}\n\nQuestion: {question}";

/// A two-turn prompt: a fixed system instruction and a human turn with
/// named `{slot}` placeholders. The render payload must supply exactly
/// the declared slots; anything else is a contract violation, not a
/// silently-empty prompt.
pub struct PromptTemplate {
    system: String,
    human: String,
    slots: Vec<String>,
}

impl PromptTemplate {
    pub fn new(system: impl Into<String>, human: impl Into<String>) -> Self {
        let human = human.into();
        let slots = scan_slots(&human);
        Self {
            system: system.into(),
            human,
            slots,
        }
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn render(&self, values: &[(&str, &str)]) -> Result<Vec<ChatMessage>> {
        let mut provided: Vec<String> = values.iter().map(|(k, _)| k.to_string()).collect();
        provided.sort();
        let mut expected = self.slots.clone();
        expected.sort();
        if provided != expected {
            return Err(PipelineError::SlotMismatch { expected, provided }.into());
        }

        let mut human = self.human.clone();
        for (key, value) in values {
            human = human.replace(&format!("{{{key}}}"), value);
        }
        Ok(vec![
            ChatMessage::system(&self.system),
            ChatMessage::user(human),
        ])
    }
}

/// The fixed question-answering prompt used by the pipeline.
pub fn qa_template() -> PromptTemplate {
    PromptTemplate::new(SYSTEM_INSTRUCTION, HUMAN_TEMPLATE)
}

fn scan_slots(template: &str) -> Vec<String> {
    let mut slots: Vec<String> = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        rest = &rest[open + 1..];
        let Some(close) = rest.find('}') else {
            break;
        };
        let name = &rest[..close];
        if !name.is_empty()
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !slots.iter().any(|s| s == name)
        {
            slots.push(name.to_string());
        }
        rest = &rest[close + 1..];
    }
    slots
}
