use thiserror::Error;

/// Failures the pipeline itself can diagnose, as opposed to opaque
/// upstream provider errors which are propagated as-is.
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error("missing required environment variable `{0}`")]
    MissingCredential(&'static str),

    #[error("vector search returned no matches; refusing to answer without context")]
    EmptyRetrieval,

    #[error("match `{id}` has no `text` metadata field")]
    MissingText { id: String },

    #[error("prompt payload keys {provided:?} do not match template slots {expected:?}")]
    SlotMismatch {
        expected: Vec<String>,
        provided: Vec<String>,
    },
}
