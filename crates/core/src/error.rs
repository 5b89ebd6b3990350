#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown {kind} '{id}'")]
    UnknownId { kind: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
