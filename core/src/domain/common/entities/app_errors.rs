use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("no meals provided")]
    EmptyInput,

    #[error("Gemini API key not found in configuration")]
    MissingCredential,

    #[error("Gemini content generation failed: {0}")]
    UpstreamError(String),

    #[error("no response generated from Gemini")]
    EmptyResponse,

    #[error("failed to parse JSON response: {reason} (received: {text})")]
    MalformedUpstreamJSON { reason: String, text: String },

    #[error("unexpected response format from Gemini: {0}")]
    UnexpectedResponseShape(String),
}
