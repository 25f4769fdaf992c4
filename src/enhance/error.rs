use thiserror::Error;

/// Failure of one enhancement call.
///
/// The variants carry the diagnostic cause for the log; the UI only ever
/// shows [`EnhanceError::user_message`].
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// The HTTP request itself failed (connection, TLS, timeout).
    #[error("request to the Gemini API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Gemini API returned status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The model's text output was not valid JSON.
    #[error("model output was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON was valid but did not contain the three required string
    /// fields.
    #[error("model output has the wrong shape: {0}")]
    Shape(String),
}

impl EnhanceError {
    /// The single generic message surfaced to the user. Root causes stay in
    /// the log.
    pub fn user_message(&self) -> &'static str {
        "تعذّر تحسين النص. تحقّق من النص أو مفتاح الواجهة وحاول مجددًا."
    }
}
