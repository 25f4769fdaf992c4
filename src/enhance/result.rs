use serde::Deserialize;

use crate::enhance::error::EnhanceError;

/// The three rewritten variants returned for one submission.
///
/// All fields are required and independently displayable. A fresh value is
/// produced per submission and replaced (or cleared) when the next one
/// starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnhancementResult {
    /// Grammar and spelling fixed, meaning and style untouched.
    pub corrected: String,
    /// Rephrased for fluency and naturalness.
    pub improved: String,
    /// Rewritten in a rich literary register.
    pub literary: String,
}

impl EnhancementResult {
    /// Parse the raw text a model returned into a shape-checked result.
    ///
    /// Two failure modes: the text is not JSON at all
    /// ([`EnhanceError::Parse`]), or it is JSON that is missing one of the
    /// three fields or carries a non-string value ([`EnhanceError::Shape`]).
    pub fn from_model_json(raw: &str) -> Result<Self, EnhanceError> {
        let value: serde_json::Value = serde_json::from_str(raw.trim())?;
        serde_json::from_value(value).map_err(|err| EnhanceError::Shape(err.to_string()))
    }
}
