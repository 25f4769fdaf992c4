//! The fixed prompt contract: system instruction, user prompt template, and
//! the structured-output schema the model must satisfy.

use serde_json::{json, Value};

/// Frames the assistant as an Arabic-literature editor. Sent with every
/// request.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert Arabic linguist and novelist. \
    Your task is to help users improve their Arabic writing for literary purposes. \
    Respond ONLY with the requested JSON object.";

/// Build the deterministic instruction prompt embedding the user's raw text.
pub fn build_user_prompt(text: &str) -> String {
    format!(
        "رجاءً قم بتحليل النص العربي التالي وتقديم ثلاث نسخ منه:\n\
         1. نسخة مصححة: صحح الأخطاء الإملائية والنحوية فقط.\n\
         2. نسخة محسنة: أعد صياغة النص ليكون أكثر سلاسة وطبيعية.\n\
         3. نسخة أدبية: حول النص إلى أسلوب أدبي غني ومناسب للروايات.\n\n\
         النص هو: \"{text}\""
    )
}

/// The response schema: a JSON object with exactly three required string
/// properties, each documented so the model keeps the variants distinct.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "corrected": {
                "type": "STRING",
                "description": "The text with only grammar and spelling mistakes corrected. \
                    The original meaning and style should be preserved as much as possible."
            },
            "improved": {
                "type": "STRING",
                "description": "A version of the text with improved phrasing for better fluency \
                    and naturalness, suitable for general high-quality Arabic writing."
            },
            "literary": {
                "type": "STRING",
                "description": "An enhanced, literary version of the text, using richer vocabulary, \
                    evocative imagery, and a style suitable for a novel."
            }
        },
        "required": ["corrected", "improved", "literary"]
    })
}
