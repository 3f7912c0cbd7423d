use serde_json::{json, Value};

/// The instruction sent to the model for one exam.
pub fn build_prompt(topic: &str, count: usize) -> String {
    format!(
        "Generate an exam with {} math questions about \"{}\". \
         The questions should be appropriate for a high school level. \
         Provide a clear question and a concise answer for each.",
        count, topic
    )
}

/// Structured-output schema: an array of `{question, answer}` objects.
pub fn exam_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "question": {
                    "type": "STRING",
                    "description": "The math question text."
                },
                "answer": {
                    "type": "STRING",
                    "description": "The correct answer to the math question."
                }
            },
            "required": ["question", "answer"]
        }
    })
}
