//! JSON Schemas describing each oracle output shape.
//!
//! Passed to the reasoning oracle alongside the prompt so that providers
//! supporting structured output can enforce them.

use serde_json::{Value, json};

/// Output schemas for the oracle tasks
pub struct OutputSchema;

impl OutputSchema {
    /// `{ claims: string[] }`
    pub fn claims() -> Value {
        json!({
            "type": "object",
            "properties": {
                "claims": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Distinct, self-contained factual claims in order of appearance."
                }
            },
            "required": ["claims"]
        })
    }

    /// Verdict minus `claim`; every field optional
    pub fn assessment() -> Value {
        json!({
            "type": "object",
            "properties": Self::assessment_properties(),
        })
    }

    /// `{ summary, keyClaims, factChecks }`
    pub fn article_report() -> Value {
        let mut fact_check = Self::assessment_properties();
        if let Value::Object(map) = &mut fact_check {
            map.insert(
                "claim".to_string(),
                json!({ "type": "string", "description": "A claim extracted from the article." }),
            );
        }

        json!({
            "type": "object",
            "properties": {
                "summary": { "type": "string", "description": "A summary of the article." },
                "keyClaims": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "The key claims extracted from the article."
                },
                "factChecks": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": fact_check,
                        "required": ["claim"]
                    }
                }
            },
            "required": ["summary", "keyClaims", "factChecks"]
        })
    }

    fn assessment_properties() -> Value {
        json!({
            "isTrue": {
                "type": "boolean",
                "description": "Whether the claim is true. Omitted if uncertain or not applicable."
            },
            "confidenceScore": {
                "type": "number",
                "minimum": 0,
                "maximum": 1,
                "description": "Confidence (0-1) in the assessment."
            },
            "source": {
                "type": "string",
                "description": "Reasoning basis such as \"General knowledge\". Never an invented URL."
            },
            "reason": {
                "type": "string",
                "description": "A concise explanation for the assessment."
            }
        })
    }
}
