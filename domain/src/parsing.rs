//! Structured-output recovery from free-form oracle text.
//!
//! Oracles asked for JSON sometimes wrap it in prose or markdown fences.
//! [`parse_json_object`] finds the first balanced JSON object and parses it.
//! Anything else is "no usable output", never an error.

use serde_json::Value;

/// Extract the first JSON object embedded in `text`.
///
/// # Supported Formats
///
/// 1. Bare JSON: `{"claims": ["a"]}`
/// 2. Fenced: a ```` ```json ```` block containing the object
/// 3. Prose around the object: `Here you go: {"claims": []} Hope it helps`
///
/// Returns `None` for empty text, text without an object, or malformed JSON.
///
/// # Examples
///
/// ```
/// use truthguard_domain::parsing::parse_json_object;
///
/// let value = parse_json_object(r#"Sure: {"claims": ["The sky is blue."]}"#).unwrap();
/// assert_eq!(value["claims"][0], "The sky is blue.");
/// assert!(parse_json_object("no json here").is_none());
/// ```
pub fn parse_json_object(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    let mut search_from = 0;
    while let Some(offset) = trimmed[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(end) = balanced_object_end(&trimmed[start..])
            && let Ok(value @ Value::Object(_)) =
                serde_json::from_str::<Value>(&trimmed[start..start + end])
        {
            return Some(value);
        }
        search_from = start + 1;
    }

    None
}

/// Byte length of the balanced `{...}` prefix of `s`, honoring JSON strings.
fn balanced_object_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}
