use serde::de::DeserializeOwned;

/// Parse a JSON value out of raw model output.
///
/// Two-stage strategy: direct parse of the trimmed text first, then the
/// first balanced `{...}` or `[...]` substring (models like to wrap their
/// JSON in prose or code fences despite instructions).
pub fn from_model_output<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let trimmed = raw.trim();
    let direct_err = match serde_json::from_str(trimmed) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    let mut last_err = direct_err.to_string();
    for candidate in candidates(trimmed) {
        match serde_json::from_str(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last_err = e.to_string(),
        }
    }
    Err(last_err)
}

/// Balanced object/array substrings, ordered by where they start so an
/// array of objects is tried as an array before its first element.
fn candidates(text: &str) -> Vec<&str> {
    let object = extract_balanced(text, '{', '}');
    let array = extract_balanced(text, '[', ']');
    let object_at = text.find('{').unwrap_or(usize::MAX);
    let array_at = text.find('[').unwrap_or(usize::MAX);
    let mut spans = Vec::new();
    if array_at < object_at {
        spans.extend(array);
        spans.extend(object);
    } else {
        spans.extend(object);
        spans.extend(array);
    }
    spans
}

/// First balanced `open`..`close` span, counting depth while skipping
/// string literals (a brace inside a quoted value must not close the span).
fn extract_balanced(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        if ch == '"' {
            in_string = true;
        } else if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(&text[start..start + offset + ch.len_utf8()]);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn direct_parse_wins() {
        let value: Value = from_model_output("  {\"a\": 1}  ").unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn object_recovered_from_surrounding_prose() {
        let raw = "Sure! Here is the idea you asked for:\n{\"appName\": \"Ledger\"}\nHope that helps.";
        let value: Value = from_model_output(raw).unwrap();
        assert_eq!(value, serde_json::json!({"appName": "Ledger"}));
    }

    #[test]
    fn array_recovered_from_code_fence() {
        let raw = "```json\n[{\"id\": \"f1\"}, {\"id\": \"f2\"}]\n```";
        let value: Vec<Value> = from_model_output(raw).unwrap();
        assert_eq!(value.len(), 2);
    }

    #[test]
    fn array_preferred_when_it_opens_first() {
        let raw = "the list: [{\"id\": \"f1\"}]";
        let value: Vec<Value> = from_model_output(raw).unwrap();
        assert_eq!(value[0]["id"], "f1");
    }

    #[test]
    fn braces_inside_strings_do_not_close_the_span() {
        let raw = "answer: {\"note\": \"use {curly} braces\", \"n\": 2} end";
        let value: Value = from_model_output(raw).unwrap();
        assert_eq!(value["note"], "use {curly} braces");
        assert_eq!(value["n"], 2);
    }

    #[test]
    fn escaped_quotes_inside_strings_are_handled() {
        let raw = "{\"note\": \"she said \\\"hi\\\" {\"}";
        let value: Value = from_model_output(raw).unwrap();
        assert_eq!(value["note"], "she said \"hi\" {");
    }

    #[test]
    fn no_json_is_an_error() {
        let result: Result<Value, String> = from_model_output("no structured data here");
        assert!(result.is_err());
    }
}
