//! Classifies shortener input as a URL or an n8n workflow.

use serde::{Deserialize, Serialize, de::IgnoredAny};
use url::Url;

/// What a shortlink serves once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Permanent redirect to an absolute URL.
    Url,
    /// Raw JSON document served as-is.
    Workflow,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Url => "url",
            ContentKind::Workflow => "workflow",
        }
    }
}

/// Returns `Url` for anything that parses as an absolute URL, `Workflow` for
/// anything else that parses as JSON, and `None` otherwise.
pub fn classify(content: &str) -> Option<ContentKind> {
    if Url::parse(content).is_ok() {
        return Some(ContentKind::Url);
    }
    if is_json(content) {
        return Some(ContentKind::Workflow);
    }
    None
}

/// Checks JSON syntax at any nesting depth without building a document.
fn is_json(content: &str) -> bool {
    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();
    if IgnoredAny::deserialize(&mut deserializer).is_err() || deserializer.end().is_err() {
        return false;
    }
    numbers_are_finite(content)
}

/// Number literals outside strings must fit an `f64`; the backend refuses
/// documents like `1e400`. Expects syntactically valid JSON.
fn numbers_are_finite(json: &str) -> bool {
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = json.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '-' | '0'..='9' => {
                let mut end = start + ch.len_utf8();
                while let Some(&(index, next)) = chars.peek() {
                    if !matches!(next, '0'..='9' | '.' | 'e' | 'E' | '+' | '-') {
                        break;
                    }
                    end = index + next.len_utf8();
                    chars.next();
                }
                if !json[start..end].parse::<f64>().is_ok_and(f64::is_finite) {
                    return false;
                }
            }
            _ => {}
        }
    }
    true
}
