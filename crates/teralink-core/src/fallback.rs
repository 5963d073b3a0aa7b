use serde_json::Value;

/// An ordered list of candidate upstream fields that ends in a default.
///
/// Candidates are evaluated first to last and the first *present* one wins.
/// A candidate is present when it is a non-empty string or any number; a
/// number keeps its JSON text, so an upstream `0` stays `"0"`.
///
/// ```
/// use serde_json::json;
/// use teralink_core::FallbackChain;
///
/// let url3 = json!("");
/// let url1 = json!("http://t1");
/// let thumbnail = FallbackChain::new()
///     .or(Some(&url3))
///     .or(Some(&url1))
///     .otherwise("");
/// assert_eq!(thumbnail, "http://t1");
/// ```
#[derive(Debug, Default)]
pub struct FallbackChain {
    resolved: Option<String>,
}

impl FallbackChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate to the end of the chain.
    pub fn or(mut self, candidate: Option<&Value>) -> Self {
        if self.resolved.is_none() {
            self.resolved = candidate.and_then(present_text);
        }
        self
    }

    /// Adds a candidate that is computed only if nothing earlier was present.
    pub fn or_else(mut self, candidate: impl FnOnce() -> String) -> Self {
        if self.resolved.is_none() {
            let value = candidate();
            if !value.is_empty() {
                self.resolved = Some(value);
            }
        }
        self
    }

    /// Finishes the chain with a default constant.
    pub fn otherwise(self, default: &str) -> String {
        self.resolved.unwrap_or_else(|| default.to_string())
    }
}

fn present_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
