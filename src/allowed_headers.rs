use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// Reflect the preflight's `Access-Control-Request-Headers` value back,
    /// adding a matching `Vary` entry.
    #[default]
    MirrorRequest,
    /// Emit a fixed comma-separated list.
    List(Vec<String>),
}

impl AllowedHeaders {
    /// Build an explicit list, trimming whitespace and deduplicating names
    /// case-insensitively.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            let key = trimmed.to_ascii_lowercase();
            if seen.insert(key) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn mirror_request() -> Self {
        Self::MirrorRequest
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
