use indexmap::IndexSet;

/// Ordered, immutable enumeration of origins granted cross-origin access.
///
/// Membership is an exact, case-sensitive string comparison. There is no
/// wildcard, suffix, or scheme normalization: `http://localhost:3000` and
/// `HTTP://LOCALHOST:3000` are unrelated entries, and a trailing slash is
/// never stripped. Duplicate entries collapse to their first occurrence and
/// iteration preserves insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowList {
    origins: IndexSet<String>,
}

impl AllowList {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact membership test against the listed origins.
    pub fn contains(&self, origin: &str) -> bool {
        self.origins.contains(origin)
    }

    /// Consult the list for one request origin.
    ///
    /// Total and infallible: an absent origin (same-origin or non-browser
    /// traffic) and an unlisted origin both come back denied.
    pub fn decide(&self, origin: Option<&str>) -> OriginDecision {
        match origin {
            Some(value) if self.contains(value) => OriginDecision::allowed(),
            _ => OriginDecision::denied(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Decision record produced by [`AllowList::decide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OriginDecision {
    allow: bool,
}

impl OriginDecision {
    pub fn allowed() -> Self {
        Self { allow: true }
    }

    pub fn denied() -> Self {
        Self { allow: false }
    }

    pub fn is_allowed(self) -> bool {
        self.allow
    }

    pub fn is_denied(self) -> bool {
        !self.allow
    }
}

#[cfg(test)]
#[path = "allow_list_test.rs"]
mod allow_list_test;
