//! # Relevance Filter
//!
//! Stateless admission check run before a candidate enters working memory.
//!
//! A candidate is rejected when any disqualifying keyword occurs as a
//! case-sensitive substring of its label or of any text metadata value.
//! Non-text metadata values are never inspected.

use crate::Metadata;
use crate::primitives::DEFAULT_IRRELEVANT_KEYWORDS;

/// Keyword-based admission predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceFilter {
    keywords: Vec<String>,
}

impl RelevanceFilter {
    /// Create a filter with a custom keyword list.
    ///
    /// Empty keywords are dropped; an empty string would match everything.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(Into::into)
                .filter(|k: &String| !k.is_empty())
                .collect(),
        }
    }

    /// The active keyword list.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Decide whether `(label, metadata)` is salient enough to store.
    #[must_use]
    pub fn is_relevant(&self, label: &str, metadata: &Metadata) -> bool {
        if let Some(keyword) = self.first_match(label) {
            tracing::debug!(keyword, "label rejected by relevance filter");
            return false;
        }

        for (key, value) in metadata {
            let Some(text) = value.as_text() else {
                continue;
            };
            if let Some(keyword) = self.first_match(text) {
                tracing::debug!(keyword, key = %key, "metadata rejected by relevance filter");
                return false;
            }
        }

        true
    }

    fn first_match(&self, text: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| text.contains(keyword))
    }
}

impl Default for RelevanceFilter {
    fn default() -> Self {
        Self::new(DEFAULT_IRRELEVANT_KEYWORDS.iter().copied())
    }
}

/// Check a candidate against the default keyword policy.
#[must_use]
pub fn is_relevant(label: &str, metadata: &Metadata) -> bool {
    RelevanceFilter::default().is_relevant(label, metadata)
}
