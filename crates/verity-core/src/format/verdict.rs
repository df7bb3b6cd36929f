//! Verdict classification for fact-check blocks.

use crate::config::verdict_keywords;

/// Sentiment category of a fact-check verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictClass {
    True,
    False,
    Misleading,
    Uncertain,
}

impl VerdictClass {
    /// Classify a verdict body by keyword search.
    ///
    /// Categories are checked in order (true, false, misleading) and the
    /// first one with a matching keyword wins. A body matching nothing is
    /// uncertain.
    pub fn classify(body: &str) -> Self {
        let lower = body.to_lowercase();
        let tables = [
            (Self::True, verdict_keywords::TRUE),
            (Self::False, verdict_keywords::FALSE),
            (Self::Misleading, verdict_keywords::MISLEADING),
        ];

        tables
            .into_iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map_or(Self::Uncertain, |(class, _)| class)
    }

    /// CSS class emitted on the verdict body span.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Misleading => "misleading",
            Self::Uncertain => "uncertain",
        }
    }
}
