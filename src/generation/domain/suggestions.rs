//! Suggestion lists, reply parsing, and the deterministic fallback.

use serde::Serialize;

/// Upper bound on titles returned for one topic.
pub const MAX_SUGGESTIONS: usize = 5;

/// How a suggestion list was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationOutcome {
    /// Parsed from the text generator's reply.
    AiSuccess,
    /// Substituted from the fixed templates.
    Fallback,
}

/// Ephemeral list of task titles suggested for a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedTaskSuggestions {
    #[serde(rename = "tasks")]
    titles: Vec<String>,
    topic: String,
    #[serde(skip)]
    outcome: GenerationOutcome,
}

impl GeneratedTaskSuggestions {
    /// Wraps titles parsed from a generator reply.
    #[must_use]
    pub const fn generated(topic: String, titles: Vec<String>) -> Self {
        Self {
            titles,
            topic,
            outcome: GenerationOutcome::AiSuccess,
        }
    }

    /// Builds the fallback list for `topic`.
    #[must_use]
    pub fn fallback(topic: &str) -> Self {
        Self {
            titles: fallback_suggestions(topic),
            topic: topic.to_owned(),
            outcome: GenerationOutcome::Fallback,
        }
    }

    /// Returns the suggested titles in order.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Returns the topic the titles were generated for.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns how the list was produced.
    #[must_use]
    pub const fn outcome(&self) -> GenerationOutcome {
        self.outcome
    }

    /// Returns `true` when the fallback templates were used.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.outcome == GenerationOutcome::Fallback
    }

    /// Consumes the list and returns the titles.
    #[must_use]
    pub fn into_titles(self) -> Vec<String> {
        self.titles
    }
}

/// Parses a free-text generator reply into task titles.
///
/// Lines are trimmed; blank lines and lines starting with a digit (ordering
/// prefixes such as `1.`) are dropped; at most [`MAX_SUGGESTIONS`] lines are
/// kept.
///
/// ```
/// use taskwise::generation::domain::parse_suggestions;
///
/// let titles = parse_suggestions("1. Intro\n  Read the book  \n\nWrite a CLI\n");
/// assert_eq!(titles, vec!["Read the book", "Write a CLI"]);
/// ```
#[must_use]
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with(|first: char| first.is_ascii_digit()))
        .take(MAX_SUGGESTIONS)
        .map(ToOwned::to_owned)
        .collect()
}

/// Returns the five fixed fallback titles for `topic`.
///
/// Pure string interpolation; never fails and performs no I/O.
#[must_use]
pub fn fallback_suggestions(topic: &str) -> Vec<String> {
    vec![
        format!("Research the fundamentals of {topic}"),
        format!("Find and bookmark key resources about {topic}"),
        format!("Practice basic concepts of {topic}"),
        format!("Create a simple project using {topic}"),
        format!("Join a community focused on {topic}"),
    ]
}
