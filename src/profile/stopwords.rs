// Stopword filtering — tokens excluded from profiling no matter how often
// they occur.
//
// The built-in set is the six words the profiler has always excluded. Full
// language lists from the stop-words crate can be swapped in at startup;
// either way the set is built once and passed into the profiler explicitly,
// never reached through global state.

use std::collections::HashSet;

use anyhow::Result;
use stop_words::{get, LANGUAGE};

use super::normalize::normalize;

/// The default exclusion set, already in canonical (uppercase) token form.
const BUILTIN: [&str; 6] = ["A", "AND", "AN", "OF", "IN", "THE"];

/// An immutable set of canonical-case tokens excluded from profiling.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The built-in six-word set.
    pub fn builtin() -> Self {
        Self::from_tokens(BUILTIN)
    }

    /// An empty set — no token is filtered.
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a set from explicit canonical-case tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// The full stopword list for a language, canonicalised through the
    /// same normalization as document text. List entries with internal
    /// punctuation ("aren't") contribute each of their fragments — the same
    /// tokens the profiler would see them split into.
    pub fn for_language(name: &str) -> Result<Self> {
        let language = match name.to_lowercase().as_str() {
            "english" => LANGUAGE::English,
            "french" => LANGUAGE::French,
            "german" => LANGUAGE::German,
            "italian" => LANGUAGE::Italian,
            "portuguese" => LANGUAGE::Portuguese,
            "spanish" => LANGUAGE::Spanish,
            other => anyhow::bail!(
                "Unknown stopword language '{other}'. Supported: english, french, \
                 german, italian, portuguese, spanish — or 'none' to disable filtering."
            ),
        };

        let mut words = HashSet::new();
        for entry in get(language) {
            for token in normalize(&entry).split_whitespace() {
                words.insert(token.to_string());
            }
        }
        Ok(Self { words })
    }

    /// Whether a canonical-case token is excluded.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::builtin()
    }
}
