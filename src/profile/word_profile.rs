// WordProfile — the ranked frequency signature of one document.
//
// A profile is a list of (token, frequency) entries sorted by frequency
// descending and capped at PROFILE_CAP entries. The frequency is an integer
// percentage of the document's eligible (non-stopword) token count, so two
// documents of very different lengths compare on the same scale.

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Maximum number of entries a profile keeps after ranking.
pub const PROFILE_CAP: usize = 100;

/// One ranked entry: a canonical-case token and its frequency within the
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub token: String,
    /// Percentage of the document's eligible tokens, truncated toward zero
    /// (integer division — 1 of 3 tokens is 33, never 33.3).
    pub frequency: u32,
}

/// A complete word profile for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordProfile {
    /// Ranked entries, highest frequency first. Ties keep the order the
    /// tokens were first seen in the text.
    pub entries: Vec<ProfileEntry>,
    /// Total eligible token occurrences counted (repeats included, not
    /// distinct tokens).
    pub token_count: u64,
}

impl WordProfile {
    /// Number of ranked entries (distinct tokens that survived the cap).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a canonical-case token appears in this profile. Profiles
    /// hold at most PROFILE_CAP entries, so the scan is bounded.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.iter().any(|e| e.token == token)
    }

    /// Render the profile as a ranked bar chart in the terminal.
    ///
    /// This is what `doppel profile <file>` prints — a quick way to sanity
    /// check what the tool thinks a document is about.
    pub fn display(&self, id: &str, limit: usize) {
        println!(
            "\n{}",
            format!(
                "=== Word profile: {} ({} eligible tokens, {} distinct) ===",
                id,
                self.token_count,
                self.len()
            )
            .bold()
        );
        println!();

        if self.is_empty() {
            println!("  (no eligible tokens — empty or all-stopword document)");
            return;
        }

        let bar_width: usize = 30;
        // Bars are scaled against the top entry; entries[0] holds the
        // maximum frequency by the sort invariant.
        let top = self.entries[0].frequency.max(1) as usize;

        for (i, entry) in self.entries.iter().take(limit).enumerate() {
            let filled = entry.frequency as usize * bar_width / top;
            let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(bar_width - filled));

            let colored_bar = if entry.frequency >= 10 {
                bar.bright_green()
            } else if entry.frequency >= 3 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            println!(
                "  {:>3}. {:<24} {} {:>3}%",
                i + 1,
                entry.token,
                colored_bar,
                entry.frequency
            );
        }

        if self.len() > limit {
            println!(
                "\n  {}",
                format!("... {} more entries not shown", self.len() - limit).dimmed()
            );
        }
    }
}
