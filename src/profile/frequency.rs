// Frequency profiling — from normalized text to a ranked WordProfile.
//
// Counting is a single pass over whitespace-split tokens. Ranking sorts
// distinct tokens by integer-percentage frequency, descending, with a
// stable sort so equal frequencies keep first-encounter order. The result
// is then capped.

use std::collections::HashMap;

use super::normalize::normalize;
use super::stopwords::StopwordSet;
use super::traits::ProfileBuilder;
use super::word_profile::{ProfileEntry, WordProfile, PROFILE_CAP};

/// Build a ranked profile from already-normalized text.
///
/// `total` is the number of eligible token occurrences (stopwords excluded,
/// repeats counted); each distinct token's frequency is
/// `count * 100 / total` truncated toward zero. An empty or all-stopword
/// text produces an empty profile — a valid result, not an error.
pub fn build_profile(normalized: &str, stopwords: &StopwordSet, cap: usize) -> WordProfile {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    let mut total: u64 = 0;

    for token in normalized.split_whitespace() {
        if stopwords.contains(token) {
            continue;
        }
        total += 1;
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            first_seen.push(token);
        }
        *count += 1;
    }

    if total == 0 {
        return WordProfile::default();
    }

    let mut entries: Vec<ProfileEntry> = first_seen
        .into_iter()
        .map(|token| ProfileEntry {
            token: token.to_string(),
            frequency: (counts[token] * 100 / total) as u32,
        })
        .collect();

    // Vec::sort_by is stable: equal frequencies keep first-encounter order.
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    entries.truncate(cap);

    WordProfile {
        entries,
        token_count: total,
    }
}

/// The standard profiler: normalize, drop stopwords, rank by truncated
/// integer-percentage frequency, cap at `cap` entries.
pub struct FrequencyProfiler {
    /// Tokens excluded from counting. Built once at startup and handed in.
    pub stopwords: StopwordSet,
    /// Maximum entries kept after ranking.
    pub cap: usize,
}

impl FrequencyProfiler {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            cap: PROFILE_CAP,
        }
    }
}

impl Default for FrequencyProfiler {
    fn default() -> Self {
        Self::new(StopwordSet::builtin())
    }
}

impl ProfileBuilder for FrequencyProfiler {
    fn build(&self, text: &str) -> WordProfile {
        build_profile(&normalize(text), &self.stopwords, self.cap)
    }
}
