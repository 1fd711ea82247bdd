// Pairwise overlap scoring between two word profiles.
//
// The score is the share of the smaller profile covered by tokens common
// to both profiles:
//
//   score = common / min(|A|, |B|) * 100
//
// A short document wholly contained in a longer one scores 100. The
// denominator is the smaller profile size, not the union size; swapping
// in a Jaccard-style union would change every reported number.

use crate::profile::word_profile::WordProfile;

/// Compute the similarity between two profiles as a percentage.
///
/// Always in [0, 100]. If either profile is empty the score is 0.0.
pub fn score(a: &WordProfile, b: &WordProfile) -> f64 {
    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return 0.0;
    }
    (common_count(a, b) as f64 / smaller as f64) * 100.0
}

/// Number of tokens present in both profiles.
///
/// Tokens within a profile are distinct, so counting A-side hits is the
/// same as counting the intersection.
pub fn common_count(a: &WordProfile, b: &WordProfile) -> usize {
    a.entries.iter().filter(|e| b.contains(&e.token)).count()
}

/// The tokens present in both profiles, in A's rank order — most frequent
/// shared words first. Used by the pair detail view.
pub fn common_tokens(a: &WordProfile, b: &WordProfile) -> Vec<String> {
    a.entries
        .iter()
        .filter(|e| b.contains(&e.token))
        .map(|e| e.token.clone())
        .collect()
}
