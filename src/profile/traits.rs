// Profile builder trait — the seam between raw document text and ranked
// word profiles.
//
// The frequency profiler is the only implementation today, but the pipeline
// only sees this trait, so a different profiling strategy can be dropped in
// without touching the comparator.

use super::word_profile::WordProfile;

/// Turn one document's raw text into a ranked word profile.
pub trait ProfileBuilder {
    /// Profile a single document. Infallible by design: degenerate shapes
    /// (empty text, nothing but stopwords) are valid inputs with empty
    /// profiles as the result.
    fn build(&self, text: &str) -> WordProfile;
}
