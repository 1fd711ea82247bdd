// Word profiling — normalization, stopword filtering, frequency ranking.

pub mod traits;
pub mod normalize;
pub mod stopwords;
pub mod word_profile;
pub mod frequency;
