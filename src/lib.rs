// Doppel: find near-duplicate and lookalike documents in a text corpus.
//
// This is the library root. Each module corresponds to one stage of the
// comparison pipeline: load a corpus, profile each document, score every
// pair, rank the winners, present the results.

pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod profile;
pub mod similarity;
