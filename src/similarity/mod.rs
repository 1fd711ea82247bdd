// Similarity scoring — pairwise overlap, the score matrix, top-K ranking.

pub mod overlap;
pub mod matrix;
pub mod top_k;
