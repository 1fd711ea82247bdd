// The corpus comparison pipeline: profile, score, rank.
//
// Strategy: build a frequency profile per document (parallel, order
// preserved), score every unordered pair into a symmetric matrix, then
// keep the K best-ranked pairs. Documents whose profile came out empty
// still participate (their pairs simply score 0) but are flagged so an
// all-stopword file is never mistaken for a scoring bug.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::corpus::document::Document;
use crate::profile::traits::ProfileBuilder;
use crate::profile::word_profile::WordProfile;
use crate::similarity::matrix::{score_matrix, SimilarityMatrix};
use crate::similarity::top_k::top_k;

/// One ranked result pair, ready for display or serialization.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPair {
    pub rank: usize,
    pub left: String,
    pub right: String,
    pub score: f64,
}

/// Everything a comparison run produced.
#[derive(Debug, Clone, Serialize)]
pub struct CompareOutcome {
    pub document_count: usize,
    pub pair_count: usize,
    /// Ids of documents whose profile came out empty.
    pub degenerate: Vec<String>,
    pub ranked: Vec<RankedPair>,
}

/// Profile every document. Output order matches document order.
pub fn profile_corpus<B>(builder: &B, documents: &[Document]) -> Vec<WordProfile>
where
    B: ProfileBuilder + Sync,
{
    documents
        .par_iter()
        .map(|doc| builder.build(&doc.content))
        .collect()
}

/// Run the full comparison and return the K best-ranked pairs.
pub fn run<B>(builder: &B, documents: &[Document], k: usize) -> CompareOutcome
where
    B: ProfileBuilder + Sync,
{
    // Step 1: Profile every document
    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Profiling [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let profiles: Vec<WordProfile> = documents
        .par_iter()
        .map(|doc| {
            let profile = builder.build(&doc.content);
            pb.inc(1);
            profile
        })
        .collect();
    pb.finish_and_clear();

    let degenerate: Vec<String> = documents
        .iter()
        .zip(&profiles)
        .filter(|(_, profile)| profile.is_empty())
        .map(|(doc, _)| doc.id.clone())
        .collect();
    for id in &degenerate {
        warn!(document = %id, "Document produced an empty profile");
    }

    // Step 2: Score every unordered pair
    let matrix = score_matrix(&profiles);
    info!(
        documents = documents.len(),
        pairs = matrix.pair_count(),
        "Scored all document pairs"
    );

    // Step 3: Keep the K best
    let ranked = rank_pairs(&matrix, documents, k);

    CompareOutcome {
        document_count: documents.len(),
        pair_count: matrix.pair_count(),
        degenerate,
        ranked,
    }
}

/// Attach document ids and 1-based ranks to the K best-ranked pairs.
pub fn rank_pairs(
    matrix: &SimilarityMatrix,
    documents: &[Document],
    k: usize,
) -> Vec<RankedPair> {
    top_k(matrix, k)
        .into_iter()
        .enumerate()
        .map(|(idx, pair)| RankedPair {
            rank: idx + 1,
            left: documents[pair.a].id.clone(),
            right: documents[pair.b].id.clone(),
            score: pair.score,
        })
        .collect()
}
