// Bounded top-K selection over the pair matrix.
//
// Ranking is score descending; equal scores fall back to ascending
// (i, j) index order, so a run over the same corpus always returns the
// same pairs in the same order. The selection keeps at most k + 1
// candidates in a heap instead of sorting all n * (n - 1) / 2 pairs.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::matrix::SimilarityMatrix;

/// One scored document pair, by corpus index.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarPair {
    pub a: usize,
    pub b: usize,
    pub score: f64,
}

/// Ranking order: higher score first, then lower (a, b).
///
/// Distinct pairs never compare equal, which is what makes the bounded
/// selection below deterministic.
pub fn rank_order(x: &SimilarPair, y: &SimilarPair) -> Ordering {
    y.score
        .total_cmp(&x.score)
        .then_with(|| x.a.cmp(&y.a))
        .then_with(|| x.b.cmp(&y.b))
}

// BinaryHeap is a max-heap, so the heap's greatest element must be the
// worst-ranked pair we are still keeping.
struct WorstFirst(SimilarPair);

impl PartialEq for WorstFirst {
    fn eq(&self, other: &Self) -> bool {
        rank_order(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for WorstFirst {}

impl PartialOrd for WorstFirst {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WorstFirst {
    fn cmp(&self, other: &Self) -> Ordering {
        rank_order(&self.0, &other.0)
    }
}

/// The k best-ranked pairs of the matrix, best first.
///
/// Returns fewer than k pairs when the matrix has fewer, and an empty
/// vector for k = 0 or a matrix with no pairs.
pub fn top_k(matrix: &SimilarityMatrix, k: usize) -> Vec<SimilarPair> {
    if k == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<WorstFirst> = BinaryHeap::with_capacity(k + 1);
    for (a, b, score) in matrix.pairs() {
        heap.push(WorstFirst(SimilarPair { a, b, score }));
        if heap.len() > k {
            heap.pop();
        }
    }

    let mut pairs: Vec<SimilarPair> = heap.into_iter().map(|w| w.0).collect();
    pairs.sort_by(rank_order);
    pairs
}
