// The pairwise similarity matrix — symmetric, zero diagonal.
//
// Scores live in a dense row-major buffer. Pair scoring is embarrassingly
// parallel: every (i, j) score is computed into an owned vector with rayon
// and written into the matrix afterwards, so no cell is ever touched by
// two tasks.

use rayon::prelude::*;

use super::overlap::score;
use crate::profile::word_profile::WordProfile;

/// Symmetric n-by-n similarity matrix over document indices.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl SimilarityMatrix {
    /// An all-zero matrix for `n` documents.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![0.0; n * n],
        }
    }

    /// Number of documents (rows).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of unordered pairs, n * (n - 1) / 2.
    pub fn pair_count(&self) -> usize {
        self.n * self.n.saturating_sub(1) / 2
    }

    /// Score at (i, j). The diagonal is always 0.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }

    /// Store a pair's score symmetrically at (i, j) and (j, i).
    pub fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i != j, "the diagonal stays zero");
        self.cells[i * self.n + j] = value;
        self.cells[j * self.n + i] = value;
    }

    /// Iterate the upper triangle as (i, j, score) with i < j, row by row.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let n = self.n;
        (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j, self.get(i, j))))
    }
}

/// Score every unordered pair of profiles into a symmetric matrix.
///
/// Profile order defines document indices. Each pair is independent, so the
/// scores are computed in parallel; the sequential fill afterwards keeps
/// every (i, j)/(j, i) write exclusive.
pub fn score_matrix(profiles: &[WordProfile]) -> SimilarityMatrix {
    let n = profiles.len();
    let mut matrix = SimilarityMatrix::new(n);

    let index_pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    let scored: Vec<(usize, usize, f64)> = index_pairs
        .par_iter()
        .map(|&(i, j)| (i, j, score(&profiles[i], &profiles[j])))
        .collect();

    for (i, j, value) in scored {
        matrix.set_pair(i, j, value);
    }

    matrix
}
