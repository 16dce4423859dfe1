use serde::{Deserialize, Serialize};

use super::vocabulary::Vocabulary;

/// Per-call inverse document frequency weights, one per vocabulary
/// dimension.
///
/// `idf(s) = ln(doc_num / (docs_requiring_s + 1))`
///
/// The `+1` keeps the quotient finite when a skill appears in zero or all
/// projects. Skills absent from the catalog get `ln(doc_num)`, the largest
/// weight; skills required by more than ~37% of projects go negative, which
/// deliberately downweights ubiquitous skills relative to distinctive ones.
///
/// Counting is membership-based: duplicates inside one project's skill list
/// count that project once. The table is rebuilt from the catalog snapshot
/// on every matching call and never cached across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdfTable {
    weights: Vec<f64>,
    doc_num: usize,
}

impl IdfTable {
    /// Build the table from already-normalized project skill lists.
    ///
    /// An empty catalog yields all-zero weights; callers short-circuit that
    /// case before scoring, the guard only keeps `ln(0)` out of the math.
    pub fn build(vocabulary: &Vocabulary, normalized_catalog: &[Vec<String>]) -> Self {
        let doc_num = normalized_catalog.len();
        let mut doc_counts = vec![0u64; vocabulary.len()];
        let mut seen = vec![usize::MAX; vocabulary.len()];
        for (doc, skills) in normalized_catalog.iter().enumerate() {
            for skill in skills {
                if let Some(i) = vocabulary.index_of(skill) {
                    if seen[i] != doc {
                        seen[i] = doc;
                        doc_counts[i] += 1;
                    }
                }
            }
        }
        let weights = if doc_num == 0 {
            vec![0.0; vocabulary.len()]
        } else {
            doc_counts
                .iter()
                .map(|&c| (doc_num as f64 / (c as f64 + 1.0)).ln())
                .collect()
        };
        Self { weights, doc_num }
    }

    /// Weight of dimension `i`; 0 outside the vocabulary range.
    #[inline]
    pub fn weight(&self, i: usize) -> f64 {
        self.weights.get(i).copied().unwrap_or(0.0)
    }

    /// Number of dimensions, always the vocabulary size.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of projects the table was built from.
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.doc_num
    }
}
