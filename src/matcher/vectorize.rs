use serde::{Deserialize, Serialize};

use super::normalize::SkillNormalizer;
use super::stats::IdfTable;
use super::vocabulary::Vocabulary;
use crate::utils::math;

/// Dense TF-IDF weighted skill vector.
///
/// One entry per vocabulary dimension:
///
/// `weight[i] = (mentions of skill i / raw list length) * idf(i)`
///
/// The term frequency is taken over the raw list length, so unknown
/// passthrough tokens dilute the known ones instead of silently vanishing.
/// Vectors only exist for the duration of one matching call and are only
/// comparable against vectors built from the same vocabulary and IDF table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillVector {
    weights: Vec<f64>,
}

impl SkillVector {
    /// The zero vector of a given dimensionality.
    pub fn zero(dim: usize) -> Self {
        Self {
            weights: vec![0.0; dim],
        }
    }

    /// Vectorize a raw free-text skill list, normalizing each entry first.
    pub fn build(
        vocabulary: &Vocabulary,
        normalizer: &SkillNormalizer,
        idf: &IdfTable,
        raw_skills: &[String],
    ) -> Self {
        Self::from_normalized(vocabulary, idf, &normalizer.normalize_each(raw_skills))
    }

    /// Vectorize an already-normalized skill list.
    ///
    /// An empty list short-circuits to the zero vector; there is no division
    /// by the list length in that case.
    pub fn from_normalized(
        vocabulary: &Vocabulary,
        idf: &IdfTable,
        normalized_skills: &[String],
    ) -> Self {
        let dim = vocabulary.len();
        if normalized_skills.is_empty() {
            return Self::zero(dim);
        }
        let total = normalized_skills.len() as f64;
        let mut counts = vec![0u32; dim];
        for skill in normalized_skills {
            if let Some(i) = vocabulary.index_of(skill) {
                counts[i] += 1;
            }
        }
        let weights = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (f64::from(c) / total) * idf.weight(i))
            .collect();
        Self { weights }
    }

    /// Number of dimensions.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Whether the vector carries no signal at all.
    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Cosine similarity against another vector of the same dimensionality,
    /// clamped into [0, 1].
    pub fn similarity(&self, other: &SkillVector) -> f64 {
        math::cosine_similarity(&self.weights, &other.weights)
    }

    /// Dimension indices of the `n` heaviest entries, descending by weight.
    /// Ties keep the lower dimension first.
    pub fn top_dimensions(&self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.weights.len()).collect();
        order.sort_by(|&a, &b| self.weights[b].total_cmp(&self.weights[a]).then(a.cmp(&b)));
        order.truncate(n);
        order
    }
}
