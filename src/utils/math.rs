use num::Float;
use tracing::warn;

/// Dot product of two dense vectors of the same length.
#[inline]
pub fn dot<N: Float>(a: &[N], b: &[N]) -> N {
    a.iter()
        .zip(b.iter())
        .fold(N::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Euclidean magnitude of a dense vector.
#[inline]
pub fn magnitude<N: Float>(v: &[N]) -> N {
    v.iter().fold(N::zero(), |acc, &x| acc + x * x).sqrt()
}

/// Cosine similarity clamped into [0, 1].
/// cosθ = A・B / (|A||B|)
///
/// Weights represent non-negative relevance, so a negative dot product is
/// floored to 0 rather than reported as opposition. A zero-magnitude operand
/// means no signal and scores 0. Mismatched lengths cannot occur for vectors
/// built against the same vocabulary; the guard keeps the failure mode at
/// "score 0", never a panic.
pub fn cosine_similarity<N: Float>(a: &[N], b: &[N]) -> N {
    if a.len() != b.len() {
        warn!(
            a_len = a.len(),
            b_len = b.len(),
            "vectors differ in length, scoring as 0"
        );
        return N::zero();
    }
    let norm = magnitude(a) * magnitude(b);
    if norm == N::zero() {
        return N::zero();
    }
    (dot(a, b) / norm).max(N::zero()).min(N::one())
}
