use crate::ranking::tfidf::SparseVector;

/// Cosine of the angle between `a` and `b`, clamped to [0, 1].
///
/// Returns 0.0 when either vector has zero magnitude (e.g. a document with no
/// extractable text) instead of dividing by zero.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norms = a.norm() * b.norm();
    if norms == 0.0 || !norms.is_finite() {
        return 0.0;
    }
    (a.dot(b) / norms).clamp(0.0, 1.0)
}
