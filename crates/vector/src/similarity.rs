use ndarray::{Array1, ArrayBase, ArrayView2, DataMut, Ix1};

/// Scale a vector to unit L2 norm in place; zero vectors are left untouched
pub fn l2_normalize<S>(vector: &mut ArrayBase<S, Ix1>)
where
    S: DataMut<Elem = f64>,
{
    let norm = vector.dot(vector).sqrt();
    if norm > 0.0 {
        vector.mapv_inplace(|v| v / norm);
    }
}

/// Similarity of a unit query against every unit row of `matrix`
///
/// Rows and query must already be L2-normalized, so the dot product is the
/// cosine. Values are clamped to [0, 1] to absorb rounding.
pub fn cosine_scores(matrix: ArrayView2<'_, f64>, query: &Array1<f64>) -> Array1<f64> {
    matrix.dot(query).mapv(|s| s.clamp(0.0, 1.0))
}

/// Index and value of the maximum score; the lowest index wins ties
pub fn argmax_first(scores: &Array1<f64>) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best
}
