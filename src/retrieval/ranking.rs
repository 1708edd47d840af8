use std::cmp::Ordering;

/// A candidate paired with its similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<T> {
    pub item: T,
    pub score: f32,
}

/// Keep the `k` best-scoring candidates, best first.
///
/// The sort is stable: equal scores keep their input (insertion) order.
pub fn top_k<T>(candidates: impl IntoIterator<Item = Scored<T>>, k: usize) -> Vec<Scored<T>> {
    if k == 0 {
        return Vec::new();
    }

    let mut scored: Vec<Scored<T>> = candidates.into_iter().collect();
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(k);
    scored
}
