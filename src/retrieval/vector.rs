// Vector operations — term vectors and cosine similarity over padded inputs.

/// Dense term-frequency vector; index = vocabulary dimension.
pub type TermVector = Vec<f32>;

/// Cosine similarity between two term vectors. Returns 0.0–1.0.
///
/// The shorter vector is treated as zero-padded to the longer one's length.
/// A zero vector on either side scores exactly `0.0`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().max(b.len());
    if len == 0 {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for i in 0..len {
        let x = f64::from(a.get(i).copied().unwrap_or(0.0));
        let y = f64::from(b.get(i).copied().unwrap_or(0.0));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if !denom.is_finite() || denom < f64::EPSILON {
        return 0.0;
    }

    let raw = dot / denom;
    if !raw.is_finite() {
        return 0.0;
    }

    #[allow(clippy::cast_possible_truncation)]
    let sim = raw.clamp(0.0, 1.0) as f32;
    sim
}
