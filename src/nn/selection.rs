//! Picking an action index from a score vector.
//!
//! `NaN` scores mark illegal actions and are never selected.

use crate::core::GameRng;

/// Argmax ignoring `NaN`. Ties go to the lowest index.
///
/// Returns `None` if every score is `NaN` (or there are none).
#[must_use]
pub fn select_greedy(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}

/// Sample an index with probability proportional to
/// `exp((score - max) / temperature)`, ignoring `NaN`.
///
/// A non-positive temperature falls back to [`select_greedy`].
pub fn select_with_temperature(
    scores: &[f32],
    temperature: f64,
    rng: &mut GameRng,
) -> Option<usize> {
    if temperature <= 0.0 {
        return select_greedy(scores);
    }

    let max = scores
        .iter()
        .copied()
        .filter(|s| !s.is_nan())
        .fold(f32::NEG_INFINITY, f32::max);
    if max == f32::NEG_INFINITY {
        // Only NaN and -inf left; keep the deterministic choice.
        return select_greedy(scores);
    }

    let weights: Vec<f32> = scores
        .iter()
        .map(|&s| {
            if s.is_nan() {
                0.0
            } else {
                (((s - max) as f64) / temperature).exp() as f32
            }
        })
        .collect();

    rng.choose_weighted(&weights).or_else(|| select_greedy(scores))
}
