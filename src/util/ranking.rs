//! Ordering helpers for score-keyed sequences.

use std::cmp::Ordering;

/// Ascending comparison on `f64` keys.
///
/// Uses `total_cmp` on canonical keys: `-0.0` compares equal to `0.0`, and
/// every NaN orders after all other values.
#[inline]
pub(crate) fn score_cmp_asc(a: f64, b: f64) -> Ordering {
    canonical(a).total_cmp(&canonical(b))
}

#[inline]
fn canonical(score: f64) -> f64 {
    if score.is_nan() {
        f64::NAN
    } else {
        score + 0.0
    }
}

/// Stable ascending sort by a score key; equal keys keep their input order.
pub(crate) fn sort_by_score_asc<T, F>(items: &mut [T], mut key: F)
where
    F: FnMut(&T) -> f64,
{
    items.sort_by(|a, b| score_cmp_asc(key(a), key(b)));
}

/// Returns `true` when `score` clears an inclusive `threshold`.
///
/// NaN never passes, matching plain `>=` semantics.
#[inline]
pub(crate) fn passes(score: f64, threshold: f64) -> bool {
    score >= threshold
}
