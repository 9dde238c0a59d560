//! Per-category classification scores attached to a detection.

use std::collections::BTreeMap;

use crate::util::ranking::score_cmp_asc;
use crate::util::{DetSetError, DetSetResult};

/// Named set of category → score associations.
///
/// Categories are kept in name order so iteration is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectedObjectType {
    scores: BTreeMap<String, f64>,
}

impl DetectedObjectType {
    /// Creates an empty classification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a classification from `(name, score)` pairs.
    ///
    /// A repeated name keeps the last score.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            scores: pairs
                .into_iter()
                .map(|(name, score)| (name.into(), score))
                .collect(),
        }
    }

    /// Builds a classification from parallel name and score slices.
    pub fn from_parallel<S: AsRef<str>>(names: &[S], scores: &[f64]) -> DetSetResult<Self> {
        if names.len() != scores.len() {
            return Err(DetSetError::LengthMismatch {
                names: names.len(),
                scores: scores.len(),
            });
        }
        Ok(Self::from_pairs(
            names
                .iter()
                .map(AsRef::<str>::as_ref)
                .zip(scores.iter().copied()),
        ))
    }

    /// Returns the score for `name`.
    pub fn score(&self, name: &str) -> DetSetResult<f64> {
        self.try_score(name)
            .ok_or_else(|| DetSetError::CategoryNotFound {
                name: name.to_owned(),
            })
    }

    /// Returns the score for `name`, or `None` if the category is unknown.
    pub fn try_score(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied()
    }

    /// Returns `true` if `name` has a score.
    pub fn has_class_name(&self, name: &str) -> bool {
        self.scores.contains_key(name)
    }

    /// Inserts or replaces the score for `name`.
    pub fn set_score(&mut self, name: impl Into<String>, score: f64) {
        self.scores.insert(name.into(), score);
    }

    /// Removes `name`, returning whether it was present.
    pub fn delete_score(&mut self, name: &str) -> bool {
        self.scores.remove(name).is_some()
    }

    /// Returns the highest-scoring category.
    ///
    /// Ties resolve to the lexicographically smallest name.
    pub fn most_likely(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (name, &score) in &self.scores {
            match best {
                Some((_, best_score)) if score_cmp_asc(score, best_score).is_le() => {}
                _ => best = Some((name.as_str(), score)),
            }
        }
        best
    }

    /// Returns category names scoring at least `threshold`, best first.
    pub fn class_names(&self, threshold: f64) -> Vec<&str> {
        let mut kept: Vec<(&str, f64)> = self
            .scores
            .iter()
            .filter(|(_, score)| **score >= threshold)
            .map(|(name, &score)| (name.as_str(), score))
            .collect();
        // Stable sort over name-ordered input, so equal scores stay by name.
        kept.sort_by(|a, b| score_cmp_asc(b.1, a.1));
        kept.into_iter().map(|(name, _)| name).collect()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns `true` when no category is scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterates `(name, score)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.scores
            .iter()
            .map(|(name, &score)| (name.as_str(), score))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for DetectedObjectType {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
