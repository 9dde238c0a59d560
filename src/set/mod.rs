//! Confidence-ordered detection sets and their selection queries.
//!
//! A `DetectedObjectSet` is built once from shared detection handles and
//! sorted ascending by confidence. Equal confidences keep their input order.
//! Selections return handles to the same detections, never copies.

use crate::object::DetectedObjectRef;
use crate::trace::{trace_event, trace_skip, trace_span};
use crate::util::ranking::{passes, sort_by_score_asc};

pub mod selection;

pub use selection::Selection;

/// Immutable set of detections sorted ascending by confidence.
#[derive(Clone, Debug, Default)]
pub struct DetectedObjectSet {
    objects: Vec<DetectedObjectRef>,
}

impl DetectedObjectSet {
    /// Builds a set from detection handles.
    ///
    /// Duplicated handles are kept. The sort is stable, so detections with
    /// equal confidence stay in input order.
    pub fn new<I>(objects: I) -> Self
    where
        I: IntoIterator<Item = DetectedObjectRef>,
    {
        let mut objects: Vec<DetectedObjectRef> = objects.into_iter().collect();
        let _span = trace_span!("detected_object_set_new", count = objects.len()).entered();
        sort_by_score_asc(&mut objects, |obj| obj.confidence());
        Self { objects }
    }

    /// Number of detections held.
    pub fn size(&self) -> usize {
        self.objects.len()
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Detections in ascending confidence order.
    pub fn as_slice(&self) -> &[DetectedObjectRef] {
        &self.objects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DetectedObjectRef> {
        self.objects.iter()
    }

    /// Returns every detection with `confidence >= threshold`.
    ///
    /// Output keeps the set's ascending confidence order.
    pub fn select(&self, threshold: f64) -> Vec<DetectedObjectRef> {
        let _span = trace_span!("select", threshold = threshold).entered();
        let out: Vec<DetectedObjectRef> = self
            .objects
            .iter()
            .filter(|obj| passes(obj.confidence(), threshold))
            .cloned()
            .collect();
        trace_event!("select_done", kept = out.len(), total = self.objects.len());
        out
    }

    /// Returns detections whose `class_name` score is `>= threshold`,
    /// ascending by that score.
    ///
    /// Detections without a classification, or whose classification does
    /// not know `class_name`, are skipped. Equal scores keep the set's
    /// confidence order.
    pub fn select_class(&self, class_name: &str, threshold: f64) -> Vec<DetectedObjectRef> {
        let _span = trace_span!("select_class", class_name = class_name, threshold = threshold)
            .entered();

        let mut untyped = 0usize;
        let mut unknown = 0usize;
        let mut candidates: Vec<(f64, &DetectedObjectRef)> = Vec::new();
        for (index, obj) in self.objects.iter().enumerate() {
            let Some(detected_type) = obj.detected_type() else {
                untyped += 1;
                continue;
            };
            let Some(score) = detected_type.try_score(class_name) else {
                trace_skip!("unknown_category", index = index, class_name = class_name);
                unknown += 1;
                continue;
            };
            if passes(score, threshold) {
                candidates.push((score, obj));
            }
        }

        sort_by_score_asc(&mut candidates, |candidate| candidate.0);
        trace_event!(
            "select_class_done",
            kept = candidates.len(),
            skipped_untyped = untyped,
            skipped_unknown = unknown,
        );
        candidates
            .into_iter()
            .map(|(_, obj)| DetectedObjectRef::clone(obj))
            .collect()
    }

    /// Runs a [`Selection`] query.
    pub fn apply(&self, selection: &Selection) -> Vec<DetectedObjectRef> {
        match selection {
            Selection::Confidence { threshold } => self.select(*threshold),
            Selection::Class { name, threshold } => self.select_class(name, *threshold),
        }
    }
}

impl FromIterator<DetectedObjectRef> for DetectedObjectSet {
    fn from_iter<I: IntoIterator<Item = DetectedObjectRef>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a DetectedObjectSet {
    type Item = &'a DetectedObjectRef;
    type IntoIter = std::slice::Iter<'a, DetectedObjectRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
