//! Declarative selection queries.

/// A read-only query over a [`DetectedObjectSet`](crate::DetectedObjectSet).
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    /// Detections with `confidence >= threshold`, in confidence order.
    Confidence {
        /// Inclusive lower bound on confidence.
        threshold: f64,
    },
    /// Detections whose score for `name` is `>= threshold`, in score order.
    Class {
        /// Category to rank by.
        name: String,
        /// Inclusive lower bound on the category score.
        threshold: f64,
    },
}

impl Selection {
    /// Confidence-only query.
    pub fn confidence(threshold: f64) -> Self {
        Self::Confidence { threshold }
    }

    /// Category-score query.
    pub fn class(name: impl Into<String>, threshold: f64) -> Self {
        Self::Class {
            name: name.into(),
            threshold,
        }
    }

    /// Threshold carried by either variant.
    pub fn threshold(&self) -> f64 {
        match self {
            Self::Confidence { threshold } | Self::Class { threshold, .. } => *threshold,
        }
    }

    /// Category name for class queries.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Confidence { .. } => None,
            Self::Class { name, .. } => Some(name),
        }
    }
}
