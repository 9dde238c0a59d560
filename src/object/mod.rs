//! Single detection results.
//!
//! A `DetectedObject` carries the detector's confidence and an optional
//! per-category classification. Detections are shared between sets and
//! pipeline messages through [`DetectedObjectRef`] handles and are not
//! mutated once shared.

use std::sync::Arc;

pub mod class_type;

pub use class_type::DetectedObjectType;

/// Shared handle to an immutable detection.
pub type DetectedObjectRef = Arc<DetectedObject>;

/// One detection: a confidence plus an optional classification.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectedObject {
    confidence: f64,
    detected_type: Option<DetectedObjectType>,
}

impl DetectedObject {
    /// Creates an unclassified detection.
    pub fn new(confidence: f64) -> Self {
        Self {
            confidence,
            detected_type: None,
        }
    }

    /// Creates a detection with a classification attached.
    pub fn with_type(confidence: f64, detected_type: DetectedObjectType) -> Self {
        Self {
            confidence,
            detected_type: Some(detected_type),
        }
    }

    /// Wraps the detection in a shared handle.
    pub fn into_ref(self) -> DetectedObjectRef {
        Arc::new(self)
    }

    /// Detector confidence.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Classification, if the detector produced one.
    pub fn detected_type(&self) -> Option<&DetectedObjectType> {
        self.detected_type.as_ref()
    }
}
