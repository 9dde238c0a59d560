//! detset holds ranked object-detection results passed between vision
//! pipeline stages.
//!
//! A [`DetectedObjectSet`] keeps shared [`DetectedObject`] handles sorted by
//! detector confidence and answers two read-only queries: a confidence
//! threshold, and a per-category score threshold ranked by that score.
//! Optional diagnostics are available through the `tracing` feature.

pub mod object;
pub mod set;
mod trace;
pub mod util;

pub use object::{DetectedObject, DetectedObjectRef, DetectedObjectType};
pub use set::{DetectedObjectSet, Selection};
pub use util::{DetSetError, DetSetResult};
