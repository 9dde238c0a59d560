//! Optional tracing hooks for set construction and selection.
//!
//! With the `tracing` feature the macros forward to `tracing`; without it
//! they expand to nothing and the crate has no logging dependency.

/// Opens an info-level span around a set operation.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Emits an info-level event with counts for a finished operation.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

/// Emits a debug-level event for a single skipped detection.
///
/// Never changes what a selection returns.
#[cfg(feature = "tracing")]
macro_rules! trace_skip {
    ($reason:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(reason = $reason, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_skip {
    ($reason:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($reason, $($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_skip;
pub(crate) use trace_span;

/// Stand-in span guard when the `tracing` feature is off.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Returns self so `trace_span!(..).entered()` works either way.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
