//! Counters and structured events for resolver fallbacks.

use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::Lazy;
use tracing::info;

use crate::action::OperationShape;

static OFFSCREEN_FALLBACKS: Lazy<AtomicUsize> = Lazy::new(|| AtomicUsize::new(0));

pub(crate) fn record_offscreen_fallback(shape: OperationShape) {
    let count = OFFSCREEN_FALLBACKS.fetch_add(1, Ordering::SeqCst) + 1;
    info!(
        target: "snap_winops::fallback",
        operation = %shape,
        count,
        "Offscreen window resolved against the first display"
    );
}

/// Number of offscreen fallbacks taken since start (or the last reset).
pub fn offscreen_fallback_count() -> usize {
    OFFSCREEN_FALLBACKS.load(Ordering::SeqCst)
}

/// Reset the offscreen fallback counter.
pub fn reset_offscreen_fallback_count() {
    OFFSCREEN_FALLBACKS.store(0, Ordering::SeqCst);
}
