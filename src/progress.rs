// src/progress.rs
/// Lightweight progress reporting for the long-running scrapes.
/// Frontends implement this to surface status to users; library callers can
/// pass `None` or [`NullProgress`].
pub trait Progress {
    /// Called once the number of items is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One item produced a record.
    fn item_done(&mut self, _id: u32) {}

    /// One item was dropped; `reason` says why.
    fn item_skipped(&mut self, _id: u32, _reason: &str) {}

    /// Called at the end of a successful pass.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
