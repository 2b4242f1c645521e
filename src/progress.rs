// src/progress.rs
/// Lightweight progress reporting for a run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once the course list is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A course resolved to a CRN and outline URL.
    fn item_done(&mut self, _course: &str) {}

    /// A course could not be resolved.
    fn item_failed(&mut self, _course: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
