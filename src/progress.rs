// src/progress.rs
/// Lightweight progress reporting used by long-running operations (fetch/build).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of data rows (header excluded).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A row (1-based rank position) became a record.
    fn item_done(&mut self, _row: usize) {}

    /// A row was skipped under the skip policy.
    fn item_failed(&mut self, _row: usize, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Reborrow an optional sink so it can be handed to a nested call and used again after.
pub fn reborrow<'s>(progress: &'s mut Option<&mut dyn Progress>) -> Option<&'s mut dyn Progress> {
    match progress {
        Some(p) => Some(&mut **p as &mut dyn Progress),
        None => None,
    }
}
