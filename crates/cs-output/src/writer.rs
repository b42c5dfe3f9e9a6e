//! The `OutputWriter` trait implemented by backend writers.

use crate::{DailySiqrRow, OutputResult, TransitionRow};

/// Trait implemented by output backends.
///
/// Errors are stored by the observer and retrieved with
/// [`SceneOutputObserver::take_error`][crate::SceneOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the SIQR totals of one finished school day.
    fn write_daily_siqr(&mut self, row: &DailySiqrRow) -> OutputResult<()>;

    /// Write one status-change row.
    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
