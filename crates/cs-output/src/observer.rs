//! `SceneOutputObserver<W>`: bridges `SceneObserver` to an `OutputWriter`.

use cs_behavior::StatusChange;
use cs_schedule::Timer;
use cs_sim::{SceneObserver, SiqrCounts};

use crate::row::{DailySiqrRow, TransitionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SceneObserver`] that writes daily SIQR totals and status transitions
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SceneObserver`
/// methods have no return value.  After `scene.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SceneOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SceneOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `scene.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SceneObserver for SceneOutputObserver<W> {
    fn on_status_change(&mut self, change: &StatusChange, timer: &Timer) {
        let row = TransitionRow {
            agent_id: change.agent.0,
            role:     change.kind,
            from:     change.from,
            to:       change.to,
            week:     timer.current_week(),
            weekday:  timer.day_of_week(),
            time:     change.at.time_of_day(),
        };
        let result = self.writer.write_transition(&row);
        self.store_err(result);
    }

    fn on_day_end(&mut self, timer: &Timer, counts: SiqrCounts) {
        let row = DailySiqrRow {
            week:        timer.current_week(),
            weekday:     timer.day_of_week(),
            day:         timer.current_day(),
            susceptible: counts.susceptible,
            infected:    counts.infected,
            quarantined: counts.quarantined,
            recovered:   counts.recovered,
        };
        let result = self.writer.write_daily_siqr(&row);
        self.store_err(result);
    }

    fn on_finished(&mut self, _timer: &Timer) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
