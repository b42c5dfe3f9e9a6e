//! Scene observer trait for progress reporting and data collection.

use cs_behavior::StatusChange;
use cs_schedule::Timer;

use crate::SiqrCounts;

/// Callbacks invoked by [`Scene::step`][crate::Scene::step] at key points
/// of the tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Every hook receives the timer as it
/// stands for the tick being processed.
///
/// # Example: daily printer
///
/// ```rust,ignore
/// struct DailyPrinter;
///
/// impl SceneObserver for DailyPrinter {
///     fn on_day_end(&mut self, timer: &Timer, counts: SiqrCounts) {
///         println!("{} {}: {counts}", timer.week_str(), timer.day_str());
///     }
/// }
/// ```
pub trait SceneObserver {
    /// First tick of a school day, before the morning checks.
    fn on_day_start(&mut self, _timer: &Timer) {}

    /// An agent changed SIQR status during this tick.
    fn on_status_change(&mut self, _change: &StatusChange, _timer: &Timer) {}

    /// Last tick of a school day, after the end-of-day test.
    fn on_day_end(&mut self, _timer: &Timer, _counts: SiqrCounts) {}

    /// Every tick, after the spread update and before the timer advances.
    fn on_tick_end(&mut self, _timer: &Timer) {}

    /// Once, when the timer runs past the last week.
    fn on_finished(&mut self, _timer: &Timer) {}
}

/// A [`SceneObserver`] that does nothing.
pub struct NoopObserver;

impl SceneObserver for NoopObserver {}
