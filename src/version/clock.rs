//! Source of "today" for the date-based scheme matchers

use chrono::{Local, NaiveDate};
#[cfg(test)]
use mockall::automock;

/// Trait for reading the current calendar date
///
/// Year, month and "not in the future" checks all go through this trait so
/// classification can be pinned to a fixed date in tests.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// Returns today's date in local time
    fn today(&self) -> NaiveDate;
}

/// Wall clock backed by the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
