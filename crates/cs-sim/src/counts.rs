//! Population totals per SIQR status.

use std::fmt;

use cs_epidemic::PandemicStatus;

/// Number of agents in each SIQR status.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SiqrCounts {
    pub susceptible: usize,
    pub infected:    usize,
    pub quarantined: usize,
    pub recovered:   usize,
}

impl SiqrCounts {
    /// Count `statuses`.
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = PandemicStatus>,
    {
        let mut counts = Self::default();
        for status in statuses {
            counts.record(status);
        }
        counts
    }

    #[inline]
    pub fn record(&mut self, status: PandemicStatus) {
        match status {
            PandemicStatus::Susceptible => self.susceptible += 1,
            PandemicStatus::Infected => self.infected += 1,
            PandemicStatus::Quarantined => self.quarantined += 1,
            PandemicStatus::Recovered => self.recovered += 1,
        }
    }

    #[inline]
    pub fn get(&self, status: PandemicStatus) -> usize {
        match status {
            PandemicStatus::Susceptible => self.susceptible,
            PandemicStatus::Infected => self.infected,
            PandemicStatus::Quarantined => self.quarantined,
            PandemicStatus::Recovered => self.recovered,
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.quarantined + self.recovered
    }
}

impl fmt::Display for SiqrCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S={} I={} Q={} R={}",
            self.susceptible, self.infected, self.quarantined, self.recovered
        )
    }
}
