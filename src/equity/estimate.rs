use super::tally::Tally;
use serde::Deserialize;
use serde::Serialize;

/// The aggregate of a sampling run, immutable once produced.
///
/// Ties are reported whole. Callers that want the conventional
/// half-credit number take equity() rather than re-deriving it; the
/// percentages themselves never split ties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    win_percentage: f64,
    tie_percentage: f64,
    trials_completed: u64,
    trials_requested: u64,
}

impl From<(Tally, u64)> for Estimate {
    fn from((tally, requested): (Tally, u64)) -> Self {
        let total = tally.outcomes().max(1) as f64;
        Self {
            win_percentage: 100. * tally.wins() as f64 / total,
            tie_percentage: 100. * tally.ties() as f64 / total,
            trials_completed: tally.trials(),
            trials_requested: requested,
        }
    }
}

impl Estimate {
    pub fn win_percentage(&self) -> f64 {
        self.win_percentage
    }
    pub fn tie_percentage(&self) -> f64 {
        self.tie_percentage
    }
    pub fn trials_completed(&self) -> u64 {
        self.trials_completed
    }
    pub fn trials_requested(&self) -> u64 {
        self.trials_requested
    }
    /// false when a wall clock budget cut the run short
    pub fn complete(&self) -> bool {
        self.trials_completed == self.trials_requested
    }
    /// half-credit convention consumed by betting layers
    pub fn equity(&self) -> crate::Percent {
        self.win_percentage + self.tie_percentage / 2.
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:.2}% win {:.2}% tie",
            self.win_percentage, self.tie_percentage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn percentages_over_all_outcomes() {
        let mut tally = Tally::default();
        for _ in 0..3 {
            tally.record(Ordering::Greater);
        }
        tally.record(Ordering::Equal);
        tally.complete();
        let estimate = Estimate::from((tally, 1));
        assert!(estimate.win_percentage() == 75.);
        assert!(estimate.tie_percentage() == 25.);
        assert!(estimate.equity() == 87.5);
        assert!(estimate.complete());
    }

    #[test]
    fn empty_runs_do_not_divide_by_zero() {
        let estimate = Estimate::from((Tally::default(), 100));
        assert!(estimate.win_percentage() == 0.);
        assert!(estimate.trials_completed() == 0);
        assert!(!estimate.complete());
    }
}
