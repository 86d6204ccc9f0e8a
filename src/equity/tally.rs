use std::cmp::Ordering;

/// Win/tie/loss counters over (trial x opponent) outcomes.
///
/// Each worker accumulates its own Tally; the merge is a commutative,
/// associative sum performed once after all workers finish, so no shared
/// mutable counter ever exists.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    wins: u64,
    ties: u64,
    losses: u64,
    trials: u64,
}

impl Tally {
    /// exactly one of win/tie/loss per opponent comparison
    pub fn record(&mut self, outcome: Ordering) {
        match outcome {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.losses += 1,
        }
    }

    /// one completed trial, all opponents scored
    pub fn complete(&mut self) {
        self.trials += 1;
    }

    pub fn wins(&self) -> u64 {
        self.wins
    }
    pub fn ties(&self) -> u64 {
        self.ties
    }
    pub fn losses(&self) -> u64 {
        self.losses
    }
    pub fn trials(&self) -> u64 {
        self.trials
    }
    pub fn outcomes(&self) -> u64 {
        self.wins + self.ties + self.losses
    }
}

/// the associative reduction across workers
impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
            trials: self.trials + rhs.trials,
        }
    }
}
