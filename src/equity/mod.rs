pub mod estimate;
pub use estimate::*;

pub mod request;
pub use request::*;

pub mod sampler;
pub use sampler::*;

pub mod tally;
pub use tally::*;

use crate::error::Error;

/// One-shot token-level estimation.
///
/// Parses and validates, then samples with entropy seeding. Callers that
/// need reproducible or time-budgeted runs build a Request and Sampler
/// themselves.
pub fn estimate(
    hole: &[&str],
    board: &[&str],
    opponents: usize,
    decks: usize,
    trials: usize,
) -> Result<Estimate, Error> {
    Sampler::from(Request::parse(hole, board, opponents, decks, trials)?).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_contract_end_to_end() {
        let estimate = estimate(&["As", "Ac"], &["Qh", "Jh", "Th"], 1, 1, 2_000).unwrap();
        assert!(estimate.complete());
        assert!(estimate.win_percentage() + estimate.tie_percentage() <= 100.);
    }

    #[test]
    fn token_contract_rejects_bad_input() {
        assert!(estimate(&["As", "As"], &[], 1, 1, 100).is_err());
        assert!(estimate(&["As"], &[], 1, 1, 100).is_err());
        assert!(estimate(&["As", "Ac"], &["Qh", "Jh", "Th", "9h", "8h", "7h"], 1, 1, 100).is_err());
    }
}
