use super::estimate::Estimate;
use super::request::Request;
use super::tally::Tally;
use crate::cards::card::Card;
use crate::cards::strength::Strength;
use crate::error::Error;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::time::Instant;

/// Monte Carlo equity sampler.
///
/// Trials are independent and CPU bound, so we partition the requested
/// count across workers. Each worker owns its generator stream and its
/// per-trial shoes; tallies meet only in the final reduction. Seeded runs
/// derive worker seeds as base + index, which keeps streams disjoint and
/// results reproducible regardless of scheduling.
pub struct Sampler(Request);

impl From<Request> for Sampler {
    fn from(request: Request) -> Self {
        Self(request)
    }
}

impl Sampler {
    pub fn run(&self) -> Result<Estimate, Error> {
        let clock = Instant::now();
        let deadline = self.0.budget().map(|budget| clock + budget);
        let partition = self.partition();
        log::debug!(
            "sampling {} vs {} opponents, {} trials across {} workers",
            self.0.hole(),
            self.0.opponents(),
            self.0.trials(),
            partition.len()
        );
        let tally = partition
            .into_par_iter()
            .enumerate()
            .map(|(worker, trials)| self.work(worker, trials, deadline))
            .collect::<Result<Vec<Tally>, Error>>()?
            .into_iter()
            .fold(Tally::default(), |sum, tally| sum + tally);
        let estimate = Estimate::from((tally, self.0.trials() as u64));
        log::info!(
            "{} for {} after {} trials in {:?}",
            estimate,
            self.0.hole(),
            estimate.trials_completed(),
            clock.elapsed()
        );
        Ok(estimate)
    }

    /// near-equal per-worker trial counts, remainder spread from the front
    fn partition(&self) -> Vec<usize> {
        let trials = self.0.trials();
        let workers = num_cpus::get().min(trials);
        (0..workers)
            .map(|i| trials / workers + usize::from(i < trials % workers))
            .collect()
    }

    fn rng(&self, worker: usize) -> SmallRng {
        match self.0.seed() {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(worker as u64)),
            None => SmallRng::from_os_rng(),
        }
    }

    fn work(
        &self,
        worker: usize,
        trials: usize,
        deadline: Option<Instant>,
    ) -> Result<Tally, Error> {
        let ref mut rng = self.rng(worker);
        let mut tally = Tally::default();
        for _ in 0..trials {
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                break;
            }
            self.trial(rng, &mut tally)?;
        }
        Ok(tally)
    }

    /// complete the board, deal each opponent in order, score everyone
    fn trial(&self, rng: &mut SmallRng, tally: &mut Tally) -> Result<(), Error> {
        let mut shoe = self.0.shoe()?;
        let mut board = self.0.board().cards().to_vec();
        board.extend(shoe.deal(self.0.board().n_unseen(), rng)?);
        if board.len() != 5 {
            return Err(Error::InternalInvariant(format!(
                "completed board holds {} cards: {:?}",
                board.len(),
                board
            )));
        }
        let hero = Strength::from(seven(self.0.hole().cards(), &board));
        for _ in 0..self.0.opponents() {
            let hole = [shoe.draw(rng)?, shoe.draw(rng)?];
            let villain = Strength::from(seven(hole, &board));
            tally.record(hero.cmp(&villain));
        }
        tally.complete();
        Ok(())
    }
}

fn seven(hole: [Card; 2], board: &[Card]) -> [Card; 7] {
    [
        hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn request(hole: [&str; 2], board: &[&str], opponents: usize, trials: usize) -> Request {
        Request::parse(&hole, board, opponents, 1, trials).unwrap()
    }

    #[test]
    fn outcome_completeness() {
        let sampler = Sampler::from(request(["As", "Ac"], &[], 3, 500).seeded(42));
        let tally = sampler.work(0, 500, None).unwrap();
        assert!(tally.trials() == 500);
        assert!(tally.outcomes() == 500 * 3);
    }

    #[test]
    fn seeded_runs_reproduce() {
        let a = Sampler::from(request(["Ks", "Kc"], &["2h", "7d", "9c"], 2, 2000).seeded(7))
            .run()
            .unwrap();
        let b = Sampler::from(request(["Ks", "Kc"], &["2h", "7d", "9c"], 2, 2000).seeded(7))
            .run()
            .unwrap();
        assert!(a == b);
    }

    #[test]
    fn board_that_plays_for_everyone_chops() {
        // royal flush on the board, every showdown ties
        let sampler = Sampler::from(request(["2c", "3d"], &["Ts", "Js", "Qs", "Ks", "As"], 2, 100));
        let estimate = sampler.run().unwrap();
        assert!(estimate.tie_percentage() == 100.);
        assert!(estimate.win_percentage() == 0.);
    }

    #[test]
    fn exhausted_budget_reports_partial() {
        let sampler =
            Sampler::from(request(["As", "Ac"], &[], 1, 100_000).budgeted(Duration::ZERO));
        let estimate = sampler.run().unwrap();
        assert!(estimate.trials_completed() == 0);
        assert!(!estimate.complete());
    }

    #[test]
    fn pocket_aces_converge_heads_up() {
        let sampler = Sampler::from(request(["As", "Ac"], &[], 1, 200_000).seeded(2024));
        let estimate = sampler.run().unwrap();
        assert!(estimate.complete());
        assert!((estimate.win_percentage() - 85.2).abs() < 1.5);
    }

    #[test]
    fn dominated_hand_stays_behind() {
        let sampler = Sampler::from(request(["2c", "7d"], &[], 1, 50_000).seeded(9));
        let estimate = sampler.run().unwrap();
        assert!(estimate.win_percentage() < 50.);
    }

    #[test]
    fn multideck_duplicate_hole() {
        let request = Request::parse(&["As", "As"], &[], 1, 2, 5_000)
            .unwrap()
            .seeded(1);
        let estimate = Sampler::from(request).run().unwrap();
        assert!(estimate.complete());
        assert!(estimate.win_percentage() > 50.);
    }
}
