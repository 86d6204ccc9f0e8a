use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::cards::shoe::Shoe;
use crate::error::Error;
use std::time::Duration;

/// A fully validated description of one equity estimation.
///
/// Construction fails fast: every taxonomy error except the internal
/// invariant case is surfaced here, before any trial runs. A Request that
/// exists can always be sampled to completion.
#[derive(Debug, Clone)]
pub struct Request {
    hole: Hole,
    board: Board,
    opponents: usize,
    decks: usize,
    trials: usize,
    seed: Option<u64>,
    budget: Option<Duration>,
}

impl Request {
    pub fn new(
        hole: Hole,
        board: Board,
        opponents: usize,
        decks: usize,
        trials: usize,
    ) -> Result<Self, Error> {
        if opponents == 0 {
            return Err(Error::InvalidArgument("at least one opponent"));
        }
        if decks == 0 {
            return Err(Error::InvalidArgument("at least one deck"));
        }
        if decks > u8::MAX as usize {
            return Err(Error::InvalidArgument("at most 255 decks"));
        }
        if trials == 0 {
            return Err(Error::InvalidArgument("at least one trial"));
        }
        let this = Self {
            hole,
            board,
            opponents,
            decks,
            trials,
            seed: None,
            budget: None,
        };
        let shoe = this.shoe()?;
        let needed = 2 * this.opponents + this.board.n_unseen();
        if needed > shoe.remaining() {
            return Err(Error::InsufficientCards {
                needed,
                remaining: shoe.remaining(),
            });
        }
        Ok(this)
    }

    /// the token-level contract: parse, then validate
    pub fn parse(
        hole: &[&str],
        board: &[&str],
        opponents: usize,
        decks: usize,
        trials: usize,
    ) -> Result<Self, Error> {
        Self::new(
            Hole::try_from(hole)?,
            Board::try_from(board)?,
            opponents,
            decks,
            trials,
        )
    }

    /// derive per-worker generator streams from this base seed
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// wall clock cap, workers stop between trials once it elapses
    pub fn budgeted(mut self, budget: Duration) -> Self {
        self.budget = Some(budget);
        self
    }

    /// a fresh shoe with all known cards removed, one per trial
    pub fn shoe(&self) -> Result<Shoe, Error> {
        let mut shoe = Shoe::new(self.decks);
        for card in self
            .hole
            .cards()
            .into_iter()
            .chain(self.board.cards().iter().copied())
        {
            shoe.remove(card)
                .map_err(|_| Error::DuplicateCardOverflow(card))?;
        }
        Ok(shoe)
    }

    pub fn hole(&self) -> &Hole {
        &self.hole
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn opponents(&self) -> usize {
        self.opponents
    }
    pub fn decks(&self) -> usize {
        self.decks
    }
    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_hole_card_overflows_one_deck() {
        let request = Request::parse(&["As", "As"], &[], 1, 1, 100);
        assert!(matches!(request, Err(Error::DuplicateCardOverflow(_))));
    }

    #[test]
    fn duplicate_hole_card_fits_two_decks() {
        assert!(Request::parse(&["As", "As"], &[], 1, 2, 100).is_ok());
    }

    #[test]
    fn board_card_counts_against_copies() {
        let request = Request::parse(&["As", "Kd"], &["As", "2h", "3c"], 1, 1, 100);
        assert!(matches!(request, Err(Error::DuplicateCardOverflow(_))));
    }

    #[test]
    fn oversized_board_is_wrong_hand_size() {
        let request = Request::parse(&["As", "Ac"], &["Qh", "Jh", "Th", "9h", "8h", "7h"], 1, 1, 100);
        assert!(matches!(request, Err(Error::InvalidHandSize { got: 6, .. })));
    }

    #[test]
    fn malformed_tokens_fail_fast() {
        assert!(matches!(
            Request::parse(&["1s", "Ac"], &[], 1, 1, 100),
            Err(Error::InvalidCardToken(_))
        ));
    }

    #[test]
    fn too_many_opponents_for_one_deck() {
        // 2 hole cards removed leaves 50, and 23 opponents need 2*23+5=51
        let request = Request::parse(&["As", "Ac"], &[], 23, 1, 100);
        assert!(matches!(request, Err(Error::InsufficientCards { .. })));
        assert!(Request::parse(&["As", "Ac"], &[], 22, 1, 100).is_ok());
    }

    #[test]
    fn degenerate_arguments_are_rejected() {
        assert!(Request::parse(&["As", "Ac"], &[], 0, 1, 100).is_err());
        assert!(Request::parse(&["As", "Ac"], &[], 1, 0, 100).is_err());
        assert!(Request::parse(&["As", "Ac"], &[], 1, 1, 0).is_err());
    }
}
