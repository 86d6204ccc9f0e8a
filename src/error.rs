use crate::cards::card::Card;

/// Everything that can go wrong between a request and its estimate.
///
/// All validation variants surface before the first trial runs. Once a
/// Request is constructed, shoe bookkeeping guarantees every trial can be
/// dealt, so the only trial-time failure is the fatal invariant case.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid card token {0:?}")]
    InvalidCardToken(String),
    #[error("invalid hand size, expected {expected}, got {got}")]
    InvalidHandSize { expected: &'static str, got: usize },
    #[error("invalid argument, {0}")]
    InvalidArgument(&'static str),
    #[error("card {0} requested more times than the shoe holds")]
    DuplicateCardOverflow(Card),
    #[error("card {0} has no copies left in the shoe")]
    DeckExhausted(Card),
    #[error("shoe cannot supply {needed} cards, {remaining} remaining")]
    InsufficientCards { needed: usize, remaining: usize },
    #[error("internal invariant violated, {0}")]
    InternalInvariant(String),
}
