use super::card::Card;
use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// all C(7,5) = 21 index subsets of a seven-card set
#[rustfmt::skip]
const SUBSETS_5_OF_7: [[usize; 5]; 21] = [
    [0, 1, 2, 3, 4], [0, 1, 2, 3, 5], [0, 1, 2, 3, 6], [0, 1, 2, 4, 5],
    [0, 1, 2, 4, 6], [0, 1, 2, 5, 6], [0, 1, 3, 4, 5], [0, 1, 3, 4, 6],
    [0, 1, 3, 5, 6], [0, 1, 4, 5, 6], [0, 2, 3, 4, 5], [0, 2, 3, 4, 6],
    [0, 2, 3, 5, 6], [0, 2, 4, 5, 6], [0, 3, 4, 5, 6], [1, 2, 3, 4, 5],
    [1, 2, 3, 4, 6], [1, 2, 3, 5, 6], [1, 2, 4, 5, 6], [1, 3, 4, 5, 6],
    [2, 3, 4, 5, 6],
];

/// A hand's strength: totally ordered over all possible hands.
///
/// The derived Ord compares the Ranking first and lets the Kickers break
/// ties within a category. Full equality is a chop.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> Kickers {
        self.kickers
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let ranking = evaluator.find_ranking();
        let kickers = evaluator.find_kickers(ranking);
        Self { ranking, kickers }
    }
}

impl From<[Card; 5]> for Strength {
    fn from(cards: [Card; 5]) -> Self {
        Self::from(Evaluator::from(&cards))
    }
}

/// best five of seven
/// max over the static subset table, order independent
impl From<[Card; 7]> for Strength {
    fn from(cards: [Card; 7]) -> Self {
        SUBSETS_5_OF_7
            .iter()
            .map(|subset| subset.map(|i| cards[i]))
            .map(Self::from)
            .max()
            .expect("21 subsets")
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.ranking)
    }
}
