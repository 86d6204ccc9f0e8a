use super::card::Card;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// Evaluates exactly five cards into a Ranking and its Kickers.
///
/// We histogram ranks and suits rather than collapsing the cards into a
/// bitset: a multi-deck shoe can deal the same card into a hand twice,
/// and a set representation would silently drop the duplicate. The rank
/// counts decide the paired categories, while the present-rank bitmask
/// drives straight detection with a 4-step shift-and.
pub struct Evaluator {
    ranks: [u8; 13],
    suits: [u8; 4],
}

impl From<&[Card; 5]> for Evaluator {
    fn from(cards: &[Card; 5]) -> Self {
        let mut ranks = [0u8; 13];
        let mut suits = [0u8; 4];
        for card in cards {
            ranks[u8::from(card.rank()) as usize] += 1;
            suits[u8::from(card.suit()) as usize] += 1;
        }
        Self { ranks, suits }
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("five cards always rank")
    }

    /// Kickers keep card multiplicity: a flush only spends one copy of its
    /// high card, so a multi-deck flush can kick with a duplicated rank.
    /// The other kicked categories consume every copy of their payload
    /// ranks and leave a pool of distinct ranks behind.
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::from(0),
            n => {
                let mut counts = self.ranks;
                match ranking {
                    Ranking::Flush(hi) => counts[u8::from(hi) as usize] -= 1,
                    _ => {
                        let mask = ranking.mask();
                        for (i, count) in counts.iter_mut().enumerate() {
                            if mask & (1u16 << i) == 0 {
                                *count = 0;
                            }
                        }
                    }
                }
                // five of a kind degrades to quads with no card left over
                let total = counts.iter().map(|&c| c as usize).sum::<usize>();
                let mut extra = total.saturating_sub(n);
                for count in counts.iter_mut() {
                    let cut = extra.min(*count as usize);
                    *count -= cut as u8;
                    extra -= cut;
                }
                Kickers::from(counts)
            }
        }
    }

    ///

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1, None).map(Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|triple| {
            self.find_rank_of_n_oak(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight().map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|_| Ranking::Flush(Rank::from(self.find_ranks())))
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|_| self.find_rank_of_straight())
            .map(Ranking::StraightFlush)
    }

    /// bitmask of ranks present at least once
    fn find_ranks(&self) -> u16 {
        self.ranks
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, _)| 1u16 << i)
            .fold(0u16, |a, b| a | b)
    }
    /// high rank of any 5-run of present ranks
    /// the wheel A2345 escapes the shift-and and is tested separately,
    /// reporting the Five as its high card
    fn find_rank_of_straight(&self) -> Option<Rank> {
        let ranks = self.find_ranks();
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    /// with five cards a flush means all five share a suit
    fn find_suit_of_flush(&self) -> Option<Suit> {
        self.suits
            .iter()
            .position(|&count| count >= 5)
            .map(|i| Suit::from(i as u8))
    }
    /// highest rank held at least n times, skipping one already-used rank
    fn find_rank_of_n_oak(&self, n: u8, skip: Option<Rank>) -> Option<Rank> {
        self.ranks
            .iter()
            .enumerate()
            .rev()
            .filter(|(i, _)| skip.map_or(true, |r| *i != u8::from(r) as usize))
            .find(|&(_, &count)| count >= n)
            .map(|(i, _)| Rank::from(i as u8))
    }
}
