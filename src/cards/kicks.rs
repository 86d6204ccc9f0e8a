use super::rank::Rank;

/// A hand's kicker cards, as a u32 packing a 2-bit count per rank.
///
/// For two kicker sets of the same size, integer comparison of the packed
/// counts is exactly the lexicographic comparison of the card ranks sorted
/// descending: all fields below a rank sum to less than one unit of that
/// rank's field. Counts matter because a multi-deck flush can carry the
/// same rank more than once.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u32);

/// u32 isomorphism
impl From<Kickers> for u32 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u32> for Kickers {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

/// rank histogram isomorphism
impl From<[u8; 13]> for Kickers {
    fn from(counts: [u8; 13]) -> Self {
        Self(
            counts
                .iter()
                .enumerate()
                .map(|(i, &count)| (count as u32) << (2 * i))
                .fold(0u32, |a, b| a | b),
        )
    }
}

/// Vec<Rank> isomorphism, multiset semantics
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        let mut ranks = Vec::new();
        for index in 0..13u8 {
            let count = (k.0 >> (2 * index)) & 0b11;
            for _ in 0..count {
                ranks.push(Rank::from(index));
            }
        }
        ranks
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        let mut counts = [0u8; 13];
        for rank in ranks {
            counts[u8::from(rank) as usize] += 1;
        }
        Self::from(counts)
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}
