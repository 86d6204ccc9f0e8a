use super::card::Card;
use crate::error::Error;

/// The zero to five community cards fixed before sampling begins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// how many community cards a trial still has to deal
    pub fn n_unseen(&self) -> usize {
        5 - self.0.len()
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        match cards.len() {
            0..=5 => Ok(Self(cards)),
            n => Err(Error::InvalidHandSize {
                expected: "at most 5 community cards",
                got: n,
            }),
        }
    }
}

/// token slice isomorphism, fallible inward
impl TryFrom<&[&str]> for Board {
    type Error = Error;
    fn try_from(tokens: &[&str]) -> Result<Self, Self::Error> {
        Self::try_from(
            tokens
                .iter()
                .map(|s| Card::try_from(*s))
                .collect::<Result<Vec<Card>, Error>>()?,
        )
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_unseen() {
        let board = Board::try_from(["Qh", "Jh", "Th"].as_slice()).unwrap();
        assert!(board.len() == 3);
        assert!(board.n_unseen() == 2);
        assert!(Board::empty().n_unseen() == 5);
    }

    #[test]
    fn rejects_oversized() {
        let board = Board::try_from(["Qh", "Jh", "Th", "9h", "8h", "7h"].as_slice());
        assert!(matches!(
            board,
            Err(Error::InvalidHandSize { got: 6, .. })
        ));
    }
}
