use super::card::Card;
use crate::error::Error;

/// The two private cards belonging to one player.
///
/// Duplicate cards are representable on purpose: a multi-deck shoe can
/// legitimately deal the same card twice. Copy overflow against the shoe
/// is enforced at Request construction, not here.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        Self([a, b])
    }
}
impl From<Hole> for [Card; 2] {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

/// token slice isomorphism, fallible inward
/// anything but exactly two tokens is the wrong hand size
impl TryFrom<&[&str]> for Hole {
    type Error = Error;
    fn try_from(tokens: &[&str]) -> Result<Self, Self::Error> {
        match tokens {
            [a, b] => Ok(Self([Card::try_from(*a)?, Card::try_from(*b)?])),
            _ => Err(Error::InvalidHandSize {
                expected: "exactly 2 hole cards",
                got: tokens.len(),
            }),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        use super::shoe::Shoe;
        let ref mut rng = rand::rng();
        let mut shoe = Shoe::new(1);
        let a = shoe.draw(rng).expect("fresh shoe");
        let b = shoe.draw(rng).expect("fresh shoe");
        Self([a, b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_tokens() {
        let hole = Hole::try_from(["As", "Ac"].as_slice()).unwrap();
        assert!(hole.to_string() == "AsAc");
    }

    #[test]
    fn rejects_wrong_sizes() {
        assert!(matches!(
            Hole::try_from(["As"].as_slice()),
            Err(Error::InvalidHandSize { got: 1, .. })
        ));
        assert!(matches!(
            Hole::try_from(["As", "Ac", "Ad"].as_slice()),
            Err(Error::InvalidHandSize { got: 3, .. })
        ));
    }
}
