use super::card::Card;
use crate::error::Error;
use rand::Rng;

/// A dealing shoe: one or more 52-card decks shuffled together.
///
/// Stored as per-card copy counts rather than a bitset, since a card can
/// appear up to `decks` times. Supports targeted removal of known cards
/// and uniform without-replacement sampling via an injected generator.
/// Each trial builds and exclusively owns its own Shoe.
#[derive(Debug, Clone)]
pub struct Shoe {
    copies: [u8; 52],
    remaining: usize,
}

impl Shoe {
    /// # Panics
    ///
    /// The deck count must be between 1 and 255. Request validates user
    /// input before any Shoe is built, so a count outside that range here
    /// is a caller bug, not a runtime condition.
    pub fn new(decks: usize) -> Self {
        assert!(decks >= 1 && decks <= u8::MAX as usize);
        Self {
            copies: [decks as u8; 52],
            remaining: 52 * decks,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// copies left of a specific card
    pub fn count(&self, card: Card) -> usize {
        self.copies[u8::from(card) as usize] as usize
    }

    /// remove one copy of a specific card
    pub fn remove(&mut self, card: Card) -> Result<(), Error> {
        let i = u8::from(card) as usize;
        match self.copies[i] {
            0 => Err(Error::DeckExhausted(card)),
            _ => {
                self.copies[i] -= 1;
                self.remaining -= 1;
                Ok(())
            }
        }
    }

    /// remove a uniformly random card
    pub fn draw(&mut self, rng: &mut impl Rng) -> Result<Card, Error> {
        if self.remaining == 0 {
            return Err(Error::InsufficientCards {
                needed: 1,
                remaining: 0,
            });
        }
        let mut i = rng.random_range(0..self.remaining);
        for index in 0..52 {
            let n = self.copies[index] as usize;
            if i < n {
                self.copies[index] -= 1;
                self.remaining -= 1;
                return Ok(Card::from(index as u8));
            }
            i -= n;
        }
        unreachable!("remaining tracks copy counts");
    }

    /// remove n uniformly random cards, without replacement
    pub fn deal(&mut self, n: usize, rng: &mut impl Rng) -> Result<Vec<Card>, Error> {
        if n > self.remaining {
            return Err(Error::InsufficientCards {
                needed: n,
                remaining: self.remaining,
            });
        }
        (0..n).map(|_| self.draw(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_by_decks() {
        assert!(Shoe::new(1).remaining() == 52);
        assert!(Shoe::new(4).remaining() == 208);
    }

    #[test]
    #[should_panic]
    fn zero_decks_is_a_caller_bug() {
        Shoe::new(0);
    }

    #[test]
    fn removal_exhausts_copies() {
        let card = Card::try_from("As").unwrap();
        let mut shoe = Shoe::new(1);
        assert!(shoe.remove(card).is_ok());
        assert!(shoe.remove(card) == Err(Error::DeckExhausted(card)));
    }

    #[test]
    fn multideck_holds_extra_copies() {
        let card = Card::try_from("As").unwrap();
        let mut shoe = Shoe::new(2);
        assert!(shoe.remove(card).is_ok());
        assert!(shoe.remove(card).is_ok());
        assert!(shoe.count(card) == 0);
        assert!(shoe.remove(card) == Err(Error::DeckExhausted(card)));
    }

    #[test]
    fn dealing_consumes_everything() {
        let ref mut rng = rand::rng();
        let mut shoe = Shoe::new(2);
        let cards = shoe.deal(104, rng).unwrap();
        assert!(cards.len() == 104);
        assert!(shoe.remaining() == 0);
        for n in 0..52u8 {
            let card = Card::from(n);
            assert!(cards.iter().filter(|c| **c == card).count() == 2);
        }
    }

    #[test]
    fn dealing_past_the_end_fails() {
        let ref mut rng = rand::rng();
        let mut shoe = Shoe::new(1);
        assert!(matches!(
            shoe.deal(53, rng),
            Err(Error::InsufficientCards {
                needed: 53,
                remaining: 52
            })
        ));
    }
}
