pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hole;
pub use hole::*;

pub mod kicks;
pub use kicks::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod shoe;
pub use shoe::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;
