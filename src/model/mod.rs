pub mod club;
pub mod shot;
pub mod wind;

pub use club::{Bag, Club, coerce_carry, parse_carry};
pub use shot::{DEFAULT_DISTANCE, ShotForm, ShotInputs, coerce_number};
pub use wind::WindDirection;
