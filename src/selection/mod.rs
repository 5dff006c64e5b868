pub mod distance;
pub mod recommend;

pub use distance::*;
pub use recommend::*;
