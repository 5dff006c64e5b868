pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod one_shot;
pub mod selection;
pub mod view;

pub mod mvu {
    pub mod runtime;
    pub mod selector;
}

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

pub use error::SelectorError;
pub use model::{Bag, Club, ShotInputs, WindDirection};
pub use selection::{
    DistanceBreakdown, EffortLabel, Recommendation, Tuning, compute_effective_distance,
    recommend,
};
