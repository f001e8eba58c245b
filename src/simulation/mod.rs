pub mod price_walk;

pub use price_walk::{PriceSimulator, RandomWalk};
