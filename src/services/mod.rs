pub mod seed;

pub use seed::{SeedError, SeedResult};
