pub mod clocks;
pub mod euclidean;

pub use clocks::*;
pub use euclidean::*;
