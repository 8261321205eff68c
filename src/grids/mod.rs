pub mod chaos;
pub mod decision;
pub mod map;
pub mod patterns;

pub use chaos::*;
pub use decision::*;
pub use map::*;
pub use patterns::*;
