pub mod schedule;
pub mod validation;

pub use schedule::*;
pub use validation::*;
