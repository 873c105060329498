pub mod person;
pub mod sort;

pub use person::*;
pub use sort::*;
