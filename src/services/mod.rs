pub mod store;
pub mod walkthrough;

pub use store::*;
pub use walkthrough::*;
