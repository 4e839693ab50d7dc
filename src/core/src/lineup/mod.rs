pub mod lineup;
pub mod pick;

pub use lineup::*;
pub use pick::*;
