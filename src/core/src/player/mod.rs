pub mod builder;
pub mod collection;
pub mod player;
pub mod position;

pub use builder::*;
pub use collection::*;
pub use player::*;
pub use position::*;
