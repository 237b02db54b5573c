pub mod outcome;
pub mod parameter;
pub mod recommendation;
pub mod sample;

pub use outcome::*;
pub use parameter::*;
pub use recommendation::*;
pub use sample::*;
