pub mod hall;

pub use hall::*;
