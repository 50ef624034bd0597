pub mod builder;
pub mod typst;

pub use builder::*;
